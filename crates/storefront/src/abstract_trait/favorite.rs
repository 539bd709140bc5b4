use crate::{
    domain::{requests::CreateFavoriteRequest, responses::CreateFavoriteResponse},
    model::Favorite,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynFavoriteRepository = Arc<dyn FavoriteRepositoryTrait + Send + Sync>;
pub type DynFavoriteService = Arc<dyn FavoriteServiceTrait + Send + Sync>;

#[async_trait]
pub trait FavoriteRepositoryTrait {
    async fn create_favorite(&self, req: &CreateFavoriteRequest)
    -> Result<Favorite, RepositoryError>;
}

#[async_trait]
pub trait FavoriteServiceTrait {
    async fn add_favorite(
        &self,
        req: &CreateFavoriteRequest,
    ) -> Result<CreateFavoriteResponse, ServiceError>;
}
