use crate::{
    abstract_trait::{DynFavoriteRepository, FavoriteServiceTrait},
    domain::{requests::CreateFavoriteRequest, responses::CreateFavoriteResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;

pub struct FavoriteService {
    favorites: DynFavoriteRepository,
}

impl FavoriteService {
    pub fn new(favorites: DynFavoriteRepository) -> Self {
        Self { favorites }
    }
}

#[async_trait]
impl FavoriteServiceTrait for FavoriteService {
    async fn add_favorite(
        &self,
        req: &CreateFavoriteRequest,
    ) -> Result<CreateFavoriteResponse, ServiceError> {
        self.favorites.create_favorite(req).await?;

        Ok(CreateFavoriteResponse { success: true })
    }
}
