use crate::{
    abstract_trait::FavoriteRepositoryTrait, domain::requests::CreateFavoriteRequest,
    model::Favorite,
};
use shared::{config::ConnectionPool, errors::RepositoryError};

use async_trait::async_trait;
use tracing::{error, info};

pub struct FavoriteRepository {
    db: ConnectionPool,
}

impl FavoriteRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FavoriteRepositoryTrait for FavoriteRepository {
    async fn create_favorite(
        &self,
        req: &CreateFavoriteRequest,
    ) -> Result<Favorite, RepositoryError> {
        let favorite = sqlx::query_as::<_, Favorite>(
            r#"
        INSERT INTO favorites (title, image_url, category, tags)
        VALUES ($1, $2, $3, $4)
        RETURNING id, title, image_url, category, tags
        "#,
        )
        .bind(&req.title)
        .bind(&req.image_url)
        .bind(&req.category)
        .bind(&req.tags)
        .fetch_one(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to save favorite '{}': {err:?}", req.title);
            RepositoryError::from_sqlx(err)
        })?;

        info!("✅ Saved favorite ID {} ('{}')", favorite.id, favorite.title);
        Ok(favorite)
    }
}
