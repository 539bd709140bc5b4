use crate::{
    abstract_trait::ProductRepositoryTrait, domain::requests::CreateProductRequest, model::Product,
};
use shared::{config::ConnectionPool, errors::RepositoryError};

use async_trait::async_trait;
use tracing::error;

pub struct ProductRepository {
    db: ConnectionPool,
}

impl ProductRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepositoryTrait for ProductRepository {
    async fn find_all(&self, target: Option<&str>) -> Result<Vec<Product>, RepositoryError> {
        // `All` is the storefront's "no filter" sentinel.
        let target = target.filter(|t| !t.eq_ignore_ascii_case("all"));

        let products = sqlx::query_as::<_, Product>(
            r#"
        SELECT id, name, description, price, category, subcategory, target,
               brand, image_url, stock, sizes, rating, is_featured, is_new
        FROM products
        WHERE $1::text IS NULL OR target = $1
        ORDER BY id
        "#,
        )
        .bind(target)
        .fetch_all(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch products: {err:?}");
            RepositoryError::from_sqlx(err)
        })?;

        Ok(products)
    }

    async fn create_product(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
        INSERT INTO products
            (name, description, price, category, subcategory, target,
             brand, image_url, stock, sizes, rating, is_featured, is_new)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        RETURNING id, name, description, price, category, subcategory, target,
                  brand, image_url, stock, sizes, rating, is_featured, is_new
        "#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.price)
        .bind(&req.category)
        .bind(&req.subcategory)
        .bind(&req.target)
        .bind(&req.brand)
        .bind(&req.image_url)
        .bind(req.stock)
        .bind(&req.sizes)
        .bind(req.rating)
        .bind(req.is_featured)
        .bind(req.is_new)
        .fetch_one(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to insert product '{}': {err:?}", req.name);
            RepositoryError::from_sqlx(err)
        })?;

        Ok(product)
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to count products: {err:?}");
                RepositoryError::from_sqlx(err)
            })?;

        Ok(count)
    }
}
