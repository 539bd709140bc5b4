use crate::{
    domain::{requests::CreateProductRequest, responses::ProductsResponse},
    model::Product,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynProductRepository = Arc<dyn ProductRepositoryTrait + Send + Sync>;
pub type DynProductService = Arc<dyn ProductServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductRepositoryTrait {
    async fn find_all(&self, target: Option<&str>) -> Result<Vec<Product>, RepositoryError>;
    async fn create_product(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError>;
    async fn count(&self) -> Result<i64, RepositoryError>;
}

#[async_trait]
pub trait ProductServiceTrait {
    async fn find_products(&self, target: Option<&str>) -> Result<ProductsResponse, ServiceError>;
}
