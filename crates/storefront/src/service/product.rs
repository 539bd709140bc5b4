use crate::{
    abstract_trait::{DynProductRepository, ProductServiceTrait},
    domain::responses::{ProductResponse, ProductsResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;

pub struct ProductService {
    products: DynProductRepository,
}

impl ProductService {
    pub fn new(products: DynProductRepository) -> Self {
        Self { products }
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn find_products(&self, target: Option<&str>) -> Result<ProductsResponse, ServiceError> {
        let products = self.products.find_all(target).await?;

        Ok(ProductsResponse {
            success: true,
            products: products.into_iter().map(ProductResponse::from).collect(),
        })
    }
}
