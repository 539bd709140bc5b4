use crate::{
    domain::{
        requests::{OrderHeaderRequest, OrderItemRequest, PlaceOrderRequest},
        responses::{CreateOrderResponse, OrderDetailResponse},
    },
    model::{Order, OrderItem},
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;
pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderService = Arc<dyn OrderServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Persists the header and every item in one transaction and returns the
    /// committed header row. On any error nothing is persisted.
    async fn create_order(
        &self,
        header: &OrderHeaderRequest,
        items: &[OrderItemRequest],
    ) -> Result<Order, RepositoryError>;
}

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError>;
    async fn find_items(&self, order_id: i32) -> Result<Vec<OrderItem>, RepositoryError>;
}

#[async_trait]
pub trait OrderServiceTrait {
    async fn place_order(
        &self,
        req: &PlaceOrderRequest,
    ) -> Result<CreateOrderResponse, ServiceError>;
    async fn get_order(&self, id: i32) -> Result<OrderDetailResponse, ServiceError>;
}
