use crate::{
    abstract_trait::{
        DynOrderCommandRepository, DynOrderQueryRepository, OrderServiceTrait,
    },
    domain::{
        requests::PlaceOrderRequest,
        responses::{CreateOrderResponse, OrderDetailResponse, OrderResponse},
    },
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use tracing::info;

pub struct OrderService {
    command: DynOrderCommandRepository,
    query: DynOrderQueryRepository,
}

impl OrderService {
    pub fn new(command: DynOrderCommandRepository, query: DynOrderQueryRepository) -> Self {
        Self { command, query }
    }
}

#[async_trait]
impl OrderServiceTrait for OrderService {
    async fn place_order(
        &self,
        req: &PlaceOrderRequest,
    ) -> Result<CreateOrderResponse, ServiceError> {
        // The extractor validates first, so this only fires for callers that
        // reach the service directly.
        if req.items.is_empty() {
            return Err(ServiceError::Validation(vec![
                "Order must contain at least one item".to_string(),
            ]));
        }

        let order = self.command.create_order(&req.order, &req.items).await?;

        info!(
            "🛒 Order ID {} placed by {} ({} item(s), total {})",
            order.id,
            order.user_email,
            req.items.len(),
            order.total_amount
        );

        Ok(CreateOrderResponse {
            success: true,
            order_id: order.id,
        })
    }

    async fn get_order(&self, id: i32) -> Result<OrderDetailResponse, ServiceError> {
        let order = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;
        let items = self.query.find_items(id).await?;

        Ok(OrderDetailResponse {
            success: true,
            order: OrderResponse::from_parts(order, items),
        })
    }
}
