use crate::{
    abstract_trait::OrderQueryRepositoryTrait,
    model::{Order, OrderItem},
};
use shared::{config::ConnectionPool, errors::RepositoryError};

use async_trait::async_trait;
use tracing::error;

pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(
            r#"
        SELECT id, user_email, total_amount, shipping_address, payment_method,
               card_holder, card_number, expiry_date, status, created_at
        FROM orders
        WHERE id = $1
        "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch order ID {id}: {err:?}");
            RepositoryError::from_sqlx(err)
        })?;

        Ok(order)
    }

    async fn find_items(&self, order_id: i32) -> Result<Vec<OrderItem>, RepositoryError> {
        let items = sqlx::query_as::<_, OrderItem>(
            r#"
        SELECT id, order_id, outfit_title, price, quantity
        FROM order_items
        WHERE order_id = $1
        ORDER BY id
        "#,
        )
        .bind(order_id)
        .fetch_all(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch items for order ID {order_id}: {err:?}");
            RepositoryError::from_sqlx(err)
        })?;

        Ok(items)
    }
}
