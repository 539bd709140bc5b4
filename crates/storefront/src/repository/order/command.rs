use crate::{
    abstract_trait::OrderCommandRepositoryTrait,
    domain::requests::{OrderHeaderRequest, OrderItemRequest},
    model::Order,
};
use shared::{config::ConnectionPool, errors::RepositoryError};

use async_trait::async_trait;
use tracing::{error, info};

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    /// Writes the header and every item inside one transaction. The item rows
    /// carry the id generated for the header, and nothing is visible to other
    /// connections until the final commit. If any statement fails, or the
    /// future is dropped before commit, the whole order is rolled back.
    async fn create_order(
        &self,
        header: &OrderHeaderRequest,
        items: &[OrderItemRequest],
    ) -> Result<Order, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(|err| {
            error!("❌ Failed to open order transaction: {err:?}");
            RepositoryError::from_sqlx(err)
        })?;

        let order = sqlx::query_as::<_, Order>(
            r#"
        INSERT INTO orders
            (user_email, total_amount, shipping_address, payment_method,
             card_holder, card_number, expiry_date, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, user_email, total_amount, shipping_address, payment_method,
                  card_holder, card_number, expiry_date, status, created_at
        "#,
        )
        .bind(&header.user_email)
        .bind(header.total_amount)
        .bind(&header.shipping_address)
        .bind(&header.payment_method)
        .bind(&header.card_holder)
        .bind(&header.card_number)
        .bind(&header.expiry_date)
        .bind(&header.status)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to insert order header for {}: {err:?}",
                header.user_email
            );
            RepositoryError::from_sqlx(err)
        })?;

        for item in items {
            sqlx::query(
                r#"
        INSERT INTO order_items (order_id, outfit_title, price, quantity)
        VALUES ($1, $2, $3, $4)
        "#,
            )
            .bind(order.id)
            .bind(&item.outfit_title)
            .bind(item.price)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to insert item '{}' for order ID {}: {err:?}",
                    item.outfit_title, order.id
                );
                RepositoryError::from_sqlx(err)
            })?;
        }

        tx.commit().await.map_err(|err| {
            error!("❌ Failed to commit order for {}: {err:?}", header.user_email);
            RepositoryError::from_sqlx(err)
        })?;

        info!(
            "✅ Created order ID {} with {} item(s) for {}",
            order.id,
            items.len(),
            order.user_email
        );
        Ok(order)
    }
}
