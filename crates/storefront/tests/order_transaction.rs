use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;
use storefront::{
    abstract_trait::{
        DynOrderCommandRepository, DynOrderQueryRepository, OrderCommandRepositoryTrait,
        OrderQueryRepositoryTrait, OrderServiceTrait,
    },
    domain::requests::{OrderHeaderRequest, OrderItemRequest, PlaceOrderRequest},
    repository::{OrderCommandRepository, OrderQueryRepository},
    service::OrderService,
};

fn header(total: &str) -> OrderHeaderRequest {
    OrderHeaderRequest {
        user_email: "a@b.com".to_string(),
        total_amount: total.parse().unwrap(),
        shipping_address: "1 Main St".to_string(),
        payment_method: "card".to_string(),
        card_holder: "A B".to_string(),
        card_number: "4111111111111111".to_string(),
        expiry_date: "12/27".to_string(),
        status: "pending".to_string(),
    }
}

fn item(title: &str, price: &str, quantity: i32) -> OrderItemRequest {
    OrderItemRequest {
        outfit_title: title.to_string(),
        price: price.parse().unwrap(),
        quantity,
    }
}

async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    let query = format!("SELECT COUNT(*) FROM {table}");
    let (count,): (i64,) = sqlx::query_as(&query).fetch_one(pool).await.unwrap();
    count
}

#[sqlx::test(migrations = "./migrations")]
async fn place_order_persists_header_and_all_items(pool: PgPool) {
    let repo = OrderCommandRepository::new(pool.clone());
    let query = OrderQueryRepository::new(pool.clone());

    let order = repo
        .create_order(
            &header("45.50"),
            &[item("Denim Jacket", "30.00", 1), item("Tee", "15.50", 1)],
        )
        .await
        .expect("order should commit");

    assert!(order.id > 0);
    assert_eq!(order.user_email, "a@b.com");
    assert_eq!(order.total_amount, Decimal::new(4550, 2));
    assert_eq!(order.status, "pending");

    let items = query.find_items(order.id).await.unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|i| i.order_id == order.id));
    assert_eq!(items[0].outfit_title, "Denim Jacket");
    assert_eq!(items[1].outfit_title, "Tee");
}

#[sqlx::test(migrations = "./migrations")]
async fn failing_item_insert_rolls_back_everything(pool: PgPool) {
    let repo = OrderCommandRepository::new(pool.clone());

    // quantity 0 violates the check constraint on order_items, after the
    // header insert has already succeeded inside the transaction.
    let result = repo
        .create_order(
            &header("45.50"),
            &[item("Denim Jacket", "30.00", 1), item("Tee", "15.50", 0)],
        )
        .await;

    assert!(result.is_err());
    assert_eq!(count_rows(&pool, "orders").await, 0);
    assert_eq!(count_rows(&pool, "order_items").await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn sequential_orders_get_distinct_ids(pool: PgPool) {
    let repo = OrderCommandRepository::new(pool.clone());

    let first = repo
        .create_order(&header("10.00"), &[item("Tee", "10.00", 1)])
        .await
        .unwrap();
    let second = repo
        .create_order(&header("20.00"), &[item("Hoodie", "20.00", 1)])
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(count_rows(&pool, "orders").await, 2);
    assert_eq!(count_rows(&pool, "order_items").await, 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn concurrent_orders_keep_their_own_items(pool: PgPool) {
    let repo = Arc::new(OrderCommandRepository::new(pool.clone()));
    let query = OrderQueryRepository::new(pool.clone());

    let a = {
        let repo = Arc::clone(&repo);
        tokio::spawn(async move {
            repo.create_order(&header("30.00"), &[item("Denim Jacket", "30.00", 1)])
                .await
                .unwrap()
        })
    };
    let b = {
        let repo = Arc::clone(&repo);
        tokio::spawn(async move {
            repo.create_order(&header("15.50"), &[item("Tee", "15.50", 1)])
                .await
                .unwrap()
        })
    };

    let (order_a, order_b) = (a.await.unwrap(), b.await.unwrap());
    assert_ne!(order_a.id, order_b.id);

    let items_a = query.find_items(order_a.id).await.unwrap();
    let items_b = query.find_items(order_b.id).await.unwrap();
    assert_eq!(items_a.len(), 1);
    assert_eq!(items_b.len(), 1);
    assert_eq!(items_a[0].outfit_title, "Denim Jacket");
    assert_eq!(items_b[0].outfit_title, "Tee");
}

#[sqlx::test(migrations = "./migrations")]
async fn empty_item_list_is_rejected_before_storage(pool: PgPool) {
    let command: DynOrderCommandRepository = Arc::new(OrderCommandRepository::new(pool.clone()));
    let query: DynOrderQueryRepository = Arc::new(OrderQueryRepository::new(pool.clone()));
    let service = OrderService::new(command, query);

    let request = PlaceOrderRequest {
        order: header("0.00"),
        items: vec![],
    };

    assert!(service.place_order(&request).await.is_err());
    assert_eq!(count_rows(&pool, "orders").await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn deleting_an_order_cascades_to_its_items(pool: PgPool) {
    let repo = OrderCommandRepository::new(pool.clone());

    let order = repo
        .create_order(
            &header("30.00"),
            &[item("Tee", "10.00", 1), item("Joggers", "20.00", 1)],
        )
        .await
        .unwrap();

    sqlx::query("DELETE FROM orders WHERE id = $1")
        .bind(order.id)
        .execute(&pool)
        .await
        .unwrap();

    assert_eq!(count_rows(&pool, "order_items").await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn amounts_round_trip_exactly(pool: PgPool) {
    let repo = OrderCommandRepository::new(pool.clone());
    let query = OrderQueryRepository::new(pool.clone());

    let order = repo
        .create_order(&header("19.99"), &[item("Tee", "19.99", 1)])
        .await
        .unwrap();

    let stored = query.find_by_id(order.id).await.unwrap().unwrap();
    assert_eq!(stored.total_amount, Decimal::new(1999, 2));

    let items = query.find_items(order.id).await.unwrap();
    assert_eq!(items[0].price, Decimal::new(1999, 2));
}

#[sqlx::test(migrations = "./migrations")]
async fn order_read_back_matches_submission(pool: PgPool) {
    let command: DynOrderCommandRepository = Arc::new(OrderCommandRepository::new(pool.clone()));
    let query: DynOrderQueryRepository = Arc::new(OrderQueryRepository::new(pool.clone()));
    let service = OrderService::new(command, query);

    let request = PlaceOrderRequest {
        order: header("45.50"),
        items: vec![item("Denim Jacket", "30.00", 1), item("Tee", "15.50", 1)],
    };

    let created = service.place_order(&request).await.unwrap();
    assert!(created.success);

    let detail = service.get_order(created.order_id).await.unwrap();
    assert!(detail.success);
    assert_eq!(detail.order.id, created.order_id);
    assert_eq!(detail.order.user_email, "a@b.com");
    assert_eq!(detail.order.total_amount, Decimal::new(4550, 2));
    assert_eq!(detail.order.items.len(), 2);

    // Card details go in but never come back out.
    let body = serde_json::to_string(&detail).unwrap();
    assert!(!body.contains("4111111111111111"));
}

#[sqlx::test(migrations = "./migrations")]
async fn missing_order_is_not_found(pool: PgPool) {
    let command: DynOrderCommandRepository = Arc::new(OrderCommandRepository::new(pool.clone()));
    let query: DynOrderQueryRepository = Arc::new(OrderQueryRepository::new(pool));
    let service = OrderService::new(command, query);

    let result = service.get_order(9999).await;
    assert!(result.is_err());
}
