use futures::future::join_all;
use uuid::Uuid;

use storefront_api::domain::repository::OrderRepository;
use storefront_api::domain::types::{DEFAULT_ORDER_STATUS, Order};
use storefront_api::error::ApiError;
use storefront_api::usecase::order::{
    CreateOrderInput, CreateOrderUseCase, DeleteOrderUseCase, ListOrdersUseCase, UpdateOrderInput,
    UpdateOrderUseCase,
};
use storefront_domain::basket::LineItem;

use crate::helpers::{MockOrderRepo, line_item};

fn order_input(user_id: &str) -> CreateOrderInput {
    CreateOrderInput {
        user_id: user_id.to_owned(),
        items: vec![line_item("Desk Lamp", 1)],
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        phone: "+100000000".to_owned(),
    }
}

// ── Concurrent numbering ─────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn should_assign_exactly_one_through_m_under_concurrency() {
    const M: usize = 8;

    let repo = MockOrderRepo::default();

    // M concurrent creations against the same store. Each conflict round has
    // a winner, so every task settles within M attempts.
    let tasks: Vec<_> = (0..M)
        .map(|i| {
            let usecase = CreateOrderUseCase {
                orders: repo.clone(),
            };
            tokio::spawn(async move { usecase.execute(order_input(&format!("user-{i}"))).await })
        })
        .collect();

    for result in join_all(tasks).await {
        result.expect("task panicked").expect("create order failed");
    }

    let mut numbers: Vec<i64> = repo
        .orders
        .lock()
        .unwrap()
        .iter()
        .map(|o| o.order_number)
        .collect();
    numbers.sort_unstable();
    let expected: Vec<i64> = (1..=M as i64).collect();
    assert_eq!(numbers, expected, "dense unique numbering under contention");
}

// ── Retry exhaustion ─────────────────────────────────────────────────────────

/// Store that reports a number conflict on every insert, as if another writer
/// always wins the race.
#[derive(Clone)]
struct AlwaysConflictOrderRepo;

impl OrderRepository for AlwaysConflictOrderRepo {
    async fn max_order_number(&self) -> Result<Option<i64>, ApiError> {
        Ok(Some(41))
    }

    async fn insert(&self, _order: &Order) -> Result<bool, ApiError> {
        Ok(false)
    }

    async fn list_desc(&self) -> Result<Vec<Order>, ApiError> {
        Ok(vec![])
    }

    async fn update(
        &self,
        _id: Uuid,
        _status: Option<&str>,
        _items: Option<&[LineItem]>,
    ) -> Result<Option<Order>, ApiError> {
        Ok(None)
    }

    async fn delete(&self, _id: Uuid) -> Result<bool, ApiError> {
        Ok(false)
    }
}

#[tokio::test]
async fn should_give_up_with_internal_error_when_conflicts_never_resolve() {
    let usecase = CreateOrderUseCase {
        orders: AlwaysConflictOrderRepo,
    };

    let result = usecase.execute(order_input("user-1")).await;
    assert!(
        matches!(result, Err(ApiError::Internal(_))),
        "expected Internal, got {result:?}"
    );
}

// ── Lifecycle ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_walk_an_order_through_its_lifecycle() {
    let repo = MockOrderRepo::default();

    let create = CreateOrderUseCase {
        orders: repo.clone(),
    };
    let first = create.execute(order_input("user-1")).await.unwrap();
    let second = create.execute(order_input("user-2")).await.unwrap();
    assert_eq!(first.order_number, 1);
    assert_eq!(second.order_number, 2);
    assert_eq!(first.status, DEFAULT_ORDER_STATUS);

    let list = ListOrdersUseCase {
        orders: repo.clone(),
    };
    let orders = list.execute().await.unwrap();
    let numbers: Vec<i64> = orders.iter().map(|o| o.order_number).collect();
    assert_eq!(numbers, vec![2, 1], "newest number first");

    let update = UpdateOrderUseCase {
        orders: repo.clone(),
    };
    let updated = update
        .execute(
            first.id,
            UpdateOrderInput {
                status: Some("ready".to_owned()),
                items: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, "ready");
    assert_eq!(updated.order_number, 1, "number never reassigned");

    let delete = DeleteOrderUseCase {
        orders: repo.clone(),
    };
    delete.execute(second.id).await.unwrap();

    let orders = list.execute().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, first.id);

    // Numbering is max+1 over surviving rows, so deleting the newest order
    // frees its number for the next creation.
    let third = create.execute(order_input("user-3")).await.unwrap();
    assert_eq!(third.order_number, 2);
}
