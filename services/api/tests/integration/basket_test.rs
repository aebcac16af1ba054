use storefront_api::error::ApiError;
use storefront_api::usecase::basket::{
    AddItemInput, AddItemUseCase, ClearBasketUseCase, GetBasketUseCase, RemoveItemUseCase,
    UpdateQuantityUseCase,
};

use crate::helpers::MockBasketRepo;

fn add_input(user_id: &str, product_name: &str, quantity: u32, unit_price: f64) -> AddItemInput {
    AddItemInput {
        user_id: user_id.to_owned(),
        product_name: product_name.to_owned(),
        quantity,
        unit_price,
        image_ref: "/img/x.png".to_owned(),
    }
}

#[tokio::test]
async fn should_walk_a_basket_through_its_lifecycle() {
    let repo = MockBasketRepo::default();

    // Created lazily on first add; no basket yet.
    let get = GetBasketUseCase {
        baskets: repo.clone(),
    };
    assert!(get.execute("user-1").await.unwrap().is_none());

    let add = AddItemUseCase {
        baskets: repo.clone(),
    };
    add.execute(add_input("user-1", "Desk Lamp", 1, 29.99))
        .await
        .unwrap();
    add.execute(add_input("user-1", "Lamp Shade", 2, 9.99))
        .await
        .unwrap();

    // Merge-on-add: the second Desk Lamp add bumps the quantity and keeps
    // the originally stored price.
    let basket = add
        .execute(add_input("user-1", "Desk Lamp", 3, 99.99))
        .await
        .unwrap();
    assert_eq!(basket.items.len(), 2);
    let lamp = basket
        .items
        .iter()
        .find(|i| i.product_name == "Desk Lamp")
        .unwrap();
    assert_eq!(lamp.quantity, 4);
    assert_eq!(lamp.unit_price, 29.99);

    // Set, not merge.
    let update = UpdateQuantityUseCase {
        baskets: repo.clone(),
    };
    let basket = update.execute("user-1", "Desk Lamp", 2).await.unwrap();
    assert_eq!(
        basket
            .items
            .iter()
            .find(|i| i.product_name == "Desk Lamp")
            .unwrap()
            .quantity,
        2
    );

    let remove = RemoveItemUseCase {
        baskets: repo.clone(),
    };
    let basket = remove.execute("user-1", "Lamp Shade").await.unwrap();
    assert_eq!(basket.items.len(), 1);

    // Removing a product that is not in the basket leaves it unchanged.
    let basket = remove.execute("user-1", "Lamp Shade").await.unwrap();
    assert_eq!(basket.items.len(), 1);

    let clear = ClearBasketUseCase {
        baskets: repo.clone(),
    };
    clear.execute("user-1").await.unwrap();

    // The emptied basket survives as a row, distinguishable from absence.
    let basket = get.execute("user-1").await.unwrap();
    assert_eq!(basket.unwrap().items.len(), 0);
}

#[tokio::test]
async fn should_scope_baskets_per_user() {
    let repo = MockBasketRepo::default();
    let add = AddItemUseCase {
        baskets: repo.clone(),
    };

    add.execute(add_input("user-1", "Desk Lamp", 1, 29.99))
        .await
        .unwrap();
    add.execute(add_input("user-2", "Table", 1, 120.0))
        .await
        .unwrap();

    let get = GetBasketUseCase {
        baskets: repo.clone(),
    };
    let first = get.execute("user-1").await.unwrap().unwrap();
    let second = get.execute("user-2").await.unwrap().unwrap();
    assert_eq!(first.items[0].product_name, "Desk Lamp");
    assert_eq!(second.items[0].product_name, "Table");
}

#[tokio::test]
async fn should_keep_missing_basket_errors_separate_from_missing_product() {
    let repo = MockBasketRepo::default();

    // Missing basket: 404 for update/remove/clear.
    let update = UpdateQuantityUseCase {
        baskets: repo.clone(),
    };
    assert!(matches!(
        update.execute("nobody", "Desk Lamp", 1).await,
        Err(ApiError::BasketNotFound)
    ));

    let remove = RemoveItemUseCase {
        baskets: repo.clone(),
    };
    assert!(matches!(
        remove.execute("nobody", "Desk Lamp").await,
        Err(ApiError::BasketNotFound)
    ));

    let clear = ClearBasketUseCase {
        baskets: repo.clone(),
    };
    assert!(matches!(
        clear.execute("nobody").await,
        Err(ApiError::BasketNotFound)
    ));

    // Existing basket, missing product: silent no-op, not an error.
    let add = AddItemUseCase {
        baskets: repo.clone(),
    };
    add.execute(add_input("user-1", "Desk Lamp", 1, 29.99))
        .await
        .unwrap();
    let basket = update.execute("user-1", "Table", 5).await.unwrap();
    assert_eq!(basket.items.len(), 1);
    assert_eq!(basket.items[0].quantity, 1);
}
