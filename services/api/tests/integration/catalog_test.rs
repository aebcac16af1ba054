use uuid::Uuid;

use storefront_api::domain::types::ProductPatch;
use storefront_api::error::ApiError;
use storefront_api::usecase::catalog::{
    CreateCategoryUseCase, CreateProductInput, CreateProductUseCase, DeleteCategoryUseCase,
    DeleteProductUseCase, GetProductUseCase, ListCategoriesUseCase, ListProductsByCategoryUseCase,
    SearchProductsUseCase, UpdateProductUseCase,
};

use crate::helpers::{MockCategoryRepo, MockProductRepo};

fn product_input(name: &str, category_ref: &str) -> CreateProductInput {
    CreateProductInput {
        name: name.to_owned(),
        description: "desc".to_owned(),
        price: 10.0,
        image_ref: "/img/x.png".to_owned(),
        category_ref: category_ref.to_owned(),
    }
}

#[tokio::test]
async fn should_walk_a_category_through_its_lifecycle() {
    let repo = MockCategoryRepo::default();

    let create = CreateCategoryUseCase {
        categories: repo.clone(),
    };
    let lighting = create.execute("Lighting".to_owned()).await.unwrap();
    create.execute("Furniture".to_owned()).await.unwrap();

    // Duplicate name is a conflict, not a second row.
    assert!(matches!(
        create.execute("Lighting".to_owned()).await,
        Err(ApiError::CategoryExists)
    ));

    let list = ListCategoriesUseCase {
        categories: repo.clone(),
    };
    assert_eq!(list.execute().await.unwrap().len(), 2);

    let delete = DeleteCategoryUseCase {
        categories: repo.clone(),
    };
    delete.execute(lighting.id).await.unwrap();
    assert!(matches!(
        delete.execute(lighting.id).await,
        Err(ApiError::CategoryNotFound)
    ));

    assert_eq!(list.execute().await.unwrap().len(), 1);
}

#[tokio::test]
async fn should_walk_a_product_through_its_lifecycle() {
    let repo = MockProductRepo::default();

    let create = CreateProductUseCase {
        products: repo.clone(),
    };
    let lamp = create.execute(product_input("Desk Lamp", "lighting")).await.unwrap();
    create
        .execute(product_input("Lamp Shade", "lighting"))
        .await
        .unwrap();
    create
        .execute(product_input("Table", "furniture"))
        .await
        .unwrap();

    let search = SearchProductsUseCase {
        products: repo.clone(),
    };
    let found = search.execute("LAMP").await.unwrap();
    let names: Vec<&str> = found.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Desk Lamp", "Lamp Shade"]);

    let by_category = ListProductsByCategoryUseCase {
        products: repo.clone(),
    };
    assert_eq!(by_category.execute("furniture").await.unwrap().len(), 1);

    // Partial update leaves untouched fields alone.
    let update = UpdateProductUseCase {
        products: repo.clone(),
    };
    let updated = update
        .execute(
            lamp.id,
            ProductPatch {
                price: Some(24.99),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.price, 24.99);
    assert_eq!(updated.name, "Desk Lamp");

    let get = GetProductUseCase {
        products: repo.clone(),
    };
    assert_eq!(get.execute(lamp.id).await.unwrap().price, 24.99);

    let delete = DeleteProductUseCase {
        products: repo.clone(),
    };
    delete.execute(lamp.id).await.unwrap();
    assert!(matches!(
        get.execute(lamp.id).await,
        Err(ApiError::ProductNotFound)
    ));
}

#[tokio::test]
async fn should_return_not_found_for_unknown_ids() {
    let products = MockProductRepo::default();
    let categories = MockCategoryRepo::default();

    let get = GetProductUseCase {
        products: products.clone(),
    };
    assert!(matches!(
        get.execute(Uuid::new_v4()).await,
        Err(ApiError::ProductNotFound)
    ));

    let update = UpdateProductUseCase { products };
    assert!(matches!(
        update.execute(Uuid::new_v4(), ProductPatch::default()).await,
        Err(ApiError::ProductNotFound)
    ));

    let delete = DeleteCategoryUseCase { categories };
    assert!(matches!(
        delete.execute(Uuid::new_v4()).await,
        Err(ApiError::CategoryNotFound)
    ));
}
