use std::path::Path;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{delete, get, post, put},
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::warn;

use storefront_core::health::{healthz, readyz};
use storefront_core::middleware::{propagate_request_id_layer, set_request_id_layer};

use crate::handlers::{
    admin::{check_auth, login, logout, refresh_token},
    basket::{add_item, clear_basket, get_basket, remove_item, update_quantity},
    category::{create_category, delete_category, list_categories},
    order::{create_order, delete_order, list_orders, update_order},
    panel::panel,
    product::{
        create_product, delete_product, get_product, list_products, list_products_by_category,
        search_products, update_product,
    },
};
use crate::state::AppState;

pub fn build_router(
    state: AppState,
    allowed_origins: &[String],
    static_dir: Option<&str>,
) -> Router {
    let mut router = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/api/admins/login", post(login))
        .route("/api/admins/check-auth", get(check_auth))
        .route("/api/admins/refresh-token", post(refresh_token))
        .route("/api/admins/logout", post(logout))
        // Admin panel pages
        .route("/admin/sAdmin", get(panel))
        .route("/admin/sAdmin/admin-product", get(panel))
        .route("/admin/yAdmin", get(panel))
        // Categories
        .route("/api/categories", get(list_categories))
        .route("/api/categories", post(create_category))
        .route("/api/categories/{id}", delete(delete_category))
        // Products
        .route("/api/products", get(list_products))
        .route("/api/products", post(create_product))
        .route("/api/products/search/{query}", get(search_products))
        .route(
            "/api/products/category/{category_ref}",
            get(list_products_by_category),
        )
        .route("/api/products/{id}", get(get_product))
        .route("/api/products/{id}", put(update_product))
        .route("/api/products/{id}", delete(delete_product))
        // Baskets
        .route("/api/baskets/add", post(add_item))
        .route("/api/baskets/update", put(update_quantity))
        .route("/api/baskets/remove", delete(remove_item))
        .route("/api/baskets/{user_id}", get(get_basket))
        .route("/api/baskets/{user_id}", delete(clear_basket))
        // Orders
        .route("/api/orders", post(create_order))
        .route("/api/orders", get(list_orders))
        .route("/api/orders/{id}", put(update_order))
        .route("/api/orders/{id}", delete(delete_order))
        .with_state(state);

    // Unmatched non-API paths fall back to the SPA's index.html.
    if let Some(dir) = static_dir {
        let index = Path::new(dir).join("index.html");
        router = router.fallback_service(
            ServeDir::new(dir).not_found_service(ServeFile::new(index)),
        );
    }

    if !allowed_origins.is_empty() {
        router = router.layer(cors_layer(allowed_origins));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id_layer())
        .layer(set_request_id_layer())
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "skipping unparseable CORS origin");
                None
            }
        })
        .collect();

    // Credentials must be on for the session cookie to cross origins, which
    // rules out the wildcard origin.
    CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE])
}
