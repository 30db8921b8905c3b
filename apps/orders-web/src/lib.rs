//! Orders web app - server-rendered order creation
//!
//! Three pages wired into one flow:
//! - landing page with a "New Order" link
//! - order form ("Product" field, "Purchase Now" button)
//! - confirmation page at the named confirmation route
//!
//! The router is built here so integration tests can drive it in-process.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;
pub mod models;
pub mod pages;
pub mod state;

pub use state::AppState;

/// Path of the order form page, linked from the landing page.
pub const ORDER_NEW_PATH: &str = "/orders/new";

/// Path the order form posts to.
pub const ORDERS_PATH: &str = "/orders";

/// Canonical confirmation route, reached after a successful submission.
pub const ORDER_CONFIRM_PATH: &str = "/orders/confirm";

/// Build the application router.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Order flow
        .route("/", get(handlers::home))
        .route(ORDER_NEW_PATH, get(handlers::new_order))
        .route(ORDERS_PATH, post(handlers::create_order))
        .route(ORDER_CONFIRM_PATH, get(handlers::order_confirm))
        // Add middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
