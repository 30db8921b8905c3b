//! HTTP handlers for the orders app

use axum::{
    extract::{Form, State},
    response::{Html, Redirect},
};
use order_core::{Order, ProductName};
use std::sync::Arc;

use crate::error::AppError;
use crate::models::OrderForm;
use crate::state::AppState;
use crate::{pages, ORDER_CONFIRM_PATH};

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Landing page
pub async fn home() -> Html<String> {
    pages::home()
}

/// Order form page
pub async fn new_order() -> Html<String> {
    pages::new_order(None)
}

/// Create an order from the submitted form and redirect to the
/// confirmation route.
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Form(form): Form<OrderForm>,
) -> Result<Redirect, AppError> {
    let product = ProductName::new(&form.product)?;
    let order = Order::new(product);

    sqlx::query(
        r#"
        INSERT INTO orders (id, product, created_at)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(&order.id)
    .bind(&order.product)
    .bind(order.created_at.to_rfc3339())
    .execute(&state.db)
    .await?;

    tracing::info!("Created order {} for product {:?}", order.id, order.product);

    Ok(Redirect::to(ORDER_CONFIRM_PATH))
}

/// Confirmation page
pub async fn order_confirm() -> Html<String> {
    pages::order_confirm()
}
