
use axum::Router;
use orders_web::{app, AppState};
use std::sync::Arc;

/// Build the app against a fresh in-memory database.
pub async fn test_app() -> anyhow::Result<(Router, Arc<AppState>)> {
    let state = Arc::new(AppState::in_memory().await?);
    Ok((app(state.clone()), state))
}
