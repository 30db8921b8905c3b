//! Data models for the orders app

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::FromRow;

/// Payload of the order form.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderForm {
    pub product: String,
}

/// Order row as stored in the database.
#[derive(Debug, Clone, FromRow)]
pub struct DbOrder {
    pub id: String,
    pub product: String,
    pub created_at: DateTime<Utc>,
}
