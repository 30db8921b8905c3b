use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("Product can't be blank")]
    BlankProduct,
}

/// Product name as entered in the order form.
///
/// Whitespace is trimmed on construction; a name that is empty after
/// trimming is rejected, so an `Order` can never carry a blank product.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ProductName(String);

impl ProductName {
    pub fn new(raw: &str) -> Result<Self, OrderError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(OrderError::BlankProduct);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Order {
    pub id: String,
    pub product: String,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Create a new order with a fresh id and the current timestamp.
    pub fn new(product: ProductName) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            product: product.0,
            created_at: Utc::now(),
        }
    }
}
