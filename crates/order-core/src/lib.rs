pub mod types;

pub use types::{Order, OrderError, ProductName};
