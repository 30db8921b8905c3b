//! Error types for the orders app

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use order_core::OrderError;
use thiserror::Error;

use crate::pages;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] OrderError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            // Validation sends the user back to the form with the message.
            AppError::Validation(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                pages::new_order(Some(&e.to_string())),
            )
                .into_response(),
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    pages::error_page("Something went wrong"),
                )
                    .into_response()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    pages::error_page("Something went wrong"),
                )
                    .into_response()
            }
        }
    }
}
