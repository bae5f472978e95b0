// ============================================================================
// Marketplace Errors
// ============================================================================
//
// Business failures are local validation failures: deterministic given the
// current state, never transient, and always raised before any mutation.
//
// ============================================================================

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rust_decimal::Decimal;

#[derive(Debug, thiserror::Error)]
pub enum MarketError {
    #[error("Listing not found or already sold")]
    ListingNotFound(String),

    #[error("Insufficient Nexus Points!")]
    InsufficientFunds { needed: Decimal, available: Decimal },

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Item {0} is not in your inventory")]
    NotOwner(String),

    #[error("Item {0} is already listed")]
    AlreadyListed(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Item template not found: {0}")]
    TemplateNotFound(String),

    #[error("Game not found: {0}")]
    GameNotFound(String),

    #[error("Storage error: {0}")]
    Storage(#[from] sled::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Market state lock poisoned")]
    StatePoisoned,
}

pub type MarketResult<T> = Result<T, MarketError>;

impl MarketError {
    pub fn status(&self) -> StatusCode {
        match self {
            MarketError::ListingNotFound(_)
            | MarketError::ItemNotFound(_)
            | MarketError::TemplateNotFound(_)
            | MarketError::GameNotFound(_) => StatusCode::NOT_FOUND,
            MarketError::InsufficientFunds { .. } | MarketError::InvalidAmount(_) => {
                StatusCode::BAD_REQUEST
            }
            MarketError::NotOwner(_) => StatusCode::FORBIDDEN,
            MarketError::AlreadyListed(_) => StatusCode::CONFLICT,
            MarketError::Storage(_) | MarketError::Serialization(_) | MarketError::StatePoisoned => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for MarketError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = serde_json::json!({
            "success": false,
            "error": self.to_string()
        });
        (status, Json(body)).into_response()
    }
}
