//! Unified error type for the Hotelforge server.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hotelforge_alloc::AllocError;
use hotelforge_building::BuildingError;
use hotelforge_desk::DeskError;
use hotelforge_protocol::{ErrorBody, ProtocolError};

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attribute on each variant auto-generates `From` impls,
/// so the `?` operator converts sub-crate errors automatically inside
/// handlers. [`IntoResponse`] turns any of them into an HTTP reply.
#[derive(Debug, thiserror::Error)]
pub enum HotelforgeError {
    /// The request broke an API rule (bad count, bad body).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The front desk refused or could not serve the request.
    #[error(transparent)]
    Desk(#[from] DeskError),

    /// Invalid building configuration at startup.
    #[error(transparent)]
    Building(#[from] BuildingError),

    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

impl HotelforgeError {
    /// Returns the HTTP status code for this error.
    ///
    /// - Protocol, allocation refusals: 400 Bad Request
    /// - Desk unavailable: 503 Service Unavailable
    /// - Everything else: 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Protocol(_) | Self::Desk(DeskError::Alloc(_)) => StatusCode::BAD_REQUEST,
            Self::Desk(DeskError::Unavailable) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Desk(DeskError::Building(_))
            | Self::Building(_)
            | Self::Bind { .. }
            | Self::Serve(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field of the response body.
    ///
    /// Client errors carry their real cause. Server errors get a generic
    /// text; the detail only goes to the log.
    fn public_message(&self) -> String {
        match self {
            Self::Protocol(e) => e.to_string(),
            Self::Desk(DeskError::Alloc(AllocError::InsufficientRooms { available, .. })) => {
                format!("Only {available} rooms available")
            }
            Self::Desk(DeskError::Alloc(AllocError::EmptyRequest)) => {
                "Must book at least 1 room".to_string()
            }
            Self::Desk(DeskError::Unavailable) => "Service unavailable".to_string(),
            _ => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for HotelforgeError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        (status, Json(ErrorBody::new(self.public_message()))).into_response()
    }
}
