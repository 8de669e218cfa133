//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use bendesk_domain::error::BendeskError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

/// Maps [`BendeskError`] to an HTTP response with appropriate status code.
pub struct ApiError(BendeskError);

impl From<BendeskError> for ApiError {
    fn from(err: BendeskError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            BendeskError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            BendeskError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
