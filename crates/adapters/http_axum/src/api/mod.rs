//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod estimates;
#[allow(clippy::missing_errors_doc)]
pub mod records;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};

use bendesk_app::ports::{PriceTableSource, RecordStore};

use crate::error::ErrorBody;
use crate::state::AppState;

/// Build the `/api` sub-router.
///
/// Each route registers an explicit OPTIONS handler (empty success body for
/// preflights) and a method fallback that returns the fixed 405 JSON body
/// instead of axum's empty default.
pub fn routes<RS, PS>() -> Router<AppState<RS, PS>>
where
    RS: RecordStore + Send + Sync + 'static,
    PS: PriceTableSource + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/records",
            get(records::list::<RS, PS>)
                .post(records::replace::<RS, PS>)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/estimate",
            post(estimates::create::<RS, PS>)
                .options(preflight)
                .fallback(method_not_allowed),
        )
}

/// Immediate empty success for preflight requests.
async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// `405` with the fixed JSON error body.
async fn method_not_allowed() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody {
            error: "Method not allowed".to_string(),
        }),
    )
}
