//! Axum router assembly.

use axum::Router;
use axum::http::{Method, header};
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use bendesk_app::ports::{PriceTableSource, RecordStore};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api`. Includes a permissive [`CorsLayer`]
/// (any origin, `GET`/`POST`/`OPTIONS`, `Content-Type`) for cross-origin
/// browser clients, and a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<RS, PS>(state: AppState<RS, PS>) -> Router
where
    RS: RecordStore + Send + Sync + 'static,
    PS: PriceTableSource + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

async fn health_check() -> &'static str {
    "OK"
}
