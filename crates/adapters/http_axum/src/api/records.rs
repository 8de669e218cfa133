//! JSON handlers for the estimate record collection.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use bendesk_app::ports::{PriceTableSource, RecordStore};
use bendesk_domain::collection::RecordCollection;
use bendesk_domain::error::{BendeskError, ValidationError};

use crate::error::ApiError;
use crate::state::AppState;

/// Confirmation body returned after a successful replace.
#[derive(Serialize)]
pub struct ReplaceAck {
    pub ok: bool,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<RecordCollection>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the replace endpoint.
pub enum ReplaceResponse {
    Ok(Json<ReplaceAck>),
}

impl IntoResponse for ReplaceResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/records`
///
/// Returns the whole collection. Never fails: the store's fail-open load
/// turns a missing, unreadable, or corrupt backing file into `[]`.
pub async fn list<RS, PS>(
    State(state): State<AppState<RS, PS>>,
) -> Result<ListResponse, ApiError>
where
    RS: RecordStore + Send + Sync + 'static,
    PS: PriceTableSource + Send + Sync + 'static,
{
    let records = state.record_service.list_records().await?;
    Ok(ListResponse::Ok(Json(records)))
}

/// `POST /api/records`
///
/// Replaces the stored collection wholesale. The body must be a JSON
/// array; anything else — including malformed JSON — is rejected with the
/// fixed invalid-input error and the stored file is left untouched.
pub async fn replace<RS, PS>(
    State(state): State<AppState<RS, PS>>,
    body: Bytes,
) -> Result<ReplaceResponse, ApiError>
where
    RS: RecordStore + Send + Sync + 'static,
    PS: PriceTableSource + Send + Sync + 'static,
{
    let value: Value = serde_json::from_slice(&body)
        .map_err(|_| BendeskError::from(ValidationError::NotAnArray))?;
    let records = RecordCollection::from_value(value)?;

    state.record_service.replace_records(records).await?;
    Ok(ReplaceResponse::Ok(Json(ReplaceAck { ok: true })))
}
