//! JSON handlers for estimate calculation.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use bendesk_app::ports::{PriceTableSource, RecordStore};
use bendesk_domain::estimate::{Estimate, EstimateInput};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the estimate endpoint.
pub enum CreateResponse {
    Ok(Json<Estimate>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /api/estimate`
///
/// Computes a bending-work estimate for one part against the current price
/// table. The table is re-read per request, so table edits apply without a
/// restart.
pub async fn create<RS, PS>(
    State(state): State<AppState<RS, PS>>,
    Json(input): Json<EstimateInput>,
) -> Result<CreateResponse, ApiError>
where
    RS: RecordStore + Send + Sync + 'static,
    PS: PriceTableSource + Send + Sync + 'static,
{
    let estimate = state.estimate_service.quote(input).await?;
    Ok(CreateResponse::Ok(Json(estimate)))
}
