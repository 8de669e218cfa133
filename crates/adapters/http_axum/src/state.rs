//! Shared application state for axum handlers.

use std::sync::Arc;

use bendesk_app::ports::{PriceTableSource, RecordStore};
use bendesk_app::services::estimate_service::EstimateService;
use bendesk_app::services::record_service::RecordService;

/// Application state shared across all axum handlers.
///
/// Generic over the record store and price table source to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers are
/// cloned.
pub struct AppState<RS, PS> {
    /// Record collection service.
    pub record_service: Arc<RecordService<RS>>,
    /// Estimate calculation service.
    pub estimate_service: Arc<EstimateService<PS>>,
}

impl<RS, PS> Clone for AppState<RS, PS> {
    fn clone(&self) -> Self {
        Self {
            record_service: Arc::clone(&self.record_service),
            estimate_service: Arc::clone(&self.estimate_service),
        }
    }
}

impl<RS, PS> AppState<RS, PS>
where
    RS: RecordStore + Send + Sync + 'static,
    PS: PriceTableSource + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(record_service: RecordService<RS>, estimate_service: EstimateService<PS>) -> Self {
        Self {
            record_service: Arc::new(record_service),
            estimate_service: Arc::new(estimate_service),
        }
    }
}
