//! Pricing port — the source of the bending price table.

use std::future::Future;

use bendesk_domain::error::BendeskError;
use bendesk_domain::pricing::PriceTable;

/// Source of the bending price table.
///
/// Loaded per use so table updates take effect without a restart.
pub trait PriceTableSource {
    /// Load the current price table.
    fn load(&self) -> impl Future<Output = Result<PriceTable, BendeskError>> + Send;
}
