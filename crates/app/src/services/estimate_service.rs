//! Estimate service — computes estimates against the current price table.

use bendesk_domain::error::BendeskError;
use bendesk_domain::estimate::{self, DEFAULT_TAX_RATE, Estimate, EstimateInput};

use crate::ports::PriceTableSource;

/// Application service computing bending-work estimates.
pub struct EstimateService<P> {
    source: P,
    tax_rate: f64,
}

impl<P: PriceTableSource> EstimateService<P> {
    /// Create a new service using the default tax rate.
    pub fn new(source: P) -> Self {
        Self {
            source,
            tax_rate: DEFAULT_TAX_RATE,
        }
    }

    /// Override the tax rate.
    #[must_use]
    pub fn with_tax_rate(mut self, tax_rate: f64) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    /// Compute an estimate for one part.
    ///
    /// The price table is re-read on every call, so edits to the underlying
    /// source take effect without a restart.
    ///
    /// # Errors
    ///
    /// Returns a validation error for shapes missing from the table, or a
    /// storage error when the table cannot be loaded.
    pub async fn quote(&self, input: EstimateInput) -> Result<Estimate, BendeskError> {
        let table = self.source.load().await?;
        estimate::estimate(&table, &input, self.tax_rate)
    }
}
