//! Estimate calculation — bending cost, hole cost, and tax totals.

use serde::{Deserialize, Serialize};

use crate::error::BendeskError;
use crate::pricing::{
    BENDING_FLOOR_YEN, PUNCH_PRICE_YEN, PriceTable, SMALL_PART_DISCOUNT, pierce_price_for_thickness,
    quantity_factor,
};

/// Default consumption tax rate applied to estimates.
pub const DEFAULT_TAX_RATE: f64 = 0.1;

/// Parameters describing one part to estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateInput {
    /// Bend shape, matched against the price table (e.g. `L曲げ`).
    pub shape: String,
    pub weight_kg: f64,
    pub length_mm: f64,
    /// Longest side of the part, used for the small-part discount.
    pub long_side_mm: f64,
    /// Lot size.
    #[serde(default = "default_lot")]
    pub lot: u32,
    pub thickness_mm: f64,
    /// Laser punch hole count.
    #[serde(default)]
    pub punch_count: u32,
    /// Pierce hole count.
    #[serde(default)]
    pub pierce_count: u32,
    /// 中押し (intermediate press) required.
    #[serde(default)]
    pub nakagoshi: bool,
    /// 逆曲げ (reverse bend) required.
    #[serde(default)]
    pub reverse_bend: bool,
    /// 長尺目押し — only charged when the part is 1000mm or longer.
    #[serde(default)]
    pub meoshi_long: bool,
    /// 深曲げ / interference avoidance.
    #[serde(default)]
    pub fukabend: bool,
}

fn default_lot() -> u32 {
    1
}

/// Bending cost breakdown for one part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BendingCost {
    pub base_price: u32,
    pub quantity_adjustment: f64,
    pub complexity_adjustment: f64,
    pub small_part_adjustment: f64,
    pub addons_yen: u32,
    pub weight_class: String,
    pub length_class: String,
    pub total: u32,
}

/// Hole (punch + pierce) cost breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleCost {
    pub punch_count: u32,
    pub punch_price: u32,
    pub pierce_count: u32,
    pub pierce_price: u32,
    pub total: u32,
}

/// Tax-excluded and tax-included processing totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateTotal {
    pub processing_cost_tax_excluded: u32,
    pub processing_cost_tax_included: u32,
}

/// Per-cost breakdown of an estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub bending_cost: BendingCost,
    pub hole_cost: HoleCost,
}

/// A complete estimate: processing cost only, material excluded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub total_estimate: EstimateTotal,
    pub breakdown: Breakdown,
}

/// Compute the bending cost for one part.
///
/// # Errors
///
/// Returns [`crate::error::ValidationError::UnknownShape`] when the shape
/// has no rows in the price table.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn bending_cost(table: &PriceTable, input: &EstimateInput) -> Result<BendingCost, BendeskError> {
    let base = table.base_price(&input.shape, input.weight_kg, input.length_mm)?;
    let quantity = quantity_factor(input.lot);
    let mut subtotal = f64::from(base.price_yen) * quantity;

    let mut complexity = 1.0;
    let mut addons: u32 = 0;
    if input.nakagoshi {
        complexity *= 1.5;
    }
    if input.reverse_bend {
        complexity *= 1.2;
    }
    if input.meoshi_long && input.length_mm >= 1000.0 {
        addons += 2500;
    }
    if input.fukabend {
        addons += 3000;
    }
    subtotal = subtotal * complexity + f64::from(addons);

    let small_part = if input.long_side_mm <= 300.0 && input.weight_kg <= 1.0 {
        SMALL_PART_DISCOUNT
    } else {
        1.0
    };
    subtotal *= small_part;

    let total = (subtotal.round() as u32).max(BENDING_FLOOR_YEN);

    Ok(BendingCost {
        base_price: base.price_yen,
        quantity_adjustment: quantity,
        complexity_adjustment: complexity,
        small_part_adjustment: small_part,
        addons_yen: addons,
        weight_class: base.weight_class,
        length_class: base.length_class,
        total,
    })
}

/// Compute the hole cost: laser punches at a flat price, pierces priced by
/// sheet thickness.
#[must_use]
pub fn hole_cost(thickness_mm: f64, punch_count: u32, pierce_count: u32) -> HoleCost {
    let pierce_price = pierce_price_for_thickness(thickness_mm);
    HoleCost {
        punch_count,
        punch_price: PUNCH_PRICE_YEN,
        pierce_count,
        pierce_price,
        total: punch_count * PUNCH_PRICE_YEN + pierce_count * pierce_price,
    }
}

/// Compute a full estimate for one part.
///
/// # Errors
///
/// Returns [`crate::error::ValidationError::UnknownShape`] when the shape
/// has no rows in the price table.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn estimate(
    table: &PriceTable,
    input: &EstimateInput,
    tax_rate: f64,
) -> Result<Estimate, BendeskError> {
    let bending = bending_cost(table, input)?;
    let hole = hole_cost(input.thickness_mm, input.punch_count, input.pierce_count);

    let tax_excluded = bending.total + hole.total;
    let tax_included = (f64::from(tax_excluded) * (1.0 + tax_rate)).round() as u32;

    Ok(Estimate {
        total_estimate: EstimateTotal {
            processing_cost_tax_excluded: tax_excluded,
            processing_cost_tax_included: tax_included,
        },
        breakdown: Breakdown {
            bending_cost: bending,
            hole_cost: hole,
        },
    })
}
