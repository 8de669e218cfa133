//! Bending price table — base prices keyed by shape, weight class, and
//! length class, plus the per-factor pricing rules.

use serde::{Deserialize, Serialize};

use crate::error::{BendeskError, ValidationError};

/// Upper bounds (mm) of the length classes, in table column order.
/// The last class is unbounded.
pub const LENGTH_LIMITS_MM: [f64; 5] = [835.0, 1670.0, 2505.0, 3048.0, f64::INFINITY];

/// Labels for the length classes, matching the CSV column headers.
pub const LENGTH_CLASS_LABELS: [&str; 5] =
    ["〜835mm", "〜1670mm", "〜2505mm", "〜3048mm", "3048mm超"];

/// Price per laser punch hole, in yen.
pub const PUNCH_PRICE_YEN: u32 = 30;

/// Minimum charge for a bending job, in yen.
pub const BENDING_FLOOR_YEN: u32 = 300;

/// Discount factor for small parts (long side <= 300mm and weight <= 1kg).
pub const SMALL_PART_DISCOUNT: f64 = 0.8;

/// One row of the price table: a shape and weight class with one base
/// price per length class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRow {
    /// Bend shape label, e.g. `L曲げ`, `コの字曲げ`.
    pub shape: String,
    /// Upper bound of the weight class, in kg.
    pub weight_limit_kg: u32,
    /// Base prices (yen) per length class, in [`LENGTH_LIMITS_MM`] order.
    pub prices_yen: [u32; 5],
}

/// The full price table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    rows: Vec<PriceRow>,
}

/// A base price resolved from the table, with the classes that matched.
#[derive(Debug, Clone, PartialEq)]
pub struct BasePrice {
    pub price_yen: u32,
    /// Matched weight class label, e.g. `1kg`.
    pub weight_class: String,
    /// Matched length class label, e.g. `〜835mm`.
    pub length_class: String,
}

impl PriceTable {
    /// Build a table from rows. Row order does not matter; lookups sort by
    /// weight class.
    #[must_use]
    pub fn new(rows: Vec<PriceRow>) -> Self {
        Self { rows }
    }

    /// Borrow the table rows.
    #[must_use]
    pub fn rows(&self) -> &[PriceRow] {
        &self.rows
    }

    /// Resolve the base price for a part.
    ///
    /// The weight class is the smallest class whose limit is at or above
    /// `weight_kg`; parts heavier than every class fall into the heaviest
    /// one. The length class is the first class whose upper bound is at or
    /// above `length_mm`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownShape`] when the table holds no
    /// rows for `shape`.
    pub fn base_price(
        &self,
        shape: &str,
        weight_kg: f64,
        length_mm: f64,
    ) -> Result<BasePrice, BendeskError> {
        let mut by_shape: Vec<&PriceRow> =
            self.rows.iter().filter(|row| row.shape == shape).collect();
        if by_shape.is_empty() {
            return Err(ValidationError::UnknownShape(shape.to_string()).into());
        }
        by_shape.sort_by_key(|row| row.weight_limit_kg);

        // Heaviest class absorbs parts above every limit.
        let row = by_shape
            .iter()
            .find(|row| f64::from(row.weight_limit_kg) >= weight_kg)
            .copied()
            .unwrap_or(by_shape[by_shape.len() - 1]);

        let length_idx = LENGTH_LIMITS_MM
            .iter()
            .position(|limit| length_mm <= *limit)
            .unwrap_or(LENGTH_LIMITS_MM.len() - 1);

        Ok(BasePrice {
            price_yen: row.prices_yen[length_idx],
            weight_class: format!("{}kg", row.weight_limit_kg),
            length_class: LENGTH_CLASS_LABELS[length_idx].to_string(),
        })
    }
}

/// Quantity slide factor: small lots pay a surcharge, large lots get a
/// discount.
#[must_use]
pub fn quantity_factor(lot: u32) -> f64 {
    if lot <= 4 {
        1.5
    } else if lot <= 19 {
        1.0
    } else {
        0.8
    }
}

/// Pierce price per hole (yen) for a given sheet thickness.
#[must_use]
pub fn pierce_price_for_thickness(thickness_mm: f64) -> u32 {
    if thickness_mm <= 2.3 {
        30
    } else if thickness_mm <= 4.5 {
        60
    } else if thickness_mm <= 9.0 {
        100
    } else if thickness_mm <= 12.0 {
        150
    } else {
        200
    }
}
