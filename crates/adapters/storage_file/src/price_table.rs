//! CSV-backed price table source.

use std::future::Future;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use bendesk_app::ports::PriceTableSource;
use bendesk_domain::error::BendeskError;
use bendesk_domain::pricing::{PriceRow, PriceTable};

use crate::error::StorageError;

/// Row shape of `bending_price_table.csv`.
///
/// Column headers are the Japanese originals from the estimating sheet.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "形状")]
    shape: String,
    #[serde(rename = "重量範囲")]
    weight_limit_kg: u32,
    #[serde(rename = "〜835mm")]
    upto_835: u32,
    #[serde(rename = "〜1670mm")]
    upto_1670: u32,
    #[serde(rename = "〜2505mm")]
    upto_2505: u32,
    #[serde(rename = "〜3048mm")]
    upto_3048: u32,
    #[serde(rename = "3048mm超")]
    over_3048: u32,
}

impl From<CsvRow> for PriceRow {
    fn from(row: CsvRow) -> Self {
        Self {
            shape: row.shape,
            weight_limit_kg: row.weight_limit_kg,
            prices_yen: [
                row.upto_835,
                row.upto_1670,
                row.upto_2505,
                row.upto_3048,
                row.over_3048,
            ],
        }
    }
}

/// Price table source reading a CSV file on every load.
///
/// Re-reading per load keeps table edits visible without a restart.
pub struct CsvPriceTableSource {
    path: PathBuf,
}

impl CsvPriceTableSource {
    /// Create a source reading the CSV at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the CSV file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<PriceTable, StorageError> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut rows = Vec::new();
        for row in reader.deserialize::<CsvRow>() {
            rows.push(PriceRow::from(row?));
        }
        Ok(PriceTable::new(rows))
    }
}

impl PriceTableSource for CsvPriceTableSource {
    fn load(&self) -> impl Future<Output = Result<PriceTable, BendeskError>> + Send {
        async move { Ok(self.read_table()?) }
    }
}
