//! Module for the types defining the enrichment domain.

mod address;
mod record;


use std::path::Path;

pub use address::{AddressQuery, AddressResult};
pub use record::Record;

use crate::error::Error;

/// Names of the columns appended to every record, in output order.
pub const ENRICHMENT_COLUMNS: [&str; 5] = [
    COLUMN_X,
    COLUMN_Y,
    COLUMN_ROAD_ADDRESS,
    COLUMN_LOT_ADDRESS,
    COLUMN_DISTRICT,
];

pub(crate) const COLUMN_X: &str = "x";
pub(crate) const COLUMN_Y: &str = "y";
pub(crate) const COLUMN_ROAD_ADDRESS: &str = "naverRoadAddress";
pub(crate) const COLUMN_LOT_ADDRESS: &str = "naverjibunAddress";
pub(crate) const COLUMN_DISTRICT: &str = "dongmyun";

/// The file format families the pipeline can read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Spreadsheet,
}

impl FileFormat {
    /// Picks the format from the extension of `path` (ASCII case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("csv") => Ok(FileFormat::Csv),
            Some("xlsx") => Ok(FileFormat::Spreadsheet),
            _ => Err(Error::UnsupportedFileType {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Names of the two input columns holding the addresses to geocode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressColumns {
    pub lot_number: String,
    pub road: String,
}

impl AddressColumns {
    pub fn new(lot_number: impl Into<String>, road: impl Into<String>) -> Self {
        Self {
            lot_number: lot_number.into(),
            road: road.into(),
        }
    }

    /// Builds the query for a record. Absent columns read as empty addresses.
    pub fn query(&self, record: &Record) -> AddressQuery {
        AddressQuery::new(record.get(&self.lot_number), record.get(&self.road))
    }
}

/// Aggregate outcome of an enrichment run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl Summary {
    pub(crate) fn record(&mut self, result: &AddressResult) {
        self.total += 1;
        if result.is_geocoded() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Total items processed: {}. Successfully fetched: {}. Failed: {}.",
            self.total, self.succeeded, self.failed
        )
    }
}
