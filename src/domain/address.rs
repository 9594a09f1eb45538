use super::{
    COLUMN_DISTRICT, COLUMN_LOT_ADDRESS, COLUMN_ROAD_ADDRESS, COLUMN_X, COLUMN_Y, Record,
};

/// The two candidate spellings of a record's address. Either may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressQuery {
    pub lot_number: String,
    pub road: String,
}

impl AddressQuery {
    pub fn new(lot_number: impl Into<String>, road: impl Into<String>) -> Self {
        Self {
            lot_number: lot_number.into(),
            road: road.into(),
        }
    }
}

/// Geocoding outcome for one record. The all-empty value means "not found".
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AddressResult {
    /// Longitude
    pub x: String,
    /// Latitude
    pub y: String,
    pub road_address: String,
    pub lot_address: String,
    /// Short name of the sub-district (동/면) the address lies in
    pub district: String,
}

impl AddressResult {
    pub fn not_found() -> Self {
        Self::default()
    }

    /// Whether both coordinates are present.
    pub fn is_geocoded(&self) -> bool {
        !self.x.is_empty() && !self.y.is_empty()
    }

    /// Merges the five enrichment fields into `record`, in output column order.
    pub fn merge_into(&self, record: &mut Record) {
        record.insert(COLUMN_X, self.x.as_str());
        record.insert(COLUMN_Y, self.y.as_str());
        record.insert(COLUMN_ROAD_ADDRESS, self.road_address.as_str());
        record.insert(COLUMN_LOT_ADDRESS, self.lot_address.as_str());
        record.insert(COLUMN_DISTRICT, self.district.as_str());
    }
}
