//! Module for the core loop enriching records with geocoding results

use tracing::{debug, info};

use crate::{
    domain::{AddressColumns, Record, Summary},
    geocoding::Geocoder,
    resolver::AddressResolver,
};


///
/// Resolves the address of every record and merges the result into it, strictly in input order.
/// A record's lookups complete before the next record is started.
///
pub fn enrich<G: Geocoder>(
    records: &mut [Record],
    columns: &AddressColumns,
    resolver: &AddressResolver<G>,
) -> Summary {
    let mut summary = Summary::default();

    for (row, record) in records.iter_mut().enumerate() {
        let query = columns.query(record);
        let result = resolver.resolve(&query);
        debug!(row, geocoded = result.is_geocoded(), "Enriched record");

        summary.record(&result);
        result.merge_into(record);
    }

    info!("{summary}");
    summary
}
