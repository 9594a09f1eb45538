mod config;
mod domain;
mod engine;
mod error;
mod geocoding;
mod input;
mod output;
mod resolver;
mod telemetry;

use std::path::{Path, PathBuf};

use tracing::info;

pub use config::{Config, Credentials, DEFAULT_GEOCODE_URL};
pub use domain::{
    AddressColumns, AddressQuery, AddressResult, ENRICHMENT_COLUMNS, FileFormat, Record, Summary,
};
pub use engine::enrich;
pub use error::Error;
pub use geocoding::{Geocoder, NaverGeocoder};
pub use input::{read_csv, read_records};
pub use output::{output_path, write_csv, write_records};
pub use resolver::{AddressResolver, ResolutionStrategy};
pub use telemetry::{APP_ENV_VAR, setup_logging};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub summary: Summary,
    pub output_path: PathBuf,
}

/// Runs the whole pipeline for the configured input file against the Naver geocoding API.
///
/// This is the single callable used by the binary; embedding programs can call it the same way
/// after installing a `tracing` subscriber (see [`setup_logging`]).
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use geocode_enricher::{Config, run};
///
/// let config = Config::load(Path::new("config.json")).unwrap();
/// let report = run(&config).unwrap();
/// println!("{} written, {}", report.output_path.display(), report.summary);
/// ```
pub fn run(config: &Config) -> Result<Report, Error> {
    let geocoder = NaverGeocoder::new(config.geocode_url.as_str(), config.credentials.clone())?;
    process_file(&config.input_file, &config.columns, &geocoder)
}

/// Reads `input`, enriches every record with the geocoding results of its address columns and
/// writes the output file next to the input.
///
/// # Error handling
///
/// Lookups that fail for a single record never abort the run; they are logged and counted as
/// failures in the returned [`Summary`]. An unsupported input format is rejected before any request
/// is made, and read errors abort the run before anything is written.
pub fn process_file(
    input: &Path,
    columns: &AddressColumns,
    geocoder: &impl Geocoder,
) -> Result<Report, Error> {
    let format = FileFormat::from_path(input)?;

    let mut records = read_records(input, format)?;
    info!("Read {} records from {}", records.len(), input.display());

    let resolver = AddressResolver::new(geocoder);
    let summary = enrich(&mut records, columns, &resolver);

    let output_path = output_path(input, format);
    write_records(&records, &output_path, format)?;
    info!("Wrote enriched records to {}", output_path.display());

    Ok(Report {
        summary,
        output_path,
    })
}
