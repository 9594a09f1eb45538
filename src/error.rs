//! Module defining the errors which are exposed to the users of the crate

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing, malformed or empty configuration. Fatal, raised before any processing.
    #[error("configuration error: {0}")]
    Config(String),

    /// Input file with an extension the pipeline has no reader for
    #[error("unsupported file type: {}", path.display())]
    UnsupportedFileType { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid CSV, either while reading or while writing
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("spreadsheet read error: {0}")]
    SpreadsheetRead(#[from] calamine::XlsxError),

    #[error("spreadsheet write error: {0}")]
    SpreadsheetWrite(#[from] rust_xlsxwriter::XlsxError),

    /// The HTTP client for the geocoding service could not be set up
    #[error("cannot create geocoding client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// The request to the geocoding service failed (network, status or body decoding)
    #[error("geocoding request for '{address}' failed: {source}")]
    Http {
        address: String,
        #[source]
        source: reqwest::Error,
    },

    /// The geocoding service answered, but not in the expected shape
    #[error("unexpected geocoding response for '{address}': {message}")]
    MalformedResponse { address: String, message: String },

    /// A successful geocoding response without a `DONGMYUN` address element
    #[error("no sub-district element in geocoding response for '{address}'")]
    MissingDistrict { address: String },
}

pub(crate) fn config_error(message: impl Into<String>) -> Error {
    Error::Config(message.into())
}

pub(crate) fn malformed_response(address: &str, message: impl Into<String>) -> Error {
    Error::MalformedResponse {
        address: address.to_string(),
        message: message.into(),
    }
}
