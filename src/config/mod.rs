//! Module loading the static settings of a run from a JSON file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::AddressColumns;
use crate::error::{Error, config_error};


/// Endpoint used when the config does not override `geocodeUrl`.
pub const DEFAULT_GEOCODE_URL: &str =
    "https://naveropenapi.apigw.ntruss.com/map-geocode/v2/geocode";

/// API credentials for the Naver Cloud Platform gateway.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

// The secret must never end up in the logs
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub credentials: Credentials,
    pub input_file: PathBuf,
    pub columns: AddressColumns,
    pub geocode_url: String,
}

// Intermediate type mirroring the JSON keys
#[derive(Deserialize)]
struct RawConfig {
    #[serde(rename = "NAVER_CLIENT_ID")]
    client_id: String,
    #[serde(rename = "NAVER_CLIENT_SECRET")]
    client_secret: String,
    #[serde(rename = "inputFilePath")]
    input_file_path: String,
    #[serde(rename = "jibunColumnName")]
    jibun_column_name: String,
    #[serde(rename = "roadColumnName")]
    road_column_name: String,
    #[serde(rename = "geocodeUrl")]
    geocode_url: Option<String>,
}

impl Config {
    /// Reads and validates the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            config_error(format!("cannot read config file {}: {e}", path.display()))
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, Error> {
        let raw: RawConfig = serde_json::from_str(content)
            .map_err(|e| config_error(format!("invalid config: {e}")))?;
        Config::try_from(raw)
    }
}

impl TryFrom<RawConfig> for Config {
    type Error = Error;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let RawConfig {
            client_id,
            client_secret,
            input_file_path,
            jibun_column_name,
            road_column_name,
            geocode_url,
        } = raw;

        for (key, value) in [
            ("NAVER_CLIENT_ID", &client_id),
            ("NAVER_CLIENT_SECRET", &client_secret),
            ("inputFilePath", &input_file_path),
            ("jibunColumnName", &jibun_column_name),
            ("roadColumnName", &road_column_name),
        ] {
            if value.trim().is_empty() {
                return Err(config_error(format!("'{key}' must not be empty")));
            }
        }

        Ok(Config {
            credentials: Credentials {
                client_id,
                client_secret,
            },
            input_file: PathBuf::from(input_file_path),
            columns: AddressColumns::new(jibun_column_name, road_column_name),
            geocode_url: geocode_url.unwrap_or_else(|| DEFAULT_GEOCODE_URL.to_string()),
        })
    }
}
