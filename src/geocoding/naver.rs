use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use super::{GeocodeResponse, Geocoder};
use crate::config::Credentials;
use crate::domain::AddressResult;
use crate::error::Error;

const HEADER_CLIENT_ID: &str = "X-NCP-APIGW-API-KEY-ID";
const HEADER_CLIENT_SECRET: &str = "X-NCP-APIGW-API-KEY";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking client for the Naver Cloud Platform geocode API.
pub struct NaverGeocoder {
    client: Client,
    endpoint: String,
    credentials: Credentials,
}

impl NaverGeocoder {
    pub fn new(endpoint: impl Into<String>, credentials: Credentials) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(Error::HttpClient)?;
        Ok(Self::with_client(client, endpoint, credentials))
    }

    pub fn with_client(
        client: Client,
        endpoint: impl Into<String>,
        credentials: Credentials,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            credentials,
        }
    }
}

impl Geocoder for NaverGeocoder {
    fn geocode(&self, address: &str) -> Result<Option<AddressResult>, Error> {
        debug!("Fetching Naver address for: {address}");

        let http_error = |source: reqwest::Error| Error::Http {
            address: address.to_string(),
            source,
        };

        let response: GeocodeResponse = self
            .client
            .get(&self.endpoint)
            .query(&[("query", address)])
            .header(HEADER_CLIENT_ID, &self.credentials.client_id)
            .header(HEADER_CLIENT_SECRET, &self.credentials.client_secret)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.json())
            .map_err(http_error)?;

        let result = response.into_result(address)?;
        if result.is_some() {
            debug!("Successfully fetched Naver address for: {address}");
        }
        Ok(result)
    }
}
