//! Module for talking to the external geocoding service and interpreting its responses.

mod naver;


use serde::Deserialize;

use crate::domain::AddressResult;
use crate::error::{Error, malformed_response};

pub use naver::NaverGeocoder;

/// Address element type marking the sub-district/town unit (동/면)
pub(crate) const DISTRICT_ELEMENT_TYPE: &str = "DONGMYUN";

/// A service turning a free-form address into coordinates.
pub trait Geocoder {
    /// Looks up a single address.
    ///
    /// Returns `Ok(None)` when the service answered but knows no matching address,
    /// and an error for everything that prevented a usable answer.
    fn geocode(&self, address: &str) -> Result<Option<AddressResult>, Error>;
}

impl<G: Geocoder + ?Sized> Geocoder for &G {
    fn geocode(&self, address: &str) -> Result<Option<AddressResult>, Error> {
        (**self).geocode(address)
    }
}

/// Response body of the geocode endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    meta: Option<Meta>,
    #[serde(default)]
    addresses: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Meta {
    total_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    x: String,
    #[serde(default)]
    y: String,
    #[serde(default)]
    road_address: String,
    #[serde(default)]
    jibun_address: String,
    #[serde(default)]
    address_elements: Vec<AddressElement>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddressElement {
    #[serde(default)]
    types: Vec<String>,
    #[serde(default)]
    short_name: String,
}

impl GeocodeResponse {
    /// Extracts the result from the first candidate of the response.
    pub(crate) fn into_result(self, address: &str) -> Result<Option<AddressResult>, Error> {
        let total_count = self.meta.and_then(|meta| meta.total_count).unwrap_or(0);
        if total_count == 0 {
            return Ok(None);
        }

        let Some(candidate) = self.addresses.into_iter().next() else {
            return Err(malformed_response(
                address,
                format!("totalCount is {total_count} but no address was returned"),
            ));
        };

        let district = candidate
            .address_elements
            .into_iter()
            .find(|element| {
                element
                    .types
                    .first()
                    .is_some_and(|t| t == DISTRICT_ELEMENT_TYPE)
            })
            .map(|element| element.short_name)
            .ok_or_else(|| Error::MissingDistrict {
                address: address.to_string(),
            })?;

        Ok(Some(AddressResult {
            x: candidate.x,
            y: candidate.y,
            road_address: candidate.road_address,
            lot_address: candidate.jibun_address,
            district,
        }))
    }
}
