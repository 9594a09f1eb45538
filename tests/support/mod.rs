//! Test doubles shared by the integration tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use geocode_enricher::{AddressResult, Error, Geocoder};

/// How the fake service answers a given address.
#[derive(Clone)]
pub enum Answer {
    Found(AddressResult),
    /// `totalCount` 0
    NotFound,
    /// A response without a DONGMYUN element
    NoDistrict,
}

/// In-memory geocoding service recording the addresses it was asked for.
/// Addresses without a configured answer are not found.
#[derive(Default)]
pub struct FakeGeocoder {
    answers: HashMap<String, Answer>,
    calls: RefCell<Vec<String>>,
}

impl FakeGeocoder {
    pub fn answer(mut self, address: &str, answer: Answer) -> Self {
        self.answers.insert(address.to_string(), answer);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Geocoder for FakeGeocoder {
    fn geocode(&self, address: &str) -> Result<Option<AddressResult>, Error> {
        self.calls.borrow_mut().push(address.to_string());
        match self.answers.get(address).cloned().unwrap_or(Answer::NotFound) {
            Answer::Found(result) => Ok(Some(result)),
            Answer::NotFound => Ok(None),
            Answer::NoDistrict => Err(Error::MissingDistrict {
                address: address.to_string(),
            }),
        }
    }
}

pub fn located(x: &str, y: &str, district: &str) -> AddressResult {
    AddressResult {
        x: x.to_string(),
        y: y.to_string(),
        road_address: format!("서울특별시 강남구 {district} 도로"),
        lot_address: format!("서울특별시 강남구 {district} 1"),
        district: district.to_string(),
    }
}

/// Writes `content` to `name` inside `dir` and returns the full path.
pub fn write_input(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content)
        .unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));
    path
}
