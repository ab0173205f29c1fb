//! Linear-scan queries over a [`Dataset`].
//!
//! Capital names are matched exactly and are not assumed unique: lookups
//! return the first match in file order.

use ordered_float::OrderedFloat;

use crate::error::QueryError;
use crate::geo;
use crate::record::{CapitalRecord, Dataset};

/// Closest capital to some reference capital.
#[derive(Debug, Clone, PartialEq)]
pub struct Nearest<'a> {
    pub record: &'a CapitalRecord,
    pub distance: f64,
}

impl Nearest<'_> {
    pub fn capital_name(&self) -> &str {
        &self.record.capital_name
    }
}

pub fn lookup_capital<'a>(dataset: &'a Dataset, capital_name: &str) -> Option<&'a CapitalRecord> {
    dataset.iter().find(|r| r.capital_name == capital_name)
}

/// Capital of the first record whose country name matches exactly.
pub fn capital_of_country<'a>(dataset: &'a Dataset, country_name: &str) -> Option<&'a str> {
    dataset
        .iter()
        .find(|r| r.country_name == country_name)
        .map(|r| r.capital_name.as_str())
}

/// Records on `continent_name`, compared case-insensitively, in dataset order.
pub fn filter_by_continent<'a>(dataset: &'a Dataset, continent_name: &str) -> Vec<&'a CapitalRecord> {
    let wanted = continent_name.to_lowercase();
    dataset
        .iter()
        .filter(|r| r.continent_name.to_lowercase() == wanted)
        .collect()
}

/// Closest capital to `capital_name`.
///
/// Every record carrying the reference name is left out of the scan, not just
/// the one that was matched. On equal distances the earlier record wins.
pub fn nearest_capital<'a>(dataset: &'a Dataset, capital_name: &str) -> Result<Nearest<'a>, QueryError> {
    let origin = lookup_capital(dataset, capital_name)
        .ok_or_else(|| QueryError::CapitalNotFound(capital_name.to_string()))?;

    dataset
        .iter()
        .filter(|r| r.capital_name != capital_name)
        .map(|r| Nearest {
            record: r,
            distance: geo::distance_between_records(origin, r),
        })
        // min_by_key keeps the first of equal minima.
        .min_by_key(|n| OrderedFloat(n.distance))
        .ok_or_else(|| QueryError::NoCandidate(capital_name.to_string()))
}

/// Distance between two capitals looked up by name.
pub fn distance_between_capitals(dataset: &Dataset, first: &str, second: &str) -> Result<f64, QueryError> {
    let a = lookup_capital(dataset, first).ok_or_else(|| QueryError::CapitalNotFound(first.to_string()))?;
    let b = lookup_capital(dataset, second).ok_or_else(|| QueryError::CapitalNotFound(second.to_string()))?;
    Ok(geo::distance_between_records(a, b))
}
