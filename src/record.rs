use serde::Deserialize;

/// One line of the capitals file.
///
/// Field order matches the file layout:
/// `CountryName,CapitalName,CapitalLatitude,CapitalLongitude,CountryCode,ContinentName`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CapitalRecord {
    pub country_name: String,
    /// Used as a lookup key but not guaranteed unique.
    pub capital_name: String,
    /// Decimal degrees.
    pub latitude: f64,
    /// Decimal degrees.
    pub longitude: f64,
    pub country_code: String,
    pub continent_name: String,
}

impl CapitalRecord {
    pub fn new(
        country_name: &str,
        capital_name: &str,
        latitude: f64,
        longitude: f64,
        country_code: &str,
        continent_name: &str,
    ) -> Self {
        CapitalRecord {
            country_name: country_name.to_string(),
            capital_name: capital_name.to_string(),
            latitude,
            longitude,
            country_code: country_code.to_string(),
            continent_name: continent_name.to_string(),
        }
    }
}

/// Ordered, read-only collection of capitals. Built once, then handed by
/// reference to every query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<CapitalRecord>,
}

impl Dataset {
    pub fn records(&self) -> &[CapitalRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CapitalRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<CapitalRecord>> for Dataset {
    fn from(records: Vec<CapitalRecord>) -> Self {
        Dataset { records }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a CapitalRecord;
    type IntoIter = std::slice::Iter<'a, CapitalRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
