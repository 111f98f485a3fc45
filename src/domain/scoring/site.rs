//! Site table - raw per-site criterion values and positions.

use serde::{Deserialize, Serialize};

/// Geographic position in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// One candidate site.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteRecord {
    pub position: GeoPoint,
    /// Raw values aligned with [`SiteTable::columns`]; `None` when missing.
    pub values: Vec<Option<f64>>,
}

impl SiteRecord {
    pub fn new(position: GeoPoint, values: Vec<Option<f64>>) -> Self {
        Self { position, values }
    }
}

/// A batch of sites sharing one column layout.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SiteTable {
    columns: Vec<String>,
    sites: Vec<SiteRecord>,
}

impl SiteTable {
    /// Creates an empty table with the given columns.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            sites: Vec::new(),
        }
    }

    /// Appends a site, padding or truncating its values to the column count.
    pub fn push(&mut self, mut site: SiteRecord) {
        site.values.resize(self.columns.len(), None);
        self.sites.push(site);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn sites(&self) -> &[SiteRecord] {
        &self.sites
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// All raw values of one column, in site order.
    pub fn column_values(&self, index: usize) -> Vec<Option<f64>> {
        self.sites
            .iter()
            .map(|s| s.values.get(index).copied().flatten())
            .collect()
    }
}
