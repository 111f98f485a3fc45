//! GeoJSON-backed site source.
//!
//! Reads a FeatureCollection where every feature is one candidate site.
//! Feature properties carry the raw criterion values keyed by column name;
//! the geometry gives the site position (polygons are reduced to an
//! equal-area centroid).

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use super::projection::{equal_area_centroid, web_mercator_to_lon_lat};
use crate::domain::ahp::CriteriaSet;
use crate::domain::scoring::{GeoPoint, SiteRecord, SiteTable};
use crate::ports::{SiteSource, SiteSourceError};

// ════════════════════════════════════════════════════════════════════════════════
// Wire types
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    crs: Option<NamedCrs>,
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct NamedCrs {
    properties: NamedCrsProperties,
}

#[derive(Debug, Deserialize)]
struct NamedCrsProperties {
    name: String,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Option<Geometry>,
}

type Position = Vec<f64>;
type Ring = Vec<Position>;

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Point { coordinates: Position },
    Polygon { coordinates: Vec<Ring> },
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
    #[serde(other)]
    Unsupported,
}

/// Coordinate reference systems the reader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crs {
    /// Longitude/latitude degrees (EPSG:4326, OGC CRS84).
    Wgs84,
    /// Spherical mercator metres (EPSG:3857).
    WebMercator,
}

impl Crs {
    /// Resolves a GeoJSON named CRS such as `urn:ogc:def:crs:EPSG::3857`.
    pub fn from_name(name: &str) -> Result<Self, SiteSourceError> {
        let upper = name.trim().to_ascii_uppercase();
        if upper.ends_with("CRS84") || upper.ends_with(":4326") {
            Ok(Crs::Wgs84)
        } else if upper.ends_with(":3857") || upper.ends_with(":900913") {
            Ok(Crs::WebMercator)
        } else {
            Err(SiteSourceError::UnsupportedCrs(name.to_string()))
        }
    }

    fn to_lon_lat(self, c: Coord<f64>) -> Coord<f64> {
        match self {
            Crs::Wgs84 => c,
            Crs::WebMercator => web_mercator_to_lon_lat(c),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Parsing
// ════════════════════════════════════════════════════════════════════════════════

/// Parses a FeatureCollection document into a site table with the columns
/// of `criteria`.
///
/// Features without a usable geometry are skipped with a warning. Property
/// values that are neither numbers nor numeric strings become missing.
pub fn parse_feature_collection(
    document: &str,
    criteria: &CriteriaSet,
) -> Result<SiteTable, SiteSourceError> {
    let collection: FeatureCollection =
        serde_json::from_str(document).map_err(|e| SiteSourceError::Malformed(e.to_string()))?;

    let crs = match &collection.crs {
        Some(named) => Crs::from_name(&named.properties.name)?,
        None => Crs::Wgs84,
    };

    let columns: Vec<String> = criteria.columns().map(str::to_string).collect();
    let mut table = SiteTable::new(columns.clone());
    let mut skipped = 0usize;

    for (index, feature) in collection.features.iter().enumerate() {
        let Some(position) = feature.geometry.as_ref().and_then(|g| site_position(g, crs)) else {
            warn!(feature = index, "Skipping feature without usable geometry");
            skipped += 1;
            continue;
        };

        let values = columns
            .iter()
            .map(|column| {
                feature
                    .properties
                    .as_ref()
                    .and_then(|props| props.get(column))
                    .and_then(numeric_value)
            })
            .collect();

        table.push(SiteRecord::new(position, values));
    }

    debug!(sites = table.len(), skipped, crs = ?crs, "Parsed feature collection");
    Ok(table)
}

/// Numbers and numeric strings; everything else is missing.
fn numeric_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

fn site_position(geometry: &Geometry, crs: Crs) -> Option<GeoPoint> {
    let point = match geometry {
        Geometry::Point { coordinates } => crs.to_lon_lat(to_coord(coordinates)?),
        Geometry::Polygon { coordinates } => {
            let polygon = to_polygon(coordinates, crs)?;
            equal_area_centroid(&MultiPolygon::new(vec![polygon]))?.0
        }
        Geometry::MultiPolygon { coordinates } => {
            let polygons: Vec<Polygon<f64>> = coordinates
                .iter()
                .filter_map(|rings| to_polygon(rings, crs))
                .collect();
            equal_area_centroid(&MultiPolygon::new(polygons))?.0
        }
        Geometry::Unsupported => return None,
    };

    (point.x.is_finite() && point.y.is_finite()).then(|| GeoPoint::new(point.y, point.x))
}

fn to_coord(position: &[f64]) -> Option<Coord<f64>> {
    match position {
        [x, y, ..] => Some(Coord { x: *x, y: *y }),
        _ => None,
    }
}

fn to_line_string(ring: &[Position], crs: Crs) -> Option<LineString<f64>> {
    let coords: Option<Vec<Coord<f64>>> = ring
        .iter()
        .map(|p| to_coord(p).map(|c| crs.to_lon_lat(c)))
        .collect();
    let coords = coords?;
    (!coords.is_empty()).then(|| LineString::new(coords))
}

fn to_polygon(rings: &[Ring], crs: Crs) -> Option<Polygon<f64>> {
    let (exterior, interiors) = rings.split_first()?;
    let exterior = to_line_string(exterior, crs)?;
    let interiors = interiors
        .iter()
        .filter_map(|ring| to_line_string(ring, crs))
        .collect();
    Some(Polygon::new(exterior, interiors))
}

// ════════════════════════════════════════════════════════════════════════════════
// Adapter
// ════════════════════════════════════════════════════════════════════════════════

/// Loads candidate sites from a GeoJSON file on disk.
///
/// The file is re-read on every call so edits show up without a restart.
pub struct GeoJsonSiteSource {
    path: PathBuf,
}

impl GeoJsonSiteSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SiteSource for GeoJsonSiteSource {
    async fn load_sites(&self, criteria: &CriteriaSet) -> Result<SiteTable, SiteSourceError> {
        let document = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    SiteSourceError::NotFound(self.path.display().to_string())
                }
                _ => SiteSourceError::IoError(e.to_string()),
            })?;

        let table = parse_feature_collection(&document, criteria)?;
        info!(path = %self.path.display(), sites = table.len(), "Loaded candidate sites");
        Ok(table)
    }
}
