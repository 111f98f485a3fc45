//! GeoJSON site data.

mod projection;
mod source;

pub use projection::{equal_area_centroid, web_mercator_to_lon_lat, LambertAzimuthalEqualArea};
pub use source::{parse_feature_collection, Crs, GeoJsonSiteSource};
