//! Map projections used to compute site centroids.
//!
//! Centroids taken directly in lon/lat are skewed toward the poles for
//! large polygons. Projecting into a Lambert azimuthal equal-area plane
//! centred on the geometry first keeps area weighting honest.

use geo::{BoundingRect, Centroid, Coord, MapCoords, MultiPolygon, Point};

/// Authalic radius of the WGS84 ellipsoid, metres.
const AUTHALIC_RADIUS: f64 = 6_371_007.181;

/// Semi-major axis used by EPSG:3857, metres.
const WEB_MERCATOR_RADIUS: f64 = 6_378_137.0;

/// Spherical Lambert azimuthal equal-area projection.
#[derive(Debug, Clone, Copy)]
pub struct LambertAzimuthalEqualArea {
    lon0: f64,
    sin_lat0: f64,
    cos_lat0: f64,
}

impl LambertAzimuthalEqualArea {
    /// Projection centred on `center` (x = lon, y = lat, degrees).
    pub fn centered_on(center: Coord<f64>) -> Self {
        let lat0 = center.y.to_radians();
        Self {
            lon0: center.x.to_radians(),
            sin_lat0: lat0.sin(),
            cos_lat0: lat0.cos(),
        }
    }

    /// Degrees to metres.
    pub fn forward(&self, c: Coord<f64>) -> Coord<f64> {
        let lat = c.y.to_radians();
        let dlon = c.x.to_radians() - self.lon0;
        let (sin_lat, cos_lat) = lat.sin_cos();
        let cos_dlon = dlon.cos();

        let denom = 1.0 + self.sin_lat0 * sin_lat + self.cos_lat0 * cos_lat * cos_dlon;
        // antipode of the centre has no image
        let k = if denom > f64::EPSILON { (2.0 / denom).sqrt() } else { 0.0 };

        Coord {
            x: AUTHALIC_RADIUS * k * cos_lat * dlon.sin(),
            y: AUTHALIC_RADIUS * k * (self.cos_lat0 * sin_lat - self.sin_lat0 * cos_lat * cos_dlon),
        }
    }

    /// Metres to degrees.
    pub fn inverse(&self, c: Coord<f64>) -> Coord<f64> {
        let rho = c.x.hypot(c.y);
        if rho < f64::EPSILON {
            return Coord {
                x: self.lon0.to_degrees(),
                y: self.sin_lat0.atan2(self.cos_lat0).to_degrees(),
            };
        }

        let angle = 2.0 * (rho / (2.0 * AUTHALIC_RADIUS)).clamp(-1.0, 1.0).asin();
        let (sin_c, cos_c) = angle.sin_cos();

        let lat = (cos_c * self.sin_lat0 + c.y * sin_c * self.cos_lat0 / rho)
            .clamp(-1.0, 1.0)
            .asin();
        let lon = self.lon0
            + (c.x * sin_c).atan2(rho * self.cos_lat0 * cos_c - c.y * self.sin_lat0 * sin_c);

        Coord {
            x: normalize_longitude(lon.to_degrees()),
            y: lat.to_degrees(),
        }
    }
}

fn normalize_longitude(lon: f64) -> f64 {
    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 && lon > 0.0 {
        180.0
    } else {
        wrapped
    }
}

/// EPSG:3857 metres to WGS84 degrees.
pub fn web_mercator_to_lon_lat(c: Coord<f64>) -> Coord<f64> {
    Coord {
        x: (c.x / WEB_MERCATOR_RADIUS).to_degrees(),
        y: (2.0 * (c.y / WEB_MERCATOR_RADIUS).exp().atan() - std::f64::consts::FRAC_PI_2)
            .to_degrees(),
    }
}

/// Area-weighted centroid of lon/lat polygons, computed in an equal-area
/// plane centred on their bounding box.
///
/// Returns `None` for empty geometry.
pub fn equal_area_centroid(polygons: &MultiPolygon<f64>) -> Option<Point<f64>> {
    let center = polygons.bounding_rect()?.center();
    let projection = LambertAzimuthalEqualArea::centered_on(center);

    let projected = polygons.map_coords(|c| projection.forward(c));
    let centroid = projected.centroid()?;

    Some(Point::from(projection.inverse(centroid.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{coord, polygon, Polygon};

    fn polygon_centroid(polygon: Polygon<f64>) -> Option<Point<f64>> {
        equal_area_centroid(&MultiPolygon::new(vec![polygon]))
    }

    fn assert_close(a: f64, b: f64, tol: f64) {
        assert!((a - b).abs() < tol, "expected {b}, got {a}");
    }

    #[test]
    fn projection_centre_maps_to_origin() {
        let p = LambertAzimuthalEqualArea::centered_on(coord! { x: -122.27, y: 37.80 });
        let origin = p.forward(coord! { x: -122.27, y: 37.80 });
        assert_close(origin.x, 0.0, 1e-6);
        assert_close(origin.y, 0.0, 1e-6);
    }

    #[test]
    fn inverse_undoes_forward() {
        let p = LambertAzimuthalEqualArea::centered_on(coord! { x: -122.27, y: 37.80 });
        let back = p.inverse(p.forward(coord! { x: -122.1, y: 37.7 }));
        assert_close(back.x, -122.1, 1e-9);
        assert_close(back.y, 37.7, 1e-9);
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let p = LambertAzimuthalEqualArea::centered_on(coord! { x: 0.0, y: 0.0 });
        let north = p.forward(coord! { x: 0.0, y: 1.0 });
        assert_close(north.y, 111_195.0, 200.0);
    }

    #[test]
    fn web_mercator_origin_and_known_point() {
        let origin = web_mercator_to_lon_lat(coord! { x: 0.0, y: 0.0 });
        assert_close(origin.x, 0.0, 1e-12);
        assert_close(origin.y, 0.0, 1e-12);

        // Oakland city hall, approximately
        let oakland = web_mercator_to_lon_lat(coord! { x: -13_611_300.0, y: 4_551_500.0 });
        assert_close(oakland.x, -122.27, 0.01);
        assert_close(oakland.y, 37.80, 0.01);
    }

    #[test]
    fn small_symmetric_square_centroid_is_its_centre() {
        let square = polygon![
            (x: -122.271, y: 37.799),
            (x: -122.269, y: 37.799),
            (x: -122.269, y: 37.801),
            (x: -122.271, y: 37.801),
            (x: -122.271, y: 37.799),
        ];
        let c = polygon_centroid(square).unwrap();
        assert_close(c.x(), -122.27, 1e-6);
        assert_close(c.y(), 37.80, 1e-6);
    }

    #[test]
    fn large_polygon_centroid_leans_toward_the_equator() {
        // more area lies along the 60th parallel than the 70th
        let cell = polygon![
            (x: 0.0, y: 60.0),
            (x: 10.0, y: 60.0),
            (x: 10.0, y: 70.0),
            (x: 0.0, y: 70.0),
            (x: 0.0, y: 60.0),
        ];
        let c = polygon_centroid(cell).unwrap();
        assert!(c.y() < 64.9, "centroid latitude {}", c.y());
        assert_close(c.x(), 5.0, 1e-6);
    }

    #[test]
    fn empty_geometry_has_no_centroid() {
        assert!(equal_area_centroid(&MultiPolygon::new(vec![])).is_none());
    }
}
