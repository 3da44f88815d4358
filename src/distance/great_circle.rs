//! Great-circle surface distance on a spherical Earth.

use crate::error::{Error, Result};
use crate::models::is_valid;

/// Mean Earth radius in kilometers (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6371.009;

/// Great-circle distance in kilometers between two latitude/longitude pairs
/// given in degrees, using the haversine formula.
///
/// The result is bitwise symmetric in its arguments and zero exactly when the
/// inputs are identical, for separations down to about 1e-306 degrees; below
/// that the degree-to-radian conversion rounds to zero. Fails with
/// [`Error::InvalidCoordinate`] when a latitude lies outside [-90, 90] or a
/// longitude outside [-180, 180].
///
/// # Examples
///
/// ```
/// use zone_routing::distance::great_circle_km;
///
/// // One degree of longitude on the equator.
/// let d = great_circle_km(0.0, 0.0, 0.0, 1.0).unwrap();
/// assert!((d - 111.195).abs() < 1e-3);
/// assert!(great_circle_km(95.0, 0.0, 0.0, 0.0).is_err());
/// ```
pub fn great_circle_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Result<f64> {
    for (latitude, longitude) in [(lat1, lon1), (lat2, lon2)] {
        if !is_valid(latitude, longitude) {
            return Err(Error::InvalidCoordinate {
                point_id: None,
                latitude,
                longitude,
            });
        }
    }

    // Fixed argument order keeps d(a, b) and d(b, a) bit-identical.
    let ((lat1, lon1), (lat2, lon2)) = if (lat1, lon1) <= (lat2, lon2) {
        ((lat1, lon1), (lat2, lon2))
    } else {
        ((lat2, lon2), (lat1, lon1))
    };

    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let s_lat = ((lat2 - lat1).to_radians() / 2.0).sin();
    let s_lon = ((lon2 - lon1).to_radians() / 2.0).sin();
    // sqrt of the haversine term; hypot keeps tiny separations from underflowing.
    let root_h = s_lat.hypot((phi1.cos() * phi2.cos()).sqrt() * s_lon);

    Ok(2.0 * EARTH_RADIUS_KM * root_h.min(1.0).asin())
}
