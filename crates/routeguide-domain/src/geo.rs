//! Great-circle distance on a spherical earth

use crate::Point;

/// Mean earth radius used by the haversine formula
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Distance in meters between two points using the haversine formula
///
/// Defined for every input pair; identical points yield 0.
///
/// # Examples
///
/// ```
/// use routeguide_domain::{distance_meters, Point};
///
/// let a = Point::new(0, 0);
/// let b = Point::new(10_000_000, 0);
/// // One degree of latitude is roughly 111 km
/// assert!((distance_meters(a, b) - 111_195.0).abs() < 1.0);
/// ```
pub fn distance_meters(a: Point, b: Point) -> f64 {
    let lat1 = a.latitude_degrees().to_radians();
    let lat2 = b.latitude_degrees().to_radians();
    let lon1 = a.longitude_degrees().to_radians();
    let lon2 = b.longitude_degrees().to_radians();

    let half_dlat = ((lat2 - lat1) / 2.0).sin();
    let half_dlon = ((lon2 - lon1) / 2.0).sin();
    let h = half_dlat * half_dlat + lat1.cos() * lat2.cos() * half_dlon * half_dlon;
    // h can drift just above 1.0 for antipodal points
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}
