//! Fixed-point geographic coordinates

use std::fmt;

/// Scale between encoded integer coordinates and real-world degrees
pub const COORD_FACTOR: f64 = 1e7;

/// A latitude/longitude pair encoded as degrees × [`COORD_FACTOR`]
///
/// Equality is exact integer equality on both fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Latitude × 10^7
    pub latitude: i32,
    /// Longitude × 10^7
    pub longitude: i32,
}

impl Point {
    /// Create a point from encoded coordinates
    ///
    /// # Examples
    ///
    /// ```
    /// use routeguide_domain::Point;
    ///
    /// let p = Point::new(407838351, -746143763);
    /// assert!((p.latitude_degrees() - 40.7838351).abs() < 1e-9);
    /// ```
    pub const fn new(latitude: i32, longitude: i32) -> Self {
        Self { latitude, longitude }
    }

    /// Latitude in degrees
    pub fn latitude_degrees(&self) -> f64 {
        f64::from(self.latitude) / COORD_FACTOR
    }

    /// Longitude in degrees
    pub fn longitude_degrees(&self) -> f64 {
        f64::from(self.longitude) / COORD_FACTOR
    }

    /// Key under which notes for this point are grouped
    pub fn key(&self) -> PointKey {
        PointKey(self.latitude, self.longitude)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.7}, {:.7})", self.latitude_degrees(), self.longitude_degrees())
    }
}

/// Location-derived key for per-location note history
///
/// The key is the coordinate pair itself, so distinct points never alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointKey(i32, i32);

impl From<Point> for PointKey {
    fn from(point: Point) -> Self {
        point.key()
    }
}
