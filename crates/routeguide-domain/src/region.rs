//! Axis-aligned rectangular regions

use crate::Point;

/// A closed, axis-aligned rectangle
///
/// Built from two opposite corners in any order; the bounds are normalized
/// once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Minimum longitude
    pub left: i32,
    /// Maximum longitude
    pub right: i32,
    /// Minimum latitude
    pub bottom: i32,
    /// Maximum latitude
    pub top: i32,
}

impl Region {
    /// Build a region from two arbitrary opposite corners
    ///
    /// # Examples
    ///
    /// ```
    /// use routeguide_domain::{Point, Region};
    ///
    /// let a = Region::new(Point::new(10, 20), Point::new(0, 0));
    /// let b = Region::new(Point::new(0, 0), Point::new(10, 20));
    /// assert_eq!(a, b);
    /// ```
    pub fn new(corner1: Point, corner2: Point) -> Self {
        Self {
            left: corner1.longitude.min(corner2.longitude),
            right: corner1.longitude.max(corner2.longitude),
            bottom: corner1.latitude.min(corner2.latitude),
            top: corner1.latitude.max(corner2.latitude),
        }
    }

    /// Whether `point` lies inside the rectangle, edges included
    pub fn contains(&self, point: Point) -> bool {
        (self.left..=self.right).contains(&point.longitude)
            && (self.bottom..=self.top).contains(&point.latitude)
    }
}
