//! Route statistics

use crate::{distance_meters, Point};
use std::time::Duration;

/// Aggregate statistics for one recorded route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteSummary {
    /// Number of points received
    pub point_count: i32,
    /// Number of received points that matched a named landmark
    pub feature_count: i32,
    /// Total distance between consecutive points, truncated to whole meters
    pub distance_meters: i32,
    /// Whole seconds between call start and end of stream
    pub elapsed_seconds: i32,
}

/// Incremental builder for a [`RouteSummary`]
///
/// Points must be recorded in arrival order; the running distance is the sum
/// of legs between consecutive points.
#[derive(Debug, Clone, Default)]
pub struct RouteAccumulator {
    point_count: i32,
    feature_count: i32,
    distance: f64,
    previous: Option<Point>,
}

impl RouteAccumulator {
    /// Start an empty route
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the next point of the route
    pub fn record(&mut self, point: Point, is_feature: bool) {
        self.point_count = self.point_count.saturating_add(1);
        if is_feature {
            self.feature_count = self.feature_count.saturating_add(1);
        }
        if let Some(previous) = self.previous {
            self.distance += distance_meters(previous, point);
        }
        self.previous = Some(point);
    }

    /// Number of points recorded so far
    pub fn point_count(&self) -> i32 {
        self.point_count
    }

    /// Close the route and produce its summary
    pub fn finish(self, elapsed: Duration) -> RouteSummary {
        RouteSummary {
            point_count: self.point_count,
            feature_count: self.feature_count,
            // `as` truncates toward zero and saturates on overflow
            distance_meters: self.distance as i32,
            elapsed_seconds: i32::try_from(elapsed.as_secs()).unwrap_or(i32::MAX),
        }
    }
}
