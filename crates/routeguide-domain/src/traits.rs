//! Trait definitions for external interactions
//!
//! Handlers depend on these capabilities rather than on concrete
//! infrastructure, so a spatial index can replace the linear scan.

use crate::{Landmark, Point, Region};

/// Read-only landmark lookup
///
/// Implemented by the infrastructure layer (routeguide-store). Implementations
/// are immutable after construction and safe to share between tasks without
/// further locking.
pub trait LandmarkLookup: Send + Sync {
    /// Find the landmark stored at exactly `point`
    ///
    /// Never fails: returns [`Landmark::unnamed`] when nothing matches.
    fn lookup(&self, point: Point) -> Landmark;

    /// Named landmarks inside `region`, in stored order
    fn scan<'a>(&'a self, region: &Region) -> Box<dyn Iterator<Item = &'a Landmark> + Send + 'a>;

    /// Number of stored landmarks
    fn len(&self) -> usize;

    /// Whether the lookup holds no landmarks
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
