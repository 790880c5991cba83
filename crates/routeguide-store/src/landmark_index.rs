//! Read-only landmark index

use routeguide_domain::{Landmark, LandmarkLookup, Point, Region};

/// Landmark set searched by linear scan
///
/// Immutable after construction. Stored order is the dataset order and is the
/// order in which region scans yield results.
#[derive(Debug, Clone, Default)]
pub struct LandmarkIndex {
    landmarks: Vec<Landmark>,
}

impl LandmarkIndex {
    /// Build an index over `landmarks`
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    /// All stored landmarks, named or not
    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }
}

impl FromIterator<Landmark> for LandmarkIndex {
    fn from_iter<I: IntoIterator<Item = Landmark>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl LandmarkLookup for LandmarkIndex {
    fn lookup(&self, point: Point) -> Landmark {
        // First match wins when the dataset repeats a location
        self.landmarks
            .iter()
            .find(|landmark| landmark.location == point)
            .cloned()
            .unwrap_or_else(|| Landmark::unnamed(point))
    }

    fn scan<'a>(&'a self, region: &Region) -> Box<dyn Iterator<Item = &'a Landmark> + Send + 'a> {
        let region = *region;
        Box::new(
            self.landmarks
                .iter()
                .filter(move |landmark| landmark.is_named() && region.contains(landmark.location)),
        )
    }

    fn len(&self) -> usize {
        self.landmarks.len()
    }
}
