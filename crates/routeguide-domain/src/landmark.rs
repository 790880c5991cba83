//! Named locations

use crate::Point;

/// A named location
///
/// An empty name is the "no known landmark" sentinel. It is a regular value
/// and is returned by lookups that find nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Landmark {
    /// Human-readable name, empty when nothing is known at `location`
    pub name: String,
    /// Where the landmark is
    pub location: Point,
}

impl Landmark {
    /// Create a named landmark
    pub fn new(name: impl Into<String>, location: Point) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }

    /// The sentinel returned when no landmark exists at `location`
    pub fn unnamed(location: Point) -> Self {
        Self {
            name: String::new(),
            location,
        }
    }

    /// Whether this is a real landmark rather than the sentinel
    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unnamed_sentinel() {
        let p = Point::new(1, 2);
        let sentinel = Landmark::unnamed(p);
        assert!(!sentinel.is_named());
        assert_eq!(sentinel.location, p);
    }

    #[test]
    fn test_named() {
        let l = Landmark::new("Patriots Path", Point::new(407838351, -746143763));
        assert!(l.is_named());
    }
}
