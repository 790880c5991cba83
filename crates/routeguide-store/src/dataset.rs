//! JSON dataset loader
//!
//! The dataset is an array of records shaped like
//! `{"location": {"latitude": 407838351, "longitude": -746143763}, "name": "..."}`.
//! Records without a name are kept as unnamed landmarks.

use routeguide_domain::{Landmark, Point};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

use crate::StoreError;

#[derive(Debug, Deserialize)]
struct LandmarkRecord {
    location: LocationRecord,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct LocationRecord {
    latitude: i32,
    longitude: i32,
}

impl From<LandmarkRecord> for Landmark {
    fn from(record: LandmarkRecord) -> Self {
        Landmark::new(
            record.name,
            Point::new(record.location.latitude, record.location.longitude),
        )
    }
}

/// Parse landmarks from a JSON document, preserving record order
pub fn parse_landmarks(json: &str) -> Result<Vec<Landmark>, StoreError> {
    let records: Vec<LandmarkRecord> = serde_json::from_str(json)?;
    Ok(records.into_iter().map(Landmark::from).collect())
}

/// Load landmarks from a JSON file
///
/// # Errors
/// Returns [`StoreError::Read`] if the file cannot be read and
/// [`StoreError::Parse`] if its contents are malformed.
pub fn load_landmarks<P: AsRef<Path>>(path: P) -> Result<Vec<Landmark>, StoreError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let landmarks = parse_landmarks(&contents)?;
    info!(path = %path.display(), count = landmarks.len(), "Loaded landmark dataset");
    Ok(landmarks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_order() {
        let json = r#"[
            {"location": {"latitude": 3, "longitude": 4}, "name": "B"},
            {"location": {"latitude": 1, "longitude": 2}, "name": "A"}
        ]"#;
        let landmarks = parse_landmarks(json).unwrap();
        assert_eq!(landmarks.len(), 2);
        assert_eq!(landmarks[0].name, "B");
        assert_eq!(landmarks[1].location, Point::new(1, 2));
    }

    #[test]
    fn test_missing_name_is_unnamed() {
        let json = r#"[{"location": {"latitude": 400273442, "longitude": -741220915}}]"#;
        let landmarks = parse_landmarks(json).unwrap();
        assert!(!landmarks[0].is_named());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_landmarks("{not json"), Err(StoreError::Parse(_))));
        assert!(matches!(
            parse_landmarks(r#"[{"name": "no location"}]"#),
            Err(StoreError::Parse(_))
        ));
    }

    #[test]
    fn test_out_of_range_coordinate_rejected() {
        let json = r#"[{"location": {"latitude": 9999999999, "longitude": 0}, "name": "x"}]"#;
        assert!(parse_landmarks(json).is_err());
    }
}
