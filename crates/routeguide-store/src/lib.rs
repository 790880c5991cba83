//! RouteGuide Storage Layer
//!
//! In-memory state shared by all calls:
//!
//! - [`LandmarkIndex`]: read-only landmark set, loaded once at startup
//! - [`NoteLog`]: append-only per-location note history shared by chat sessions
//! - [`dataset`]: the JSON dataset loader feeding the index
//!
//! # Examples
//!
//! ```
//! use routeguide_domain::{LandmarkLookup, Point};
//! use routeguide_store::{dataset, LandmarkIndex};
//!
//! let json = r#"[{"location": {"latitude": 1, "longitude": 2}, "name": "Somewhere"}]"#;
//! let index = LandmarkIndex::new(dataset::parse_landmarks(json).unwrap());
//! assert_eq!(index.lookup(Point::new(1, 2)).name, "Somewhere");
//! ```

#![warn(missing_docs)]

pub mod dataset;
pub mod error;
pub mod landmark_index;
pub mod note_log;

pub use error::StoreError;
pub use landmark_index::LandmarkIndex;
pub use note_log::NoteLog;
