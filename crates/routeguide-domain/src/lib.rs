//! RouteGuide Domain Layer
//!
//! Value types and trait interfaces for the location-data service.
//! This crate has no external dependencies and performs no I/O.
//!
//! ## Key Concepts
//!
//! - **Point**: fixed-point (degrees × 10^7) latitude/longitude pair
//! - **Landmark**: a named location; an empty name means "nothing known here"
//! - **Region**: axis-aligned rectangle built from two arbitrary corners
//! - **Note**: a message pinned to a location
//! - **RouteSummary**: aggregate statistics for a traversed route
//!
//! Infrastructure (indexes, shared note storage, transport) lives in other crates
//! and meets this one through the [`traits::LandmarkLookup`] capability.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod geo;
pub mod landmark;
pub mod note;
pub mod point;
pub mod region;
pub mod summary;
pub mod traits;

// Re-exports for convenience
pub use geo::{distance_meters, EARTH_RADIUS_METERS};
pub use landmark::Landmark;
pub use note::Note;
pub use point::{Point, PointKey, COORD_FACTOR};
pub use region::Region;
pub use summary::{RouteAccumulator, RouteSummary};
pub use traits::LandmarkLookup;
