//! Type conversions between proto and domain types
//!
//! Proto3 submessages are optional on the wire. An absent point decodes as
//! the default `(0, 0)`, the same value an older client would see from a
//! zero-filled message.

use crate::proto;
use routeguide_domain::{Landmark, Note, Point, Region, RouteSummary};

/// Convert proto Point to domain Point
pub fn point_from_proto(point: proto::Point) -> Point {
    Point::new(point.latitude, point.longitude)
}

/// Convert domain Point to proto Point
pub fn point_to_proto(point: Point) -> proto::Point {
    proto::Point {
        latitude: point.latitude,
        longitude: point.longitude,
    }
}

fn optional_point(point: Option<proto::Point>) -> Point {
    point.map(point_from_proto).unwrap_or_default()
}

/// Convert proto Rectangle to a normalized Region
pub fn region_from_proto(rect: proto::Rectangle) -> Region {
    Region::new(optional_point(rect.lo), optional_point(rect.hi))
}

/// Convert domain Landmark to proto Feature
pub fn feature_to_proto(landmark: Landmark) -> proto::Feature {
    proto::Feature {
        name: landmark.name,
        location: Some(point_to_proto(landmark.location)),
    }
}

/// Convert proto Feature to domain Landmark
pub fn feature_from_proto(feature: proto::Feature) -> Landmark {
    Landmark::new(feature.name, optional_point(feature.location))
}

/// Convert proto RouteNote to domain Note
pub fn note_from_proto(note: proto::RouteNote) -> Note {
    Note {
        location: optional_point(note.location),
        message: note.message,
        attributes: note.attributes.into_iter().collect(),
    }
}

/// Convert domain Note to proto RouteNote
pub fn note_to_proto(note: Note) -> proto::RouteNote {
    proto::RouteNote {
        location: Some(point_to_proto(note.location)),
        message: note.message,
        attributes: note.attributes.into_iter().collect(),
    }
}

/// Convert domain RouteSummary to proto RouteSummary
pub fn summary_to_proto(summary: RouteSummary) -> proto::RouteSummary {
    proto::RouteSummary {
        point_count: summary.point_count,
        feature_count: summary.feature_count,
        distance: summary.distance_meters,
        elapsed_time: summary.elapsed_seconds,
    }
}
