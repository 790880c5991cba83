#![warn(missing_docs)]

//! RouteGuide gRPC Service Layer
//!
//! Exposes the location-data service over gRPC:
//! - GetFeature: unary landmark lookup
//! - ListFeatures: server-streamed region scan
//! - RecordRoute: client-streamed route summary
//! - RouteChat: bidirectional per-location note exchange
//!
//! The call semantics live in [`handlers`] and know nothing about tonic;
//! [`service`] adapts them to the generated server trait.

// Include generated protobuf code
pub mod proto {
    //! Generated protobuf types and service definitions
    tonic::include_proto!("routeguide");
}

pub mod conversions;
pub mod handlers;
pub mod server;
pub mod service;

pub use handlers::RouteGuideHandlers;
pub use server::{serve_with_listener, start_server, ServerConfig, ServerError};
pub use service::RouteGuideService;
