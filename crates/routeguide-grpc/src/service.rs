//! gRPC service implementation
//!
//! Implements the RouteGuide trait generated from proto definitions by
//! delegating to [`RouteGuideHandlers`].

use routeguide_domain::LandmarkLookup;
use std::pin::Pin;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::{Stream, StreamExt};
use tonic::{Request, Response, Status, Streaming};
use tracing::{debug, warn};

use crate::conversions::{
    feature_to_proto, note_from_proto, note_to_proto, point_from_proto, region_from_proto,
    summary_to_proto,
};
use crate::handlers::RouteGuideHandlers;
use crate::proto;
use crate::proto::route_guide_server::RouteGuide;

/// Default capacity of outbound stream channels
pub const DEFAULT_STREAM_BUFFER: usize = 32;

type ResponseStream<T> = Pin<Box<dyn Stream<Item = Result<T, Status>> + Send + 'static>>;

/// Implementation of the RouteGuide service
pub struct RouteGuideService<L> {
    handlers: RouteGuideHandlers<L>,
    stream_buffer: usize,
}

impl<L: LandmarkLookup> RouteGuideService<L> {
    /// Create a new service instance
    pub fn new(handlers: RouteGuideHandlers<L>) -> Self {
        Self {
            handlers,
            stream_buffer: DEFAULT_STREAM_BUFFER,
        }
    }

    /// Set the capacity of outbound stream channels (minimum 1)
    pub fn with_stream_buffer(mut self, capacity: usize) -> Self {
        self.stream_buffer = capacity.max(1);
        self
    }
}

#[tonic::async_trait]
impl<L> RouteGuide for RouteGuideService<L>
where
    L: LandmarkLookup + 'static,
{
    async fn get_feature(
        &self,
        request: Request<proto::Point>,
    ) -> Result<Response<proto::Feature>, Status> {
        let point = point_from_proto(request.into_inner());
        let landmark = self.handlers.get_feature(point);
        debug!(%point, name = %landmark.name, "GetFeature");
        Ok(Response::new(feature_to_proto(landmark)))
    }

    type ListFeaturesStream = ResponseStream<proto::Feature>;

    async fn list_features(
        &self,
        request: Request<proto::Rectangle>,
    ) -> Result<Response<Self::ListFeaturesStream>, Status> {
        let region = region_from_proto(request.into_inner());
        debug!(?region, "ListFeatures");

        let (tx, rx) = mpsc::channel(self.stream_buffer);
        let handlers = self.handlers.clone();
        tokio::spawn(async move {
            let sent = handlers.list_features(region, tx).await;
            debug!(sent, "ListFeatures finished");
        });

        let stream = ReceiverStream::new(rx).map(|landmark| Ok(feature_to_proto(landmark)));
        Ok(Response::new(Box::pin(stream)))
    }

    async fn record_route(
        &self,
        request: Request<Streaming<proto::Point>>,
    ) -> Result<Response<proto::RouteSummary>, Status> {
        let points = request
            .into_inner()
            .map(|point| point.map(point_from_proto));

        let summary = self
            .handlers
            .record_route(points)
            .await
            .inspect_err(|status| warn!(%status, "RecordRoute inbound stream failed"))?;

        Ok(Response::new(summary_to_proto(summary)))
    }

    type RouteChatStream = ResponseStream<proto::RouteNote>;

    async fn route_chat(
        &self,
        request: Request<Streaming<proto::RouteNote>>,
    ) -> Result<Response<Self::RouteChatStream>, Status> {
        let inbound = request
            .into_inner()
            .map(|note| note.map(note_from_proto));

        let (tx, rx) = mpsc::channel(self.stream_buffer);
        let handlers = self.handlers.clone();
        tokio::spawn(async move {
            if let Err(status) = handlers.route_chat(inbound, tx).await {
                warn!(%status, "RouteChat inbound stream failed");
            }
        });

        let stream = ReceiverStream::new(rx).map(|note| Ok(note_to_proto(note)));
        Ok(Response::new(Box::pin(stream)))
    }
}
