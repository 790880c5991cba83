//! Call semantics for the four RouteGuide operations
//!
//! Handlers are transport-agnostic: inbound streams are any [`Stream`] of
//! `Result<T, E>` and outbound streams are bounded [`mpsc`] channels. A closed
//! outbound channel means the caller went away, and handlers stop producing
//! as soon as they notice.

use routeguide_domain::{Landmark, LandmarkLookup, Note, Point, Region, RouteAccumulator, RouteSummary};
use routeguide_store::{LandmarkIndex, NoteLog};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_stream::{Stream, StreamExt};
use tracing::debug;

/// Shared state and entry points for RouteGuide calls
///
/// Cloning is cheap and every clone shares the same landmark index and
/// note log.
pub struct RouteGuideHandlers<L = LandmarkIndex> {
    landmarks: Arc<L>,
    notes: Arc<NoteLog>,
}

impl<L> Clone for RouteGuideHandlers<L> {
    fn clone(&self) -> Self {
        Self {
            landmarks: Arc::clone(&self.landmarks),
            notes: Arc::clone(&self.notes),
        }
    }
}

impl<L: LandmarkLookup> RouteGuideHandlers<L> {
    /// Create handlers over existing shared state
    pub fn new(landmarks: Arc<L>, notes: Arc<NoteLog>) -> Self {
        Self { landmarks, notes }
    }

    /// Create handlers with a fresh, empty note log
    pub fn with_landmarks(landmarks: L) -> Self {
        Self::new(Arc::new(landmarks), Arc::new(NoteLog::new()))
    }

    /// Landmark lookup backing these handlers
    pub fn landmarks(&self) -> &L {
        &self.landmarks
    }

    /// Note log shared by chat sessions
    pub fn notes(&self) -> &NoteLog {
        &self.notes
    }

    /// Unary lookup: the landmark at `point`, or the unnamed sentinel
    pub fn get_feature(&self, point: Point) -> Landmark {
        self.landmarks.lookup(point)
    }

    /// Stream every named landmark inside `region` into `outbound`
    ///
    /// Returns how many landmarks were delivered. Stops early if the
    /// receiver is dropped.
    pub async fn list_features(&self, region: Region, outbound: mpsc::Sender<Landmark>) -> usize {
        let mut sent = 0;
        for landmark in self.landmarks.scan(&region) {
            if outbound.send(landmark.clone()).await.is_err() {
                debug!(sent, "ListFeatures receiver dropped");
                break;
            }
            sent += 1;
        }
        sent
    }

    /// Consume a route in arrival order and summarize it at end of stream
    ///
    /// # Errors
    /// Returns the first error yielded by `points`; the call is abandoned.
    pub async fn record_route<S, E>(&self, mut points: S) -> Result<RouteSummary, E>
    where
        S: Stream<Item = Result<Point, E>> + Unpin,
    {
        let start = Instant::now();
        let mut route = RouteAccumulator::new();

        while let Some(point) = points.next().await {
            let point = point?;
            let is_feature = self.landmarks.lookup(point).is_named();
            route.record(point, is_feature);
        }

        let summary = route.finish(start.elapsed());
        debug!(?summary, "RecordRoute finished");
        Ok(summary)
    }

    /// Run one chat session
    ///
    /// For each inbound note, the notes previously left at its location are
    /// sent to `outbound` in insertion order and the note is recorded. The
    /// history read and the append are one atomic step per location, so a
    /// session never sees its own note echoed back.
    ///
    /// # Errors
    /// Returns the first error yielded by `inbound`. Notes recorded before the
    /// error stay in the log.
    pub async fn route_chat<S, E>(&self, mut inbound: S, outbound: mpsc::Sender<Note>) -> Result<(), E>
    where
        S: Stream<Item = Result<Note, E>> + Unpin,
    {
        while let Some(note) = inbound.next().await {
            let note = note?;
            if outbound.is_closed() {
                break;
            }
            for prior in self.notes.record(note) {
                if outbound.send(prior).await.is_err() {
                    debug!("RouteChat receiver dropped");
                    return Ok(());
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn handlers() -> RouteGuideHandlers {
        RouteGuideHandlers::with_landmarks(LandmarkIndex::new(vec![
            Landmark::new("Llama Park", Point::new(407838351, -746143763)),
            Landmark::unnamed(Point::new(405000000, -745000000)),
            Landmark::new("Kingston", Point::new(419999544, -740371136)),
            Landmark::new("Whippany", Point::new(408122808, -743999179)),
        ]))
    }

    fn ok<T: Unpin>(items: Vec<T>) -> impl Stream<Item = Result<T, Infallible>> + Unpin {
        tokio_stream::iter(items.into_iter().map(Ok))
    }

    async fn collect_region(handlers: &RouteGuideHandlers, a: Point, b: Point) -> Vec<Landmark> {
        let (tx, mut rx) = mpsc::channel(8);
        handlers.list_features(Region::new(a, b), tx).await;
        let mut out = Vec::new();
        while let Some(landmark) = rx.recv().await {
            out.push(landmark);
        }
        out
    }

    #[test]
    fn test_get_feature() {
        let handlers = handlers();
        assert_eq!(handlers.get_feature(Point::new(407838351, -746143763)).name, "Llama Park");
        assert_eq!(handlers.get_feature(Point::new(0, 0)).name, "");
    }

    #[tokio::test]
    async fn test_list_features_scenario() {
        let handlers = handlers();
        let lo = Point::new(400000000, -750000000);
        let hi = Point::new(410000000, -740000000);

        let found = collect_region(&handlers, lo, hi).await;
        let names: Vec<&str> = found.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Llama Park", "Whippany"]);

        // Swapped corners give the same result
        assert_eq!(collect_region(&handlers, hi, lo).await, found);
    }

    #[tokio::test]
    async fn test_list_features_empty_region() {
        let handlers = handlers();
        assert!(collect_region(&handlers, Point::new(0, 0), Point::new(1, 1)).await.is_empty());
    }

    #[tokio::test]
    async fn test_list_features_stops_when_receiver_dropped() {
        let handlers = handlers();
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let region = Region::new(Point::new(-900000000, -1800000000), Point::new(900000000, 1800000000));
        assert_eq!(handlers.list_features(region, tx).await, 0);
    }

    #[tokio::test]
    async fn test_record_route_empty() {
        let summary = handlers().record_route(ok(Vec::<Point>::new())).await.unwrap();
        assert_eq!(summary.point_count, 0);
        assert_eq!(summary.feature_count, 0);
        assert_eq!(summary.distance_meters, 0);
        assert_eq!(summary.elapsed_seconds, 0);
    }

    #[tokio::test]
    async fn test_record_route_same_point_twice() {
        let p = Point::new(407838351, -746143763);
        let summary = handlers().record_route(ok(vec![p, p])).await.unwrap();
        assert_eq!(summary.point_count, 2);
        assert_eq!(summary.feature_count, 2);
        assert_eq!(summary.distance_meters, 0);
    }

    #[tokio::test]
    async fn test_record_route_counts_only_named_features() {
        let route = vec![
            Point::new(407838351, -746143763),
            Point::new(405000000, -745000000),
            Point::new(1, 1),
        ];
        let summary = handlers().record_route(ok(route)).await.unwrap();
        assert_eq!(summary.point_count, 3);
        assert_eq!(summary.feature_count, 1);
        assert!(summary.distance_meters > 0);
    }

    #[tokio::test]
    async fn test_record_route_propagates_inbound_error() {
        let points = tokio_stream::iter(vec![Ok(Point::new(1, 1)), Err("disconnected")]);
        let result = handlers().record_route(points).await;
        assert_eq!(result, Err("disconnected"));
    }

    #[tokio::test]
    async fn test_route_chat_replays_prior_notes_only() {
        let handlers = handlers();
        let here = Point::new(1, 1);
        let there = Point::new(2, 2);
        let (tx, mut rx) = mpsc::channel(16);

        let inbound = ok(vec![
            Note::new(here, "first"),
            Note::new(there, "elsewhere"),
            Note::new(here, "second"),
            Note::new(here, "third"),
        ]);
        handlers.route_chat(inbound, tx).await.unwrap();

        let mut received = Vec::new();
        while let Some(note) = rx.recv().await {
            received.push(note.message);
        }
        // "second" sees [first]; "third" sees [first, second]
        assert_eq!(received, vec!["first", "first", "second"]);
        assert_eq!(handlers.notes().history(here).len(), 3);
    }

    #[tokio::test]
    async fn test_route_chat_sessions_share_log() {
        let handlers = handlers();
        let here = Point::new(3, 3);

        let (tx1, mut rx1) = mpsc::channel(4);
        handlers.route_chat(ok(vec![Note::new(here, "m1")]), tx1).await.unwrap();
        assert!(rx1.recv().await.is_none());

        let (tx2, mut rx2) = mpsc::channel(4);
        handlers.route_chat(ok(vec![Note::new(here, "m2")]), tx2).await.unwrap();
        assert_eq!(rx2.recv().await.map(|n| n.message), Some("m1".to_string()));
        assert!(rx2.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_route_chat_keeps_notes_after_abort() {
        let handlers = handlers();
        let here = Point::new(4, 4);
        handlers.notes().record(Note::new(here, "seed"));

        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        handlers.route_chat(ok(vec![Note::new(here, "late")]), tx).await.unwrap();

        // The caller was gone before the note was processed
        assert_eq!(handlers.notes().history(here).len(), 1);
    }
}
