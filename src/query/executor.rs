//! Fetch execution and background dispatch.
//!
//! [`execute`] performs one request synchronously. [`QueryDispatcher`] runs
//! it on a worker thread and posts the [`FetchCompletion`] back to the UI
//! event loop, so the interaction thread never waits on the network.

use crate::api::{EndpointPath, EsgTransport, Payload, QueryMode, QueryParams};
use crate::error::{EsgError, FetchErrorKind, Result};
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// A fetch issued by a view, tagged so its completion can be matched back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// View generation at the time of issue
    pub generation: u64,
    /// Per-view issue order, starting at 1
    pub seq: u64,
    pub params: QueryParams,
}

/// The resolved outcome of a [`FetchRequest`].
#[derive(Debug)]
pub struct FetchCompletion {
    pub generation: u64,
    pub seq: u64,
    pub path: EndpointPath,
    pub params: QueryParams,
    pub outcome: Result<Payload>,
    pub elapsed: Duration,
}

impl FetchCompletion {
    #[must_use]
    pub const fn mode(&self) -> QueryMode {
        self.params.mode()
    }
}

/// Issue one GET for `params` and decode the body for its mode.
pub fn execute(transport: &dyn EsgTransport, params: &QueryParams) -> Result<Payload> {
    let path = params.endpoint();
    let body = transport.get(&path)?;
    Payload::decode(params.mode(), &body)
}

/// Run a request to completion on the current thread.
pub fn run(transport: &dyn EsgTransport, request: FetchRequest) -> FetchCompletion {
    let path = request.params.endpoint();
    let started = Instant::now();
    let outcome = execute(transport, &request.params);
    let elapsed = started.elapsed();

    match &outcome {
        Ok(_) => tracing::debug!("fetch #{} {} ok in {:?}", request.seq, path, elapsed),
        Err(e) => tracing::debug!("fetch #{} {} failed in {:?}: {}", request.seq, path, elapsed, e),
    }

    FetchCompletion {
        generation: request.generation,
        seq: request.seq,
        path,
        params: request.params,
        outcome,
        elapsed,
    }
}

/// User-facing message for a failed fetch.
///
/// Transport failures get the fixed "Failed to fetch" text; bodies that
/// arrive but cannot be used get a malformed-data message.
#[must_use]
pub fn failure_message(mode: QueryMode, err: &EsgError) -> String {
    let subject = mode.subject();
    match err.fetch_kind() {
        Some(FetchErrorKind::InvalidJson(_) | FetchErrorKind::UnexpectedShape(_)) => {
            format!("Received malformed {subject} data")
        }
        _ => format!("Failed to fetch {subject} data"),
    }
}

/// Runs fetches on worker threads and reports completions over a channel.
///
/// `E` is the event type of the receiving loop; completions are wrapped with
/// `E::from`.
pub struct QueryDispatcher<E> {
    transport: Arc<dyn EsgTransport>,
    tx: mpsc::Sender<E>,
}

impl<E> Clone for QueryDispatcher<E> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            tx: self.tx.clone(),
        }
    }
}

impl<E> QueryDispatcher<E>
where
    E: From<FetchCompletion> + Send + 'static,
{
    pub fn new(transport: Arc<dyn EsgTransport>, tx: mpsc::Sender<E>) -> Self {
        Self { transport, tx }
    }

    /// Start `request` in the background. Exactly one request is sent; there
    /// is no retry and no cancellation.
    pub fn dispatch(&self, request: FetchRequest) {
        let transport = Arc::clone(&self.transport);
        let tx = self.tx.clone();
        tracing::debug!(
            "dispatching fetch #{} {} via {}",
            request.seq,
            request.params.endpoint(),
            transport.name()
        );

        thread::spawn(move || {
            let completion = run(transport.as_ref(), request);
            if tx.send(E::from(completion)).is_err() {
                tracing::debug!("event loop closed before fetch completed");
            }
        });
    }
}
