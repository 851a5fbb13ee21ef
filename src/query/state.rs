//! Per-view query state machine.

use super::executor::{failure_message, FetchCompletion, FetchRequest};
use crate::api::{CompanyScores, EndpointPath, Payload, QueryParams, RowSet};
use chrono::{DateTime, Local};
use std::time::Duration;

/// Result state of one view.
///
/// Exactly one variant is active. `Success` and `Failure` never coexist, and
/// starting a fetch clears both.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult<T> {
    Idle,
    Pending,
    Success(T),
    Failure(String),
}

impl<T> Default for QueryResult<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> QueryResult<T> {
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub const fn success(&self) -> Option<&T> {
        match self {
            Self::Success(payload) => Some(payload),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message),
            _ => None,
        }
    }
}

/// Payload types a view can hold.
pub trait FromPayload: Sized {
    /// Extract the view's payload, or `None` if the payload is for another mode.
    fn from_payload(payload: Payload) -> Option<Self>;
}

impl FromPayload for CompanyScores {
    fn from_payload(payload: Payload) -> Option<Self> {
        match payload {
            Payload::Scores(scores) => Some(scores),
            Payload::Rows(_) => None,
        }
    }
}

impl FromPayload for RowSet {
    fn from_payload(payload: Payload) -> Option<Self> {
        match payload {
            Payload::Rows(rows) => Some(rows),
            Payload::Scores(_) => None,
        }
    }
}

/// How completions of overlapping fetches are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StalePolicy {
    /// Apply every completion; the last one to resolve wins.
    #[default]
    LastResolved,
    /// Drop completions that are not for the most recently issued fetch.
    LatestIssued,
}

impl StalePolicy {
    #[must_use]
    pub const fn from_discard_flag(discard_stale: bool) -> Self {
        if discard_stale {
            Self::LatestIssued
        } else {
            Self::LastResolved
        }
    }
}

/// What happened to a completion handed to [`ViewQuery::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// The view was reset after the fetch was issued
    DroppedReset,
    /// A newer fetch was issued and the policy discards older ones
    DroppedStale,
}

/// Timing of the completion currently on display.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchStats {
    pub path: EndpointPath,
    pub elapsed: Duration,
    pub completed_at: DateTime<Local>,
}

/// Query state for one view: result, request bookkeeping, and the
/// parameters the shown result was fetched for.
#[derive(Debug, Clone)]
pub struct ViewQuery<T> {
    result: QueryResult<T>,
    shown_params: Option<QueryParams>,
    stats: Option<FetchStats>,
    generation: u64,
    issued: u64,
    in_flight: usize,
    policy: StalePolicy,
}

impl<T> Default for ViewQuery<T> {
    fn default() -> Self {
        Self::new(StalePolicy::default())
    }
}

impl<T> ViewQuery<T> {
    #[must_use]
    pub const fn new(policy: StalePolicy) -> Self {
        Self {
            result: QueryResult::Idle,
            shown_params: None,
            stats: None,
            generation: 0,
            issued: 0,
            in_flight: 0,
            policy,
        }
    }

    #[must_use]
    pub const fn result(&self) -> &QueryResult<T> {
        &self.result
    }

    /// Parameters the current success or failure belongs to.
    #[must_use]
    pub const fn shown_params(&self) -> Option<&QueryParams> {
        self.shown_params.as_ref()
    }

    #[must_use]
    pub const fn stats(&self) -> Option<&FetchStats> {
        self.stats.as_ref()
    }

    /// Fetches issued in this generation that have not completed yet.
    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Start a fetch: clear the previous result and issue a request ticket.
    pub fn begin(&mut self, params: QueryParams) -> FetchRequest {
        self.issued += 1;
        self.in_flight += 1;
        self.result = QueryResult::Pending;
        self.shown_params = None;
        self.stats = None;
        FetchRequest {
            generation: self.generation,
            seq: self.issued,
            params,
        }
    }

    /// Return to `Idle` and disown every fetch issued so far.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.in_flight = 0;
        self.result = QueryResult::Idle;
        self.shown_params = None;
        self.stats = None;
    }
}

impl<T: FromPayload> ViewQuery<T> {
    /// Fold a completion into the state.
    pub fn apply(&mut self, completion: FetchCompletion) -> ApplyOutcome {
        if completion.generation != self.generation {
            tracing::debug!(
                "dropping completion for {} from reset view (generation {} != {})",
                completion.path,
                completion.generation,
                self.generation
            );
            return ApplyOutcome::DroppedReset;
        }

        self.in_flight = self.in_flight.saturating_sub(1);

        if self.policy == StalePolicy::LatestIssued && completion.seq != self.issued {
            tracing::debug!(
                "dropping stale completion #{} for {} (latest issued #{})",
                completion.seq,
                completion.path,
                self.issued
            );
            return ApplyOutcome::DroppedStale;
        }

        if completion.seq != self.issued {
            tracing::debug!(
                "completion #{} for {} resolved after #{} was issued",
                completion.seq,
                completion.path,
                self.issued
            );
        }

        let mode = completion.params.mode();
        self.result = match completion.outcome {
            Ok(payload) => match T::from_payload(payload) {
                Some(payload) => QueryResult::Success(payload),
                None => {
                    tracing::warn!("payload kind does not match {:?} view", mode);
                    QueryResult::Failure(format!("Received malformed {} data", mode.subject()))
                }
            },
            Err(err) => {
                tracing::debug!("fetch {} failed: {}", completion.path, err);
                QueryResult::Failure(failure_message(mode, &err))
            }
        };
        self.shown_params = Some(completion.params);
        self.stats = Some(FetchStats {
            path: completion.path,
            elapsed: completion.elapsed,
            completed_at: Local::now(),
        });
        ApplyOutcome::Applied
    }
}
