//! Query execution and per-view result state.
//!
//! A view owns a [`ViewQuery`]. Triggering a fetch calls
//! [`ViewQuery::begin`], which moves the view to `Pending` and hands back a
//! [`FetchRequest`]; the request runs through [`execute`] (directly or on a
//! [`QueryDispatcher`] worker) and the resulting [`FetchCompletion`] is folded
//! back in with [`ViewQuery::apply`].

mod executor;
mod state;

pub use executor::{execute, failure_message, run, FetchCompletion, FetchRequest, QueryDispatcher};
pub use state::{
    ApplyOutcome, FetchStats, FromPayload, QueryResult, StalePolicy, ViewQuery,
};
