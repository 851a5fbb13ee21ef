//! Transport abstraction for the ESG API.
//!
//! The query layer only needs "GET this path and hand me the body". Putting
//! that behind a trait lets the views run against the real HTTP client or
//! against an in-memory double in tests.

use super::endpoint::EndpointPath;
use crate::error::Result;

/// Trait for anything that can answer ESG API requests.
///
/// Implementations must return a
/// [`FetchErrorKind::Status`](crate::error::FetchErrorKind::Status) error for
/// non-success responses without reading the body, and the raw body bytes
/// otherwise. Decoding is the caller's job.
pub trait EsgTransport: Send + Sync {
    /// Issue one GET request for `path`.
    fn get(&self, path: &EndpointPath) -> Result<Vec<u8>>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

impl<T: EsgTransport + ?Sized> EsgTransport for std::sync::Arc<T> {
    fn get(&self, path: &EndpointPath) -> Result<Vec<u8>> {
        (**self).get(path)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
