//! Transport trait.
//!
//! The transport is the injected network execution mechanism. The
//! production implementation lives in the `taskwire` crate; tests
//! substitute fakes. Injection (rather than a shared global session)
//! is what makes the dispatcher's no-I/O-on-invalid-request property
//! checkable.

use std::future::Future;

use bytes::Bytes;
use derive_more::{Display, Error};

use crate::{RawResponse, Request};

/// Failure below the HTTP layer: DNS, connection reset, TLS, timeout.
///
/// The message is diagnostic text for logging; the dispatcher surfaces
/// the failure itself as [`crate::NetworkError::Transport`] without it.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    /// Create a transport error from a diagnostic message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Network execution mechanism performing one HTTP exchange.
///
/// Implementations should be async-first and support connection
/// pooling. Futures must be `Send`; completion may happen on any
/// runtime thread.
pub trait Transport: Send + Sync {
    /// Perform the wire-level exchange and return whatever arrived,
    /// unclassified.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] for any failure below the HTTP
    /// layer. Receiving an HTTP response, whatever its status, is not
    /// a transport error.
    fn perform(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}
