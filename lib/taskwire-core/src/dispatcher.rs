//! Request dispatch orchestration.
//!
//! [`RequestSender`] turns a [`RequestConfig`] into exactly one network
//! exchange and exactly one terminal [`DispatchResult`]: a decoded
//! model, the raw payload with its metadata, or a classified
//! [`NetworkError`]. No state spans calls; concurrent dispatches are
//! fully independent.

use bytes::Bytes;
use tracing::{debug, error, warn};

use crate::{
    NetworkError, RawOnly, RequestDescriptor, ResponseHead, ResponseParser, Transport,
};

/// One dispatch worth of configuration: a request descriptor paired
/// with an optional response parser.
///
/// A present parser is type-bound to exactly the model the caller
/// expects back; an absent parser means "hand me the raw bytes, do not
/// attempt to decode". Each exchange gets its own configuration.
pub struct RequestConfig<'a, P = RawOnly> {
    request: &'a dyn RequestDescriptor,
    parser: Option<&'a P>,
}

impl<'a, P> RequestConfig<'a, P>
where
    P: ResponseParser,
{
    /// Configuration that decodes the payload with `parser`.
    #[must_use]
    pub const fn parsed(request: &'a dyn RequestDescriptor, parser: &'a P) -> Self {
        Self {
            request,
            parser: Some(parser),
        }
    }
}

impl<'a> RequestConfig<'a, RawOnly> {
    /// Configuration that skips decoding and delivers the raw payload.
    #[must_use]
    pub const fn raw(request: &'a dyn RequestDescriptor) -> Self {
        Self {
            request,
            parser: None,
        }
    }
}

/// Successful terminal outcome of one exchange.
///
/// The failure arm is the `Err` side of [`DispatchResult`]; both
/// success arms imply a 2xx status and a non-empty payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome<M> {
    /// A parser was supplied and decoding succeeded.
    Decoded(M),
    /// No parser was supplied; the payload and response metadata are
    /// handed back untouched.
    Raw(Bytes, ResponseHead),
}

impl<M> DispatchOutcome<M> {
    /// The decoded model, if this outcome carries one.
    #[must_use]
    pub fn decoded(self) -> Option<M> {
        match self {
            Self::Decoded(model) => Some(model),
            Self::Raw(..) => None,
        }
    }

    /// The raw payload and metadata, if this outcome carries them.
    #[must_use]
    pub fn raw(self) -> Option<(Bytes, ResponseHead)> {
        match self {
            Self::Raw(body, head) => Some((body, head)),
            Self::Decoded(_) => None,
        }
    }
}

/// Terminal result of one exchange: model, raw payload, or classified error.
pub type DispatchResult<M> = Result<DispatchOutcome<M>, NetworkError>;

/// The dispatcher: one network exchange per call, one outcome per call.
///
/// The transport is an explicitly owned, injected dependency so tests
/// can substitute a fake.
#[derive(Debug, Clone)]
pub struct RequestSender<T> {
    transport: T,
}

impl<T> RequestSender<T>
where
    T: Transport,
{
    /// Create a dispatcher over the given transport.
    #[must_use]
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Perform exactly one exchange for `config`.
    ///
    /// The call suspends once, at the network boundary, and always
    /// reaches a terminal outcome. Dropping the returned future before
    /// completion abandons the exchange; there is no other cancellation
    /// handle.
    ///
    /// # Errors
    ///
    /// Every failure is classified into one [`NetworkError`] kind:
    /// - [`NetworkError::InvalidRequest`] when the descriptor cannot
    ///   render a wire request (no network I/O is performed),
    /// - [`NetworkError::Transport`] for failures below the HTTP layer,
    /// - [`NetworkError::StatusCodeUnavailable`] when no usable status
    ///   code arrived,
    /// - the status-derived kinds for non-2xx codes (400 first, then
    ///   401, 404, >= 500, then the generic fallback),
    /// - [`NetworkError::Parse`] when decoding fails or a success
    ///   status carries no payload.
    pub async fn send<P>(&self, config: RequestConfig<'_, P>) -> DispatchResult<P::Model>
    where
        P: ResponseParser,
    {
        let Some(request) = config.request.wire_request() else {
            debug!("descriptor could not render a wire request");
            return Err(NetworkError::InvalidRequest);
        };

        let raw = match self.transport.perform(request).await {
            Ok(raw) => raw,
            Err(err) => {
                error!(error = %err, "transport failure");
                return Err(NetworkError::Transport);
            }
        };

        let (status, headers, body) = raw.into_parts();
        let body = body.filter(|bytes| !bytes.is_empty());

        let Some(status) = status else {
            error!("response carried no usable status code");
            return Err(NetworkError::StatusCodeUnavailable);
        };

        if let Some(err) = NetworkError::for_status(status) {
            if let Some(text) = body.as_deref().map(String::from_utf8_lossy) {
                debug!(body = %text, "response payload");
            }
            warn!(status, error = %err, "request failed with HTTP error");
            return Err(err);
        }

        let Some(body) = body else {
            debug!(status, "success status with no payload");
            return Err(NetworkError::Parse);
        };

        match config.parser {
            Some(parser) => match parser.parse(&body) {
                Ok(model) => Ok(DispatchOutcome::Decoded(model)),
                Err(err) => {
                    debug!(error = %err, body = %String::from_utf8_lossy(&body), "payload decode failed");
                    Err(NetworkError::Parse)
                }
            },
            None => Ok(DispatchOutcome::Raw(
                body,
                ResponseHead::new(status, headers),
            )),
        }
    }
}
