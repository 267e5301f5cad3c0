//! Response parsing capability.
//!
//! A [`ResponseParser`] turns a byte payload into one model value or
//! fails; the dispatcher never sees partial results. The stock
//! [`JsonParser`] covers the JSON payloads the task API speaks, and
//! [`RawOnly`] types configurations that want the payload untouched.

use std::convert::Infallible;
use std::marker::PhantomData;

use bytes::Bytes;
use derive_more::{Display, Error};

/// Failure produced by a [`ResponseParser`].
///
/// Carries diagnostic text for logging; the dispatcher reports the
/// failure itself as [`crate::NetworkError::Parse`] without the text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("decode failure: {message}")]
pub struct DecodeError {
    message: String,
}

impl DecodeError {
    /// Create a decode error from a diagnostic message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Capability to decode a byte payload into a specific model type.
///
/// Decoding must be pure with respect to the input bytes: the same
/// payload always yields the same result, and implementations are never
/// mutated by a dispatch.
pub trait ResponseParser: Send + Sync {
    /// The model type this parser is bound to.
    type Model;

    /// Decode the payload into exactly one model, or fail.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] when the payload does not represent a
    /// valid `Model`.
    fn parse(&self, body: &Bytes) -> Result<Self::Model, DecodeError>;
}

/// JSON parser bound to any deserializable model.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use serde::Deserialize;
/// use taskwire_core::{JsonParser, ResponseParser};
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Task { id: String, text: String }
///
/// let parser = JsonParser::<Task>::new();
/// let body = Bytes::from(r#"{"id":"1","text":"buy milk"}"#);
/// let task = parser.parse(&body).expect("decode");
/// assert_eq!(task.id, "1");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct JsonParser<M> {
    _model: PhantomData<fn() -> M>,
}

impl<M> JsonParser<M> {
    /// Create a JSON parser for the model type `M`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _model: PhantomData,
        }
    }
}

impl<M> Default for JsonParser<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> ResponseParser for JsonParser<M>
where
    M: serde::de::DeserializeOwned + Send + Sync,
{
    type Model = M;

    fn parse(&self, body: &Bytes) -> Result<M, DecodeError> {
        crate::from_json(body)
    }
}

/// Marker parser for configurations that want the raw payload.
///
/// Its model type is [`Infallible`], so the decoded arm of a raw
/// dispatch outcome is uninhabited and `parse` is never invoked.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawOnly;

impl ResponseParser for RawOnly {
    type Model = Infallible;

    fn parse(&self, _body: &Bytes) -> Result<Infallible, DecodeError> {
        Err(DecodeError::new("raw-only configuration has no parser"))
    }
}
