//! Generic request/response dispatch layer for the taskwire sync stack.
//!
//! A [`RequestSender`] pairs an abstract [`RequestDescriptor`] with an
//! optional [`ResponseParser`] and performs exactly one asynchronous
//! network exchange, yielding a decoded model, the raw payload with its
//! response metadata, or a classified [`NetworkError`].
//!
//! # Example
//!
//! ```ignore
//! use taskwire::prelude::*;
//!
//! #[derive(Debug, Deserialize)]
//! struct Task {
//!     id: String,
//!     text: String,
//! }
//!
//! let sender = RequestSender::new(HyperTransport::new());
//! let parser = JsonParser::<Task>::new();
//! let config = RequestConfig::parsed(&descriptor, &parser);
//!
//! match sender.send(config).await? {
//!     DispatchOutcome::Decoded(task) => println!("{task:?}"),
//!     DispatchOutcome::Raw(bytes, head) => println!("{} bytes, status {}", bytes.len(), head.status()),
//! }
//! ```

mod config;
pub mod prelude;
mod transport;

pub use config::{TransportConfig, TransportConfigBuilder};
pub use transport::HyperTransport;

// Re-export core types
pub use taskwire_core::{
    DecodeError, DispatchOutcome, DispatchResult, JsonParser, Method, NetworkError, RawOnly,
    RawResponse, Request, RequestBuilder, RequestConfig, RequestDescriptor, RequestSender,
    ResponseHead, ResponseParser, Result, Transport, TransportError, from_json, to_json,
};

// Re-export http types for status codes and headers
pub use taskwire_core::{StatusCode, header};
