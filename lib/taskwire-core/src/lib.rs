//! Core types and traits for the taskwire request dispatch layer.
//!
//! This crate provides the transport-independent half of taskwire:
//! - [`Method`] - HTTP method enum
//! - [`Request`] and [`RequestBuilder`] - the wire-level request a descriptor renders
//! - [`RawResponse`] and [`ResponseHead`] - what comes back from the transport
//! - [`RequestDescriptor`] - "can this become a wire request" capability
//! - [`ResponseParser`] and [`JsonParser`] - "bytes to model, fallible" capability
//! - [`Transport`] - the injected network execution mechanism
//! - [`RequestSender`] - the dispatcher orchestrating one exchange per call
//! - [`NetworkError`] and [`Result`] - the closed error taxonomy
//! - [`StatusCode`] - HTTP status codes (re-exported from the `http` crate)

mod descriptor;
mod dispatcher;
mod error;
mod json;
mod method;
mod parser;
pub mod prelude;
mod request;
mod response;
mod transport;

pub use descriptor::RequestDescriptor;
pub use dispatcher::{DispatchOutcome, DispatchResult, RequestConfig, RequestSender};
pub use error::{NetworkError, Result};
pub use json::{from_json, to_json};
pub use method::Method;
pub use parser::{DecodeError, JsonParser, RawOnly, ResponseParser};
pub use request::{Request, RequestBuilder};
pub use response::{RawResponse, ResponseHead};
pub use transport::{Transport, TransportError};

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};
