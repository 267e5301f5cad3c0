//! Prelude module for convenient imports.
//!
//! ```ignore
//! use taskwire_core::prelude::*;
//! ```

pub use crate::{
    DecodeError, DispatchOutcome, DispatchResult, JsonParser, Method, NetworkError, RawOnly,
    RawResponse, Request, RequestBuilder, RequestConfig, RequestDescriptor, RequestSender,
    ResponseHead, ResponseParser, Result, Transport, TransportError, from_json, to_json,
};
