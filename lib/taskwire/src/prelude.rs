//! Prelude module for convenient imports.
//!
//! ```ignore
//! use taskwire::prelude::*;
//! ```

pub use crate::{
    DispatchOutcome, DispatchResult, HyperTransport, JsonParser, Method, NetworkError,
    Request, RequestBuilder, RequestConfig, RequestDescriptor, RequestSender, ResponseHead,
    ResponseParser, Result, StatusCode, Transport, TransportConfig, from_json, to_json,
};
pub use serde::{Deserialize, Serialize};
