//! Request description capability.

use bytes::Bytes;

use crate::Request;

/// A value that can produce a wire-level HTTP request, or signal that
/// it cannot.
///
/// Concrete descriptors (the task-list API endpoints, say) live with the
/// caller; the dispatcher only asks whether a wire request can be
/// rendered. Returning `None` is an expected outcome for malformed
/// input and terminates the dispatch with
/// [`crate::NetworkError::InvalidRequest`] before any network I/O.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use taskwire_core::{Method, Request, RequestDescriptor};
///
/// struct TaskList {
///     base_url: String,
/// }
///
/// impl RequestDescriptor for TaskList {
///     fn wire_request(&self) -> Option<Request<Bytes>> {
///         let url = format!("{}/list", self.base_url).parse().ok()?;
///         Some(Request::builder(Method::Get, url).build())
///     }
/// }
/// ```
pub trait RequestDescriptor: Send + Sync {
    /// Render the wire-level request, or `None` when this descriptor
    /// cannot be turned into one.
    fn wire_request(&self) -> Option<Request<Bytes>>;
}
