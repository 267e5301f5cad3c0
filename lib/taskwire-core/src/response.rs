//! What comes back from the transport.
//!
//! [`RawResponse`] is the unclassified wire result a [`crate::Transport`]
//! hands to the dispatcher; its status is optional because a response
//! without a usable status code is an observable (and classified)
//! outcome, not a panic. [`ResponseHead`] is the status-line/header
//! metadata delivered alongside a raw payload once classification has
//! succeeded.

use std::collections::HashMap;

use bytes::Bytes;

/// Unclassified transport output: whatever arrived on the wire.
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: Option<u16>,
    headers: HashMap<String, String>,
    body: Option<Bytes>,
}

impl RawResponse {
    /// Creates a raw response.
    ///
    /// `body` is `None` when the exchange produced no payload at all;
    /// transports collapse an empty collected body into `None`.
    #[must_use]
    pub fn new(
        status: Option<u16>,
        headers: HashMap<String, String>,
        body: Option<Bytes>,
    ) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code, if one was usable.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Response payload, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Consume into (status, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (Option<u16>, HashMap<String, String>, Option<Bytes>) {
        (self.status, self.headers, self.body)
    }
}

/// Response metadata (status and headers) delivered with a raw payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHead {
    status: u16,
    headers: HashMap<String, String>,
}

impl ResponseHead {
    /// Creates a response head.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, String>) -> Self {
        Self { status, headers }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_response_accessors() {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        let raw = RawResponse::new(Some(200), headers, Some(Bytes::from("{}")));

        assert_eq!(raw.status(), Some(200));
        assert_eq!(
            raw.headers().get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(raw.body(), Some(&Bytes::from("{}")));
    }

    #[test]
    fn raw_response_without_status() {
        let raw = RawResponse::new(None, HashMap::new(), None);
        assert_eq!(raw.status(), None);
        assert!(raw.body().is_none());
    }

    #[test]
    fn response_head_basics() {
        let mut headers = HashMap::new();
        headers.insert("X-Last-Known-Revision".to_string(), "7".to_string());

        let head = ResponseHead::new(200, headers);
        assert_eq!(head.status(), 200);
        assert_eq!(head.header("X-Last-Known-Revision"), Some("7"));
        assert!(head.is_success());

        let head = ResponseHead::new(503, HashMap::new());
        assert!(!head.is_success());
    }
}
