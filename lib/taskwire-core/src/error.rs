//! The error taxonomy for a network exchange.

use derive_more::{Display, Error};

/// Classified failure of a single network exchange.
///
/// The set is closed: every failed dispatch maps to exactly one of these
/// kinds, and callers can match exhaustively without a catch-all arm.
/// Diagnostic detail (transport error text, raw response body, numeric
/// status) is logged at the point of detection and deliberately kept out
/// of the error payload; only [`NetworkError::ClientMessage`] carries a
/// human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum NetworkError {
    /// The descriptor could not produce a wire-level request.
    #[display("invalid request")]
    InvalidRequest,

    /// Failure below the HTTP layer: DNS, connection, TLS, timeout.
    #[display("network transport failure")]
    Transport,

    /// A response arrived without a usable HTTP status code.
    #[display("no status code in response")]
    StatusCodeUnavailable,

    /// HTTP 401.
    #[display("unauthorized")]
    Unauthorized,

    /// HTTP 404.
    #[display("element not found")]
    NotFound,

    /// HTTP 500 and above.
    #[display("server unavailable")]
    ServerUnavailable,

    /// HTTP 400 or any other non-2xx status without a dedicated kind;
    /// carries the reason phrase for that status.
    #[display("server message: {_0}")]
    ClientMessage(#[error(not(source))] String),

    /// A parser was supplied and decoding failed, or a successful status
    /// arrived with no payload at all.
    #[display("parse error")]
    Parse,
}

/// Result type alias using [`NetworkError`].
pub type Result<T> = std::result::Result<T, NetworkError>;

impl NetworkError {
    /// Classify an HTTP status code, `None` meaning success (2xx).
    ///
    /// The priority order is fixed: 400, then 401, then 404, then >= 500,
    /// then the generic non-2xx fallback. The generic branch would match
    /// 400 as well, so the dedicated arms must come first.
    #[must_use]
    pub fn for_status(status: u16) -> Option<Self> {
        match status {
            200..300 => None,
            400 => Some(Self::ClientMessage(reason_phrase(status))),
            401 => Some(Self::Unauthorized),
            404 => Some(Self::NotFound),
            500.. => Some(Self::ServerUnavailable),
            _ => Some(Self::ClientMessage(reason_phrase(status))),
        }
    }

    /// Returns `true` if this is a transport-level failure.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport)
    }

    /// Returns `true` if this failure was derived from an HTTP status code.
    #[must_use]
    pub const fn is_status_derived(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized | Self::NotFound | Self::ServerUnavailable | Self::ClientMessage(_)
        )
    }
}

/// Standard reason phrase for a status code, e.g. "Bad Request" for 400.
fn reason_phrase(status: u16) -> String {
    http::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .map_or_else(|| format!("unexpected status {status}"), str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(NetworkError::InvalidRequest.to_string(), "invalid request");
        assert_eq!(
            NetworkError::Transport.to_string(),
            "network transport failure"
        );
        assert_eq!(NetworkError::NotFound.to_string(), "element not found");
        assert_eq!(
            NetworkError::ClientMessage("Bad Request".to_string()).to_string(),
            "server message: Bad Request"
        );
    }

    #[test]
    fn success_range_is_not_classified() {
        assert_eq!(NetworkError::for_status(200), None);
        assert_eq!(NetworkError::for_status(201), None);
        assert_eq!(NetworkError::for_status(204), None);
        assert_eq!(NetworkError::for_status(299), None);
    }

    #[test]
    fn dedicated_status_kinds() {
        assert_eq!(
            NetworkError::for_status(401),
            Some(NetworkError::Unauthorized)
        );
        assert_eq!(NetworkError::for_status(404), Some(NetworkError::NotFound));
        assert_eq!(
            NetworkError::for_status(500),
            Some(NetworkError::ServerUnavailable)
        );
        assert_eq!(
            NetworkError::for_status(503),
            Some(NetworkError::ServerUnavailable)
        );
    }

    #[test]
    fn bad_request_carries_reason_phrase() {
        assert_eq!(
            NetworkError::for_status(400),
            Some(NetworkError::ClientMessage("Bad Request".to_string()))
        );
    }

    #[test]
    fn other_client_codes_fall_back_to_message() {
        assert_eq!(
            NetworkError::for_status(403),
            Some(NetworkError::ClientMessage("Forbidden".to_string()))
        );
        assert_eq!(
            NetworkError::for_status(429),
            Some(NetworkError::ClientMessage("Too Many Requests".to_string()))
        );
        // 3xx is outside [200, 300) and has no dedicated kind either
        assert_eq!(
            NetworkError::for_status(301),
            Some(NetworkError::ClientMessage("Moved Permanently".to_string()))
        );
    }

    #[test]
    fn unassigned_code_still_classifies() {
        assert_eq!(
            // 499 has no canonical reason phrase in the http crate
            NetworkError::for_status(499),
            Some(NetworkError::ClientMessage("unexpected status 499".to_string()))
        );
    }

    #[test]
    fn predicates() {
        assert!(NetworkError::Transport.is_transport());
        assert!(!NetworkError::Parse.is_transport());
        assert!(NetworkError::Unauthorized.is_status_derived());
        assert!(NetworkError::ClientMessage(String::new()).is_status_derived());
        assert!(!NetworkError::InvalidRequest.is_status_derived());
    }
}
