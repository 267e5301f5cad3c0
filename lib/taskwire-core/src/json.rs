//! JSON codec helpers.

use bytes::Bytes;

use crate::parser::DecodeError;

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Example
///
/// ```
/// use taskwire_core::to_json;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Task { text: String }
///
/// let task = Task { text: "buy milk".to_string() };
/// let bytes = to_json(&task).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"text":"buy milk"}"#);
/// ```
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<Bytes, serde_json::Error> {
    serde_json::to_vec(value).map(Bytes::from)
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so that a failed decode names the exact
/// field that was at fault (e.g. "items.3.deadline").
///
/// # Errors
///
/// Returns a [`DecodeError`] if JSON deserialization fails.
///
/// # Example
///
/// ```
/// use taskwire_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Task { text: String }
///
/// let bytes = br#"{"text":"buy milk"}"#;
/// let task: Task = from_json(bytes).expect("deserialize");
/// assert_eq!(task, Task { text: "buy milk".to_string() });
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T, DecodeError> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        let path = e.path().to_string();
        if path.is_empty() || path == "." {
            DecodeError::new(e.inner().to_string())
        } else {
            DecodeError::new(format!("at '{path}': {}", e.inner()))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Task {
        id: String,
        text: String,
    }

    #[test]
    fn to_json_serialize() {
        let task = Task {
            id: "1".to_string(),
            text: "buy milk".to_string(),
        };

        let bytes = to_json(&task).expect("serialize");
        assert_eq!(bytes.as_ref(), br#"{"id":"1","text":"buy milk"}"#);
    }

    #[test]
    fn from_json_deserialize() {
        let bytes = br#"{"id":"1","text":"buy milk"}"#;
        let task: Task = from_json(bytes).expect("deserialize");

        assert_eq!(
            task,
            Task {
                id: "1".to_string(),
                text: "buy milk".to_string(),
            }
        );
    }

    #[test]
    fn from_json_syntax_error() {
        let result: Result<Task, DecodeError> = from_json(b"not json");
        assert!(result.is_err());
    }

    #[test]
    fn from_json_missing_field_names_path() {
        #[derive(Debug, serde::Deserialize)]
        struct Detail {
            #[allow(dead_code)]
            deadline: String,
        }

        #[derive(Debug, serde::Deserialize)]
        struct Item {
            #[allow(dead_code)]
            detail: Detail,
        }

        let result: Result<Item, DecodeError> = from_json(br#"{"detail":{}}"#);
        let err = result.expect_err("should fail");
        let msg = err.to_string();
        assert!(msg.contains("detail"), "expected path in error: {msg}");
        assert!(msg.contains("deadline"), "expected field in error: {msg}");
    }
}
