// ABOUTME: Decides whether a failed backend call means the backend process is not reachable
// ABOUTME: Typed check over BackendError plus a lenient check over loosely shaped error values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Backend-offline classification
//!
//! Only a refused connection counts as "offline". Timeouts, malformed
//! responses, and HTTP error statuses are application-level failures and are
//! reported as such.

use crate::constants::error_markers::{CONNECTION_REFUSED_CODE, FETCH_FAILED};
use crate::external::BackendError;
use serde_json::{json, Value};

/// Whether a typed backend failure means nothing is listening
#[must_use]
pub const fn is_backend_offline_error(error: &BackendError) -> bool {
    matches!(error, BackendError::ConnectionRefused { .. })
}

/// Whether a loosely shaped error value means nothing is listening
///
/// Accepts any JSON value. Returns true when `code` equals `ECONNREFUSED`, or
/// when `message` is a string mentioning `fetch failed` or `ECONNREFUSED`.
#[must_use]
pub fn is_backend_offline_value(error: &Value) -> bool {
    let Some(object) = error.as_object() else {
        return false;
    };

    if object.get("code").and_then(Value::as_str) == Some(CONNECTION_REFUSED_CODE) {
        return true;
    }

    object
        .get("message")
        .and_then(Value::as_str)
        .is_some_and(|m| m.contains(FETCH_FAILED) || m.contains(CONNECTION_REFUSED_CODE))
}

/// Project a typed error into the `{code?, message}` shape
#[must_use]
pub fn to_error_value(error: &BackendError) -> Value {
    match error {
        BackendError::ConnectionRefused { .. } => json!({
            "code": CONNECTION_REFUSED_CODE,
            "message": format!("{FETCH_FAILED}: {error}"),
        }),
        BackendError::Timeout { .. } => json!({
            "code": "ETIMEDOUT",
            "message": error.to_string(),
        }),
        BackendError::Request { .. } | BackendError::InvalidUrl { .. } | BackendError::Build(_) => {
            json!({ "message": error.to_string() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_econnrefused_is_offline() {
        assert!(is_backend_offline_value(&json!({"code": "ECONNREFUSED"})));
        assert!(is_backend_offline_value(
            &json!({"code": "ECONNREFUSED", "message": 42})
        ));
    }

    #[test]
    fn test_message_markers_are_offline() {
        assert!(is_backend_offline_value(&json!({"message": "TypeError: fetch failed"})));
        assert!(is_backend_offline_value(
            &json!({"message": "connect ECONNREFUSED 127.0.0.1:8000"})
        ));
    }

    #[test]
    fn test_everything_else_is_not_offline() {
        for value in [
            Value::Null,
            json!("ECONNREFUSED"),
            json!(7),
            json!(["fetch failed"]),
            json!({}),
            json!({"code": "ETIMEDOUT", "message": "timeout"}),
            json!({"code": 111}),
            json!({"message": {"nested": "fetch failed"}}),
            json!({"status": 500, "message": "Internal Server Error"}),
            json!({"message": "Unexpected token < in JSON at position 0"}),
        ] {
            assert!(!is_backend_offline_value(&value), "misclassified {value}");
        }
    }

    #[test]
    fn test_typed_and_value_forms_agree() {
        let timeout = BackendError::Timeout {
            url: "http://127.0.0.1:8000/rag-chatkit".into(),
        };
        assert!(!is_backend_offline_error(&timeout));
        assert!(!is_backend_offline_value(&to_error_value(&timeout)));

        let bad_url = BackendError::InvalidUrl {
            url: "::".into(),
            reason: "relative URL without a base".into(),
        };
        assert!(!is_backend_offline_error(&bad_url));
        assert!(!is_backend_offline_value(&to_error_value(&bad_url)));
    }
}
