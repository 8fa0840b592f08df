//! HTTP DTOs - the uniform response envelope.
//!
//! Every response the API produces, success or failure, is one of these.
//! The invariant mirrors the API contract: `data` and `official_email` are
//! present only when `is_success` is true, `error` only when it is false.

use serde::Serialize;
use serde_json::Value;

/// Uniform response envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseEnvelope {
    pub is_success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub official_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResponseEnvelope {
    /// Success envelope carrying a computed result.
    pub fn success(official_email: impl Into<String>, data: Value) -> Self {
        Self {
            is_success: true,
            official_email: Some(official_email.into()),
            data: Some(data),
            error: None,
        }
    }

    /// Success envelope without a result (health check).
    pub fn ok(official_email: impl Into<String>) -> Self {
        Self {
            is_success: true,
            official_email: Some(official_email.into()),
            data: None,
            error: None,
        }
    }

    /// Failure envelope carrying an error message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            official_email: None,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_has_data_and_email_only() {
        let envelope = ResponseEnvelope::success("me@example.com", json!([1, 2, 3]));
        let wire = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            wire,
            json!({
                "is_success": true,
                "official_email": "me@example.com",
                "data": [1, 2, 3]
            })
        );
    }

    #[test]
    fn failure_envelope_has_error_only() {
        let envelope = ResponseEnvelope::failure("Request body is empty");
        let wire = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            wire,
            json!({
                "is_success": false,
                "error": "Request body is empty"
            })
        );
    }

    #[test]
    fn health_envelope_has_no_data_field() {
        let envelope = ResponseEnvelope::ok("me@example.com");
        let wire = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            wire,
            json!({
                "is_success": true,
                "official_email": "me@example.com"
            })
        );
    }
}
