//! API Response Envelope
//!
//! Every HTTP response, successful or not, is wrapped in the same envelope:
//!
//! ```json
//! { "success": true, "status_code": 200, "message": "Success", "data": { ... } }
//! ```
//!
//! Error responses carry no `data`.

use serde::{Deserialize, Serialize};

/// JSON envelope returned by every API endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub status_code: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful response with a payload
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            status_code: 200,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Failed response without a payload
    pub fn error(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            status_code,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope_serialization() {
        let response = ApiResponse::ok("Success", vec![1, 2, 3]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["status_code"], 200);
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_error_envelope_omits_data() {
        let response: ApiResponse<()> = ApiResponse::error(404, "target user not found");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["status_code"], 404);
        assert!(json.get("data").is_none());
    }
}
