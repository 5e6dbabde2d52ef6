//! Assertion helpers for API responses

use pretty_assertions::assert_eq;

use super::TestResponse;

/// Assert that a response is the JSON error body for `status` and `message`
pub fn assert_error(response: &TestResponse, status: u16, message: &str) {
    assert_eq!(response.status.as_u16(), status, "body: {}", response.body);
    assert_eq!(
        response.body,
        serde_json::json!({ "error": message, "status": status })
    );
}

/// Assert that a response is an error with `status`, whatever the message
pub fn assert_error_status(response: &TestResponse, status: u16) {
    assert_eq!(response.status.as_u16(), status, "body: {}", response.body);
    assert_eq!(response.body["status"], status);
    assert!(response.body["error"].is_string());
}
