//! Custom assertion macros and utilities
//!
//! Provides assertion macros with more descriptive failure messages for
//! HTTP responses.

/// Assert a response status, printing the body on mismatch
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {{
        let response = &$response;
        assert_eq!(
            response.status_code(),
            $status,
            "Unexpected status, body: {}",
            response.text()
        );
    }};
}

/// Assert that a JSON error body carries the given message and status
#[macro_export]
macro_rules! assert_error_body {
    ($response:expr, $status:expr, $message:expr) => {{
        let response = &$response;
        $crate::assert_status!(response, $status);
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], $message);
        assert_eq!(body["status"], $status.as_u16());
    }};
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
