use serde::{Deserialize, Serialize};

/// Error body returned by the backend.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// The main error message
    pub message: String,
    /// Optional additional details about the error
    #[serde(default)]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new error response with message and details.
    pub fn with_details(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{}: {}", self.message, details),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_display() {
        let error_no_details = ErrorResponse::new("Rental not found");
        assert_eq!(format!("{error_no_details}"), "Rental not found");

        let error_with_details = ErrorResponse::with_details("Invalid payment", "amount < 0");
        assert_eq!(
            format!("{error_with_details}"),
            "Invalid payment: amount < 0"
        );
    }

    #[test]
    fn test_error_response_without_details_field() {
        let error: ErrorResponse = serde_json::from_str(r#"{"message":"Forbidden"}"#).unwrap();
        assert_eq!(error, ErrorResponse::new("Forbidden"));
    }
}
