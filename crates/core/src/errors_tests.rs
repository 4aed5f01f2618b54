//! Tests for error classification.

#[cfg(test)]
mod tests {
    use crate::errors::{Error, ErrorKind, ErrorResponse, StoreError, ValidationError};

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            Error::not_found_id("There is no company with id = ", 7).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            Error::Validation(ValidationError::MissingField("symbol".to_string())).kind(),
            ErrorKind::BadRequest
        );
        assert_eq!(
            Error::from(StoreError::Unavailable("down".to_string())).kind(),
            ErrorKind::Internal
        );
        assert_eq!(
            Error::Unexpected("boom".to_string()).kind(),
            ErrorKind::Internal
        );
    }

    #[test]
    fn test_not_found_message_appends_id() {
        let err = Error::not_found_id("There is no company with id = ", 7);
        assert_eq!(err.to_string(), "There is no company with id = 7");
    }

    #[test]
    fn test_error_response_body() {
        let err = Error::bad_request("Wrong company name");
        let body = ErrorResponse::new(&err, "uri=/api/company");

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["kind"], "BAD_REQUEST");
        assert_eq!(json["message"], "Wrong company name");
        assert_eq!(json["details"], "uri=/api/company");
        assert!(json.get("timestamp").is_some());
    }
}
