//! Mapping of terminal responses to typed errors.

use scryer_error::{ApiErrorEnvelope, HttpError, HttpErrorKind};

/// Parse a response body as the API's error object.
///
/// Returns `None` when the body is not JSON or lacks the envelope fields.
pub fn parse_error_envelope(body: &str) -> Option<ApiErrorEnvelope> {
    serde_json::from_str(body).ok()
}

/// Map a non-2xx response to an [`HttpError`] for `route`.
///
/// The kind and the envelope status follow the response status. A body that
/// is not an error object is kept verbatim as the details of an envelope with
/// code `unknown`.
///
/// # Examples
///
/// ```
/// use scryer_client::map_error_response;
/// use scryer_error::HttpErrorKind;
///
/// let err = map_error_response(
///     "GET /cards/{id}",
///     404,
///     r#"{"object":"error","status":404,"code":"not_found","details":"No card found"}"#,
/// );
/// assert_eq!(err.kind, HttpErrorKind::NotFound);
/// assert_eq!(err.envelope.to_string(), "404|not_found: No card found");
///
/// let err = map_error_response("GET /sets", 502, "Bad Gateway");
/// assert_eq!(err.kind, HttpErrorKind::RemoteService);
/// assert_eq!(err.envelope.code, "unknown");
/// ```
#[track_caller]
pub fn map_error_response(route: &str, status: u16, body: &str) -> HttpError {
    let mut envelope = parse_error_envelope(body)
        .unwrap_or_else(|| ApiErrorEnvelope::synthesized(status, body));
    envelope.status = status;
    HttpError::with_kind(HttpErrorKind::from_status(status), route, envelope)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_and_other_client_errors() {
        let body = r#"{"status":403,"code":"forbidden","details":"Nope"}"#;
        assert_eq!(
            map_error_response("GET /sets", 403, body).kind,
            HttpErrorKind::Forbidden
        );
        assert_eq!(
            map_error_response("GET /sets", 422, "{}").kind,
            HttpErrorKind::Request
        );
    }

    #[test]
    fn warnings_replace_details_in_rendering() {
        let body = r#"{
            "status": 400,
            "code": "bad_request",
            "type": "ambiguous",
            "details": "All of your terms were ignored.",
            "warnings": ["Invalid expression \"is:foo\"", "Unknown color \"q\""]
        }"#;
        let err = map_error_response("GET /cards/search", 400, body);
        assert_eq!(err.envelope.error_type.as_deref(), Some("ambiguous"));
        assert_eq!(
            err.envelope.to_string(),
            "400|bad_request: Invalid expression \"is:foo\"\n400|bad_request: Unknown color \"q\""
        );
        assert!(err.to_string().contains("GET /cards/search"));
    }

    #[test]
    fn non_json_body_is_synthesized() {
        let err = map_error_response("GET /cards/{id}", 418, "<html>teapot</html>");
        assert_eq!(err.status(), 418);
        assert_eq!(err.envelope.details, "<html>teapot</html>");
        assert_eq!(err.kind, HttpErrorKind::Request);
    }

    #[test]
    fn status_comes_from_the_response() {
        let err = map_error_response(
            "GET /cards/{id}",
            404,
            r#"{"object":"error","code":"not_found","details":"No card"}"#,
        );
        assert_eq!(err.kind, HttpErrorKind::NotFound);
        assert_eq!(err.status(), 404);
        assert_eq!(err.envelope.code, "not_found");
        assert_eq!(err.envelope.details, "No card");
        assert_eq!(err.envelope.to_string(), "404|not_found: No card");
    }
}
