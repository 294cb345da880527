//! HTTP response types for the Nepdora API client.
//!
//! This module provides the [`HttpResponse`] type, which also acts as the
//! shared response-decoding helper: the body is parsed if and only if one is
//! present and JSON-typed.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::clients::errors::ResponseDecodeError;

/// An HTTP response from a tenant backend.
///
/// # Example
///
/// ```rust
/// use nepdora_api::clients::HttpResponse;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("content-type".to_string(), vec!["application/json".to_string()]);
///
/// let response = HttpResponse::new(200, headers, br#"{"id": 1}"#.to_vec());
/// assert!(response.is_ok());
/// assert_eq!(response.body.as_ref().unwrap()["id"], 1);
///
/// let empty = HttpResponse::new(204, HashMap::new(), Vec::new());
/// assert!(empty.body.is_none());
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers with lower-cased names (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed JSON body, if one was present and JSON-typed.
    pub body: Option<Value>,
    /// The raw response bytes.
    pub raw: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the body when it is JSON.
    ///
    /// A body counts as JSON when the `Content-Type` mentions `json`, or
    /// when no content type was sent and the bytes parse as JSON.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, raw: Vec<u8>) -> Self {
        let body = Self::parse_body(&headers, &raw);
        Self {
            code,
            headers,
            body,
            raw,
        }
    }

    fn parse_body(headers: &HashMap<String, Vec<String>>, raw: &[u8]) -> Option<Value> {
        if raw.iter().all(u8::is_ascii_whitespace) {
            return None;
        }

        let content_type = headers
            .get("content-type")
            .and_then(|values| values.first())
            .map(|value| value.to_ascii_lowercase());

        match content_type {
            Some(ct) if ct.contains("json") => serde_json::from_slice(raw).ok(),
            Some(_) => None,
            None => serde_json::from_slice(raw).ok(),
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Content-Type` header value, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the body as (lossy) UTF-8 text.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.raw).into_owned()
    }

    /// Deserializes the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseDecodeError`] if there is no body, the body is not
    /// JSON, or it does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ResponseDecodeError> {
        match &self.body {
            Some(value) => Ok(serde_json::from_value(value.clone())?),
            None if self.raw.iter().all(u8::is_ascii_whitespace) => {
                Err(ResponseDecodeError::EmptyBody { code: self.code })
            }
            None => match self.content_type() {
                Some(ct) if !ct.to_ascii_lowercase().contains("json") => {
                    Err(ResponseDecodeError::NotJson {
                        content_type: ct.to_string(),
                    })
                }
                _ => Err(serde_json::from_slice::<Value>(&self.raw)
                    .err()
                    .map_or(ResponseDecodeError::EmptyBody { code: self.code }, Into::into)),
            },
        }
    }

    /// Deserializes the JSON body if there is one.
    ///
    /// Returns `Ok(None)` for empty or non-JSON bodies.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseDecodeError::Malformed`] if a JSON body does not match `T`.
    pub fn decode_optional<T: DeserializeOwned>(&self) -> Result<Option<T>, ResponseDecodeError> {
        self.body
            .as_ref()
            .map(|value| serde_json::from_value(value.clone()))
            .transpose()
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn json_headers() -> HashMap<String, Vec<String>> {
        let mut headers = HashMap::new();
        headers.insert(
            "content-type".to_string(),
            vec!["application/json; charset=utf-8".to_string()],
        );
        headers
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: u64,
    }

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in [200, 201, 204, 299] {
            assert!(HttpResponse::new(code, HashMap::new(), Vec::new()).is_ok());
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [301, 400, 404, 500] {
            assert!(!HttpResponse::new(code, HashMap::new(), Vec::new()).is_ok());
        }
    }

    #[test]
    fn test_json_body_is_parsed() {
        let response = HttpResponse::new(200, json_headers(), br#"{"id": 7}"#.to_vec());
        assert_eq!(response.decode::<Item>().unwrap(), Item { id: 7 });
    }

    #[test]
    fn test_empty_body_is_not_parsed() {
        let response = HttpResponse::new(204, json_headers(), Vec::new());
        assert!(response.body.is_none());
        assert!(matches!(
            response.decode::<Item>(),
            Err(ResponseDecodeError::EmptyBody { code: 204 })
        ));
        assert!(response.decode_optional::<Item>().unwrap().is_none());
    }

    #[test]
    fn test_non_json_content_type_is_not_parsed() {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), vec!["text/html".to_string()]);
        let response = HttpResponse::new(200, headers, br#"{"id": 1}"#.to_vec());

        assert!(response.body.is_none());
        assert!(matches!(
            response.decode::<Item>(),
            Err(ResponseDecodeError::NotJson { .. })
        ));
    }

    #[test]
    fn test_missing_content_type_falls_back_to_sniffing() {
        let response = HttpResponse::new(200, HashMap::new(), br#"{"id": 3}"#.to_vec());
        assert_eq!(response.decode::<Item>().unwrap(), Item { id: 3 });
    }

    #[test]
    fn test_invalid_json_with_json_content_type_is_malformed() {
        let response = HttpResponse::new(200, json_headers(), b"{not json".to_vec());
        assert!(response.body.is_none());
        assert!(matches!(
            response.decode::<Item>(),
            Err(ResponseDecodeError::Malformed(_))
        ));
    }

    #[test]
    fn test_shape_mismatch_is_malformed() {
        let response = HttpResponse::new(200, json_headers(), br#"{"name": "x"}"#.to_vec());
        assert!(matches!(
            response.decode::<Item>(),
            Err(ResponseDecodeError::Malformed(_))
        ));
    }

    #[test]
    fn test_request_id_extraction() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["abc-123".to_string()]);
        let response = HttpResponse::new(200, headers, Vec::new());
        assert_eq!(response.request_id(), Some("abc-123"));
        assert_eq!(response.header("X-Request-Id"), Some("abc-123"));
    }

    #[test]
    fn test_text_returns_raw_body() {
        let response = HttpResponse::new(200, HashMap::new(), b"id,name\n".to_vec());
        assert_eq!(response.text(), "id,name\n");
    }
}
