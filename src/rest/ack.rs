//! Acknowledgements for calls that do not return a resource.
//!
//! Delete endpoints answer either with a small JSON body or with
//! `204 No Content`. Both decode into an [`Ack`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::HttpResponse;

/// A success acknowledgement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    /// Whether the backend reported success.
    #[serde(default = "default_success")]
    pub success: bool,
    /// The backend's message, or a generated one.
    #[serde(default)]
    pub message: Option<String>,
}

/// Wire shape of an acknowledgement. Some views answer with `detail`,
/// some with `message`, and a few with both.
#[derive(Deserialize)]
struct AckBody {
    #[serde(default = "default_success")]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    detail: Option<String>,
}

/// The acknowledgement returned by delete operations.
pub type DeleteAck = Ack;

const fn default_success() -> bool {
    true
}

impl Ack {
    /// A successful acknowledgement with `message`.
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    /// Reads an acknowledgement from a 2xx response.
    ///
    /// A JSON object body is parsed; any other body (empty, plain text, a
    /// list) yields a success acknowledgement carrying `fallback`. A parsed
    /// body without a message also gets `fallback`.
    #[must_use]
    pub fn from_response(response: &HttpResponse, fallback: &str) -> Self {
        let parsed = match &response.body {
            Some(body @ Value::Object(_)) => serde_json::from_value::<AckBody>(body.clone())
                .ok()
                .map(|body| Self {
                    success: body.success,
                    message: non_blank(body.message).or_else(|| non_blank(body.detail)),
                }),
            _ => None,
        };

        match parsed {
            Some(mut ack) => {
                if ack.message.as_deref().map_or(true, |m| m.trim().is_empty()) {
                    ack.message = Some(fallback.to_string());
                }
                ack
            }
            None => Self::ok(fallback),
        }
    }
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn response(content_type: Option<&str>, raw: &str) -> HttpResponse {
        let mut headers = HashMap::new();
        if let Some(ct) = content_type {
            headers.insert("content-type".to_string(), vec![ct.to_string()]);
        }
        HttpResponse::new(200, headers, raw.as_bytes().to_vec())
    }

    #[test]
    fn test_json_body_is_parsed() {
        let ack = Ack::from_response(
            &response(Some("application/json"), r#"{"success": false, "message": "Locked"}"#),
            "Video deleted successfully",
        );
        assert!(!ack.success);
        assert_eq!(ack.message.as_deref(), Some("Locked"));
    }

    #[test]
    fn test_detail_key_is_accepted() {
        let ack = Ack::from_response(
            &response(Some("application/json"), r#"{"detail": "Deleted."}"#),
            "fallback",
        );
        assert!(ack.success);
        assert_eq!(ack.message.as_deref(), Some("Deleted."));
    }

    #[test]
    fn test_message_wins_over_detail_when_both_are_sent() {
        let ack = Ack::from_response(
            &response(
                Some("application/json"),
                r#"{"success": true, "message": "Service deleted", "detail": "Deleted."}"#,
            ),
            "fallback",
        );
        assert!(ack.success);
        assert_eq!(ack.message.as_deref(), Some("Service deleted"));

        let ack = Ack::from_response(
            &response(Some("application/json"), r#"{"message": "", "detail": "Deleted."}"#),
            "fallback",
        );
        assert_eq!(ack.message.as_deref(), Some("Deleted."));
    }

    #[test]
    fn test_empty_body_falls_back() {
        let ack = Ack::from_response(&response(None, ""), "Faq deleted successfully");
        assert_eq!(ack, Ack::ok("Faq deleted successfully"));
    }

    #[test]
    fn test_plain_text_body_falls_back() {
        let ack = Ack::from_response(&response(Some("text/html"), "<p>ok</p>"), "done");
        assert_eq!(ack, Ack::ok("done"));
    }
}
