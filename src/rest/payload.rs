//! Request payload encoding.
//!
//! Create and update inputs implement [`ResourcePayload`]. A payload with no
//! file attachments is sent as JSON; one carrying a file is sent as
//! multipart form data built by [`FormEncoder`].
//!
//! Multipart field rules, unless a payload overrides them per field:
//!
//! | JSON value | Encoding | Form parts |
//! |---|---|---|
//! | `null` | skipped | none |
//! | string | [`FieldEncoding::PassThrough`] | `name=value` (unchanged) |
//! | bool / number | [`FieldEncoding::Stringify`] | `flag=true`, `price=10.5` |
//! | array | [`FieldEncoding::RepeatedKey`] | `tags=1`, `tags=2` |
//! | object | [`FieldEncoding::Json`] | `meta={"a":1}` |
//!
//! # Example
//!
//! ```rust
//! use nepdora_api::clients::{FileAttachment, RequestBody};
//! use nepdora_api::rest::{encode_payload, ResourcePayload};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct ClientInput {
//!     name: String,
//!     #[serde(skip)]
//!     logo: Option<FileAttachment>,
//! }
//!
//! impl ResourcePayload for ClientInput {
//!     fn attachments(&self) -> Vec<(&'static str, &FileAttachment)> {
//!         self.logo.iter().map(|f| ("logo", f)).collect()
//!     }
//! }
//!
//! let input = ClientInput {
//!     name: "Acme".to_string(),
//!     logo: Some(FileAttachment::new("logo.png", vec![1, 2, 3])),
//! };
//!
//! let body = encode_payload(&input).unwrap();
//! let form = body.as_form().unwrap();
//! assert_eq!(form.text_values("name"), vec!["Acme"]);
//! assert!(form.file_part("logo").is_some());
//! ```

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::clients::{FileAttachment, FormPayload, RequestBody};

/// Error returned when a payload or query cannot be encoded.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// Serde failed to serialize the value.
    #[error("Failed to serialize request data: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Multipart bodies and query strings need a struct or map at the top level.
    #[error("Request data must serialize to a JSON object")]
    NotAnObject,
}

/// How a single field is written into a multipart form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldEncoding {
    /// Strings are sent unchanged; other scalars fall back to `Stringify`.
    PassThrough,
    /// The value's string form (`true`, `10.5`).
    Stringify,
    /// One part per array element, all under the same name.
    RepeatedKey,
    /// The value serialized as JSON text.
    Json,
}

impl FieldEncoding {
    /// The encoding used when a payload declares no rule for a field.
    #[must_use]
    pub const fn default_for(value: &Value) -> Self {
        match value {
            Value::Array(_) => Self::RepeatedKey,
            Value::Object(_) => Self::Json,
            Value::Bool(_) | Value::Number(_) => Self::Stringify,
            Value::Null | Value::String(_) => Self::PassThrough,
        }
    }
}

/// A create or update input.
///
/// File attachments are exposed through [`attachments`](Self::attachments)
/// and excluded from serialization with `#[serde(skip)]`.
pub trait ResourcePayload: Serialize {
    /// Files to send as binary parts. An empty list means a JSON body.
    fn attachments(&self) -> Vec<(&'static str, &FileAttachment)> {
        Vec::new()
    }

    /// Per-field overrides of the default multipart encoding.
    fn field_rules(&self) -> &'static [(&'static str, FieldEncoding)] {
        &[]
    }
}

impl ResourcePayload for Value {}

impl ResourcePayload for Map<String, Value> {}

/// Builds a [`FormPayload`] from a JSON object and a rule table.
#[derive(Clone, Copy, Debug, Default)]
pub struct FormEncoder {
    rules: &'static [(&'static str, FieldEncoding)],
}

impl FormEncoder {
    /// Creates an encoder with field rule overrides.
    #[must_use]
    pub const fn new(rules: &'static [(&'static str, FieldEncoding)]) -> Self {
        Self { rules }
    }

    /// Returns the encoding for `field` given its value.
    #[must_use]
    pub fn encoding_for(&self, field: &str, value: &Value) -> FieldEncoding {
        self.rules
            .iter()
            .find(|(name, _)| *name == field)
            .map_or_else(|| FieldEncoding::default_for(value), |(_, rule)| *rule)
    }

    /// Appends the text parts for every field of `fields`.
    pub fn encode_fields(&self, fields: &Map<String, Value>, form: &mut FormPayload) {
        for (name, value) in fields {
            if value.is_null() {
                continue;
            }
            match self.encoding_for(name, value) {
                FieldEncoding::RepeatedKey => match value {
                    Value::Array(items) => {
                        for item in items.iter().filter(|item| !item.is_null()) {
                            form.text(name.clone(), scalar_text(item));
                        }
                    }
                    other => form.text(name.clone(), scalar_text(other)),
                },
                FieldEncoding::Json => form.text(name.clone(), value.to_string()),
                FieldEncoding::PassThrough | FieldEncoding::Stringify => {
                    form.text(name.clone(), scalar_text(value));
                }
            }
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Encodes a payload as JSON, or as multipart when it carries files.
///
/// # Errors
///
/// Returns [`PayloadError`] if the payload fails to serialize, or if a
/// multipart payload does not serialize to an object.
pub fn encode_payload<P: ResourcePayload + ?Sized>(payload: &P) -> Result<RequestBody, PayloadError> {
    let value = serde_json::to_value(payload)?;
    let attachments = payload.attachments();

    if attachments.is_empty() {
        return Ok(RequestBody::Json(value));
    }

    let fields = match value {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        _ => return Err(PayloadError::NotAnObject),
    };

    let mut form = FormPayload::new();
    FormEncoder::new(payload.field_rules()).encode_fields(&fields, &mut form);
    for (name, file) in attachments {
        form.file(name, file.clone());
    }
    Ok(RequestBody::Multipart(form))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct PortfolioInput {
        title: String,
        is_featured: bool,
        order: u32,
        tags: Vec<u64>,
        summary: Option<String>,
        meta: Value,
        #[serde(skip)]
        thumbnail: Option<FileAttachment>,
    }

    impl ResourcePayload for PortfolioInput {
        fn attachments(&self) -> Vec<(&'static str, &FileAttachment)> {
            self.thumbnail.iter().map(|f| ("thumbnail_image", f)).collect()
        }
    }

    fn input(with_file: bool) -> PortfolioInput {
        PortfolioInput {
            title: "  Kitchen remodel".to_string(),
            is_featured: false,
            order: 3,
            tags: vec![1, 2],
            summary: None,
            meta: json!({"client": "Acme"}),
            thumbnail: with_file.then(|| FileAttachment::new("a.jpg", vec![9, 9])),
        }
    }

    #[test]
    fn test_payload_without_files_is_json() {
        let body = encode_payload(&input(false)).unwrap();
        let json = body.as_json().unwrap();
        assert_eq!(json["title"], "  Kitchen remodel");
        assert!(json.get("thumbnail").is_none());
        assert!(body.as_form().is_none());
    }

    #[test]
    fn test_payload_with_file_is_multipart() {
        let body = encode_payload(&input(true)).unwrap();
        let form = body.as_form().unwrap();

        assert_eq!(form.text_values("title"), vec!["  Kitchen remodel"]);
        assert_eq!(form.text_values("is_featured"), vec!["false"]);
        assert_eq!(form.text_values("order"), vec!["3"]);
        assert_eq!(form.text_values("tags"), vec!["1", "2"]);
        assert!(form.text_values("summary").is_empty());
        assert_eq!(form.text_values("meta"), vec![r#"{"client":"Acme"}"#]);
        assert_eq!(form.file_part("thumbnail_image").unwrap().bytes(), &[9, 9]);
    }

    #[test]
    fn test_field_rules_override_defaults() {
        const RULES: &[(&str, FieldEncoding)] = &[("tags", FieldEncoding::Json)];
        let mut form = FormPayload::new();
        let fields = json!({"tags": [1, 2], "name": "x"});
        FormEncoder::new(RULES).encode_fields(fields.as_object().unwrap(), &mut form);

        assert_eq!(form.text_values("tags"), vec!["[1,2]"]);
        assert_eq!(form.text_values("name"), vec!["x"]);
    }

    #[test]
    fn test_value_payload_is_json() {
        let body = encode_payload(&json!({"status": "confirmed"})).unwrap();
        assert_eq!(body.as_json().unwrap(), &json!({"status": "confirmed"}));
    }
}
