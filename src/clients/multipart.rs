//! Multipart form bodies.
//!
//! A [`FormPayload`] is an ordered list of named parts. It is kept in this
//! crate's own representation until the moment of sending, because
//! `reqwest::multipart::Form` can be consumed only once.

use std::fmt;

/// A binary file attached to a request.
///
/// # Example
///
/// ```rust
/// use nepdora_api::clients::FileAttachment;
///
/// let logo = FileAttachment::new("logo.png", vec![0x89, 0x50, 0x4e, 0x47])
///     .with_mime("image/png");
/// assert_eq!(logo.file_name(), "logo.png");
/// assert_eq!(logo.len(), 4);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct FileAttachment {
    file_name: String,
    mime: Option<String>,
    bytes: Vec<u8>,
}

impl FileAttachment {
    /// Creates an attachment from a file name and its contents.
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: None,
            bytes: bytes.into(),
        }
    }

    /// Sets the MIME type sent with the part.
    #[must_use]
    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    /// Returns the file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the MIME type, if set.
    #[must_use]
    pub fn mime(&self) -> Option<&str> {
        self.mime.as_deref()
    }

    /// Returns the file contents.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the size of the file in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the file is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for FileAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileAttachment")
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// The value of a single form part.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormValue {
    /// A text field.
    Text(String),
    /// A binary file.
    File(FileAttachment),
}

/// An ordered multipart form.
///
/// The same name may appear more than once; repeated keys are how the
/// backend receives lists such as tag ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormPayload {
    parts: Vec<(String, FormValue)>,
}

impl FormPayload {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a text part.
    pub fn text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parts.push((name.into(), FormValue::Text(value.into())));
    }

    /// Appends a file part.
    pub fn file(&mut self, name: impl Into<String>, file: FileAttachment) {
        self.parts.push((name.into(), FormValue::File(file)));
    }

    /// Returns the parts in insertion order.
    #[must_use]
    pub fn parts(&self) -> &[(String, FormValue)] {
        &self.parts
    }

    /// Returns every text value stored under `name`.
    #[must_use]
    pub fn text_values(&self, name: &str) -> Vec<&str> {
        self.parts
            .iter()
            .filter(|(key, _)| key == name)
            .filter_map(|(_, value)| match value {
                FormValue::Text(text) => Some(text.as_str()),
                FormValue::File(_) => None,
            })
            .collect()
    }

    /// Returns the first file stored under `name`.
    #[must_use]
    pub fn file_part(&self, name: &str) -> Option<&FileAttachment> {
        self.parts.iter().find_map(|(key, value)| match value {
            FormValue::File(file) if key == name => Some(file),
            _ => None,
        })
    }

    /// Returns the number of parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns `true` if the form has no parts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Converts the payload into a `reqwest` form.
    ///
    /// # Errors
    ///
    /// Returns an error if an attachment carries an unparseable MIME type.
    pub fn to_reqwest_form(&self) -> Result<reqwest::multipart::Form, reqwest::Error> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in &self.parts {
            form = match value {
                FormValue::Text(text) => form.text(name.clone(), text.clone()),
                FormValue::File(file) => {
                    let mut part = reqwest::multipart::Part::bytes(file.bytes.clone())
                        .file_name(file.file_name.clone());
                    if let Some(mime) = &file.mime {
                        part = part.mime_str(mime)?;
                    }
                    form.part(name.clone(), part)
                }
            };
        }
        Ok(form)
    }
}
