//! Pagination envelope normalization.
//!
//! List endpoints answer in one of three shapes:
//!
//! - a bare JSON array
//! - `{"results": [...], "count": 42, "next": ..., "previous": ...}`
//! - the same envelope nested under `data`
//!
//! [`Page`] flattens all of them into one shape and computes the page
//! metadata the backend leaves out.

use std::ops::Deref;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::ResponseDecodeError;

/// Page size the backend uses when the request does not set one.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// A normalized page of results.
///
/// `total_pages` is `ceil(count / page_size)`, `has_next` is
/// `page < total_pages` and `has_previous` is `page > 1`.
///
/// # Example
///
/// ```rust
/// use nepdora_api::rest::Page;
/// use serde_json::json;
///
/// let body = json!({"count": 45, "next": "?page=3", "previous": "?page=1", "results": [1, 2]});
/// let page: Page<u32> = Page::from_value(&body, Some(2), Some(20)).unwrap();
///
/// assert_eq!(page.total_pages, 3);
/// assert!(page.has_next);
/// assert!(page.has_previous);
/// assert_eq!(page.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page.
    pub results: Vec<T>,
    /// Total number of items across all pages.
    pub count: u64,
    /// Link to the next page, as sent by the backend.
    pub next: Option<String>,
    /// Link to the previous page, as sent by the backend.
    pub previous: Option<String>,
    /// The 1-based page number.
    pub page: u64,
    /// The page size used to compute `total_pages`.
    pub page_size: u64,
    /// Number of pages.
    pub total_pages: u64,
    /// Whether a later page exists.
    pub has_next: bool,
    /// Whether an earlier page exists.
    pub has_previous: bool,
}

impl<T: DeserializeOwned> Page<T> {
    /// Normalizes a list body.
    ///
    /// `page` and `page_size` are the values the caller asked for; when
    /// absent the page defaults to 1 and the size comes from the envelope.
    /// Failing that, a first page is sized by its results and any later
    /// page by the backend default of [`DEFAULT_PAGE_SIZE`].
    ///
    /// # Errors
    ///
    /// Returns [`ResponseDecodeError::Malformed`] when the body is not a
    /// recognized list shape or the items do not match `T`.
    pub fn from_value(
        body: &Value,
        page: Option<u64>,
        page_size: Option<u64>,
    ) -> Result<Self, ResponseDecodeError> {
        let envelope = Envelope::locate(body).ok_or_else(|| {
            ResponseDecodeError::Malformed(serde_json::Error::custom(
                "expected a list or a paginated envelope",
            ))
        })?;

        let results: Vec<T> = serde_json::from_value(Value::Array(envelope.items.clone()))?;
        let len = results.len() as u64;
        let count = envelope.count.unwrap_or(len);
        let page = page.or(envelope.page).unwrap_or(1).max(1);
        let page_size = page_size
            .or(envelope.page_size)
            .unwrap_or(if page == 1 && len > 0 {
                len
            } else {
                DEFAULT_PAGE_SIZE
            });

        Ok(Self::assemble(
            results,
            count,
            envelope.next,
            envelope.previous,
            page,
            page_size,
        ))
    }
}

impl<T> Page<T> {
    /// Builds a page from explicit parts and computes the derived fields.
    #[must_use]
    pub fn assemble(
        results: Vec<T>,
        count: u64,
        next: Option<String>,
        previous: Option<String>,
        page: u64,
        page_size: u64,
    ) -> Self {
        let total_pages = total_pages(count, page_size);
        Self {
            results,
            count,
            next,
            previous,
            page,
            page_size,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        }
    }

    /// Returns the items, dropping the metadata.
    #[must_use]
    pub fn into_results(self) -> Vec<T> {
        self.results
    }

    /// Applies `f` to every item, keeping the metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            results: self.results.into_iter().map(f).collect(),
            count: self.count,
            next: self.next,
            previous: self.previous,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}

/// `ceil(count / page_size)`; a zero page size means everything fits on one page.
const fn total_pages(count: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        if count == 0 {
            0
        } else {
            1
        }
    } else {
        count.div_ceil(page_size)
    }
}

impl<T> Deref for Page<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.results
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

struct Envelope {
    items: Vec<Value>,
    count: Option<u64>,
    next: Option<String>,
    previous: Option<String>,
    page: Option<u64>,
    page_size: Option<u64>,
}

impl Envelope {
    fn locate(body: &Value) -> Option<Self> {
        match body {
            Value::Array(items) => Some(Self::bare(items.clone())),
            Value::Object(map) => {
                if let Some(Value::Array(items)) = map.get("results") {
                    return Some(Self::from_map(map, items.clone()));
                }
                match map.get("data") {
                    Some(inner @ (Value::Object(_) | Value::Array(_))) => Self::locate(inner),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    const fn bare(items: Vec<Value>) -> Self {
        Self {
            items,
            count: None,
            next: None,
            previous: None,
            page: None,
            page_size: None,
        }
    }

    fn from_map(map: &Map<String, Value>, items: Vec<Value>) -> Self {
        let number = |key: &str| map.get(key).and_then(Value::as_u64);
        let link = |key: &str| map.get(key).and_then(Value::as_str).map(ToString::to_string);
        Self {
            items,
            count: number("count"),
            next: link("next"),
            previous: link("previous"),
            page: number("current_page").or_else(|| number("page")),
            page_size: number("page_size"),
        }
    }
}
