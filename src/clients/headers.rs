//! Request header sets.
//!
//! Two variants exist: the standard JSON set, and the authenticated set
//! that adds `Authorization: Bearer {token}` from a [`CredentialProvider`].
//! Building headers never fails. When the provider has no token the
//! authenticated set simply omits `Authorization`.

use std::collections::HashMap;

use crate::auth::{AuthPolicy, CredentialProvider};

/// Header names used by the client.
pub mod names {
    /// `Accept`
    pub const ACCEPT: &str = "Accept";
    /// `Authorization`
    pub const AUTHORIZATION: &str = "Authorization";
    /// `Content-Type`
    pub const CONTENT_TYPE: &str = "Content-Type";
    /// `User-Agent`
    pub const USER_AGENT: &str = "User-Agent";
}

const JSON: &str = "application/json";

/// An ordered set of request headers keyed case-insensitively.
///
/// # Example
///
/// ```rust
/// use nepdora_api::clients::HeaderSet;
/// use nepdora_api::{AuthPolicy, AuthToken, StaticCredentials};
///
/// let credentials = StaticCredentials::admin(AuthToken::new("t0k3n").unwrap());
/// let headers = HeaderSet::authenticated("agent/1.0", &credentials, AuthPolicy::Admin);
///
/// assert_eq!(headers.get("content-type"), Some("application/json"));
/// assert_eq!(headers.get("authorization"), Some("Bearer t0k3n"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderSet {
    entries: Vec<(String, String)>,
}

impl HeaderSet {
    /// Builds the standard JSON header set.
    #[must_use]
    pub fn standard(user_agent: &str) -> Self {
        let mut headers = Self::default();
        headers.insert(names::ACCEPT, JSON);
        headers.insert(names::CONTENT_TYPE, JSON);
        headers.insert(names::USER_AGENT, user_agent);
        headers
    }

    /// Builds the header set for `policy`, reading the token from `credentials`.
    ///
    /// `Anonymous` yields the standard set.
    #[must_use]
    pub fn authenticated(
        user_agent: &str,
        credentials: &dyn CredentialProvider,
        policy: AuthPolicy,
    ) -> Self {
        let mut headers = Self::standard(user_agent);
        if let Some(token) = credentials.token_for(policy) {
            headers.insert(names::AUTHORIZATION, token.bearer());
        }
        headers
    }

    /// Inserts or replaces a header.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
        {
            entry.1 = value;
        } else {
            self.entries.push((name.to_string(), value));
        }
    }

    /// Removes a header, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self
            .entries
            .iter()
            .position(|(key, _)| key.eq_ignore_ascii_case(name))?;
        Some(self.entries.remove(index).1)
    }

    /// Returns a header value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Merges extra headers, replacing existing values.
    pub fn extend(&mut self, extra: &HashMap<String, String>) {
        for (name, value) in extra {
            self.insert(name, value.clone());
        }
    }

    /// Iterates over the headers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns the number of headers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no headers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthToken, NoCredentials, StaticCredentials};

    #[test]
    fn test_standard_headers_are_json() {
        let headers = HeaderSet::standard("agent");
        assert_eq!(headers.get("Accept"), Some("application/json"));
        assert_eq!(headers.get("Content-Type"), Some("application/json"));
        assert_eq!(headers.get("user-agent"), Some("agent"));
        assert!(headers.get("Authorization").is_none());
        assert_eq!(headers.len(), 3);
    }

    #[test]
    fn test_authenticated_headers_attach_bearer_token() {
        let credentials = StaticCredentials::admin(AuthToken::new("abc").unwrap());
        let headers = HeaderSet::authenticated("agent", &credentials, AuthPolicy::Admin);
        assert_eq!(headers.get("Authorization"), Some("Bearer abc"));
    }

    #[test]
    fn test_authenticated_headers_without_token_omit_authorization() {
        let headers = HeaderSet::authenticated("agent", &NoCredentials, AuthPolicy::Admin);
        assert!(headers.get("Authorization").is_none());
        assert_eq!(headers, HeaderSet::standard("agent"));
    }

    #[test]
    fn test_anonymous_policy_never_sends_token() {
        let credentials = StaticCredentials::admin(AuthToken::new("abc").unwrap());
        let headers = HeaderSet::authenticated("agent", &credentials, AuthPolicy::Anonymous);
        assert!(headers.get("Authorization").is_none());
    }

    #[test]
    fn test_customer_policy_uses_customer_token() {
        let credentials = StaticCredentials::admin(AuthToken::new("admin").unwrap())
            .with_customer(AuthToken::new("customer").unwrap());
        let headers = HeaderSet::authenticated("agent", &credentials, AuthPolicy::Customer);
        assert_eq!(headers.get("Authorization"), Some("Bearer customer"));
    }

    #[test]
    fn test_insert_replaces_case_insensitively() {
        let mut headers = HeaderSet::standard("agent");
        headers.insert("content-type", "text/csv");
        assert_eq!(headers.get("Content-Type"), Some("text/csv"));
        assert_eq!(headers.len(), 3);
    }

    #[test]
    fn test_remove_and_extend() {
        let mut headers = HeaderSet::standard("agent");
        assert_eq!(headers.remove("CONTENT-TYPE").as_deref(), Some("application/json"));
        assert!(headers.get("Content-Type").is_none());

        let mut extra = HashMap::new();
        extra.insert("X-Source".to_string(), "dashboard".to_string());
        headers.extend(&extra);
        assert_eq!(headers.get("x-source"), Some("dashboard"));
        assert_eq!(headers.iter().count(), 3);
    }
}
