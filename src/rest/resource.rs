//! The `RestResource` trait for CRUD operations on tenant resources.
//!
//! Each resource declares its path table, its auth policy and its input
//! types; the default methods do the rest:
//!
//! - `find(id)` - GET `{path}/{id}/`
//! - `all(params)` - GET `{path}/` with the serialized filters, as a [`Page`]
//! - `create(input)` - POST, JSON or multipart
//! - `update(id, input)` - PATCH with only the fields set on `input`
//! - `replace(id, input)` - PUT with the full record
//! - `delete(id)` - DELETE, returning a [`DeleteAck`]
//!
//! Nested resources use the `*_in` variants, which take the parent ids.
//!
//! # Implementing RestResource
//!
//! ```rust
//! use nepdora_api::rest::{RestResource, ResourcePath, ResourceOperation, ResourcePayload};
//! use nepdora_api::{AuthPolicy, HttpMethod};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! struct Note {
//!     id: u64,
//!     text: String,
//! }
//!
//! #[derive(Debug, Serialize)]
//! struct NoteInput {
//!     text: String,
//! }
//!
//! impl ResourcePayload for NoteInput {}
//!
//! impl RestResource for Note {
//!     type Id = u64;
//!     type ListParams = ();
//!     type CreateInput = NoteInput;
//!     type UpdateInput = NoteInput;
//!
//!     const NAME: &'static str = "Note";
//!     const AUTH: AuthPolicy = AuthPolicy::Anonymous;
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "notes"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "notes/{id}"),
//!     ];
//!
//!     fn get_id(&self) -> Option<Self::Id> {
//!         Some(self.id)
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::fmt::Display;

use serde::{de::DeserializeOwned, Serialize};

use crate::auth::AuthPolicy;
use crate::clients::{HttpMethod, HttpResponse, RequestBody, RestClient};
use crate::rest::query::page_hint;
use crate::rest::{
    build_path, encode_payload, get_path, serialize_to_query, Ack, DeleteAck, Page,
    ResourceError, ResourceOperation, ResourcePath, ResourcePayload,
};

/// Parent ids for nested resource paths, keyed by placeholder name.
pub type PathIds = HashMap<&'static str, String>;

/// Builds [`PathIds`] from `(placeholder, value)` pairs.
///
/// ```rust
/// use nepdora_api::rest::path_ids;
///
/// let ids = path_ids(&[("collection", "booking")]);
/// assert_eq!(ids["collection"], "booking");
/// ```
#[must_use]
pub fn path_ids(pairs: &[(&'static str, &str)]) -> PathIds {
    pairs
        .iter()
        .map(|(key, value)| (*key, (*value).to_string()))
        .collect()
}

/// A REST resource with CRUD operations.
///
/// The default methods resolve a path from [`PATHS`](Self::PATHS), send the
/// request with [`AUTH`](Self::AUTH) and map failures to
/// [`ResourceError`].
#[allow(async_fn_in_trait)]
pub trait RestResource: DeserializeOwned + Clone + Send + Sync + Sized {
    /// The identifier type (numeric id or slug).
    type Id: Display + Clone + Send + Sync;

    /// List filters. Use `()` for resources without filters.
    type ListParams: Serialize + Default + Send + Sync;

    /// Input for `create` and `replace`.
    type CreateInput: ResourcePayload + Send + Sync;

    /// Input for `update` (partial).
    type UpdateInput: ResourcePayload + Send + Sync;

    /// Human-readable name used in messages ("Testimonial", "Pricing plan").
    const NAME: &'static str;

    /// Path templates for each supported operation.
    const PATHS: &'static [ResourcePath];

    /// Which credentials the resource is called with.
    const AUTH: AuthPolicy = AuthPolicy::Admin;

    /// The placeholder the identifier fills (`id` or `slug`).
    const ID_KEY: &'static str = "id";

    /// Returns the identifier, if the record has one.
    fn get_id(&self) -> Option<Self::Id>;

    /// Fetches a single record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] for 404 responses.
    async fn find(client: &RestClient, id: Self::Id) -> Result<Self, ResourceError> {
        Self::find_in(client, PathIds::new(), id).await
    }

    /// Fetches a single record under a parent path.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the parent ids
    /// don't satisfy any path, or the mapped HTTP error.
    async fn find_in(
        client: &RestClient,
        parent: PathIds,
        id: Self::Id,
    ) -> Result<Self, ResourceError> {
        let response = send_operation::<Self>(
            client,
            ResourceOperation::Find,
            with_id::<Self>(parent, &id),
            None,
            Vec::new(),
        )
        .await?;
        Ok(response.decode()?)
    }

    /// Lists records, normalizing the pagination envelope.
    ///
    /// Filters left unset are not sent.
    ///
    /// # Errors
    ///
    /// Returns the mapped HTTP error, or [`ResourceError::Decode`] if the
    /// body is not a list.
    async fn all(
        client: &RestClient,
        params: Option<Self::ListParams>,
    ) -> Result<Page<Self>, ResourceError> {
        Self::all_in(client, PathIds::new(), params).await
    }

    /// Lists records under a parent path.
    ///
    /// # Errors
    ///
    /// See [`all`](Self::all).
    async fn all_in(
        client: &RestClient,
        parent: PathIds,
        params: Option<Self::ListParams>,
    ) -> Result<Page<Self>, ResourceError> {
        let query = match params {
            Some(params) => serialize_to_query(&params)?,
            None => Vec::new(),
        };

        let response =
            send_operation::<Self>(client, ResourceOperation::All, parent, None, query.clone())
                .await?;
        page_from_response(response, &query)
    }

    /// Creates a record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] for 400/422 responses.
    async fn create(client: &RestClient, input: &Self::CreateInput) -> Result<Self, ResourceError> {
        Self::create_in(client, PathIds::new(), input).await
    }

    /// Creates a record under a parent path.
    ///
    /// # Errors
    ///
    /// See [`create`](Self::create).
    async fn create_in(
        client: &RestClient,
        parent: PathIds,
        input: &Self::CreateInput,
    ) -> Result<Self, ResourceError> {
        let body = encode_payload(input)?;
        let response =
            send_operation::<Self>(client, ResourceOperation::Create, parent, Some(body), Vec::new())
                .await?;
        Ok(response.decode()?)
    }

    /// Partially updates a record (PATCH).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] or
    /// [`ResourceError::ValidationFailed`] as reported by the API.
    async fn update(
        client: &RestClient,
        id: Self::Id,
        input: &Self::UpdateInput,
    ) -> Result<Self, ResourceError> {
        Self::update_in(client, PathIds::new(), id, input).await
    }

    /// Partially updates a record under a parent path.
    ///
    /// # Errors
    ///
    /// See [`update`](Self::update).
    async fn update_in(
        client: &RestClient,
        parent: PathIds,
        id: Self::Id,
        input: &Self::UpdateInput,
    ) -> Result<Self, ResourceError> {
        let body = encode_payload(input)?;
        let response = send_operation::<Self>(
            client,
            ResourceOperation::Update,
            with_id::<Self>(parent, &id),
            Some(body),
            Vec::new(),
        )
        .await?;
        Ok(response.decode()?)
    }

    /// Replaces a record in full (PUT).
    ///
    /// Only resources with a `Replace` path support this.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] for resources without
    /// a replace path, or the mapped HTTP error.
    async fn replace(
        client: &RestClient,
        id: Self::Id,
        input: &Self::CreateInput,
    ) -> Result<Self, ResourceError> {
        let body = encode_payload(input)?;
        let response = send_operation::<Self>(
            client,
            ResourceOperation::Replace,
            with_id::<Self>(PathIds::new(), &id),
            Some(body),
            Vec::new(),
        )
        .await?;
        Ok(response.decode()?)
    }

    /// Deletes a record.
    ///
    /// A JSON acknowledgement is returned as sent; an empty body yields
    /// `"{NAME} deleted successfully"`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] for 404 responses.
    async fn delete(client: &RestClient, id: Self::Id) -> Result<DeleteAck, ResourceError> {
        Self::delete_in(client, PathIds::new(), id).await
    }

    /// Deletes a record under a parent path.
    ///
    /// # Errors
    ///
    /// See [`delete`](Self::delete).
    async fn delete_in(
        client: &RestClient,
        parent: PathIds,
        id: Self::Id,
    ) -> Result<DeleteAck, ResourceError> {
        let response = send_operation::<Self>(
            client,
            ResourceOperation::Delete,
            with_id::<Self>(parent, &id),
            None,
            Vec::new(),
        )
        .await?;
        Ok(Ack::from_response(
            &response,
            &format!("{} deleted successfully", Self::NAME),
        ))
    }
}

fn with_id<R: RestResource>(mut ids: PathIds, id: &R::Id) -> PathIds {
    ids.insert(R::ID_KEY, id.to_string());
    ids
}

fn blank_id(ids: &PathIds) -> Option<&'static str> {
    ids.iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(key, _)| *key)
}

/// Resolves the path for `operation`, sends the request and maps failures.
///
/// Shared by the trait's default methods and by resource-specific
/// operations that reuse a resource's path table.
///
/// # Errors
///
/// Returns [`ResourceError::InvalidId`] if any id is blank,
/// [`ResourceError::PathResolutionFailed`] if no path matches, or the HTTP
/// error mapped by [`ResourceError::from_rest`].
pub async fn send_operation<R: RestResource>(
    client: &RestClient,
    operation: ResourceOperation,
    ids: PathIds,
    body: Option<RequestBody>,
    query: Vec<(String, String)>,
) -> Result<HttpResponse, ResourceError> {
    // A blank segment collapses to the collection URL once the path is normalized.
    if let Some(key) = blank_id(&ids) {
        return Err(ResourceError::InvalidId {
            resource: R::NAME,
            key,
        });
    }

    let available: Vec<&str> = ids.keys().copied().collect();
    let path = get_path(R::PATHS, operation, &available).ok_or(
        ResourceError::PathResolutionFailed {
            resource: R::NAME,
            operation: operation.as_str(),
        },
    )?;
    let url = build_path(path.template, &ids);
    let id = ids.get(R::ID_KEY).map(String::as_str);

    client
        .send(path.http_method, &url, body, query, R::AUTH)
        .await
        .map_err(|e| ResourceError::from_rest(e, R::NAME, operation, id))
}

/// Sends a request outside the resource's path table.
///
/// Used for endpoints such as `payment-gateway/?payment_type=khalti` or
/// `promocode/validate/`. Failures are mapped with the resource's name.
///
/// # Errors
///
/// Returns the HTTP error mapped by [`ResourceError::from_rest`].
pub async fn send_custom<R: RestResource>(
    client: &RestClient,
    operation: ResourceOperation,
    method: HttpMethod,
    path: &str,
    body: Option<RequestBody>,
    query: Vec<(String, String)>,
) -> Result<HttpResponse, ResourceError> {
    send_custom_as::<R>(client, operation, method, path, body, query, R::AUTH).await
}

/// Like [`send_custom`] with an explicit auth policy.
///
/// # Errors
///
/// Returns the HTTP error mapped by [`ResourceError::from_rest`].
pub async fn send_custom_as<R: RestResource>(
    client: &RestClient,
    operation: ResourceOperation,
    method: HttpMethod,
    path: &str,
    body: Option<RequestBody>,
    query: Vec<(String, String)>,
    auth: AuthPolicy,
) -> Result<HttpResponse, ResourceError> {
    client
        .send(method, path, body, query, auth)
        .await
        .map_err(|e| ResourceError::from_rest(e, R::NAME, operation, None))
}

/// Normalizes a list response, using `page`/`page_size` from the sent query.
///
/// An empty body counts as an empty list.
///
/// # Errors
///
/// Returns [`ResourceError::Decode`] if the body is not a list shape.
pub fn page_from_response<T: DeserializeOwned>(
    response: HttpResponse,
    query: &[(String, String)],
) -> Result<Page<T>, ResourceError> {
    let (page, page_size) = page_hint(query);
    let body = response
        .body
        .unwrap_or_else(|| serde_json::Value::Array(Vec::new()));
    Ok(Page::from_value(&body, page, page_size)?)
}
