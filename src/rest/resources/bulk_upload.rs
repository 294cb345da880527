//! Product import from CSV.
//!
//! Not a CRUD resource: one upload endpoint and one template download.

use serde::{Deserialize, Serialize};

use crate::auth::AuthPolicy;
use crate::clients::{FileAttachment, FormPayload, RequestBody, RestClient};
use crate::rest::{ResourceError, ResourceOperation};

const NAME: &str = "Bulk upload";

/// A row the import could not process.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BulkUploadRowError {
    /// 1-based row number in the file.
    pub row: u64,
    /// Why the row was rejected.
    pub error: String,
}

/// Summary of an import.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BulkUploadReport {
    /// Whether the import ran.
    #[serde(default)]
    pub success: bool,

    /// Summary from the backend.
    #[serde(default)]
    pub message: String,

    /// Rows read from the file.
    #[serde(default)]
    pub total_processed: Option<u64>,

    /// Rows imported.
    #[serde(default)]
    pub successful: Option<u64>,

    /// Rows rejected.
    #[serde(default)]
    pub failed: Option<u64>,

    /// Per-row failures.
    #[serde(default)]
    pub errors: Vec<BulkUploadRowError>,
}

impl BulkUploadReport {
    /// Returns true if every row was imported.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.success && self.failed.unwrap_or(0) == 0 && self.errors.is_empty()
    }
}

/// Product import operations.
#[derive(Debug, Clone, Copy)]
pub struct BulkUpload;

impl BulkUpload {
    /// Uploads a CSV of products, sent as the `file` part.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if the file is rejected
    /// as a whole. Row-level failures are reported in the result.
    pub async fn upload(
        client: &RestClient,
        file: FileAttachment,
    ) -> Result<BulkUploadReport, ResourceError> {
        let mut form = FormPayload::new();
        form.file("file", file);

        let response = client
            .post(
                "bulk-upload",
                Some(RequestBody::Multipart(form)),
                AuthPolicy::Admin,
            )
            .await
            .map_err(|e| ResourceError::from_rest(e, NAME, ResourceOperation::Create, None))?;
        Ok(response.decode()?)
    }

    /// Downloads the CSV template.
    ///
    /// # Errors
    ///
    /// Returns the mapped HTTP error.
    pub async fn download_template(client: &RestClient) -> Result<Vec<u8>, ResourceError> {
        let response = client
            .get("download-template", Vec::new(), AuthPolicy::Admin)
            .await
            .map_err(|e| ResourceError::from_rest(e, NAME, ResourceOperation::Find, None))?;
        Ok(response.raw)
    }
}
