//! Content Batch Export API: submit a job, poll it, download the archive.

use crate::client::ManagementClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, OCTET_STREAM};
use crate::types::ExportRequest;

const EXPORT_API_PATH: &str = "management/content-export/v1";

impl ManagementClient {
    pub fn build_request_export(&self, export: &ExportRequest) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(HttpMethod::Post, EXPORT_API_PATH, "/")
            .json(export)?
            .build())
    }

    pub fn build_get_export_operation(&self, operation_id: &str) -> HttpRequest {
        self.request(
            HttpMethod::Get,
            EXPORT_API_PATH,
            &format!("/operations/{operation_id}"),
        )
        .build()
    }

    /// The response body is the raw archive.
    pub fn build_download_exported_files(&self, operation_id: &str) -> HttpRequest {
        self.request(
            HttpMethod::Get,
            EXPORT_API_PATH,
            &format!("/operations/{operation_id}/files"),
        )
        .header("accept", OCTET_STREAM)
        .build()
    }
}
