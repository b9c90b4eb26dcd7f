//! Content Batch Import API.

use crate::client::ManagementClient;
use crate::http::{HttpMethod, HttpRequest, OCTET_STREAM};

const IMPORT_API_PATH: &str = "management/content-import/v1";

impl ManagementClient {
    /// Upload an export archive for import.
    pub fn build_request_import(&self, archive: Vec<u8>) -> HttpRequest {
        self.request(HttpMethod::Post, IMPORT_API_PATH, "/")
            .bytes(OCTET_STREAM, archive)
            .build()
    }

    pub fn build_get_import_operation_status(&self, operation_id: &str) -> HttpRequest {
        self.request(
            HttpMethod::Get,
            IMPORT_API_PATH,
            &format!("/operations/{operation_id}"),
        )
        .build()
    }
}
