use serde::Serialize;

use super::CONTENT_API_PATH;
use crate::client::{content_path, ManagementClient};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};

impl ManagementClient {
    /// `path` is the absolute repository path of the document, name included.
    pub fn build_get_document(&self, path: &str, project_id: &str) -> HttpRequest {
        self.request(HttpMethod::Get, CONTENT_API_PATH, &document_path(project_id, path))
            .build()
    }

    /// Create or update a document in a project. It lands unpublished; merging
    /// the project publishes it. Omit `resource_version` on first creation.
    pub fn build_put_document<B: Serialize + ?Sized>(
        &self,
        project_id: &str,
        path: &str,
        document: &B,
        resource_version: Option<&str>,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(HttpMethod::Put, CONTENT_API_PATH, &document_path(project_id, path))
            .json(document)?
            .resource_version(resource_version)
            .build())
    }

    /// Dissociate a document from a project that has not been accepted yet.
    pub fn build_remove_document_from_project(&self, project_id: &str, path: &str) -> HttpRequest {
        self.request(HttpMethod::Delete, CONTENT_API_PATH, &document_path(project_id, path))
            .build()
    }
}

fn document_path(project_id: &str, path: &str) -> String {
    format!("/project/{project_id}/document/{}", content_path(path))
}
