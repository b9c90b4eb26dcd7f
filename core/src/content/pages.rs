use serde::Serialize;

use super::CONTENT_API_PATH;
use crate::client::{content_path, ManagementClient};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};

impl ManagementClient {
    /// `path` is relative to the content root of `channel`.
    pub fn build_get_page(&self, channel: &str, path: &str, project_id: &str) -> HttpRequest {
        self.request(HttpMethod::Get, CONTENT_API_PATH, &page_path(project_id, channel, path))
            .build()
    }

    /// Folders along `path` must already exist.
    pub fn build_put_page<B: Serialize + ?Sized>(
        &self,
        project_id: &str,
        channel: &str,
        path: &str,
        page: &B,
        resource_version: Option<&str>,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(HttpMethod::Put, CONTENT_API_PATH, &page_path(project_id, channel, path))
            .json(page)?
            .resource_version(resource_version)
            .build())
    }

    pub fn build_remove_page_from_project(&self, project_id: &str, channel: &str, path: &str) -> HttpRequest {
        self.request(HttpMethod::Delete, CONTENT_API_PATH, &page_path(project_id, channel, path))
            .build()
    }
}

fn page_path(project_id: &str, channel: &str, path: &str) -> String {
    format!("/project/{project_id}/channel/{channel}/page/{}", content_path(path))
}
