use serde::Serialize;

use super::CONTENT_API_PATH;
use crate::client::{content_path, ManagementClient};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};

impl ManagementClient {
    pub fn build_get_resource_bundle(&self, path: &str, project_id: &str) -> HttpRequest {
        self.request(HttpMethod::Get, CONTENT_API_PATH, &bundle_path(project_id, path))
            .build()
    }

    pub fn build_put_resource_bundle<B: Serialize + ?Sized>(
        &self,
        project_id: &str,
        path: &str,
        bundle: &B,
        resource_version: Option<&str>,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(HttpMethod::Put, CONTENT_API_PATH, &bundle_path(project_id, path))
            .json(bundle)?
            .resource_version(resource_version)
            .build())
    }

    pub fn build_remove_resource_bundle_from_project(&self, project_id: &str, path: &str) -> HttpRequest {
        self.request(HttpMethod::Delete, CONTENT_API_PATH, &bundle_path(project_id, path))
            .build()
    }
}

fn bundle_path(project_id: &str, path: &str) -> String {
    format!("/project/{project_id}/resourcebundles/{}", content_path(path))
}
