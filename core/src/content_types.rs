//! Content Type Management API.
//!
//! Content type names are namespaced (`brxsaas:banner`); the URL form swaps
//! the first `:` for `-`. Writes always target the `development` project.

use serde::Serialize;

use crate::client::ManagementClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};

const CONTENT_TYPE_API_PATH: &str = "management/contenttypes/v1";
pub const DEVELOPMENT_PROJECT: &str = "development";

/// URL segment for a namespaced content type name.
pub fn content_type_slug(name: &str) -> String {
    name.replacen(':', "-", 1)
}

impl ManagementClient {
    pub fn build_get_all_content_types(&self, project_id: Option<&str>) -> HttpRequest {
        let project = project_id.unwrap_or(DEVELOPMENT_PROJECT);
        self.request(HttpMethod::Get, CONTENT_TYPE_API_PATH, &format!("/{project}"))
            .build()
    }

    pub fn build_get_content_type(&self, name: &str, project_id: Option<&str>) -> HttpRequest {
        let project = project_id.unwrap_or(DEVELOPMENT_PROJECT);
        self.request(
            HttpMethod::Get,
            CONTENT_TYPE_API_PATH,
            &format!("/{project}/{}", content_type_slug(name)),
        )
        .build()
    }

    pub fn build_put_content_type<B: Serialize + ?Sized>(
        &self,
        name: &str,
        body: &B,
        resource_version: Option<&str>,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(
                HttpMethod::Put,
                CONTENT_TYPE_API_PATH,
                &format!("/{DEVELOPMENT_PROJECT}/{}", content_type_slug(name)),
            )
            .json(body)?
            .resource_version(resource_version)
            .build())
    }

    pub fn build_delete_content_type(&self, name: &str) -> HttpRequest {
        self.request(
            HttpMethod::Delete,
            CONTENT_TYPE_API_PATH,
            &format!("/{DEVELOPMENT_PROJECT}/{}", content_type_slug(name)),
        )
        .build()
    }
}
