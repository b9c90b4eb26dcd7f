use serde::Serialize;

use super::SITE_API_PATH;
use crate::client::ManagementClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};

impl ManagementClient {
    /// The listing endpoint is addressed with a trailing slash.
    pub fn build_get_all_components(&self, channel_id: &str, group: &str) -> HttpRequest {
        self.request(
            HttpMethod::Get,
            SITE_API_PATH,
            &format!("/channels/{channel_id}/component_groups/{group}/components/"),
        )
        .build()
    }

    pub fn build_get_component(&self, channel_id: &str, group: &str, component: &str) -> HttpRequest {
        self.request(HttpMethod::Get, SITE_API_PATH, &component_path(channel_id, group, component))
            .build()
    }

    pub fn build_put_component<B: Serialize + ?Sized>(
        &self,
        channel_id: &str,
        group: &str,
        component: &str,
        body: &B,
        resource_version: Option<&str>,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(HttpMethod::Put, SITE_API_PATH, &component_path(channel_id, group, component))
            .json(body)?
            .resource_version(resource_version)
            .build())
    }

    pub fn build_delete_component(&self, channel_id: &str, group: &str, component: &str) -> HttpRequest {
        self.request(HttpMethod::Delete, SITE_API_PATH, &component_path(channel_id, group, component))
            .build()
    }
}

fn component_path(channel_id: &str, group: &str, component: &str) -> String {
    format!("/channels/{channel_id}/component_groups/{group}/components/{component}")
}
