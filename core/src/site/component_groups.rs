use serde::Serialize;

use super::SITE_API_PATH;
use crate::client::ManagementClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};

impl ManagementClient {
    pub fn build_get_all_component_groups(&self, channel_id: &str) -> HttpRequest {
        self.request(
            HttpMethod::Get,
            SITE_API_PATH,
            &format!("/channels/{channel_id}/component_groups"),
        )
        .build()
    }

    pub fn build_get_component_group(&self, channel_id: &str, group: &str) -> HttpRequest {
        self.request(
            HttpMethod::Get,
            SITE_API_PATH,
            &format!("/channels/{channel_id}/component_groups/{group}"),
        )
        .build()
    }

    /// Component groups are created with a PUT and carry no resource version.
    pub fn build_create_component_group<B: Serialize + ?Sized>(
        &self,
        channel_id: &str,
        group: &str,
        body: &B,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(
                HttpMethod::Put,
                SITE_API_PATH,
                &format!("/channels/{channel_id}/component_groups/{group}"),
            )
            .json(body)?
            .build())
    }

    pub fn build_delete_component_group(&self, channel_id: &str, group: &str) -> HttpRequest {
        self.request(
            HttpMethod::Delete,
            SITE_API_PATH,
            &format!("/channels/{channel_id}/component_groups/{group}"),
        )
        .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUP_URL: &str =
        "http://localhost:3000/management/site/v1/channels/ch/component_groups/brx";

    #[test]
    fn component_group_requests() {
        let c = ManagementClient::with_base_url("http://localhost:3000", "token");
        assert_eq!(
            c.build_get_all_component_groups("ch").url,
            "http://localhost:3000/management/site/v1/channels/ch/component_groups"
        );
        assert_eq!(c.build_get_component_group("ch", "brx").url, GROUP_URL);

        let create = c
            .build_create_component_group("ch", "brx", &serde_json::json!({"name": "brx", "hidden": false}))
            .unwrap();
        assert_eq!(create.method, HttpMethod::Put);
        assert_eq!(create.url, GROUP_URL);
        assert!(create.header("x-resource-version").is_none());

        let del = c.build_delete_component_group("ch", "brx");
        assert_eq!(del.method, HttpMethod::Delete);
        assert_eq!(del.url, GROUP_URL);
    }
}
