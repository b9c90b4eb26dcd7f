use serde::Serialize;

use super::SITE_API_PATH;
use crate::client::ManagementClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};

impl ManagementClient {
    pub fn build_get_all_layouts(&self, channel_id: &str) -> HttpRequest {
        self.request(HttpMethod::Get, SITE_API_PATH, &format!("/channels/{channel_id}/layouts"))
            .build()
    }

    pub fn build_get_layout(&self, channel_id: &str, layout: &str) -> HttpRequest {
        self.request(
            HttpMethod::Get,
            SITE_API_PATH,
            &format!("/channels/{channel_id}/layouts/{layout}"),
        )
        .build()
    }

    pub fn build_put_layout<B: Serialize + ?Sized>(
        &self,
        channel_id: &str,
        layout: &str,
        body: &B,
        resource_version: Option<&str>,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(
                HttpMethod::Put,
                SITE_API_PATH,
                &format!("/channels/{channel_id}/layouts/{layout}"),
            )
            .json(body)?
            .resource_version(resource_version)
            .build())
    }

    pub fn build_delete_layout(&self, channel_id: &str, layout: &str) -> HttpRequest {
        self.request(
            HttpMethod::Delete,
            SITE_API_PATH,
            &format!("/channels/{channel_id}/layouts/{layout}"),
        )
        .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ManagementClient {
        ManagementClient::with_base_url("http://localhost:3000", "token")
    }

    #[test]
    fn layout_requests() {
        let c = client();
        let all = c.build_get_all_layouts("ch");
        assert_eq!(all.url, "http://localhost:3000/management/site/v1/channels/ch/layouts");

        let get = c.build_get_layout("ch", "one-column");
        assert_eq!(get.method, HttpMethod::Get);
        assert_eq!(
            get.url,
            "http://localhost:3000/management/site/v1/channels/ch/layouts/one-column"
        );

        let put = c
            .build_put_layout("ch", "one-column", &serde_json::json!({"name": "one-column"}), Some("v3"))
            .unwrap();
        assert_eq!(put.method, HttpMethod::Put);
        assert_eq!(put.url, get.url);
        assert_eq!(put.header("x-resource-version"), Some("v3"));

        let del = c.build_delete_layout("ch", "one-column");
        assert_eq!(del.method, HttpMethod::Delete);
        assert!(del.body.is_none());
    }
}
