use serde::Serialize;

use super::SITE_API_PATH;
use crate::client::ManagementClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};

impl ManagementClient {
    pub fn build_get_all_routes(&self, channel_id: &str) -> HttpRequest {
        self.request(HttpMethod::Get, SITE_API_PATH, &format!("/channels/{channel_id}/routes"))
            .build()
    }

    pub fn build_get_route(&self, channel_id: &str, route: &str) -> HttpRequest {
        self.request(
            HttpMethod::Get,
            SITE_API_PATH,
            &format!("/channels/{channel_id}/routes/{route}"),
        )
        .build()
    }

    pub fn build_put_route<B: Serialize + ?Sized>(
        &self,
        channel_id: &str,
        route: &str,
        body: &B,
        resource_version: Option<&str>,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(
                HttpMethod::Put,
                SITE_API_PATH,
                &format!("/channels/{channel_id}/routes/{route}"),
            )
            .json(body)?
            .resource_version(resource_version)
            .build())
    }

    pub fn build_delete_route(&self, channel_id: &str, route: &str) -> HttpRequest {
        self.request(
            HttpMethod::Delete,
            SITE_API_PATH,
            &format!("/channels/{channel_id}/routes/{route}"),
        )
        .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_requests() {
        let c = ManagementClient::with_base_url("http://localhost:3000", "token");
        assert_eq!(
            c.build_get_all_routes("ch").url,
            "http://localhost:3000/management/site/v1/channels/ch/routes"
        );
        let put = c
            .build_put_route("ch", "news", &serde_json::json!({"name": "news"}), None)
            .unwrap();
        assert_eq!(put.url, "http://localhost:3000/management/site/v1/channels/ch/routes/news");
        assert!(put.header("x-resource-version").is_none());
        assert_eq!(c.build_get_route("ch", "news").url, put.url);
        assert_eq!(c.build_delete_route("ch", "news").method, HttpMethod::Delete);
    }
}
