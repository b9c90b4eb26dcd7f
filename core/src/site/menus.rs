use serde::Serialize;

use super::SITE_API_PATH;
use crate::client::ManagementClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};

impl ManagementClient {
    pub fn build_get_all_menus(&self, channel_id: &str) -> HttpRequest {
        self.request(HttpMethod::Get, SITE_API_PATH, &format!("/channels/{channel_id}/menus"))
            .build()
    }

    pub fn build_get_menu(&self, channel_id: &str, menu: &str) -> HttpRequest {
        self.request(HttpMethod::Get, SITE_API_PATH, &menu_path(channel_id, menu, ""))
            .build()
    }

    pub fn build_put_menu<B: Serialize + ?Sized>(
        &self,
        channel_id: &str,
        menu: &str,
        body: &B,
        resource_version: Option<&str>,
    ) -> Result<HttpRequest, ApiError> {
        self.put_menu_resource(channel_id, menu, "", body, resource_version)
    }

    pub fn build_delete_menu(&self, channel_id: &str, menu: &str) -> HttpRequest {
        self.request(HttpMethod::Delete, SITE_API_PATH, &menu_path(channel_id, menu, ""))
            .build()
    }

    pub fn build_get_menu_items(&self, channel_id: &str, menu: &str) -> HttpRequest {
        self.request(HttpMethod::Get, SITE_API_PATH, &menu_path(channel_id, menu, "/items"))
            .build()
    }

    pub fn build_put_menu_items<B: Serialize + ?Sized>(
        &self,
        channel_id: &str,
        menu: &str,
        body: &B,
        resource_version: Option<&str>,
    ) -> Result<HttpRequest, ApiError> {
        self.put_menu_resource(channel_id, menu, "/items", body, resource_version)
    }

    pub fn build_get_menu_properties(&self, channel_id: &str, menu: &str) -> HttpRequest {
        self.request(
            HttpMethod::Get,
            SITE_API_PATH,
            &menu_path(channel_id, menu, "/properties"),
        )
        .build()
    }

    pub fn build_put_menu_properties<B: Serialize + ?Sized>(
        &self,
        channel_id: &str,
        menu: &str,
        body: &B,
        resource_version: Option<&str>,
    ) -> Result<HttpRequest, ApiError> {
        self.put_menu_resource(channel_id, menu, "/properties", body, resource_version)
    }

    fn put_menu_resource<B: Serialize + ?Sized>(
        &self,
        channel_id: &str,
        menu: &str,
        suffix: &str,
        body: &B,
        resource_version: Option<&str>,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(HttpMethod::Put, SITE_API_PATH, &menu_path(channel_id, menu, suffix))
            .json(body)?
            .resource_version(resource_version)
            .build())
    }
}

fn menu_path(channel_id: &str, menu: &str, suffix: &str) -> String {
    format!("/channels/{channel_id}/menus/{menu}{suffix}")
}
