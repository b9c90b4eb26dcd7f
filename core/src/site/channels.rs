//! Channels, their field groups and their parameters.

use serde::Serialize;

use super::{DELIVERY_SITE_API_PATH, SITE_API_PATH};
use crate::client::ManagementClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::types::ChannelBranch;

/// Id a channel takes once it has been branched into a project.
pub fn branch_channel_id(channel_id: &str, project_id: &str) -> String {
    format!("{channel_id}-{project_id}")
}

impl ManagementClient {
    /// Core channels from the public delivery API. Sends no auth token.
    pub fn build_get_all_core_channels(&self) -> HttpRequest {
        self.anonymous(HttpMethod::Get, DELIVERY_SITE_API_PATH, "/channels")
            .build()
    }

    pub fn build_get_all_channels(&self) -> HttpRequest {
        self.request(HttpMethod::Get, SITE_API_PATH, "/channels").build()
    }

    pub fn build_get_channel(&self, channel_id: &str) -> HttpRequest {
        self.request(HttpMethod::Get, SITE_API_PATH, &format!("/channels/{channel_id}"))
            .build()
    }

    pub fn build_put_channel<B: Serialize + ?Sized>(
        &self,
        channel_id: &str,
        body: &B,
        resource_version: Option<&str>,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(HttpMethod::Put, SITE_API_PATH, &format!("/channels/{channel_id}"))
            .json(body)?
            .resource_version(resource_version)
            .build())
    }

    /// Branch `channel_id` into `project_id`. The branch is addressed as
    /// [`branch_channel_id`] afterwards.
    pub fn build_add_channel_to_project(
        &self,
        project_id: &str,
        channel_id: &str,
    ) -> Result<HttpRequest, ApiError> {
        let body = ChannelBranch {
            branch: project_id.to_string(),
            branch_of: channel_id.to_string(),
        };
        Ok(self
            .request(HttpMethod::Post, SITE_API_PATH, "/channels")
            .json(&body)?
            .build())
    }

    pub fn build_delete_channel_branch(&self, channel_id: &str) -> HttpRequest {
        self.request(HttpMethod::Delete, SITE_API_PATH, &format!("/channels/{channel_id}"))
            .build()
    }

    pub fn build_get_channel_field_groups(&self, channel_id: &str) -> HttpRequest {
        self.request(
            HttpMethod::Get,
            SITE_API_PATH,
            &format!("/channels/{channel_id}/fieldgroups"),
        )
        .build()
    }

    pub fn build_put_channel_field_group<B: Serialize + ?Sized>(
        &self,
        channel_id: &str,
        field_group: &str,
        body: &B,
        resource_version: Option<&str>,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(
                HttpMethod::Put,
                SITE_API_PATH,
                &format!("/channels/{channel_id}/fieldgroups/{field_group}"),
            )
            .json(body)?
            .resource_version(resource_version)
            .build())
    }

    pub fn build_delete_channel_field_group(&self, channel_id: &str, field_group: &str) -> HttpRequest {
        self.request(
            HttpMethod::Delete,
            SITE_API_PATH,
            &format!("/channels/{channel_id}/fieldgroups/{field_group}"),
        )
        .build()
    }

    pub fn build_get_channel_parameters(&self, channel_id: &str) -> HttpRequest {
        self.request(
            HttpMethod::Get,
            SITE_API_PATH,
            &format!("/channels/{channel_id}/parameters"),
        )
        .build()
    }

    pub fn build_get_channel_parameter(&self, channel_id: &str, parameter: &str) -> HttpRequest {
        self.request(
            HttpMethod::Get,
            SITE_API_PATH,
            &format!("/channels/{channel_id}/parameters/{parameter}"),
        )
        .build()
    }

    pub fn build_put_channel_parameter<B: Serialize + ?Sized>(
        &self,
        channel_id: &str,
        parameter: &str,
        body: &B,
        resource_version: Option<&str>,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(
                HttpMethod::Put,
                SITE_API_PATH,
                &format!("/channels/{channel_id}/parameters/{parameter}"),
            )
            .json(body)?
            .resource_version(resource_version)
            .build())
    }

    pub fn build_delete_channel_parameter(&self, channel_id: &str, parameter: &str) -> HttpRequest {
        self.request(
            HttpMethod::Delete,
            SITE_API_PATH,
            &format!("/channels/{channel_id}/parameters/{parameter}"),
        )
        .build()
    }
}
