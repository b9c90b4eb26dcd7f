//! Projects Management API.
//!
//! A developer project is an isolated branch of channels and content. Merge
//! and rebase run asynchronously on the server; their outcome shows up in the
//! project's `state` on the next GET.

use serde::Serialize;

use crate::client::ManagementClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, APPLICATION_JSON};
use crate::types::NewProject;

const PROJECTS_API_PATH: &str = "management/projects/v1";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectUpdate<'a> {
    id: &'a str,
    #[serde(flatten)]
    project: &'a NewProject,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MergeOptions {
    approve_all_changes: bool,
}

impl ManagementClient {
    pub fn build_get_all_projects(&self, with_subresources: bool) -> HttpRequest {
        self.request(HttpMethod::Get, PROJECTS_API_PATH, "")
            .query("withSubresources", with_subresources)
            .build()
    }

    pub fn build_get_project(&self, project_id: &str, with_subresources: bool) -> HttpRequest {
        self.request(HttpMethod::Get, PROJECTS_API_PATH, &format!("/{project_id}"))
            .query("withSubresources", with_subresources)
            .build()
    }

    pub fn build_create_project(&self, project: &NewProject) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(HttpMethod::Post, PROJECTS_API_PATH, "/")
            .json(project)?
            .build())
    }

    /// Updates go through POST on the project resource, body echoing the id.
    pub fn build_update_project(
        &self,
        project_id: &str,
        project: &NewProject,
    ) -> Result<HttpRequest, ApiError> {
        let body = ProjectUpdate { id: project_id, project };
        Ok(self
            .request(HttpMethod::Post, PROJECTS_API_PATH, &format!("/{project_id}"))
            .json(&body)?
            .build())
    }

    /// Push the project's changes into core. Requires the Site Admin role.
    pub fn build_merge_project(
        &self,
        project_id: &str,
        approve_all_changes: bool,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(HttpMethod::Post, PROJECTS_API_PATH, &format!("/{project_id}:merge"))
            .json(&MergeOptions { approve_all_changes })?
            .build())
    }

    /// Pull upstream channel changes into the project.
    pub fn build_rebase_project(&self, project_id: &str) -> HttpRequest {
        self.project_action(project_id, "rebase")
    }

    pub fn build_reopen_project(&self, project_id: &str) -> HttpRequest {
        self.project_action(project_id, "reopen")
    }

    pub fn build_delete_project(&self, project_id: &str) -> HttpRequest {
        self.request(HttpMethod::Delete, PROJECTS_API_PATH, &format!("/{project_id}"))
            .build()
    }

    fn project_action(&self, project_id: &str, action: &str) -> HttpRequest {
        self.request(
            HttpMethod::Post,
            PROJECTS_API_PATH,
            &format!("/{project_id}:{action}"),
        )
        .header("content-type", APPLICATION_JSON)
        .build()
    }
}
