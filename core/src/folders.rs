//! Folder Management API.

use crate::client::{content_path, ManagementClient};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::types::FolderSpec;

const FOLDER_API_PATH: &str = "management/folder/v1";
pub const DEFAULT_FOLDER_DEPTH: u32 = 5;

impl ManagementClient {
    /// Folder tree rooted at `path`, `depth` levels deep (default 5).
    pub fn build_get_folder(&self, path: &str, depth: Option<u32>) -> HttpRequest {
        self.request(
            HttpMethod::Get,
            FOLDER_API_PATH,
            &format!("/{}", content_path(path)),
        )
        .query("depth", depth.unwrap_or(DEFAULT_FOLDER_DEPTH))
        .build()
    }

    pub fn build_create_or_update_folder(&self, folder: &FolderSpec) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(
                HttpMethod::Put,
                FOLDER_API_PATH,
                &format!("/{}", content_path(&folder.path)),
            )
            .json(folder)?
            .build())
    }
}
