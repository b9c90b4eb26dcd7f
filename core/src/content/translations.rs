//! Translation lookup and the asynchronous link/unlink operations.

use super::CONTENT_API_PATH;
use crate::client::{content_path, ManagementClient};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::types::{TranslationLink, TranslationQuery};

impl ManagementClient {
    /// Translations of a document, page or folder, looked up across the
    /// channels of its translation group.
    pub fn build_get_translations(&self, path: &str, query: &TranslationQuery) -> HttpRequest {
        let mut builder = self.request(
            HttpMethod::Get,
            CONTENT_API_PATH,
            &format!("/translation/{}", content_path(path)),
        );
        if query.include_documents {
            builder = builder.query("includeDocuments", true);
        }
        builder
            .query("status", query.status.as_str())
            .query("view", query.view.as_str())
            .build()
    }

    pub fn build_link_translations(
        &self,
        link: &TranslationLink,
        override_existing: bool,
    ) -> Result<HttpRequest, ApiError> {
        let mut builder = self.request(HttpMethod::Post, CONTENT_API_PATH, "/translation/link");
        if override_existing {
            builder = builder.query("overrideExistingTranslations", true);
        }
        Ok(builder.json(link)?.build())
    }

    /// Content must sit under `/content/documents` and belong to a translation group.
    pub fn build_unlink_translations<S: AsRef<str>>(&self, paths: &[S]) -> Result<HttpRequest, ApiError> {
        let paths: Vec<&str> = paths.iter().map(AsRef::as_ref).collect();
        Ok(self
            .request(HttpMethod::Post, CONTENT_API_PATH, "/translation/unlink")
            .json(&paths)?
            .build())
    }

    pub fn build_get_translation_operation_status(&self, operation_id: &str) -> HttpRequest {
        self.request(
            HttpMethod::Get,
            CONTENT_API_PATH,
            &format!("/translation/operations/{operation_id}"),
        )
        .build()
    }
}
