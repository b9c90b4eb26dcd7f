//! Resource shapes of the management API.
//!
//! # Design
//! The service owns these shapes and enforces their invariants; the client
//! only passes them through. Each DTO flattens unrecognised fields into
//! `extra` so a GET followed by a PUT does not drop data the struct does not
//! model. Builders accept any `Serialize` body, so `serde_json::Value` works
//! just as well when a typed struct is inconvenient.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type Extra = Map<String, Value>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_of: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Body of the POST that branches a channel into a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelBranch {
    pub branch: String,
    pub branch_of: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub name: String,
    pub display_name: String,
    pub layout: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<Value>,
    #[serde(default)]
    pub containers: Vec<Container>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Container {
    pub path: String,
    #[serde(default)]
    pub components: Vec<Value>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub content_type: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    pub name: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<DocumentSystem>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub value: Vec<Value>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSystem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, alias = "updateBy", skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Folder create-or-update payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FolderSpec {
    #[serde(rename = "type")]
    pub folder_type: String,
    pub path: String,
    pub display_name: String,
    pub allowed_document_types: Vec<String>,
    pub allowed_folder_types: Vec<String>,
}

impl FolderSpec {
    pub fn new(
        folder_type: impl Into<String>,
        path: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            folder_type: folder_type.into(),
            path: path.into(),
            display_name: display_name.into(),
            allowed_document_types: vec!["ALL_DOCUMENTS".to_string()],
            allowed_folder_types: vec!["FOLDER".to_string()],
        }
    }

    pub fn allowed_document_types(mut self, types: Vec<String>) -> Self {
        self.allowed_document_types = types;
        self
    }

    pub fn allowed_folder_types(mut self, types: Vec<String>) -> Self {
        self.allowed_folder_types = types;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub include_content_types: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<ProjectState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<ProjectItems>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectState {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub errors: Value,
    #[serde(default)]
    pub available_actions: Vec<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItems {
    #[serde(default)]
    pub channels: Vec<ProjectItem>,
    #[serde(default)]
    pub content_types: Vec<ProjectItem>,
    #[serde(default)]
    pub documents: Vec<ProjectItem>,
    #[serde(default)]
    pub pages: Vec<ProjectItem>,
    #[serde(default)]
    pub resource_bundles: Vec<ProjectItem>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// One item attached to a project. Channels are identified by `id`, content
/// types by `name`, documents, pages and bundles by `path`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl ProjectItem {
    /// Whichever identity key the item carries: `id`, then `path`, then `name`.
    pub fn key(&self) -> Option<&str> {
        self.id
            .as_deref()
            .or(self.path.as_deref())
            .or(self.name.as_deref())
    }
}

/// Create/update payload for a developer project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    #[serde(default)]
    pub include_content_types: bool,
    #[serde(default)]
    pub description: String,
}

impl NewProject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            include_content_types: false,
            description: String::new(),
        }
    }

    pub fn include_content_types(mut self, include: bool) -> Self {
        self.include_content_types = include;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Batch export job submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub data_types: Vec<String>,
    pub source_path: String,
    /// Project to export from; `core` is the main line.
    pub branch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_after: Option<String>,
}

impl ExportRequest {
    pub fn new(source_path: impl Into<String>) -> Self {
        Self {
            data_types: ["resourcebundle", "page", "folder"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            source_path: source_path.into(),
            branch: "core".to_string(),
            modified_after: None,
        }
    }

    pub fn project(mut self, project_id: impl Into<String>) -> Self {
        self.branch = project_id.into();
        self
    }

    pub fn data_types(mut self, types: Vec<String>) -> Self {
        self.data_types = types;
        self
    }

    pub fn modified_after(mut self, timestamp: impl Into<String>) -> Self {
        self.modified_after = Some(timestamp.into());
        self
    }
}

/// Status document of an asynchronous export, import or translation job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub status: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Operation {
    pub fn is_finished(&self) -> bool {
        matches!(
            self.status.to_ascii_uppercase().as_str(),
            "COMPLETED" | "SUCCESS" | "FAILED" | "ERROR"
        )
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status.to_ascii_uppercase().as_str(), "FAILED" | "ERROR")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranslationLink {
    pub path: String,
    pub translations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationStatus {
    Linked,
    Suggested,
    All,
}

impl TranslationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TranslationStatus::Linked => "linked",
            TranslationStatus::Suggested => "suggested",
            TranslationStatus::All => "all",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationView {
    Simple,
    Detailed,
}

impl TranslationView {
    pub fn as_str(self) -> &'static str {
        match self {
            TranslationView::Simple => "simple",
            TranslationView::Detailed => "detailed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationQuery {
    /// Include first-level children when the path is a folder.
    pub include_documents: bool,
    pub status: TranslationStatus,
    pub view: TranslationView,
}

impl Default for TranslationQuery {
    fn default() -> Self {
        Self {
            include_documents: false,
            status: TranslationStatus::Linked,
            view: TranslationView::Simple,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_keeps_unknown_fields() {
        let raw = r#"{
            "contentType": "brxsaas:banner",
            "name": "banner-a",
            "displayName": "Banner A",
            "path": "/content/documents/english/banners/banner-a",
            "fields": [{"name": "title", "value": ["Hello"]}],
            "system": {"createdBy": "admin", "createdAt": null, "updateBy": "editor", "updatedAt": null},
            "locale": "en"
        }"#;
        let doc: Document = serde_json::from_str(raw).unwrap();
        assert_eq!(doc.content_type, "brxsaas:banner");
        assert_eq!(doc.fields[0].value[0], "Hello");
        assert_eq!(doc.system.as_ref().unwrap().updated_by.as_deref(), Some("editor"));
        assert_eq!(doc.extra["locale"], "en");

        let back = serde_json::to_value(&doc).unwrap();
        assert_eq!(back["locale"], "en");
        assert_eq!(back["displayName"], "Banner A");
    }

    #[test]
    fn folder_spec_defaults_allow_everything() {
        let spec = FolderSpec::new("folder", "/content/documents/news", "News");
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["type"], "folder");
        assert_eq!(json["allowedDocumentTypes"], serde_json::json!(["ALL_DOCUMENTS"]));
        assert_eq!(json["allowedFolderTypes"], serde_json::json!(["FOLDER"]));
    }

    #[test]
    fn export_request_omits_absent_modified_after() {
        let json = serde_json::to_value(ExportRequest::new("/content/documents")).unwrap();
        assert_eq!(json["branch"], "core");
        assert!(json.get("modifiedAfter").is_none());
        assert_eq!(json["dataTypes"], serde_json::json!(["resourcebundle", "page", "folder"]));
    }

    #[test]
    fn project_items_accept_name_and_path_keys() {
        let raw = r#"{
            "id": "vA1b2",
            "name": "Spring campaign",
            "items": {
                "channels": [{"id": "reference-spa", "displayName": "Reference SPA"}],
                "contentTypes": [{"name": "brxsaas:banner", "displayName": "Banner"}],
                "documents": [{"path": "/content/documents/a", "displayName": "A"}]
            }
        }"#;
        let project: Project = serde_json::from_str(raw).unwrap();
        let items = project.items.as_ref().unwrap();
        assert_eq!(items.channels[0].key(), Some("reference-spa"));
        assert_eq!(items.content_types[0].key(), Some("brxsaas:banner"));
        assert_eq!(items.documents[0].path.as_deref(), Some("/content/documents/a"));
        assert!(items.pages.is_empty());

        let back = serde_json::to_value(&project).unwrap();
        let back_items = &back["items"];
        assert_eq!(back_items["documents"][0]["path"], "/content/documents/a");
        assert!(back_items["documents"][0].get("id").is_none());
        assert_eq!(back_items["contentTypes"][0]["name"], "brxsaas:banner");
        assert!(back_items["contentTypes"][0].get("id").is_none());
    }

    #[test]
    fn project_item_with_id_and_name_keeps_both() {
        let item: ProjectItem =
            serde_json::from_str(r#"{"id": "x1", "name": "brxsaas:banner", "status": "CHANGED"}"#)
                .unwrap();
        assert_eq!(item.id.as_deref(), Some("x1"));
        assert_eq!(item.name.as_deref(), Some("brxsaas:banner"));
        assert_eq!(item.key(), Some("x1"));
        assert_eq!(serde_json::to_value(&item).unwrap()["status"], "CHANGED");
    }

    #[test]
    fn page_round_trip_keeps_nested_fields() {
        let raw = r#"{
            "name": "home",
            "displayName": "Home",
            "layout": "one-column",
            "containers": [{"path": "main", "name": "main", "xtype": "hst.vbox", "components": []}]
        }"#;
        let page: Page = serde_json::from_str(raw).unwrap();
        let back = serde_json::to_value(&page).unwrap();
        assert_eq!(back["containers"][0]["name"], "main");
        assert_eq!(back["containers"][0]["xtype"], "hst.vbox");
        assert!(back.get("document").is_none());
    }

    #[test]
    fn document_round_trip_sends_only_what_was_received() {
        let raw = r#"{
            "contentType": "brxsaas:banner",
            "name": "banner-a",
            "displayName": "Banner A",
            "fields": [{"name": "title", "value": ["Hi"], "type": "String"}],
            "system": {"createdBy": "admin", "workflow": "draft"}
        }"#;
        let doc: Document = serde_json::from_str(raw).unwrap();
        let back = serde_json::to_value(&doc).unwrap();
        assert_eq!(back["fields"][0]["type"], "String");
        assert_eq!(back["system"]["workflow"], "draft");
        assert!(back.get("path").is_none());
        assert!(back["system"].get("updatedBy").is_none());
    }

    #[test]
    fn operation_status_is_case_insensitive() {
        let op: Operation = serde_json::from_str(r#"{"id":"1","status":"completed"}"#).unwrap();
        assert!(op.is_finished());
        assert!(!op.is_failed());
        let op: Operation = serde_json::from_str(r#"{"id":"1","status":"RUNNING"}"#).unwrap();
        assert!(!op.is_finished());
    }
}
