//! Content Management API: documents, pages, resource bundles and the
//! translation links between them.
//!
//! Documents, pages and bundles live inside a project; `core` addresses the
//! main line. Reading from core returns the published variant unless the item
//! was never published.

pub mod documents;
pub mod pages;
pub mod resource_bundles;
pub mod translations;

pub(crate) const CONTENT_API_PATH: &str = "management/content/v1";
