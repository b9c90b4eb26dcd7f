//! Typed client core for the Bloomreach content management REST API.
//!
//! # Overview
//! `ManagementClient` builds `HttpRequest` values for every endpoint of the
//! site, content, folder, project, content type and batch import/export APIs
//! without touching the network (host-does-IO pattern). `Executor` performs
//! the round trip with `reqwest` and returns the raw `HttpResponse`.
//!
//! # Design
//! - `ManagementClient` is stateless: base URL plus auth token.
//! - One `build_*` method per endpoint, grouped by resource module.
//! - Responses stay raw. `ManagementClient::check` or
//!   `Executor::send_checked` turn non-2xx statuses into `ApiError`.
//! - Updates take an optional resource version, sent as `x-resource-version`.
//!
//! ```rust,no_run
//! use brx_core::{Executor, ManagementClient};
//!
//! # async fn run() -> Result<(), brx_core::ApiError> {
//! let client = ManagementClient::new("acme", "token");
//! let executor = Executor::new()?;
//!
//! let channel = executor.send_checked(client.build_get_channel("reference-spa")).await?;
//! let version = channel.resource_version().map(str::to_owned);
//! let mut body: serde_json::Value = channel.json()?;
//! body["name"] = "Reference SPA".into();
//!
//! let put = client.build_put_channel("reference-spa", &body, version.as_deref())?;
//! executor.send_checked(put).await?;
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod batch_export;
pub mod batch_import;
pub mod client;
pub mod config;
pub mod content;
pub mod content_types;
pub mod error;
pub mod executor;
pub mod folders;
pub mod http;
pub mod projects;
pub mod site;
pub mod types;

pub use batch::{wait_for_operation, PollOptions};
pub use client::ManagementClient;
pub use config::ClientConfig;
pub use content_types::content_type_slug;
pub use error::ApiError;
pub use executor::Executor;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use site::channels::branch_channel_id;
pub use types::*;
