//! Site Management API: channels and the per-channel configuration they own.

pub mod channels;
pub mod component_groups;
pub mod components;
pub mod layouts;
pub mod menus;
pub mod routes;

pub(crate) const SITE_API_PATH: &str = "management/site/v1";
pub(crate) const DELIVERY_SITE_API_PATH: &str = "delivery/site/v1";
