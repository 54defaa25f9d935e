pub mod api_utils;
pub mod components;
pub mod config;
pub mod detail;
pub mod http_api;
pub mod icons;
pub mod list_utils;
pub mod notifications;
pub mod page_frame;
pub mod resource_list;
