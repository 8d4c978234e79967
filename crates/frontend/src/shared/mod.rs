pub mod api_utils;
pub mod backend;
pub mod blob_url;
pub mod charts;
pub mod components;
