pub mod config;
pub mod insights;
pub mod model;
pub mod store;
pub mod story;
