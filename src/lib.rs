pub mod analysis;
pub mod bridges;
pub mod config;
pub mod error;
pub mod image_payload;
pub mod model;
pub mod page;
pub mod prompts;
pub mod scoring;
pub mod server;
