pub mod bucket;
pub mod client;
pub mod models;
pub mod upload;

// Re-export types for convenient access from other modules
pub use models::{S3UploadResult, S3WebsiteClient};
