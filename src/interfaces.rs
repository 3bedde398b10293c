use mockall::automock;

use crate::website::error::Result;
use crate::website::s3::models::{S3UploadResult, S3WebsiteClient};

/// Interface for website bucket operations to facilitate testing
#[automock]
pub trait WebsiteStorage {
    fn upload_file(
        &self,
        local_path: &str,
        object_key: &str,
        content_type: &str,
    ) -> Result<S3UploadResult>;
    fn put_website_config(&self, index_suffix: &str, error_key: &str) -> Result<()>;
    fn put_bucket_policy(&self, policy: &str) -> Result<()>;
    fn bucket(&self) -> String;
    fn region(&self) -> String;
}

/// Default implementation of WebsiteStorage backed by the real S3 client
pub struct DefaultWebsiteStorage {
    client: S3WebsiteClient,
}

impl DefaultWebsiteStorage {
    pub fn new(client: S3WebsiteClient) -> Self {
        Self { client }
    }
}

impl WebsiteStorage for DefaultWebsiteStorage {
    fn upload_file(
        &self,
        local_path: &str,
        object_key: &str,
        content_type: &str,
    ) -> Result<S3UploadResult> {
        self.client.upload_file(local_path, object_key, content_type)
    }

    fn put_website_config(&self, index_suffix: &str, error_key: &str) -> Result<()> {
        self.client.put_website_config(index_suffix, error_key)
    }

    fn put_bucket_policy(&self, policy: &str) -> Result<()> {
        self.client.put_bucket_policy(policy)
    }

    fn bucket(&self) -> String {
        self.client.bucket().to_string()
    }

    fn region(&self) -> String {
        self.client.region().to_string()
    }
}
