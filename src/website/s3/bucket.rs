use aws_sdk_s3::types::{ErrorDocument, IndexDocument, WebsiteConfiguration};

use crate::website::error::{Result, WebsiteError};
use crate::website::s3::models::S3WebsiteClient;

impl S3WebsiteClient {
    /// Enable static website hosting on the bucket
    ///
    /// Designates the index document suffix and the error document served
    /// for missing keys. Service failures map to [`WebsiteError::Service`].
    pub fn put_website_config(&self, index_suffix: &str, error_key: &str) -> Result<()> {
        if !self.is_real_client {
            crate::utils::log_utils::debug(
                &format!(
                    "Dry run - would have enabled website hosting on '{}' (index: {}, error: {})",
                    self.bucket_name, index_suffix, error_key
                ),
                self.verbose,
            );
            return Ok(());
        }

        let index_document = IndexDocument::builder()
            .suffix(index_suffix)
            .build()
            .map_err(|e| WebsiteError::Runtime(format!("Invalid index document: {e}")))?;

        let error_document = ErrorDocument::builder()
            .key(error_key)
            .build()
            .map_err(|e| WebsiteError::Runtime(format!("Invalid error document: {e}")))?;

        let website_config = WebsiteConfiguration::builder()
            .index_document(index_document)
            .error_document(error_document)
            .build();

        self.runtime.block_on(async {
            self.client
                .put_bucket_website()
                .bucket(&self.bucket_name)
                .website_configuration(website_config)
                .send()
                .await
                .map_err(|e| {
                    WebsiteError::Service(format!("Failed to enable website hosting: {e}"))
                })?;

            Ok(())
        })
    }

    /// Attach a bucket policy document to the bucket
    pub fn put_bucket_policy(&self, policy: &str) -> Result<()> {
        if !self.is_real_client {
            crate::utils::log_utils::debug(
                &format!(
                    "Dry run - would have applied bucket policy to '{}'",
                    self.bucket_name
                ),
                self.verbose,
            );
            return Ok(());
        }

        self.runtime.block_on(async {
            self.client
                .put_bucket_policy()
                .bucket(&self.bucket_name)
                .policy(policy)
                .send()
                .await
                .map_err(|e| {
                    WebsiteError::Service(format!("Failed to apply bucket policy: {e}"))
                })?;

            Ok(())
        })
    }
}
