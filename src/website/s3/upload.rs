use aws_sdk_s3::primitives::ByteStream;
use std::path::Path;

use crate::website::error::{Result, WebsiteError};
use crate::website::s3::models::{S3UploadResult, S3WebsiteClient};

impl S3WebsiteClient {
    /// Upload one local file to the website bucket
    ///
    /// The object is stored with the given content type and with bucket
    /// key encryption requested, matching how the site files must be
    /// served. Failures map to [`WebsiteError::Service`] and are left to
    /// the caller; an upload error aborts the whole task.
    pub fn upload_file(
        &self,
        local_path: &str,
        object_key: &str,
        content_type: &str,
    ) -> Result<S3UploadResult> {
        // For dry runs, return a mock response without trying to upload
        if !self.is_real_client {
            crate::utils::log_utils::debug(
                &format!(
                    "Dry run - would have uploaded {} to s3://{}/{}",
                    local_path, self.bucket_name, object_key
                ),
                self.verbose,
            );

            return Ok(S3UploadResult {
                e_tag: format!("dry-run-{object_key}"),
                key: object_key.to_string(),
                bucket: self.bucket_name.clone(),
                uploaded: "2025-01-01T00:00:00Z".to_string(),
            });
        }

        if !Path::new(local_path).exists() {
            return Err(WebsiteError::MissingLocalFile(local_path.to_string()));
        }

        // Use the client's runtime instead of creating a new one
        self.runtime.block_on(async {
            // ByteStream reads directly from the file path, no loading into memory
            let body = ByteStream::from_path(Path::new(local_path))
                .await
                .map_err(|e| {
                    WebsiteError::Runtime(format!("Failed to create ByteStream from path: {e}"))
                })?;

            let response = self
                .client
                .put_object()
                .bucket(&self.bucket_name)
                .key(object_key)
                .content_type(content_type)
                .bucket_key_enabled(true)
                .body(body)
                .send()
                .await
                .map_err(|e| {
                    WebsiteError::Service(format!("Failed to upload {object_key}: {e}"))
                })?;

            let e_tag = response
                .e_tag()
                .ok_or_else(|| WebsiteError::Service("No ETag in response".to_string()))?
                .replace('"', "");

            let uploaded = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

            Ok(S3UploadResult {
                e_tag,
                key: object_key.to_string(),
                bucket: self.bucket_name.clone(),
                uploaded,
            })
        })
    }
}
