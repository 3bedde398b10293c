pub mod config;
pub mod error;
pub mod manifest;
pub mod policy;
pub mod s3;

use crate::Args;
use crate::interfaces::WebsiteStorage;
use crate::utils::log_utils::Logger;
use crate::website::error::{Result, WebsiteError};

/// Index document suffix for the hosted site
pub const INDEX_DOCUMENT_SUFFIX: &str = "index.html";
/// Document served when a requested key does not exist
pub const ERROR_DOCUMENT: &str = "error.html";

/// Run the create-website task against the given storage client
///
/// Uploads the site files, enables website hosting, applies the
/// public-read policy, and logs the website URL. An upload failure
/// aborts the task; hosting and policy failures from the service are
/// logged and the remaining steps still run.
pub fn process_website_mode(
    args: &Args,
    storage: &dyn WebsiteStorage,
    logger: &Logger,
) -> Result<()> {
    logger.normal("Start of create website task");

    logger.normal("Uploading files for the website...");
    upload_website_files(args, storage, logger)?;

    logger.normal("Enabling web hosting on the bucket...");
    enable_web_hosting(storage, logger)?;

    logger.normal("Adding a bucket policy to allow traffic from the internet...");
    allow_access_from_web(storage, logger)?;

    logger.normal("You can access the website at:");
    logger.normal(&policy::website_url(&storage.bucket(), &storage.region()));

    logger.normal("End of create website task");
    Ok(())
}

/// Upload each site file in manifest order; the first failure aborts
fn upload_website_files(
    args: &Args,
    storage: &dyn WebsiteStorage,
    logger: &Logger,
) -> Result<()> {
    let bucket = storage.bucket();

    for file in &manifest::WEBSITE_FILES {
        let local_path = args.html_dir.join(file.key);
        logger.normal(&format!(
            "Upload: {} to s3://{}/{}",
            local_path.display(),
            bucket,
            file.key
        ));

        let local = local_path
            .to_str()
            .ok_or_else(|| WebsiteError::PathError(local_path.display().to_string()))?;

        let result = storage.upload_file(local, file.key, file.content_type)?;
        logger.info(&format!("Uploaded {} (etag {})", result.key, result.e_tag));
    }

    Ok(())
}

/// Enable website hosting; a service error is logged and swallowed
fn enable_web_hosting(storage: &dyn WebsiteStorage, logger: &Logger) -> Result<()> {
    match storage.put_website_config(INDEX_DOCUMENT_SUFFIX, ERROR_DOCUMENT) {
        Ok(()) => {
            logger.normal(&format!(
                "Static website hosting enabled for S3 bucket: {}",
                storage.bucket()
            ));
            Ok(())
        }
        Err(WebsiteError::Service(msg)) => {
            logger.normal(&format!("Error enabling static website hosting: {msg}"));
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Apply the public-read policy; a service error is logged and swallowed
fn allow_access_from_web(storage: &dyn WebsiteStorage, logger: &Logger) -> Result<()> {
    let bucket = storage.bucket();
    let policy_doc = policy::public_read_policy(&bucket);

    match storage.put_bucket_policy(&policy_doc) {
        Ok(()) => {
            logger.normal(&format!("Bucket policy applied to S3 bucket: {bucket}"));
            Ok(())
        }
        Err(WebsiteError::Service(msg)) => {
            logger.normal(&format!("Error applying bucket policy: {msg}"));
            Ok(())
        }
        Err(e) => Err(e),
    }
}
