use aws_sdk_s3::Client;

/// Represents the result of an S3 upload operation
#[derive(Debug, Clone)]
pub struct S3UploadResult {
    pub e_tag: String,
    pub key: String,
    pub bucket: String,
    pub uploaded: String,
}

/// Client for the website bucket operations
///
/// Owns its tokio runtime so callers stay synchronous; every operation
/// blocks on one request at a time.
pub struct S3WebsiteClient {
    pub(crate) bucket_name: String,
    pub(crate) region: String,
    pub(crate) client: Client,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) is_real_client: bool,
    pub verbose: u8,
}
