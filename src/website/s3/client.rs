use aws_config::BehaviorVersion;
use aws_config::retry::RetryConfig;
use aws_credential_types::Credentials;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Region;

use crate::website::config::SiteConfig;
use crate::website::error::{Result, WebsiteError};
use crate::website::s3::models::S3WebsiteClient;

/// Region used when the config does not name one
const DEFAULT_REGION: &str = "us-east-1";

impl S3WebsiteClient {
    /// Create a new client for the configured website bucket
    ///
    /// Credentials come from the default AWS provider chain unless the
    /// config supplies both `access_key_id` and `secret_access_key`, in
    /// which case those are used as static credentials. With `dry_run`
    /// set, operations log what they would send and return mock results.
    pub fn new(config: &SiteConfig, verbose: u8, dry_run: bool) -> Result<Self> {
        let region_name = config
            .region
            .clone()
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        // Runtime is reused for all operations on this client
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| WebsiteError::Runtime(format!("Failed to create runtime: {e}")))?;

        if verbose >= 2 {
            crate::utils::log_utils::debug("Creating S3 client with these parameters:", verbose);
            crate::utils::log_utils::debug(&format!("Bucket: {}", config.bucket_name), verbose);
            crate::utils::log_utils::debug(&format!("Region: {region_name}"), verbose);
            crate::utils::log_utils::debug(
                &format!("Static credentials: {}", config.access_key_id.is_some()),
                verbose,
            );
        }

        let sdk_config = runtime.block_on(async {
            let mut loader = aws_config::defaults(BehaviorVersion::latest())
                .region(Region::new(region_name.clone()))
                .retry_config(RetryConfig::standard().with_max_attempts(3));

            if let (Some(key_id), Some(secret)) =
                (&config.access_key_id, &config.secret_access_key)
            {
                loader = loader.credentials_provider(Credentials::new(
                    key_id.clone(),
                    secret.clone(),
                    None, // No session token
                    None, // No expiry
                    "SiteConfigStaticCredentials",
                ));
            }

            loader.load().await
        });

        let client = Client::new(&sdk_config);

        Ok(Self {
            bucket_name: config.bucket_name.clone(),
            region: region_name,
            client,
            runtime,
            is_real_client: !dry_run,
            verbose,
        })
    }

    /// Name of the bucket this client operates on
    pub fn bucket(&self) -> &str {
        &self.bucket_name
    }

    /// Region the client was configured with
    pub fn region(&self) -> &str {
        &self.region
    }
}
