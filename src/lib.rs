pub mod args;
pub mod interfaces;
pub mod utils;
pub mod website;

pub use args::Args;

use crate::interfaces::DefaultWebsiteStorage;
use crate::utils::log_utils::Logger;
use crate::website::error::Result;
use crate::website::s3::S3WebsiteClient;

/// Run the create-website task end to end
///
/// Reads the bucket configuration, builds the storage client, and hands
/// off to [`website::process_website_mode`].
///
/// # Errors
///
/// Returns an error if the configuration cannot be read, the client
/// cannot be built, or an upload fails. Hosting and policy service
/// failures are logged inside the task and do not surface here.
pub fn run_app(args: &Args) -> Result<()> {
    let logger = Logger::new(args.verbose);

    logger.normal("Reading configuration for bucket name...");
    let site_config = website::config::read_site_config(&args.config)?;

    let client = S3WebsiteClient::new(&site_config, args.verbose, args.dry_run)?;
    let storage = DefaultWebsiteStorage::new(client);

    website::process_website_mode(args, &storage, &logger)
}
