use std::path::PathBuf;

use s3_website_mgr::args::Args;
use s3_website_mgr::interfaces::{DefaultWebsiteStorage, WebsiteStorage};
use s3_website_mgr::utils::log_utils::Logger;
use s3_website_mgr::website;
use s3_website_mgr::website::config::SiteConfig;
use s3_website_mgr::website::s3::S3WebsiteClient;

fn dry_run_config() -> SiteConfig {
    // Static credentials and an explicit region keep client construction
    // hermetic; no provider-chain lookups are needed.
    SiteConfig {
        bucket_name: "dry-bucket".to_string(),
        region: Some("eu-west-1".to_string()),
        access_key_id: Some("dummy".to_string()),
        secret_access_key: Some("dummy".to_string()),
    }
}

#[test]
fn test_dry_run_client_operations() -> Result<(), Box<dyn std::error::Error>> {
    let client = S3WebsiteClient::new(&dry_run_config(), 0, true)?;

    assert_eq!(client.bucket(), "dry-bucket");
    assert_eq!(client.region(), "eu-west-1");

    // Uploads succeed without touching the filesystem or the network
    let result = client.upload_file("/definitely/missing/404.png", "404.png", "image/png")?;
    assert_eq!(result.e_tag, "dry-run-404.png");
    assert_eq!(result.key, "404.png");
    assert_eq!(result.bucket, "dry-bucket");
    assert_eq!(result.uploaded, "2025-01-01T00:00:00Z");

    client.put_website_config("index.html", "error.html")?;
    client.put_bucket_policy(r#"{"Version":"2012-10-17"}"#)?;

    Ok(())
}

#[test]
fn test_dry_run_full_task() -> Result<(), Box<dyn std::error::Error>> {
    let client = S3WebsiteClient::new(&dry_run_config(), 0, true)?;
    let storage = DefaultWebsiteStorage::new(client);

    assert_eq!(storage.bucket(), "dry-bucket");
    assert_eq!(storage.region(), "eu-west-1");

    let args = Args {
        config: PathBuf::from("config.ini"),
        html_dir: PathBuf::from("html"),
        verbose: 0,
        dry_run: true,
    };
    let logger = Logger::new(0);

    website::process_website_mode(&args, &storage, &logger)?;

    Ok(())
}
