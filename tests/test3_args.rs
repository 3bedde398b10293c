use clap::Parser;
use std::fs;

use s3_website_mgr::args::Args;

#[test]
fn test_args_parsing_with_explicit_paths() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("config.ini");
    fs::write(&config_path, "[s3]\nbucket_name = my-bucket\n")?;
    let html_dir = dir.path().join("html");
    fs::create_dir(&html_dir)?;

    let args = Args::try_parse_from([
        "s3-website-mgr",
        "--config",
        config_path.to_str().unwrap(),
        "--html-dir",
        html_dir.to_str().unwrap(),
        "-v",
        "-v",
        "--dry-run",
    ])?;

    assert_eq!(args.config, config_path);
    assert_eq!(args.html_dir, html_dir);
    assert_eq!(args.verbose, 2);
    assert!(args.dry_run);

    args.validate()?;

    Ok(())
}

#[test]
fn test_args_reject_missing_config_file() {
    let result = Args::try_parse_from([
        "s3-website-mgr",
        "--config",
        "/nonexistent/config.ini",
        "--html-dir",
        "/tmp",
    ]);

    assert!(result.is_err());
}

#[test]
fn test_args_reject_missing_html_dir() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("config.ini");
    fs::write(&config_path, "[s3]\nbucket_name = my-bucket\n")?;

    let result = Args::try_parse_from([
        "s3-website-mgr",
        "--config",
        config_path.to_str().unwrap(),
        "--html-dir",
        "/nonexistent/html",
    ]);

    assert!(result.is_err());

    Ok(())
}
