use ini::Ini;
use std::path::Path;

use crate::website::error::{Result, WebsiteError};

/// Settings for the website bucket, read from the `[s3]` config section
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub bucket_name: String,
    pub region: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
}

/// Read the site configuration from an INI file
///
/// The file must contain an `[s3]` section with at least `bucket_name`.
/// `region`, `access_key_id`, and `secret_access_key` are optional; when
/// the credential keys are absent the default AWS provider chain is used.
///
/// # Arguments
///
/// * `path` - Path to the INI configuration file
///
/// # Errors
///
/// Returns an error if the file cannot be loaded, the `[s3]` section is
/// missing, or `bucket_name` is not set.
pub fn read_site_config<P: AsRef<Path>>(path: P) -> Result<SiteConfig> {
    let conf = Ini::load_from_file(path.as_ref())
        .map_err(|e| WebsiteError::IniParse(e.to_string()))?;

    let section = conf
        .section(Some("s3"))
        .ok_or_else(|| WebsiteError::MissingSection("s3".to_string()))?;

    let bucket_name = section
        .get("bucket_name")
        .ok_or_else(|| WebsiteError::MissingField("bucket_name".to_string()))?
        .to_string();

    Ok(SiteConfig {
        bucket_name,
        region: section.get("region").map(ToString::to_string),
        access_key_id: section.get("access_key_id").map(ToString::to_string),
        secret_access_key: section.get("secret_access_key").map(ToString::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_site_config_basic() {
        let content = r#"[s3]
bucket_name = my-website-bucket
region = us-west-2
"#;

        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), content).unwrap();

        let config = read_site_config(temp_file.path()).unwrap();

        assert_eq!(config.bucket_name, "my-website-bucket");
        assert_eq!(config.region, Some("us-west-2".to_string()));
        assert!(config.access_key_id.is_none());
        assert!(config.secret_access_key.is_none());
    }

    #[test]
    fn test_read_site_config_with_credentials() {
        let content = r#"[s3]
bucket_name = my-website-bucket
access_key_id = AKIAEXAMPLE
secret_access_key = secret123
"#;

        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), content).unwrap();

        let config = read_site_config(temp_file.path()).unwrap();

        assert_eq!(config.bucket_name, "my-website-bucket");
        assert!(config.region.is_none());
        assert_eq!(config.access_key_id, Some("AKIAEXAMPLE".to_string()));
        assert_eq!(config.secret_access_key, Some("secret123".to_string()));
    }

    #[test]
    fn test_read_site_config_missing_section() {
        let content = r#"[storage]
bucket_name = my-website-bucket
"#;

        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), content).unwrap();

        let err = read_site_config(temp_file.path()).unwrap_err();
        assert!(matches!(err, WebsiteError::MissingSection(ref s) if s == "s3"));
    }

    #[test]
    fn test_read_site_config_missing_bucket_name() {
        let content = r#"[s3]
region = eu-central-1
"#;

        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), content).unwrap();

        let err = read_site_config(temp_file.path()).unwrap_err();
        assert!(matches!(err, WebsiteError::MissingField(ref f) if f == "bucket_name"));
    }

    #[test]
    fn test_read_site_config_missing_file() {
        let err = read_site_config("/nonexistent/config.ini").unwrap_err();
        assert!(matches!(err, WebsiteError::IniParse(_)));
    }
}
