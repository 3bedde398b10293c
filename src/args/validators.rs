use home::home_dir;
use std::fs;
use std::path::{Path, PathBuf};

/// Checks if a file is readable
///
/// # Arguments
///
/// * `file` - Path to check
///
/// # Returns
///
/// * `Result<PathBuf, String>` - The validated `PathBuf` or an error message
///
/// # Errors
///
/// Returns an error if the file is not readable.
pub fn check_readable_file(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);

    let xpath = if path.starts_with("~") {
        if let Some(home) = home_dir() {
            home.join(path.strip_prefix("~").unwrap_or(path.as_path()))
        } else {
            return Err("Home directory could not be determined.".to_string());
        }
    } else {
        path
    };

    if xpath.is_file() && fs::metadata(&xpath).is_ok() {
        Ok(xpath)
    } else {
        Err(format!("The file '{}' is not readable.", file))
    }
}

/// Checks if a directory is readable
///
/// # Arguments
///
/// * `dir` - Path to check
///
/// # Returns
///
/// * `Result<PathBuf, String>` - The validated `PathBuf` or an error message
///
/// # Errors
///
/// Returns an error if the directory is not readable.
pub fn check_readable_dir(dir: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(dir);

    if path.is_dir() && fs::metadata(&path).is_ok() && fs::read_dir(&path).is_ok() {
        Ok(path)
    } else {
        Err(format!("The directory '{dir}' is not readable."))
    }
}

/// Checks if a directory `PathBuf` is readable
///
/// # Errors
///
/// Returns an error if the directory is not readable or contains non-UTF-8 characters.
pub fn check_readable_dir_path(dir: &Path) -> Result<PathBuf, String> {
    if let Some(dir_str) = dir.to_str() {
        check_readable_dir(dir_str)
    } else {
        Err("Invalid path: contains non-UTF-8 characters".to_string())
    }
}

/// Checks if a file `PathBuf` is readable
///
/// # Errors
///
/// Returns an error if the file is not readable or contains non-UTF-8 characters.
pub fn check_readable_path(file: &Path) -> Result<PathBuf, String> {
    if let Some(file_str) = file.to_str() {
        check_readable_file(file_str)
    } else {
        Err("Invalid path: contains non-UTF-8 characters".to_string())
    }
}
