use clap::Parser;
use std::path::PathBuf;

use super::validators::{
    check_readable_dir, check_readable_dir_path, check_readable_file, check_readable_path,
};

#[derive(Parser, Debug, Clone, serde::Serialize)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the INI configuration file holding the [s3] section
    #[arg(
        short,
        long,
        value_name = "PATH",
        default_value = "config.ini",
        value_parser = check_readable_file
    )]
    pub config: PathBuf,

    /// Directory holding the website files to upload
    #[arg(
        long,
        value_name = "PATH",
        default_value = "html",
        value_parser = check_readable_dir
    )]
    pub html_dir: PathBuf,

    /// Print extra stuff (use -v -v or --verbose --verbose for even more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log the requests without sending anything to the storage service
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    /// Validate the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the config file or the html directory is not
    /// readable.
    pub fn validate(&self) -> Result<(), String> {
        check_readable_path(&self.config)?;
        check_readable_dir_path(&self.html_dir)?;
        Ok(())
    }
}
