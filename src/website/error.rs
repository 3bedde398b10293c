use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebsiteError {
    #[error("Config parse error: {0}")]
    IniParse(String),

    #[error("Missing config section: {0}")]
    MissingSection(String),

    #[error("Field missing in config: {0}")]
    MissingField(String),

    #[error("Local file does not exist: {0}")]
    MissingLocalFile(String),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("Storage service error: {0}")]
    Service(String),
}

pub type Result<T> = std::result::Result<T, WebsiteError>;
