//! Error types shared by the showroom crates

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowroomError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ShowroomError>;
