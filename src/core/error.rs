use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubsectorError {
    #[error("subsector not initialized")]
    NotInitialized,

    #[error("worlds not generated: run world generation before building space lanes")]
    WorldsNotGenerated,

    #[error("invalid hex index: {0} (subsector holds 80 cells)")]
    InvalidHexIndex(usize),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    ConfigError(#[from] toml::de::Error),

    #[error("serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SubsectorError>;
