use thiserror::Error;

#[derive(Debug, Error)]
pub enum SliError {
    #[error("settings error: {0}")]
    Settings(String),

    #[error("session error: {0}")]
    Session(String),

    #[error("cookie transport error: {0}")]
    Transport(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type SliResult<T> = Result<T, SliError>;
