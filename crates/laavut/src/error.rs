use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaavutError {
    #[error("Data error: {0}")]
    Data(#[from] laavut_data::DataError),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Init Logging error: {0}")]
    InitLoggingError(#[from] tracing_subscriber::filter::ParseError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, LaavutError>;
