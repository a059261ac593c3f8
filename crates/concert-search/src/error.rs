use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConcertSearchError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Data error: {0}")]
    DataError(#[from] concert_data::DataError),
    #[error("Init Logging error: {0}")]
    InitLoggingError(#[from] tracing_subscriber::filter::ParseError),
}

pub type Result<T> = std::result::Result<T, ConcertSearchError>;
