use exchange::binance::errors::BinanceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("BINANCE_API_KEY and BINANCE_API_SECRET must be set")]
    MissingCredentials,

    #[error("Configuration file error: {message}")]
    FileError { message: String },

    #[error("Configuration parse error: {message}")]
    ParseError { message: String },
}

#[derive(Error, Debug)]
pub enum BotError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Binance(#[from] BinanceError),

    #[error("Logging setup error: {message}")]
    LoggingError { message: String },
}

pub type Result<T> = std::result::Result<T, BotError>;

pub const EXIT_OK: i32 = 0;
pub const EXIT_CONFIG: i32 = 1;
pub const EXIT_VALIDATION: i32 = 2;
pub const EXIT_API: i32 = 3;
pub const EXIT_NETWORK: i32 = 4;
pub const EXIT_UNEXPECTED: i32 = 99;

pub fn exit_code(err: &BotError) -> i32 {
    match err {
        BotError::Config(_) => EXIT_CONFIG,
        BotError::Binance(BinanceError::ValidationError { .. }) => EXIT_VALIDATION,
        BotError::Binance(BinanceError::ApiError { .. }) => EXIT_API,
        BotError::Binance(e) if e.is_transport() => EXIT_NETWORK,
        BotError::Binance(_) | BotError::LoggingError { .. } => EXIT_UNEXPECTED,
    }
}

/// One-line message shown on the console for a failed run.
pub fn user_message(err: &BotError) -> String {
    match err {
        BotError::Config(ConfigError::MissingCredentials) => format!(
            "Error: {}.\n   Create a .env file or export them as environment variables.",
            err
        ),
        BotError::Config(e) => format!("Configuration error: {}", e),
        BotError::Binance(BinanceError::ValidationError { .. }) => {
            format!("Validation error: {}", err)
        }
        BotError::Binance(BinanceError::ApiError { code, msg }) => {
            format!("Binance API error [{}]: {}", code, msg)
        }
        BotError::Binance(e) if e.is_transport() => format!("Network error: {}", e),
        _ => format!("Unexpected error: {}", err),
    }
}
