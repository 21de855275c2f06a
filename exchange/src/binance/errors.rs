use thiserror::Error;

#[derive(Error, Debug)]
pub enum BinanceError {
    #[error("Invalid {field}: {message}")]
    ValidationError { field: &'static str, message: String },

    #[error("Binance API error {code}: {msg}")]
    ApiError { code: i64, msg: String },

    #[error("SSL verification failed: {message}")]
    TlsError { message: String },

    #[error("Cannot reach Binance API: {message}")]
    ConnectionError { message: String },

    #[error("Request timed out: {message}")]
    TimeoutError { message: String },

    #[error("HTTP status {status}: {body}")]
    HttpStatusError { status: u16, body: String },

    #[error("Client error: {message}")]
    ClientError { message: String },
}

impl BinanceError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        BinanceError::ValidationError {
            field,
            message: message.into(),
        }
    }

    /// Failures below the exchange's application layer.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            BinanceError::TlsError { .. }
                | BinanceError::ConnectionError { .. }
                | BinanceError::TimeoutError { .. }
                | BinanceError::HttpStatusError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, BinanceError>;
