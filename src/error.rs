use axum::http::StatusCode;

pub const MISSING_FIELDS_MESSAGE: &str = "Both URL and Tag are required fields.";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingFields,

    #[error("{0}")]
    FetchError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Status code the error page is served with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingFields => StatusCode::BAD_REQUEST,
            AppError::FetchError(_) => StatusCode::BAD_GATEWAY,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the user on the error page.
    pub fn user_message(&self) -> String {
        match self {
            AppError::MissingFields => MISSING_FIELDS_MESSAGE.to_string(),
            other => format!("An error occurred: {}", other),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::FetchError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
