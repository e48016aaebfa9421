use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Upstream API error: {0}")]
    Upstream(serde_json::Value),

    #[error("{0}")]
    Transport(String),

    #[error("No search results found for \"{query}\".")]
    NoResults { query: String },

    #[error("Cannot choose from an empty sequence")]
    EmptyInput,
}

impl AppError {
    /// Renders the error for the page. Upstream payloads are shown
    /// verbatim in their serialized form; everything else uses the
    /// error's own description.
    pub fn present(&self) -> String {
        match self {
            AppError::Upstream(payload) => {
                serde_json::to_string(payload).unwrap_or_else(|_| payload.to_string())
            }
            AppError::Transport(message) => message.clone(),
            AppError::NoResults { .. } | AppError::EmptyInput => self.to_string(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
