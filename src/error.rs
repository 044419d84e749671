use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid year for {var}: {input}")]
    InvalidYear { var: &'static str, input: String },

    #[error("Invalid number for {var}: {input}")]
    InvalidNumber { var: &'static str, input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Unsupported language: {input}")]
    UnsupportedLanguage { input: String },
}

#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("API reported failure (code {code})")]
    Rejected { code: i64 },

    #[error("response is missing `{0}`")]
    MissingField(&'static str),
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

#[derive(Debug, Error)]
pub(crate) enum StateError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize used dates: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub(crate) enum AnnotateError {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
