use thiserror::Error;

// Error taxonomy for the flight-search client. Every fallible operation in
// the crate reports one of these kinds; nothing is swallowed on the way up.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Provider error {code}: {message}")]
    Provider { code: i64, message: String },

    #[error("Malformed provider response: missing {0}")]
    MalformedResponse(String),

    #[error("Backup I/O error: {0}")]
    Backup(#[from] std::io::Error),
}
