use thiserror::Error;

/// Failures of client requests.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request could not be sent or its body could not be read.
    #[error("Failed to send request: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    ///
    /// `message` is taken from the `{"error": ...}` body when present.
    #[error("Request failed with status {status}: {message}")]
    Api {
        /// HTTP status code returned
        status: u16,
        /// Error message from the response body
        message: String,
    },

    /// A response or cached item did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}
