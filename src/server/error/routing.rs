use thiserror::Error;

/// Failures of the external truck routing API.
#[derive(Error, Debug)]
pub enum RoutingError {
    /// The routing service could not be reached or the response body could not be read.
    #[error("Failed to reach routing service: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status from the routing service.
    #[error("Routing service responded with status {status}: {body}")]
    Status {
        /// HTTP status code returned
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },

    /// Response could not be parsed.
    #[error("Malformed routing response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Response parsed but contained no route resources.
    #[error("Routing response contained no routes")]
    EmptyResponse,
}
