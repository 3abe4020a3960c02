use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored trip leg route could not be decoded back into coordinates.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to decode route of trip leg {leg_id}: {source}")]
    InvalidStoredRoute {
        /// Trip leg whose route column is malformed
        leg_id: i32,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Ingestion of a single point returned no saved point.
    #[error("Ingestion for device {0} returned no saved point")]
    MissingSavedPoint(String),
}
