use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    /// Latitude or longitude was unset at fetch time. Raised before any
    /// network access.
    #[error("request not sent, latitude or longitude is missing")]
    MissingCoordinates,

    #[error("failed to construct request url")]
    InvalidUrl(#[from] url::ParseError),

    #[error("network request failed for {0}")]
    Network(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to parse response body as JSON")]
    ParseJson(#[source] reqwest::Error),

    #[error("failed to decode weather response")]
    Decode(#[from] serde_json::Error),
}
