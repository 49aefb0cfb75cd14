use thiserror::Error;

/// Errors surfaced by the RcodeZero API client.
///
/// Transport and decoding failures are passed through to the caller
/// unchanged; the client performs no retries or recovery of its own.
#[derive(Debug, Error)]
pub enum Error {
    /// The client was built without an API token.
    #[error("rcodezero API token is not provided")]
    TokenMissing,

    /// The configured base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    /// A header value (token or user agent) contained invalid characters.
    #[error("invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    /// The HTTP request itself failed.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the JSON shape the endpoint promises.
    #[error("could not decode API response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
