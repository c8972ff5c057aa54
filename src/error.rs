use thiserror::Error;

/// Any failure while exchanging the API key for a token.
///
/// The taxonomy is deliberately flat: callers of a refresh treat every
/// variant the same way (give up or retry at their own layer), the variants
/// only exist so logs carry the sub-cause.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Network-level failure reaching the identity endpoint.
    #[error("token exchange request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Identity endpoint answered with a non-success status.
    #[error("identity endpoint returned {0}")]
    Status(reqwest::StatusCode),

    /// Response body was not the expected JSON shape.
    #[error("malformed token response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Exchange succeeded but carried no token value.
    #[error("identity endpoint returned an empty token value")]
    EmptyToken,
}

/// Failure constructing a [`Model`](crate::model::Model).
#[derive(Debug, Error)]
pub enum ModelError {
    /// The initial token fetch failed; construction is all-or-nothing, so
    /// no holder exists after this.
    #[error("initial token fetch failed during construction")]
    Construction(#[source] TokenError),
}
