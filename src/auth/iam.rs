//! IBM Cloud IAM token exchange.
//!
//! Trades a long-lived API key for a short-lived bearer token. No retry and
//! no backoff here; every failure propagates to the caller unchanged.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::auth::token::Token;
use crate::auth::transport::Transport;
use crate::config::constants::{IAM_GRANT_TYPE, IAM_TOKEN_URL};
use crate::error::TokenError;

#[derive(Debug, Deserialize)]
struct IamTokenResponse {
    access_token: String,
    /// Absolute expiry, UNIX seconds.
    expiration: i64,
}

/// Exchange `api_key` for a fresh token at the public IAM endpoint.
///
/// An empty key is not special-cased; the exchange itself rejects it.
pub async fn generate_token<T: Transport>(transport: &T, api_key: &str) -> Result<Token, TokenError> {
    generate_token_at(transport, IAM_TOKEN_URL, api_key).await
}

pub(crate) async fn generate_token_at<T: Transport>(
    transport: &T,
    token_url: &str,
    api_key: &str,
) -> Result<Token, TokenError> {
    debug!(url = %token_url, "exchanging API key for IAM token");

    let form = [("grant_type", IAM_GRANT_TYPE), ("apikey", api_key)];
    let response = transport.send_form(token_url, &form).await?;

    let status = response.status();
    if !status.is_success() {
        warn!(%status, "IAM token exchange rejected");
        return Err(TokenError::Status(status));
    }

    let body = response.text().await?;
    let parsed: IamTokenResponse = serde_json::from_str(&body)?;
    if parsed.access_token.is_empty() {
        return Err(TokenError::EmptyToken);
    }

    Ok(Token::new(parsed.access_token, parsed.expiration))
}
