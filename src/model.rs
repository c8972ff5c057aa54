//! Credential holder for the watsonx.ai gateway.
//!
//! Owns the endpoint configuration, the API key and exactly one IAM token at
//! a time. The token is fetched during construction and replaced wholesale
//! on refresh; `&mut self` on the refresh operations keeps unsynchronized
//! concurrent mutation unrepresentable. Callers who share a holder across
//! tasks wrap it in their own lock.

use reqwest::Client;
use tracing::{debug, info};

use crate::auth::iam;
use crate::auth::token::Token;
use crate::auth::transport::Transport;
use crate::config::options::ModelOptions;
use crate::config::region::{base_url, Region};
use crate::error::{ModelError, TokenError};

pub struct Model<T = Client> {
    url: String,
    region: Region,
    api_version: String,

    token: Token,
    api_key: String,
    project_id: String,
    iam_endpoint: String,

    transport: T,
}

impl Model<Client> {
    /// Construct with a fresh `reqwest` client as the transport.
    pub async fn new(options: ModelOptions) -> Result<Self, ModelError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ModelError::Construction(TokenError::Transport(e)))?;
        Self::with_transport(options, client).await
    }
}

impl<T: Transport> Model<T> {
    /// Construct over an injected transport.
    ///
    /// Derives the base URL from the region unless an explicit override was
    /// set, then performs the initial token exchange. All-or-nothing: if the
    /// exchange fails no holder is returned.
    pub async fn with_transport(options: ModelOptions, transport: T) -> Result<Self, ModelError> {
        let ModelOptions {
            url,
            region,
            api_version,
            api_key,
            project_id,
            iam_endpoint,
        } = options;

        let url = url.unwrap_or_else(|| base_url(region));

        let token = iam::generate_token_at(&transport, &iam_endpoint, &api_key)
            .await
            .map_err(ModelError::Construction)?;

        info!(%region, %url, "watsonx client constructed");

        Ok(Self {
            url,
            region,
            api_version,
            token,
            api_key,
            project_id,
            iam_endpoint,
            transport,
        })
    }

    /// Refresh the token only when it has expired.
    ///
    /// Safe to call before every authorized request; a no-op while the
    /// current token is still valid.
    pub async fn check_and_refresh_token(&mut self) -> Result<(), TokenError> {
        if self.token.expired() {
            return self.refresh_token().await;
        }
        debug!("IAM token still valid, skipping refresh");
        Ok(())
    }

    /// Unconditionally exchange the stored API key for a new token.
    ///
    /// On failure the previous token (possibly expired) is left in place and
    /// the issuer error propagates unchanged. Callers forcing rotation after
    /// a rejected request use this directly, bypassing the expiry check.
    pub async fn refresh_token(&mut self) -> Result<(), TokenError> {
        let token = iam::generate_token_at(&self.transport, &self.iam_endpoint, &self.api_key).await?;
        info!(expires_at = token.expires_at, "IAM token refreshed");
        self.token = token;
        Ok(())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Current bearer token; call [`check_and_refresh_token`](Self::check_and_refresh_token) first.
    pub fn token(&self) -> &Token {
        &self.token
    }
}
