use std::env;

use crate::config::constants::{
    DEFAULT_API_VERSION, IAM_TOKEN_URL, WATSONX_API_KEY_ENV_VAR, WATSONX_PROJECT_ID_ENV_VAR,
};
use crate::config::region::Region;

/// Construction options for a [`Model`](crate::model::Model).
///
/// Resolution is layered: an explicit setter beats the environment, which
/// beats the hard-coded default. Every setter overrides exactly one field.
#[derive(Debug, Clone)]
pub struct ModelOptions {
    pub(crate) url: Option<String>,
    pub(crate) region: Region,
    pub(crate) api_version: String,
    pub(crate) api_key: String,
    pub(crate) project_id: String,
    pub(crate) iam_endpoint: String,
}

impl ModelOptions {
    /// Defaults with the API key and project id read from the process
    /// environment (`WATSONX_API_KEY`, `WATSONX_PROJECT_ID`).
    pub fn from_env() -> Self {
        Self::from_env_with(|name| env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env), but with an injected lookup so
    /// resolution can be exercised without touching the real environment.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            url: None,
            region: Region::default(),
            api_version: DEFAULT_API_VERSION.to_string(),
            api_key: lookup(WATSONX_API_KEY_ENV_VAR).unwrap_or_default(),
            project_id: lookup(WATSONX_PROJECT_ID_ENV_VAR).unwrap_or_default(),
            iam_endpoint: IAM_TOKEN_URL.to_string(),
        }
    }

    /// Use this base URL verbatim instead of deriving it from the region.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = project_id.into();
        self
    }

    /// Point the token exchange at a non-default IAM endpoint
    /// (private endpoints, proxies).
    pub fn iam_endpoint(mut self, iam_endpoint: impl Into<String>) -> Self {
        self.iam_endpoint = iam_endpoint.into();
        self
    }
}
