//! Shared constants and invariants

/// Version string sent as the `version` query parameter on gateway calls.
pub const DEFAULT_API_VERSION: &str = "2023-05-29";

/// Environment variable holding the long-lived IBM Cloud API key.
pub const WATSONX_API_KEY_ENV_VAR: &str = "WATSONX_API_KEY";

/// Environment variable holding the watsonx project identifier.
pub const WATSONX_PROJECT_ID_ENV_VAR: &str = "WATSONX_PROJECT_ID";

/// IBM Cloud IAM token exchange endpoint.
pub const IAM_TOKEN_URL: &str = "https://iam.cloud.ibm.com/identity/token";

/// Grant type for the apikey-to-token exchange.
pub const IAM_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";
