//! # watsonx client library
//!
//! Credential-holding client for the watsonx.ai gateway: resolves
//! configuration with layered precedence, builds the regional base URL and
//! manages the IAM token lifecycle (fetched at construction, transparently
//! refreshed on expiry).
//!
//! Modules:
//! - `config` — construction options, regions, shared constants
//! - `auth` — token type, HTTP transport seam, IAM token exchange
//! - `model` — the credential holder itself
//! - `error` — error taxonomy

pub mod auth;
pub mod config;
pub mod error;
pub mod model;
pub mod tests;

pub use crate::auth::iam::generate_token;
pub use crate::auth::token::Token;
pub use crate::auth::transport::Transport;
pub use crate::config::options::ModelOptions;
pub use crate::config::region::{base_url, Region};
pub use crate::error::{ModelError, TokenError};
pub use crate::model::Model;
