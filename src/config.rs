//! Hub configuration read from the process environment.
//!
//! | Variable                 | Required | Purpose                                  |
//! |--------------------------|----------|------------------------------------------|
//! | `LANGCHAIN_API_KEY`      | yes      | API key sent as `x-api-key`              |
//! | `LANGCHAIN_WORKSPACE_ID` | no       | Tenant context sent as `X-Tenant-Id`     |
//! | `LANGCHAIN_ORG_ID`       | no       | Shown in the banner only                 |
//! | `LANGCHAIN_ENDPOINT`     | no       | API base URL (falls back to `LANGSMITH_ENDPOINT`) |
//!
//! Nothing beyond presence is checked here; a bad key surfaces on the first
//! request.

use crate::error::{PushError, Result};
use secrecy::SecretString;

pub const API_KEY_VAR: &str = "LANGCHAIN_API_KEY";
pub const WORKSPACE_ID_VAR: &str = "LANGCHAIN_WORKSPACE_ID";
pub const ORG_ID_VAR: &str = "LANGCHAIN_ORG_ID";
pub const ENDPOINT_VAR: &str = "LANGCHAIN_ENDPOINT";
pub const ENDPOINT_FALLBACK_VAR: &str = "LANGSMITH_ENDPOINT";

/// Default LangSmith API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.smith.langchain.com";

/// Connection settings for the prompt hub.
#[derive(Debug)]
pub struct HubConfig {
    pub api_key: SecretString,
    pub workspace_id: Option<String>,
    pub org_id: Option<String>,
    pub endpoint: String,
}

impl HubConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, which returns a variable's value if set.
    ///
    /// An empty key counts as unset. The optional ids are kept exactly as
    /// read, empty strings included.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get(API_KEY_VAR)
            .ok_or_else(|| PushError::MissingCredential(API_KEY_VAR.to_string()))?;

        let endpoint = get(ENDPOINT_VAR)
            .or_else(|| get(ENDPOINT_FALLBACK_VAR))
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Ok(Self {
            api_key: SecretString::from(api_key),
            workspace_id: lookup(WORKSPACE_ID_VAR),
            org_id: lookup(ORG_ID_VAR),
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }
}
