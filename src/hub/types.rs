//! Wire types for the LangSmith prompt hub endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `GET /settings`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TenantSettings {
    pub id: String,
}

/// `POST /repos/`
#[derive(Debug, Serialize)]
pub(crate) struct CreateRepoRequest<'a> {
    pub repo_handle: &'a str,
    pub description: &'a str,
    pub readme: &'a str,
    pub tags: &'a [&'a str],
    pub is_public: bool,
}

/// `PATCH /repos/{owner}/{repo}`
#[derive(Debug, Serialize)]
pub(crate) struct UpdateRepoRequest<'a> {
    pub description: &'a str,
}

/// `POST /commits/{owner}/{repo}`
#[derive(Debug, Serialize)]
pub(crate) struct CreateCommitRequest<'a> {
    pub manifest: &'a Value,
    pub parent_commit: Option<&'a str>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CommitRef {
    pub commit_hash: String,
}

/// `GET /commits/{owner}/{repo}/`
#[derive(Debug, Deserialize)]
pub(crate) struct CommitList {
    #[serde(default)]
    pub commits: Vec<CommitRef>,
}

/// Response to `POST /commits/{owner}/{repo}`
#[derive(Debug, Deserialize)]
pub(crate) struct CreateCommitResponse {
    pub commit: CommitRef,
}

/// Error body shape used by the API (`{"detail": "..."}`).
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: Value,
}
