//! Blocking LangSmith prompt hub client.
//!
//! Publishing a prompt takes up to five requests:
//!
//! 1. `GET /repos/-/{name}` to see whether the prompt exists (404 = no)
//! 2. `POST /repos/` to create it, or `PATCH /repos/-/{name}` to refresh metadata
//! 3. `GET /commits/-/{name}/?limit=1` for the latest commit hash
//! 4. `POST /commits/-/{name}` with the manifest, parented on that hash
//! 5. `GET /settings` (once per client) for the organization id in the locator
//!
//! The `-` owner means "the tenant the API key belongs to".

use super::types::{
    CommitList, CreateCommitRequest, CreateCommitResponse, CreateRepoRequest, ErrorBody,
    TenantSettings, UpdateRepoRequest,
};
use super::{HubError, PromptHub, PushOptions, PushReceipt, PushStatus};
use crate::config::HubConfig;
use crate::template::PromptTemplate;
use log::debug;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::OnceLock;
use std::time::Duration;

const TIMEOUT_SECS: u64 = 30;
const OWNER: &str = "-";
const SHORT_HASH_LEN: usize = 8;

pub struct LangSmithClient {
    client: Client,
    api_url: String,
    host_url: String,
    api_key: SecretString,
    workspace_id: Option<String>,
    settings: OnceLock<TenantSettings>,
}

impl LangSmithClient {
    pub fn new(config: &HubConfig) -> Result<Self, HubError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build()?;
        let api_url = config.endpoint.trim_end_matches('/').to_string();

        Ok(Self {
            client,
            host_url: host_url(&api_url),
            api_url,
            api_key: config.api_key.clone(),
            workspace_id: config.workspace_id.clone(),
            settings: OnceLock::new(),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.api_url, path);
        debug!("{} {}", method, url);

        let mut req = self
            .client
            .request(method, url)
            .header("Accept", "application/json")
            .header("x-api-key", self.api_key.expose_secret());
        // An empty workspace id names no tenant; let the key's default apply.
        if let Some(workspace_id) = self.workspace_id.as_deref().filter(|w| !w.is_empty()) {
            req = req.header("X-Tenant-Id", workspace_id);
        }
        req
    }

    fn tenant_settings(&self) -> Result<&TenantSettings, HubError> {
        if let Some(settings) = self.settings.get() {
            return Ok(settings);
        }
        let resp = check(self.request(Method::GET, "/settings").send()?)?;
        let settings: TenantSettings = decode(resp)?;
        Ok(self.settings.get_or_init(|| settings))
    }

    fn prompt_exists(&self, name: &str) -> Result<bool, HubError> {
        let resp = self
            .request(Method::GET, &format!("/repos/{}/{}", OWNER, name))
            .send()?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        check(resp)?;
        Ok(true)
    }

    fn create_prompt(&self, name: &str, options: &PushOptions) -> Result<(), HubError> {
        let body = CreateRepoRequest {
            repo_handle: name,
            description: options.description.as_deref().unwrap_or(""),
            readme: "",
            tags: &[],
            is_public: false,
        };
        check(self.request(Method::POST, "/repos/").json(&body).send()?)?;
        debug!("created prompt {}", name);
        Ok(())
    }

    fn update_prompt(&self, name: &str, description: &str) -> Result<(), HubError> {
        let body = UpdateRepoRequest { description };
        check(
            self.request(Method::PATCH, &format!("/repos/{}/{}", OWNER, name))
                .json(&body)
                .send()?,
        )?;
        Ok(())
    }

    fn latest_commit_hash(&self, name: &str) -> Result<Option<String>, HubError> {
        let resp = check(
            self.request(Method::GET, &format!("/commits/{}/{}/", OWNER, name))
                .query(&[("limit", "1"), ("offset", "0")])
                .send()?,
        )?;
        let list: CommitList = decode(resp)?;
        Ok(list.commits.into_iter().next().map(|c| c.commit_hash))
    }

    fn create_commit(
        &self,
        name: &str,
        manifest: &Value,
        parent: Option<&str>,
    ) -> Result<(Option<String>, PushStatus), HubError> {
        let body = CreateCommitRequest {
            manifest,
            parent_commit: parent,
        };
        let resp = self
            .request(Method::POST, &format!("/commits/{}/{}", OWNER, name))
            .json(&body)
            .send()?;

        if resp.status() == StatusCode::CONFLICT {
            debug!("{}: nothing to commit", name);
            return Ok((parent.map(str::to_string), PushStatus::Unchanged));
        }

        let created: CreateCommitResponse = decode(check(resp)?)?;
        Ok((Some(created.commit.commit_hash), PushStatus::Committed))
    }

    fn prompt_url(&self, name: &str, commit_hash: Option<&str>) -> Result<String, HubError> {
        let settings = self.tenant_settings()?;
        let mut url = format!("{}/prompts/{}", self.host_url, name);
        if let Some(hash) = commit_hash {
            url.push('/');
            url.push_str(short_hash(hash));
        }
        url.push_str("?organizationId=");
        url.push_str(&settings.id);
        Ok(url)
    }
}

impl PromptHub for LangSmithClient {
    fn push_prompt(
        &self,
        name: &str,
        prompt: &PromptTemplate,
        options: &PushOptions,
    ) -> Result<PushReceipt, HubError> {
        if self.prompt_exists(name)? {
            if let Some(description) = options.description.as_deref() {
                self.update_prompt(name, description)?;
            }
        } else {
            self.create_prompt(name, options)?;
        }

        let parent = self.latest_commit_hash(name)?;
        let (commit_hash, status) =
            self.create_commit(name, &prompt.to_manifest(), parent.as_deref())?;
        let url = self.prompt_url(name, commit_hash.as_deref())?;

        Ok(PushReceipt {
            url,
            commit_hash,
            status,
        })
    }
}

/// Turn a non-success response into [`HubError::Status`].
fn check(resp: Response) -> Result<Response, HubError> {
    let status = resp.status();
    debug!("-> {}", status);
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().unwrap_or_default();
    Err(HubError::Status {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, HubError> {
    let body = resp.text()?;
    serde_json::from_str(&body).map_err(|e| HubError::Decode(format!("{}: {}", e, truncate(&body, 200))))
}

/// Prefer the API's `detail` field; fall back to the raw body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: Value::String(detail),
        }) => detail,
        Ok(ErrorBody { detail }) => detail.to_string(),
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => truncate(body, 200).to_string(),
    }
}

/// Web UI base derived from the API base: drops an `api` host label and a
/// trailing `/api` or `/api/v1` path.
pub(crate) fn host_url(api_url: &str) -> String {
    let mut url = api_url.trim_end_matches('/');
    for suffix in ["/api/v1", "/api"] {
        if let Some(stripped) = url.strip_suffix(suffix) {
            url = stripped;
            break;
        }
    }

    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let (host, path) = match rest.find('/') {
        Some(idx) => rest.split_at(idx),
        None => (rest, ""),
    };

    let labels: Vec<&str> = host.split('.').filter(|label| *label != "api").collect();
    if labels.is_empty() {
        return url.to_string();
    }
    format!("{}://{}{}", scheme, labels.join("."), path)
}

fn short_hash(hash: &str) -> &str {
    hash.get(..SHORT_HASH_LEN).unwrap_or(hash)
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
