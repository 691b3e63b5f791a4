//! Repository listing from a source-hosting REST API.
//!
//! The portfolio's projects panel lists a fixed user's public repositories.
//! This is an external collaborator, not gallery data: a single
//! unauthenticated GET with sort/page-size query parameters, no retry, no
//! pagination walking. Rate-limit and network failures surface as
//! [`LoadError::Fetch`]; a malformed response body as [`LoadError::Parse`].
//! The caller shows an error state with a manual retry action.

use crate::loader::LoadError;
use serde::Deserialize;
use tracing::debug;

pub const GITHUB_API: &str = "https://api.github.com";

/// Sort order accepted by the repositories endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoSort {
    Created,
    Updated,
    Pushed,
    FullName,
}

impl RepoSort {
    fn as_str(self) -> &'static str {
        match self {
            RepoSort::Created => "created",
            RepoSort::Updated => "updated",
            RepoSort::Pushed => "pushed",
            RepoSort::FullName => "full_name",
        }
    }
}

/// One repository summary from the response array. Only the fields the
/// projects panel renders; the rest of the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub created_at: String,
    pub updated_at: String,
}

/// Fetch `user`'s repositories: one GET, one attempt.
///
/// `api_base` is [`GITHUB_API`] in production. The decoding is covered
/// through [`parse_repos`]; this function only adds the transport.
pub fn fetch_repos(
    api_base: &str,
    user: &str,
    sort: RepoSort,
    per_page: u8,
) -> Result<Vec<RepoSummary>, LoadError> {
    // The API rejects requests without a User-Agent.
    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("viewfinder/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let url = format!("{api_base}/users/{user}/repos");
    debug!(%url, sort = sort.as_str(), per_page, "fetching repositories");

    let per_page = per_page.to_string();
    let body = client
        .get(&url)
        .query(&[("sort", sort.as_str()), ("per_page", per_page.as_str())])
        .send()?
        .error_for_status()?
        .text()?;

    let repos = parse_repos(&body)?;
    debug!(count = repos.len(), "repositories fetched");
    Ok(repos)
}

/// Parse a repositories response body (a JSON array of summaries).
pub fn parse_repos(raw: &str) -> Result<Vec<RepoSummary>, serde_json::Error> {
    serde_json::from_str(raw)
}
