//! GitHub API Client
//!
//! Read-only access to the two endpoints the catalog needs: the
//! recursive tree listing for a branch, and raw-content retrieval per
//! file. No authentication; public repositories only.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;

use crate::types::RepoCoordinate;

/// Base URL for the GitHub REST API.
pub const GITHUB_API_BASE: &str = "https://api.github.com";
/// Base URL for raw file contents.
pub const GITHUB_RAW_BASE: &str = "https://raw.githubusercontent.com";

// api.github.com rejects requests without a User-Agent.
const USER_AGENT: &str = concat!("skillshelf/", env!("CARGO_PKG_VERSION"));

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One entry of a recursive tree listing. Only the path matters here.
#[derive(Clone, Debug, Deserialize)]
pub struct TreeEntry {
    pub path: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Response body of `GET /repos/{owner}/{name}/git/trees/{branch}?recursive=1`.
#[derive(Clone, Debug, Deserialize)]
pub struct TreeListing {
    pub tree: Vec<TreeEntry>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// GitHub client sharing one connection pool across all fetches.
#[derive(Clone)]
pub struct GithubClient {
    api_base: String,
    raw_base: String,
    http: Client,
}

impl GithubClient {
    pub fn new() -> Self {
        Self::with_base_urls(GITHUB_API_BASE, GITHUB_RAW_BASE)
    }

    /// Base URLs are injectable so tests can point at a local server.
    pub fn with_base_urls(api_base: &str, raw_base: &str) -> Self {
        Self {
            api_base: api_base.to_string(),
            raw_base: raw_base.to_string(),
            http: Client::new(),
        }
    }

    /// Fetch the recursive tree listing for the repository's branch.
    pub async fn fetch_tree(&self, repo: &RepoCoordinate) -> Result<TreeListing> {
        let url = format!(
            "{}/repos/{}/{}/git/trees/{}?recursive=1",
            self.api_base, repo.owner, repo.name, repo.branch,
        );

        let response = self
            .http
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .with_context(|| format!("Tree listing request failed: {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!(
                "GitHub tree listing returned {} for {}/{}@{}",
                response.status().as_u16(),
                repo.owner,
                repo.name,
                repo.branch,
            );
        }

        response
            .json()
            .await
            .context("Failed to parse tree listing response")
    }

    /// Fetch the raw text of a single file at `path` on the branch.
    pub async fn fetch_raw(&self, repo: &RepoCoordinate, path: &str) -> Result<String> {
        let url = format!(
            "{}/{}/{}/{}/{}",
            self.raw_base, repo.owner, repo.name, repo.branch, path,
        );

        let response = self
            .http
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .with_context(|| format!("Raw content request failed: {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Raw content fetch returned {} for {}",
                response.status().as_u16(),
                path,
            );
        }

        response
            .text()
            .await
            .with_context(|| format!("Failed to read raw content of {}", path))
    }
}
