use crate::error::{Result, StarsExportError};
use crate::records::StargazerTable;
use crate::types::{Repository, Stargazer};
use indicatif::ProgressBar;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

const API_BASE_URL: &str = "https://api.github.com";
/// GitHub's fixed page size for the stargazers endpoint.
pub const PAGE_SIZE: u32 = 30;
/// The star media type makes stargazer payloads carry `starred_at`.
const ACCEPT_STAR_JSON: &str = "application/vnd.github.v3.star+json";

pub struct GitHubClient {
    client: Client,
    token: String,
}

impl GitHubClient {
    pub fn new(token: String) -> Result<Self> {
        let client = Client::builder()
            .user_agent("github-stars-export/0.1.0")
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(GitHubClient { client, token })
    }

    /// Metadata endpoint for `owner/repo`. Validation only, no network call.
    pub fn repository_url(owner: &str, repo: &str) -> Result<String> {
        validate_identifier(owner)?;
        validate_identifier(repo)?;
        Ok(format!("{}/repos/{}/{}", API_BASE_URL, owner, repo))
    }

    async fn make_request(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .header("Accept", ACCEPT_STAR_JSON)
            .header("Authorization", format!("token {}", self.token))
            .send()
            .await?;

        match response.status() {
            reqwest::StatusCode::OK => Ok(response),
            reqwest::StatusCode::NOT_FOUND => {
                Err(StarsExportError::NotFound(format!("Resource not found: {}", url)))
            }
            reqwest::StatusCode::TOO_MANY_REQUESTS => {
                Err(StarsExportError::RateLimitExceeded("Too many requests".to_string()))
            }
            status => Err(StarsExportError::ApiError(status.as_u16())),
        }
    }

    pub async fn get_repository(&self, owner: &str, repo: &str) -> Result<Repository> {
        let url = Self::repository_url(owner, repo)?;
        let response = self.make_request(&url).await?;
        let repository: Repository = response.json().await?;
        Ok(repository)
    }

    pub async fn get_star_count(&self, owner: &str, repo: &str) -> Result<u32> {
        Ok(self.get_repository(owner, repo).await?.stargazers_count)
    }

    /// Fetch one page of stargazers from the repository's stargazers endpoint.
    pub async fn fetch_stargazers_page(
        &self,
        stargazers_url: &str,
        page: u32,
    ) -> Result<Vec<Stargazer>> {
        let url = page_url(stargazers_url, page)?;
        let response = self.make_request(url.as_str()).await?;
        let stargazers: Vec<Stargazer> = response.json().await?;
        Ok(stargazers)
    }

    /// Fetch every page of stargazers for `owner/repo` and merge them into
    /// one flat table.
    ///
    /// Pages 1 through `page_count(stargazers_count, PAGE_SIZE)` inclusive
    /// are fetched sequentially; a zero star count fetches no pages. Errors
    /// are terminal: no retry, no backoff.
    pub async fn fetch_all_stargazers(&self, owner: &str, repo: &str) -> Result<StargazerTable> {
        let repository = self.get_repository(owner, repo).await?;
        let pages = page_count(repository.stargazers_count, PAGE_SIZE);
        debug!(
            "{}: {} stargazers across {} pages",
            repository.full_name, repository.stargazers_count, pages
        );

        let mut table = StargazerTable::new();
        let progress = ProgressBar::new(pages as u64);
        for page in 1..=pages {
            let stargazers = self
                .fetch_stargazers_page(&repository.stargazers_url, page)
                .await?;
            debug!("page {}/{}: {} stargazers", page, pages, stargazers.len());
            table.extend(stargazers);
            progress.inc(1);
        }
        progress.finish();

        // Live repositories can gain or lose stars mid-fetch.
        if table.len() as u32 != repository.stargazers_count {
            warn!(
                "fetched {} stargazers but {} reports {}",
                table.len(),
                repository.full_name,
                repository.stargazers_count
            );
        }

        Ok(table)
    }
}

fn validate_identifier(part: &str) -> Result<()> {
    if part.is_empty() || part.contains('/') || part.contains(char::is_whitespace) {
        return Err(StarsExportError::InvalidRepository(format!(
            "Invalid repository name format: {}",
            part
        )));
    }
    Ok(())
}

/// Ceiling division of `total` records into pages of `page_size`.
pub fn page_count(total: u32, page_size: u32) -> u32 {
    total / page_size + u32::from(total % page_size > 0)
}

/// `stargazers_url` arrives as a URI template with an optional `{/privacy}`
/// expansion; drop the template part and append the page number.
fn page_url(stargazers_url: &str, page: u32) -> Result<Url> {
    let base = stargazers_url
        .split('{')
        .next()
        .unwrap_or(stargazers_url);
    let mut url = Url::parse(base)?;
    url.query_pairs_mut().append_pair("page", &page.to_string());
    Ok(url)
}
