use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

// GitHub API response structures
#[derive(Debug, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub stargazers_count: u32,
    pub stargazers_url: String,
}

/// One star event: who starred and when.
///
/// The user payload stays untyped so flattening keeps every field the API
/// returns, not just the ones we know about.
#[derive(Debug, Deserialize)]
pub struct Stargazer {
    pub starred_at: DateTime<Utc>,
    pub user: Map<String, Value>,
}
