use github_stars_export::error::StarsExportError;
use github_stars_export::github::{page_count, GitHubClient, PAGE_SIZE};

fn get_test_token() -> Option<String> {
    std::env::var("GITHUB_TOKEN").ok()
}

#[tokio::test]
async fn test_github_client_creation() {
    let client = GitHubClient::new("test_token".to_string());
    assert!(client.is_ok());
}

#[test]
fn test_repository_url() {
    let url = GitHubClient::repository_url("octocat", "Hello-World").unwrap();
    assert_eq!(url, "https://api.github.com/repos/octocat/Hello-World");
}

#[test]
fn test_repository_url_rejects_empty_parts() {
    let result = GitHubClient::repository_url("", "Hello-World");
    assert!(result.is_err());
    match result.unwrap_err() {
        StarsExportError::InvalidRepository(_) => {} // Expected
        other => panic!("Expected InvalidRepository error, got: {:?}", other),
    }

    let result = GitHubClient::repository_url("octocat", "");
    assert!(matches!(
        result.unwrap_err(),
        StarsExportError::InvalidRepository(_)
    ));
}

#[test]
fn test_repository_url_rejects_slash() {
    let result = GitHubClient::repository_url("octocat/Hello-World", "extra");
    assert!(result.is_err());
    match result.unwrap_err() {
        StarsExportError::InvalidRepository(_) => {} // Expected
        other => panic!("Expected InvalidRepository error, got: {:?}", other),
    }
}

#[test]
fn test_page_count_exact_multiple() {
    assert_eq!(page_count(90, PAGE_SIZE), 3);
    assert_eq!(page_count(30, PAGE_SIZE), 1);
}

#[test]
fn test_page_count_partial_page() {
    assert_eq!(page_count(91, PAGE_SIZE), 4);
    assert_eq!(page_count(29, PAGE_SIZE), 1);
    assert_eq!(page_count(1, PAGE_SIZE), 1);
}

#[test]
fn test_page_count_zero() {
    assert_eq!(page_count(0, PAGE_SIZE), 0);
}

#[tokio::test]
#[ignore = "Requires valid GitHub token"]
async fn test_get_repository() {
    let token = get_test_token().expect("GITHUB_TOKEN not set");
    let client = GitHubClient::new(token).expect("Failed to create client");

    let repo = client
        .get_repository("octocat", "Hello-World")
        .await
        .expect("Failed to get repository");

    assert_eq!(repo.name, "Hello-World");
    assert_eq!(repo.full_name, "octocat/Hello-World");
    assert!(repo.stargazers_url.starts_with("https://"));
    assert!(!repo.html_url.is_empty());
}

#[tokio::test]
#[ignore = "Requires valid GitHub token"]
async fn test_repository_not_found() {
    let token = get_test_token().expect("GITHUB_TOKEN not set");
    let client = GitHubClient::new(token).expect("Failed to create client");

    let result = client.get_repository("octocat", "no-such-repository").await;

    assert!(result.is_err());
    match result.unwrap_err() {
        StarsExportError::NotFound(_) => {} // Expected
        other => panic!("Expected NotFound error, got: {:?}", other),
    }
}

#[tokio::test]
#[ignore = "Requires valid GitHub token"]
async fn test_fetch_stargazers_page() {
    let token = get_test_token().expect("GITHUB_TOKEN not set");
    let client = GitHubClient::new(token).expect("Failed to create client");

    let repo = client
        .get_repository("octocat", "Hello-World")
        .await
        .expect("Failed to get repository");

    let stargazers = client
        .fetch_stargazers_page(&repo.stargazers_url, 1)
        .await
        .expect("Failed to fetch stargazers");

    assert!(!stargazers.is_empty(), "No stargazers found");
    assert!(stargazers.len() as u32 <= PAGE_SIZE);

    for stargazer in &stargazers {
        assert!(stargazer.user.contains_key("login"));
    }
}

#[tokio::test]
#[ignore = "Requires valid GitHub token"]
async fn test_fetch_all_stargazers() {
    let token = get_test_token().expect("GITHUB_TOKEN not set");
    let client = GitHubClient::new(token).expect("Failed to create client");

    let count = client
        .get_star_count("octocat", "Hello-World")
        .await
        .expect("Failed to get star count");

    let table = client
        .fetch_all_stargazers("octocat", "Hello-World")
        .await
        .expect("Failed to fetch stargazers");

    // Live repositories can change mid-fetch, so allow a small drift.
    let drift = (table.len() as i64 - count as i64).abs();
    assert!(drift <= PAGE_SIZE as i64, "Row count drifted by {}", drift);

    assert!(table.columns().contains(&"starred_at".to_string()));
    assert!(table.columns().contains(&"login".to_string()));
    assert!(!table.columns().contains(&"user".to_string()));
}
