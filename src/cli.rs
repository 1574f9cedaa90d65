use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "github-stars-export")]
#[command(about = "Exports the stargazers of a GitHub repository to a CSV file")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub API token used for authenticated requests
    #[arg(short, long, env = "GITHUB_TOKEN")]
    pub token: String,

    /// Repository owner's username
    #[arg(short, long)]
    pub username: String,

    /// Repository name
    #[arg(short, long)]
    pub repository: String,

    /// Path to the output CSV file
    #[arg(short, long)]
    pub output: PathBuf,
}
