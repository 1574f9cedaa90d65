mod cli;
mod error;
mod export;
mod github;
mod records;
mod types;

use clap::Parser;
use cli::Cli;
use colored::*;
use github::GitHubClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let cli = Cli::parse();

    // An unsupported output path is fatal before any network activity.
    export::validate_output_path(&cli.output)?;

    println!("{}", "GitHub Stargazers Export".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());

    let client = GitHubClient::new(cli.token)?;

    match client.fetch_all_stargazers(&cli.username, &cli.repository).await {
        Ok(table) => {
            export::write_csv(&cli.output, &table).await?;
            println!(
                "✅ {} stargazers written to {}",
                table.len(),
                cli.output.display()
            );
        }
        Err(e) => {
            // Surfaced fetch errors are logged and produce no output file.
            println!("{} {}", "❌ Export failed:".red().bold(), e);
        }
    }

    Ok(())
}
