use anyhow::Result;
use clap::Parser;
use upvotes::config::{Config, SettingsBuilder};
use upvotes::{Command, CommandContext, RankCommand, constants, logging};
use upvotes_github::GitHubClient;

#[derive(Parser)]
#[command(name = "upvotes")]
#[command(about = "Rank a repository's open GitHub issues by net upvotes")]
#[command(version)]
struct Cli {
    /// Repository owner (default: facebook)
    #[arg(long)]
    owner: Option<String>,

    /// Repository name (default: react)
    #[arg(long)]
    repo: Option<String>,

    /// GitHub URL of the repository, sets both owner and repo
    #[arg(long, conflicts_with_all = ["owner", "repo"])]
    repo_url: Option<String>,

    /// Configuration file path (default: upvotes.yaml, ignored if absent)
    #[arg(short, long)]
    config: Option<String>,

    /// Number of open issues to fetch (1-100)
    #[arg(long)]
    per_page: Option<u8>,

    /// Only print the top N issues
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Output in JSON format for machine consumption
    #[arg(long)]
    json: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // A missing .env is fine
    dotenvy::dotenv().ok();
    logging::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(constants::config::DEFAULT_CONFIG_FILE)?,
    };

    let settings = SettingsBuilder::new()
        .with_config(&config)
        .with_owner(cli.owner)
        .with_repo(cli.repo)
        .with_repo_url(cli.repo_url.as_deref())?
        .with_per_page(cli.per_page)
        .build()?;

    // Resolve the token before any request goes out
    let client = GitHubClient::from_env()?
        .with_api_base(&settings.api_base)
        .with_user_agent(&settings.user_agent)
        .with_per_page(settings.per_page);

    let context = CommandContext { settings };
    RankCommand {
        source: client,
        json: cli.json,
        limit: cli.limit,
    }
    .execute(&context)
    .await
}
