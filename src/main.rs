use anyhow::Result;
use clap::Parser;
use sitefeed::{
    DEFAULT_CONTRIBUTOR_LIMIT, RepoId, SiteConfig, commands,
    config::{DEFAULT_API_URL, DEFAULT_USER_AGENT},
};

/// sitefeed - release and contributor data for the project website
///
/// Fetches the latest release and top contributors from the GitHub API and
/// prints them as JSON for the site build. Upstream failures never fail the
/// command: a missing release prints `null`, missing contributors print `[]`.
///
/// Examples:
///   sitefeed release
///   sitefeed --repo owner/repo contributors --limit 10
#[derive(Parser, Debug)]
#[command(author, version = env!("SITEFEED_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// GitHub API URL
    #[arg(
        long = "api-url",
        env = "SITEFEED_API_URL",
        value_name = "URL",
        default_value = DEFAULT_API_URL,
        global = true
    )]
    api_url: String,

    /// Repository to read, in the format "owner/repo"
    #[arg(
        long,
        env = "SITEFEED_REPO",
        value_name = "OWNER/REPO",
        default_value_t = SiteConfig::default().repo,
        global = true
    )]
    repo: RepoId,

    /// User-Agent header sent with every request
    #[arg(
        long = "user-agent",
        env = "SITEFEED_USER_AGENT",
        default_value = DEFAULT_USER_AGENT,
        global = true
    )]
    user_agent: String,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print the latest release with its platform downloads
    Release,

    /// Print the platform downloads of the latest release
    Downloads,

    /// Print the top contributors
    Contributors(ContributorsArgs),

    /// Print the release and contributors together
    Summary(ContributorsArgs),
}

#[derive(clap::Args, Debug)]
struct ContributorsArgs {
    /// Maximum number of contributors to request
    #[arg(long, short = 'n', default_value_t = DEFAULT_CONTRIBUTOR_LIMIT)]
    limit: u32,
}

impl Cli {
    fn config(&self) -> SiteConfig {
        SiteConfig {
            api_url: self.api_url.clone(),
            repo: self.repo.clone(),
            user_agent: self.user_agent.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let feed = cli.config().feed()?;
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Release => commands::release(&feed, &mut out).await?,
        Commands::Downloads => commands::downloads(&feed, &mut out).await?,
        Commands::Contributors(args) => {
            commands::contributors(&feed, args.limit, &mut out).await?
        }
        Commands::Summary(args) => commands::summary(&feed, args.limit, &mut out).await?,
    }
    Ok(())
}
