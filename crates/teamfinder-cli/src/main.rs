use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use teamfinder_application::TeamfinderApp;
use teamfinder_core::role::Role;
use teamfinder_core::storage::LocalStorage;
use teamfinder_infrastructure::{ConfigService, FileLocalStorage, capture_launch_environment};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "teamfinder")]
#[command(about = "Teamfinder - find a team for your next hackathon", long_about = None)]
struct Cli {
    /// Backend base URL (overrides config and TEAMFINDER_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Config file to load instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Storage file holding the session token
    #[arg(long, global = true)]
    storage: Option<PathBuf>,

    /// Launch URL carrying tgWebAppData, as if opened from a chat link
    #[arg(long, global = true)]
    launch_url: Option<String>,

    /// Use the development login even when dev mode is off
    #[arg(long, global = true)]
    dev_login: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and show who you are
    Login,
    /// Forget the stored session
    Logout,
    /// Show your profile
    Me,
    /// List hackathons
    Hackathons {
        /// Search text
        #[arg(short, long)]
        query: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        offset: Option<u32>,
    },
    /// Show one hackathon and your application to it
    Hackathon { id: u64 },
    /// List the skill catalogue, marking yours
    Skills,
    /// Replace your bio
    Bio { text: String },
    /// Replace your skills
    SetSkills { slugs: Vec<String> },
    /// List your achievements
    Achievements,
    /// Apply to a hackathon
    Apply {
        hackathon_id: u64,
        #[arg(short, long)]
        role: Role,
    },
    /// List your applications
    Applications,
    /// Withdraw an application
    Withdraw { id: u64 },
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("teamfinder=info"));
    let builder = tracing_subscriber::fmt().with_writer(std::io::stderr);
    let _ = match filter {
        Ok(filter) => builder.with_env_filter(filter).try_init(),
        Err(_) => builder.try_init(),
    };
}

fn build_app(cli: &Cli) -> Result<TeamfinderApp> {
    let config_service = match &cli.config {
        Some(path) => ConfigService::with_path(path.clone()),
        None => ConfigService::new(),
    };
    let mut config = config_service.load()?;
    if let Some(url) = &cli.api_url {
        config.api_base_url = url.clone();
    }
    if cli.dev_login {
        config.force_dev_login = true;
    }

    let storage: Arc<dyn LocalStorage> = match &cli.storage {
        Some(path) => Arc::new(FileLocalStorage::with_path(path.clone())),
        None => Arc::new(FileLocalStorage::new()?),
    };

    let mut environment = capture_launch_environment();
    if let Some(url) = &cli.launch_url {
        environment.url = Some(url.clone());
    }
    tracing::debug!(
        "[Cli] api={}, storage={}, launch_url={}",
        config.api_base_url,
        cli.storage
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "default".to_string()),
        environment.url.is_some()
    );

    let app = TeamfinderApp::new(config, storage, environment)?;
    Ok(app)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let app = build_app(&cli)?;

    match cli.command {
        Commands::Login => commands::session::login(&app).await?,
        Commands::Logout => commands::session::logout(&app).await?,
        Commands::Me => commands::profile::me(&app).await?,
        Commands::Hackathons {
            query,
            limit,
            offset,
        } => commands::hackathons::list(&app, query, limit, offset).await?,
        Commands::Hackathon { id } => commands::hackathons::show(&app, id).await?,
        Commands::Skills => commands::profile::skills(&app).await?,
        Commands::Bio { text } => commands::profile::bio(&app, text).await?,
        Commands::SetSkills { slugs } => commands::profile::set_skills(&app, slugs).await?,
        Commands::Achievements => commands::profile::achievements(&app).await?,
        Commands::Apply { hackathon_id, role } => {
            commands::applications::apply(&app, hackathon_id, role).await?
        }
        Commands::Applications => commands::applications::list(&app).await?,
        Commands::Withdraw { id } => commands::applications::withdraw(&app, id).await?,
    }

    Ok(())
}
