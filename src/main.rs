use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use hazy::auth::{AuthService, FileTokenStore, Session};
use hazy::backend::{ApiClient, Backend, HttpBackend};
use hazy::config::Config;
use hazy::constants::{APP_NAME, LOGGED_OUT};
use hazy::logger::Logger;
use hazy::ui::{run_app, AppComponent};
use hazy::vocabulary::{CommandAudioPlayer, Vocabulary};

#[derive(Parser, Debug)]
#[command(name = "hazy")]
#[command(version)]
#[command(about = "Look up English words and keep a personal vocabulary list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write a default configuration file and exit
    #[arg(long)]
    generate_config: bool,

    /// Forget the stored session and exit
    #[arg(long)]
    logout: bool,

    /// Override the API base URL
    #[arg(long, env = "HAZY_API_URL")]
    base_url: Option<String>,

    /// Log at debug level to the log file
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.generate_config {
        let path = match cli.config {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    config.validate()?;

    let logger = Logger::init(&config.logging, cli.debug)?;
    info!("{} starting against {}", APP_NAME, config.api.base_url);

    let store = match &config.session.token_file {
        Some(path) => FileTokenStore::new(path.clone()),
        None => FileTokenStore::at_default_location()?,
    };

    let session = Session::new();
    let client = ApiClient::new(&config.api.base_url, config.api.request_timeout(), session.clone())
        .context("Failed to create HTTP client")?;
    let backend: Arc<dyn Backend> = Arc::new(HttpBackend::new(client));

    let mut auth = AuthService::new(Arc::clone(&backend), session, Box::new(store));
    auth.rehydrate();

    if cli.logout {
        auth.logout();
        println!("{LOGGED_OUT}");
        return Ok(());
    }

    let vocabulary = Vocabulary::new(backend, CommandAudioPlayer::from_config(&config.audio));
    let app = AppComponent::new(&config.ui, auth, vocabulary, logger);

    run_app(app).await
}
