//! movie-night - console harness for the movie night ledger.
//!
//! `init` writes empty registries and starts a cycle now. `run` reads lines
//! from stdin: lines starting with the command prefix are dispatched, any
//! other line is posted to the nomination channel as a member nomination.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use movie_night::adapters::catalog::InMemoryCatalog;
use movie_night::adapters::channel::{load_snapshot, InMemoryChannel};
use movie_night::adapters::storage::FileRegistryStore;
use movie_night::adapters::wheel::{WheelOfNamesClient, WheelOfNamesConfig};
use movie_night::application::{
    Collaborators, CommandDispatcher, DispatcherSettings, Ledger, RegistryStores,
};
use movie_night::config::{AppConfig, StorageConfig, WheelConfig};
use movie_night::domain::foundation::{ChannelId, CommandMetadata, Timestamp};
use movie_night::domain::nomination::MessageOrigin;
use movie_night::domain::registry::WinnerRecord;

#[derive(Parser, Debug)]
#[command(name = "movie-night")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log filter; overrides RUST_LOG and the configured level
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write empty registries and start a new cycle now
    Init {
        /// Overwrite registries that already exist
        #[arg(long)]
        force: bool,
    },

    /// Read commands and nominations from stdin
    Run {
        /// JSON snapshot of the nomination channel to start from
        #[arg(long)]
        snapshot: Option<PathBuf>,

        /// JSON movie catalog fixture
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Channel the console speaks in
        #[arg(long, value_enum, default_value_t = ConsoleChannel::Terminal)]
        channel: ConsoleChannel,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ConsoleChannel {
    Terminal,
    Nomination,
    Test,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    init_tracing(cli.log_level.as_deref(), &config.bot.log_level);

    match cli.command {
        Commands::Init { force } => init(&config.storage, force).await,
        Commands::Run {
            snapshot,
            catalog,
            channel,
        } => run(&config, snapshot, catalog, channel).await,
    }
}

fn init_tracing(cli_level: Option<&str>, configured: &str) {
    let filter = match cli_level {
        Some(level) => EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info")),
        None => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(configured))
            .unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn file_stores(storage: &StorageConfig) -> RegistryStores {
    RegistryStores {
        fallen: Arc::new(FileRegistryStore::<String>::new(storage.fallen_path())),
        holdover: Arc::new(FileRegistryStore::<String>::new(storage.holdover_path())),
        winners: Arc::new(FileRegistryStore::<WinnerRecord>::new(storage.winners_path())),
        boundary: Arc::new(FileRegistryStore::<Timestamp>::new(storage.boundary_path())),
    }
}

fn wheel_client(wheel: &WheelConfig) -> WheelOfNamesClient {
    WheelOfNamesClient::new(
        WheelOfNamesConfig::new(wheel.api_key.clone())
            .with_base_url(wheel.base_url.clone())
            .with_timeout(wheel.timeout())
            .with_title(wheel.title.clone())
            .with_description(wheel.description.clone())
            .with_max_names(wheel.max_names)
            .with_share_mode(wheel.share_mode.clone()),
    )
}

async fn init(storage: &StorageConfig, force: bool) -> Result<()> {
    let existing: Vec<PathBuf> = [
        storage.fallen_path(),
        storage.holdover_path(),
        storage.winners_path(),
        storage.boundary_path(),
    ]
    .into_iter()
    .filter(|p| p.exists())
    .collect();

    if !existing.is_empty() && !force {
        bail!(
            "Registries already exist in {} (use --force to overwrite)",
            storage.data_dir.display()
        );
    }

    let ledger = Ledger::initialize(file_stores(storage), Timestamp::now())
        .await
        .context("Failed to initialize registries")?;
    let state = ledger.snapshot().await;
    println!(
        "Initialized {} with a new cycle starting {}",
        storage.data_dir.display(),
        state.boundary().start.display_short()
    );
    Ok(())
}

async fn run(
    config: &AppConfig,
    snapshot: Option<PathBuf>,
    catalog: Option<PathBuf>,
    console: ConsoleChannel,
) -> Result<()> {
    let ledger = Ledger::open(file_stores(&config.storage))
        .await
        .context("Failed to load registries (run `movie-night init` first)")?;

    let channel = match snapshot {
        Some(path) => load_snapshot(&path).await?,
        None => InMemoryChannel::new(),
    };

    let catalog = match catalog {
        Some(path) => {
            let json = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read catalog {}", path.display()))?;
            InMemoryCatalog::from_json(&json)
                .with_context(|| format!("Malformed catalog {}", path.display()))?
        }
        None => InMemoryCatalog::new(),
    };

    let channels = &config.channels;
    let channel_id = match console {
        ConsoleChannel::Terminal => channels.terminal_channel(),
        ConsoleChannel::Nomination => channels.nomination_channel(),
        ConsoleChannel::Test => match channels.test {
            Some(id) => ChannelId::new(id),
            None => bail!("No test channel configured"),
        },
    };
    let in_nomination_channel = channel_id == channels.nomination_channel();

    let dispatcher = CommandDispatcher::new(
        DispatcherSettings::from_config(config),
        Collaborators {
            ledger: Arc::new(ledger),
            channel: Arc::new(channel.clone()),
            wheel: Arc::new(wheel_client(&config.wheel)),
            catalog: Arc::new(catalog),
        },
    );

    tracing::info!(channel_id = %channel_id, "Console ready");
    let quit = format!("{}quit", dispatcher.prefix());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text == quit {
            break;
        }

        let metadata = CommandMetadata::new(channel_id);
        match dispatcher.dispatch(text, metadata).await {
            Some(replies) => {
                if in_nomination_channel {
                    channel.post(text, MessageOrigin::Command).await;
                }
                for reply in replies {
                    if in_nomination_channel {
                        channel.post(reply.trim_end(), MessageOrigin::Bot).await;
                    }
                    println!("{}", reply.trim_end());
                }
            }
            None if !text.starts_with(dispatcher.prefix()) => {
                channel.post(text, MessageOrigin::Member).await;
            }
            None => {}
        }
    }

    Ok(())
}
