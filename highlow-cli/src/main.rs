mod commands;
mod config;
mod view;

use clap::{Parser, Subcommand};
use commands::AppContext;
use highlow_core::{Choice, GameError, GameSession, ThreadRngEntropy};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "highlow")]
#[command(about = "High or Low - guess the number, win tokens")]
#[command(version)]
struct Cli {
    /// Data directory for wallet connection and token ledger
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively until you quit
    Play,
    /// Play a single round
    Guess {
        /// high or low
        choice: Choice,
        /// Claim the reward if the round is won
        #[arg(short, long)]
        claim: bool,
    },
    /// Wallet connection commands
    #[command(subcommand)]
    Wallet(commands::WalletCommands),
    /// Show the token balance of the connected wallet or an address
    Balance {
        /// Account address (defaults to the connected wallet)
        address: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Get data directory
    let data_dir = cli.data_dir.unwrap_or_else(config::default_data_dir);
    tokio::fs::create_dir_all(&data_dir).await?;

    let config = config::CliConfig::load(&data_dir).await?;

    // Initialize logging
    let log_level = if cli.verbose || config.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "highlow={},highlow_core={}",
            log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut ctx = AppContext::new(&data_dir, config).await?;
    let mut session = GameSession::new(Box::new(ThreadRngEntropy));

    let result = match cli.command {
        Commands::Play => commands::play_interactive(&ctx, &mut session).await,
        Commands::Guess { choice, claim } => {
            commands::play_once(&ctx, &mut session, choice, claim).await
        }
        Commands::Wallet(cmd) => commands::handle_wallet_command(cmd, &mut ctx).await,
        Commands::Balance { address } => commands::show_balance(&ctx, address).await,
    };

    if let Err(e) = result {
        match e {
            GameError::WalletNotConnected => {
                eprintln!("Error: No wallet connected");
                eprintln!("Use 'highlow wallet connect <address>' first");
            }
            GameError::InvalidAccount(msg) => {
                eprintln!("Error: Invalid account address: {}", msg);
            }
            GameError::Transaction(msg) => {
                eprintln!("Error: Claim transaction failed: {}", msg);
            }
            _ => {
                eprintln!("Error: {}", e);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
