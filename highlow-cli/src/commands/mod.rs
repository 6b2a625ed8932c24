pub mod balance;
pub mod play;
pub mod wallet;

pub use balance::show_balance;
pub use play::{play_interactive, play_once};
pub use wallet::{handle_wallet_command, WalletCommands};

use crate::config::CliConfig;
use highlow_core::{ClaimGate, ConnectedWallet, Result, TokenLedger};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const LEDGER_FILE: &str = "ledger.json";

/// Collaborators shared by all commands
pub struct AppContext {
    pub data_dir: PathBuf,
    pub config: CliConfig,
    pub wallet: Arc<ConnectedWallet>,
    pub ledger: Arc<TokenLedger>,
    pub gate: ClaimGate,
}

impl AppContext {
    pub async fn new(data_dir: &Path, config: CliConfig) -> Result<Self> {
        config.game.validate()?;

        let wallet = Arc::new(match &config.connected_account {
            Some(account) => ConnectedWallet::connected(account.clone()),
            None => ConnectedWallet::disconnected(),
        });
        let ledger = Arc::new(TokenLedger::open(&data_dir.join(LEDGER_FILE)).await?);
        let gate = ClaimGate::new(wallet.clone(), ledger.clone(), &config.game);

        tracing::debug!(
            "Loaded context from {} (wallet connected: {})",
            data_dir.display(),
            wallet.is_connected()
        );

        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            config,
            wallet,
            ledger,
            gate,
        })
    }

    pub async fn save_config(&self) -> Result<()> {
        self.config.save(&self.data_dir).await
    }
}
