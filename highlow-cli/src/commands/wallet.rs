use super::AppContext;
use crate::view;
use clap::Subcommand;
use highlow_core::{AccountId, Result, WalletIdentity};

#[derive(Subcommand)]
pub enum WalletCommands {
    /// Connect a wallet account
    Connect {
        /// Account address (0x...)
        address: String,
    },
    /// Disconnect the current wallet
    Disconnect,
    /// Show the connected wallet and its balance
    Status,
}

pub async fn handle_wallet_command(cmd: WalletCommands, ctx: &mut AppContext) -> Result<()> {
    match cmd {
        WalletCommands::Connect { address } => {
            let account = AccountId::parse(&address)?;

            ctx.wallet.connect(account.clone());
            ctx.config.connected_account = Some(account.clone());
            ctx.save_config().await?;

            println!("Connected {}", account.shortened());
        }

        WalletCommands::Disconnect => {
            if !ctx.wallet.is_connected() {
                println!("No wallet connected.");
                return Ok(());
            }

            ctx.wallet.disconnect();
            ctx.config.connected_account = None;
            ctx.save_config().await?;

            println!("Logged out.");
        }

        WalletCommands::Status => match ctx.wallet.account() {
            Some(account) => {
                let balance = ctx.ledger.balance_of(&account);
                println!("Account: {}", account);
                println!("{}", view::account_line(Some(&account), balance));
                println!(
                    "Token contract: {} ({})",
                    ctx.config.game.token_contract, ctx.config.game.chain
                );
            }
            None => {
                println!("No wallet connected.");
                println!("Connect one with: highlow wallet connect <address>");
            }
        },
    }

    Ok(())
}
