use super::AppContext;
use highlow_core::{AccountId, GameError, Result, WalletIdentity};

pub async fn show_balance(ctx: &AppContext, address: Option<String>) -> Result<()> {
    let account = match address {
        Some(address) => AccountId::parse(&address)?,
        None => ctx.wallet.account().ok_or(GameError::WalletNotConnected)?,
    };

    let balance = ctx.ledger.balance_of(&account);
    println!("Balance for {}: {} tokens", account.shortened(), balance);

    Ok(())
}
