use super::AppContext;
use crate::view;
use dialoguer::{Confirm, Select};
use highlow_core::{Choice, GameError, GameSession, Result, WalletIdentity};

/// Offer the claim for a won round and report how it went
async fn offer_claim(ctx: &AppContext, session: &mut GameSession, ask: bool) -> Result<()> {
    if !highlow_core::is_claimable(&session.snapshot()) {
        return Ok(());
    }

    if !ctx.gate.can_claim(session) {
        println!("Connect a wallet to claim your prize: highlow wallet connect <address>");
        return Ok(());
    }

    if ask {
        let claim = Confirm::new()
            .with_prompt(format!("Claim {} tokens to your wallet?", ctx.gate.reward()))
            .default(true)
            .interact()?;
        if !claim {
            return Ok(());
        }
    }

    match ctx.gate.claim(session).await {
        Ok(receipt) => {
            println!("Prize claimed! {} tokens sent.", receipt.tx.quantity);
            println!("Transaction: {}", receipt.tx.tx_hash);
        }
        // the round stays claimable, so the player can try again
        Err(GameError::Transaction(msg)) => eprintln!("Claim failed: {}", msg),
        Err(e) => return Err(e),
    }

    Ok(())
}

fn print_account(ctx: &AppContext) {
    let account = ctx.wallet.account();
    let balance = account
        .as_ref()
        .map(|a| ctx.ledger.balance_of(a))
        .unwrap_or_default();
    println!("{}", view::account_line(account.as_ref(), balance));
}

pub async fn play_interactive(ctx: &AppContext, session: &mut GameSession) -> Result<()> {
    println!("High or Low Game");
    print_account(ctx);

    loop {
        println!();
        println!("{}", view::render(&session.snapshot()));

        let mut items: Vec<String> = Choice::ALL.iter().map(|c| c.to_string()).collect();
        items.push("Quit".to_string());
        let selection = Select::new()
            .with_prompt("Your guess")
            .items(&items)
            .default(0)
            .interact()?;

        let Some(&choice) = Choice::ALL.get(selection) else {
            break;
        };

        session.submit_guess(choice)?;
        println!("{}", view::render(&session.snapshot()));

        offer_claim(ctx, session, true).await?;

        let again = Confirm::new()
            .with_prompt("Try again?")
            .default(true)
            .interact()?;
        if !again {
            break;
        }

        session.reset();
        print_account(ctx);
    }

    Ok(())
}

/// Play a single round without prompts
pub async fn play_once(
    ctx: &AppContext,
    session: &mut GameSession,
    choice: Choice,
    claim: bool,
) -> Result<()> {
    session.submit_guess(choice)?;
    println!("{}", view::render(&session.snapshot()));

    if claim {
        offer_claim(ctx, session, false).await?;
    } else if ctx.gate.can_claim(session) {
        println!("Run with --claim to claim {} tokens", ctx.gate.reward());
    }

    Ok(())
}
