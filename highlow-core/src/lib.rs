//! High or Low game core
//!
//! A number in `1..=100` is drawn and the player guesses whether it is above
//! the midpoint. A winning round can be claimed once for a fixed token reward.

pub mod claim;
pub mod config;
pub mod draw;
pub mod error;
pub mod ledger;
pub mod resolver;
pub mod session;
pub mod types;

pub use claim::{
    is_claimable, ClaimGate, ClaimReceipt, ClaimRequest, ConnectedWallet, TransactionSubmitter,
    TxReceipt, WalletIdentity,
};
pub use config::GameConfig;
pub use draw::{EntropySource, FixedEntropy, OsEntropy, ThreadRngEntropy};
pub use error::{GameError, Result};
pub use ledger::TokenLedger;
pub use resolver::resolve;
pub use session::{ClaimConfirmation, GameSession, SessionSnapshot};
pub use types::{AccountId, Choice, ClaimState, DrawnNumber, Outcome, RoundResult, TokenAmount};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_win_claim_reset_replay() {
        let account = AccountId::parse("0x5555555555555555555555555555555555555555").unwrap();
        let wallet = Arc::new(ConnectedWallet::connected(account.clone()));
        let ledger = Arc::new(TokenLedger::in_memory());
        let gate = ClaimGate::new(wallet, ledger.clone(), &GameConfig::default());

        let mut session = GameSession::new(Box::new(FixedEntropy::new(vec![80, 50])));

        let first = session.submit_guess(Choice::High).unwrap();
        assert_eq!(first.outcome, Outcome::Win);
        assert!(gate.can_claim(&session));

        gate.claim(&mut session).await.unwrap();
        assert!(!is_claimable(&session.snapshot()));

        session.reset();
        assert_eq!(session.snapshot(), SessionSnapshot::Idle);

        let second = session.submit_guess(Choice::Low).unwrap();
        assert_eq!(second.drawn.value(), 50);
        assert_eq!(second.outcome, Outcome::Win);
        assert_eq!(session.claim_state(), Some(ClaimState::Unclaimed));
        assert_eq!(ledger.balance_of(&account), TokenAmount(10));
    }
}
