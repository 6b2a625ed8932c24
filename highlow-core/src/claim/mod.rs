//! Reward claims for winning rounds.
//!
//! The gate decides whether the current round may be claimed and forwards the
//! claim to a [`TransactionSubmitter`]. The session is only marked claimed once
//! the submitter confirms.

pub mod wallet;

pub use wallet::{ConnectedWallet, WalletIdentity};

use crate::session::{ClaimConfirmation, GameSession, SessionSnapshot};
use crate::{AccountId, ClaimState, GameConfig, GameError, Outcome, Result, TokenAmount};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// A claim forwarded to the transaction collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRequest {
    pub round_id: Uuid,
    pub recipient: AccountId,
    pub quantity: TokenAmount,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxReceipt {
    pub tx_hash: String,
    pub recipient: AccountId,
    pub quantity: TokenAmount,
    pub confirmed_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ClaimReceipt {
    pub tx: TxReceipt,
    pub confirmation: ClaimConfirmation,
}

/// Submits reward transfers and reports their confirmation
#[async_trait]
pub trait TransactionSubmitter: Send + Sync {
    async fn submit_claim(&self, request: &ClaimRequest) -> Result<TxReceipt>;
}

/// True when the round is a win that has not been claimed yet
pub fn is_claimable(snapshot: &SessionSnapshot) -> bool {
    matches!(
        snapshot,
        SessionSnapshot::Resolved {
            result,
            claim: ClaimState::Unclaimed,
        } if result.outcome == Outcome::Win
    )
}

pub struct ClaimGate {
    wallet: Arc<dyn WalletIdentity>,
    submitter: Arc<dyn TransactionSubmitter>,
    reward: TokenAmount,
}

impl ClaimGate {
    pub fn new(
        wallet: Arc<dyn WalletIdentity>,
        submitter: Arc<dyn TransactionSubmitter>,
        config: &GameConfig,
    ) -> Self {
        Self {
            wallet,
            submitter,
            reward: config.reward,
        }
    }

    pub fn reward(&self) -> TokenAmount {
        self.reward
    }

    /// Claimable round and a connected wallet
    pub fn can_claim(&self, session: &GameSession) -> bool {
        self.wallet.account().is_some() && is_claimable(&session.snapshot())
    }

    pub fn prepare(&self, session: &GameSession) -> Result<ClaimRequest> {
        let recipient = self.wallet.account().ok_or(GameError::WalletNotConnected)?;

        let snapshot = session.snapshot();
        if !is_claimable(&snapshot) {
            let reason = match &snapshot {
                SessionSnapshot::Idle => "no round has been played",
                SessionSnapshot::Resolved { result, .. } if !result.outcome.is_win() => {
                    "the round was lost"
                }
                SessionSnapshot::Resolved { .. } => "the reward was already claimed",
            };
            return Err(GameError::not_claimable(reason));
        }

        let round_id = snapshot
            .result()
            .map(|r| r.round_id)
            .ok_or_else(|| GameError::not_claimable("no round has been played"))?;

        Ok(ClaimRequest {
            round_id,
            recipient,
            quantity: self.reward,
        })
    }

    /// Submit the reward for the current round and mark it claimed on confirmation
    pub async fn claim(&self, session: &mut GameSession) -> Result<ClaimReceipt> {
        let request = self.prepare(session)?;

        tracing::info!(
            "Claiming {} tokens for round {} to {}",
            request.quantity,
            request.round_id,
            request.recipient
        );

        let tx = match self.submitter.submit_claim(&request).await {
            Ok(tx) => tx,
            Err(e) => {
                tracing::warn!("Claim for round {} failed: {}", request.round_id, e);
                return Err(match e {
                    e @ GameError::Transaction(_) => e,
                    other => GameError::transaction(other.to_string()),
                });
            }
        };

        let confirmation = session.confirm_claim(request.round_id)?;
        tracing::info!(
            "Claim for round {} confirmed in {} ({:?})",
            request.round_id,
            tx.tx_hash,
            confirmation
        );

        Ok(ClaimReceipt { tx, confirmation })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::FixedEntropy;
    use crate::ledger::TokenLedger;
    use crate::Choice;

    const PLAYER: &str = "0x1111111111111111111111111111111111111111";

    struct FailingSubmitter;

    #[async_trait]
    impl TransactionSubmitter for FailingSubmitter {
        async fn submit_claim(&self, _request: &ClaimRequest) -> Result<TxReceipt> {
            Err(GameError::transaction("transaction was not confirmed"))
        }
    }

    fn session(values: Vec<u8>) -> GameSession {
        GameSession::new(Box::new(FixedEntropy::new(values)))
    }

    fn connected() -> Arc<ConnectedWallet> {
        Arc::new(ConnectedWallet::connected(AccountId::parse(PLAYER).unwrap()))
    }

    fn gate(
        wallet: Arc<ConnectedWallet>,
        submitter: Arc<dyn TransactionSubmitter>,
    ) -> ClaimGate {
        ClaimGate::new(wallet, submitter, &GameConfig::default())
    }

    #[test]
    fn test_is_claimable_only_for_unclaimed_wins() {
        let mut s = session(vec![80]);
        assert!(!is_claimable(&s.snapshot()));

        s.submit_guess(Choice::High).unwrap();
        assert!(is_claimable(&s.snapshot()));

        s.mark_claimed().unwrap();
        assert!(!is_claimable(&s.snapshot()));
    }

    #[test]
    fn test_losing_round_is_not_claimable() {
        let mut s = session(vec![50]);
        s.submit_guess(Choice::High).unwrap();
        assert!(!is_claimable(&s.snapshot()));
    }

    #[test]
    fn test_disconnected_wallet_disables_claim_but_not_guessing() {
        let wallet = Arc::new(ConnectedWallet::disconnected());
        let gate = gate(wallet, Arc::new(TokenLedger::in_memory()));

        let mut s = session(vec![80]);
        s.submit_guess(Choice::High).unwrap();

        assert!(is_claimable(&s.snapshot()));
        assert!(!gate.can_claim(&s));
        assert!(matches!(gate.prepare(&s), Err(GameError::WalletNotConnected)));
    }

    #[test]
    fn test_prepare_carries_reward_and_recipient() {
        let gate = gate(connected(), Arc::new(TokenLedger::in_memory()));
        let mut s = session(vec![80]);
        let result = s.submit_guess(Choice::High).unwrap();

        let request = gate.prepare(&s).unwrap();
        assert_eq!(request.round_id, result.round_id);
        assert_eq!(request.quantity, TokenAmount(10));
        assert_eq!(request.recipient.as_str(), PLAYER);
    }

    #[tokio::test]
    async fn test_claim_marks_round_and_credits_ledger() {
        let ledger = Arc::new(TokenLedger::in_memory());
        let gate = gate(connected(), ledger.clone());

        let mut s = session(vec![80]);
        s.submit_guess(Choice::High).unwrap();

        let receipt = gate.claim(&mut s).await.unwrap();
        assert_eq!(receipt.confirmation, ClaimConfirmation::Applied);
        assert_eq!(s.claim_state(), Some(ClaimState::Claimed));
        assert!(!gate.can_claim(&s));

        let player = AccountId::parse(PLAYER).unwrap();
        assert_eq!(ledger.balance_of(&player), TokenAmount(10));

        assert!(matches!(
            gate.claim(&mut s).await,
            Err(GameError::NotClaimable(_))
        ));
        assert_eq!(ledger.balance_of(&player), TokenAmount(10));
    }

    #[tokio::test]
    async fn test_failed_submission_leaves_round_unclaimed() {
        let gate = gate(connected(), Arc::new(FailingSubmitter));

        let mut s = session(vec![80]);
        s.submit_guess(Choice::High).unwrap();

        assert!(matches!(
            gate.claim(&mut s).await,
            Err(GameError::Transaction(_))
        ));
        assert_eq!(s.claim_state(), Some(ClaimState::Unclaimed));
        assert!(gate.can_claim(&s));
    }

    #[tokio::test]
    async fn test_claim_on_losing_round_is_rejected() {
        let ledger = Arc::new(TokenLedger::in_memory());
        let gate = gate(connected(), ledger.clone());

        let mut s = session(vec![10]);
        s.submit_guess(Choice::High).unwrap();

        assert!(matches!(
            gate.claim(&mut s).await,
            Err(GameError::NotClaimable(_))
        ));
        assert_eq!(s.claim_state(), Some(ClaimState::Unclaimed));
        assert_eq!(
            ledger.balance_of(&AccountId::parse(PLAYER).unwrap()),
            TokenAmount::ZERO
        );
    }
}
