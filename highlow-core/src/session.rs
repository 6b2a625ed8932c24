use crate::draw::{self, EntropySource};
use crate::{resolver, Choice, ClaimState, GameError, Outcome, Result, RoundResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Read-only view of a session, enough to render it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionSnapshot {
    Idle,
    Resolved {
        result: RoundResult,
        claim: ClaimState,
    },
}

impl SessionSnapshot {
    pub fn result(&self) -> Option<&RoundResult> {
        match self {
            SessionSnapshot::Idle => None,
            SessionSnapshot::Resolved { result, .. } => Some(result),
        }
    }
}

/// Result of delivering a claim confirmation to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimConfirmation {
    Applied,
    /// The confirmed round was reset before the confirmation arrived
    Stale,
}

#[derive(Debug, Clone)]
struct ActiveRound {
    result: RoundResult,
    claim: ClaimState,
}

/// One play-through of High or Low: `Idle -> Resolved -> Idle`
pub struct GameSession {
    entropy: Box<dyn EntropySource>,
    round: Option<ActiveRound>,
}

impl GameSession {
    pub fn new(entropy: Box<dyn EntropySource>) -> Self {
        Self {
            entropy,
            round: None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.round.is_none()
    }

    pub fn current(&self) -> Option<&RoundResult> {
        self.round.as_ref().map(|r| &r.result)
    }

    pub fn claim_state(&self) -> Option<ClaimState> {
        self.round.as_ref().map(|r| r.claim)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        match &self.round {
            None => SessionSnapshot::Idle,
            Some(round) => SessionSnapshot::Resolved {
                result: round.result.clone(),
                claim: round.claim,
            },
        }
    }

    /// Draw a number and resolve the guess against it
    pub fn submit_guess(&mut self, choice: Choice) -> Result<RoundResult> {
        if let Some(round) = &self.round {
            tracing::warn!(
                "Rejected guess {} while round {} is resolved",
                choice,
                round.result.round_id
            );
            return Err(GameError::invalid_transition("submit a guess", "resolved"));
        }

        let drawn = draw::draw(self.entropy.as_mut())?;
        let outcome = resolver::resolve(choice, drawn);

        let result = RoundResult {
            round_id: Uuid::new_v4(),
            choice,
            drawn,
            outcome,
        };

        tracing::info!(
            "Round {} resolved: guessed {}, drew {}, {}",
            result.round_id,
            choice,
            drawn,
            outcome
        );

        self.round = Some(ActiveRound {
            result: result.clone(),
            claim: ClaimState::Unclaimed,
        });

        Ok(result)
    }

    /// Discard the current round, claimed or not
    pub fn reset(&mut self) {
        if let Some(round) = self.round.take() {
            tracing::info!(
                "Round {} reset ({:?})",
                round.result.round_id,
                round.claim
            );
        }
    }

    pub fn mark_claimed(&mut self) -> Result<()> {
        let round = self
            .round
            .as_mut()
            .ok_or_else(|| GameError::invalid_transition("mark a claim", "idle"))?;

        if round.result.outcome == Outcome::Lose {
            tracing::warn!(
                "Rejected claim for losing round {}",
                round.result.round_id
            );
            return Err(GameError::ClaimOnLosingRound);
        }

        if round.claim == ClaimState::Unclaimed {
            round.claim = ClaimState::Claimed;
            tracing::info!("Round {} reward claimed", round.result.round_id);
        }

        Ok(())
    }

    /// Apply a claim confirmation for `round_id`, ignoring it if that round is gone
    pub fn confirm_claim(&mut self, round_id: Uuid) -> Result<ClaimConfirmation> {
        let is_current = self
            .current()
            .map_or(false, |result| result.round_id == round_id);

        if !is_current {
            tracing::debug!("Ignoring claim confirmation for stale round {}", round_id);
            return Ok(ClaimConfirmation::Stale);
        }

        self.mark_claimed()?;
        Ok(ClaimConfirmation::Applied)
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("round", &self.round)
            .finish()
    }
}
