use crate::error::{GameError, Result};
use crate::{AccountId, TokenAmount};
use serde::{Deserialize, Serialize};

pub const DEFAULT_REWARD: TokenAmount = TokenAmount(10);
pub const DEFAULT_TOKEN_CONTRACT: &str = "0xf0Fb0F1c703b1129634e042e459Ec41cF79650B7";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Tokens paid out for a winning round
    pub reward: TokenAmount,
    pub token_contract: AccountId,
    pub chain: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            reward: DEFAULT_REWARD,
            token_contract: AccountId::from_static(DEFAULT_TOKEN_CONTRACT),
            chain: "sepolia".to_string(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        if self.reward == TokenAmount::ZERO {
            return Err(GameError::config("Reward must be greater than 0"));
        }

        if self.chain.trim().is_empty() {
            return Err(GameError::config("Chain name cannot be empty"));
        }

        Ok(())
    }
}
