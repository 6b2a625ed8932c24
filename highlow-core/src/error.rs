use thiserror::Error;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid transition: cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    #[error("Cannot claim a reward for a losing round")]
    ClaimOnLosingRound,

    #[error("Reward not claimable: {0}")]
    NotClaimable(String),

    #[error("No wallet connected")]
    WalletNotConnected,

    #[error("Drawn number {0} outside of 1..=100")]
    OutOfRange(u8),

    #[error("Entropy source failure: {0}")]
    Entropy(String),

    #[error("Transaction failed: {0}")]
    Transaction(String),

    #[error("Invalid account: {0}")]
    InvalidAccount(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dialog error: {0}")]
    Dialog(String),
}

impl GameError {
    pub fn invalid_transition(action: &'static str, state: &'static str) -> Self {
        Self::InvalidTransition { action, state }
    }

    pub fn entropy(msg: impl Into<String>) -> Self {
        Self::Entropy(msg.into())
    }

    pub fn transaction(msg: impl Into<String>) -> Self {
        Self::Transaction(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn not_claimable(msg: impl Into<String>) -> Self {
        Self::NotClaimable(msg.into())
    }
}

// conversion from dialoguer::Error
impl From<dialoguer::Error> for GameError {
    fn from(err: dialoguer::Error) -> Self {
        GameError::Dialog(err.to_string())
    }
}
