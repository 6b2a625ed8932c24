use crate::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The player's guess for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    High,
    Low,
}

impl Choice {
    pub const ALL: [Choice; 2] = [Choice::High, Choice::Low];
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::High => write!(f, "High"),
            Choice::Low => write!(f, "Low"),
        }
    }
}

impl FromStr for Choice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" | "h" => Ok(Choice::High),
            "low" | "l" => Ok(Choice::Low),
            other => Err(format!("Invalid guess: {}. Expected high or low", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    pub fn is_win(self) -> bool {
        matches!(self, Outcome::Win)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win => write!(f, "Win"),
            Outcome::Lose => write!(f, "Lose"),
        }
    }
}

/// A number in `1..=100` drawn for exactly one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DrawnNumber(u8);

impl DrawnNumber {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GameError::OutOfRange(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DrawnNumber {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<DrawnNumber> for u8 {
    fn from(n: DrawnNumber) -> Self {
        n.0
    }
}

impl fmt::Display for DrawnNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A resolved round. Only exists while the session is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round_id: Uuid,
    pub choice: Choice,
    pub drawn: DrawnNumber,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimState {
    Unclaimed,
    Claimed,
}

/// Whole token units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TokenAmount(pub u64);

impl TokenAmount {
    pub const ZERO: TokenAmount = TokenAmount(0);

    pub fn units(self) -> u64 {
        self.0
    }

    pub fn checked_add(self, other: TokenAmount) -> Option<TokenAmount> {
        self.0.checked_add(other.0).map(TokenAmount)
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Wallet account identifier (`0x` + 40 hex digits), stored lowercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(String);

impl AccountId {
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| GameError::InvalidAccount(format!("{} is missing the 0x prefix", s)))?;

        if digits.len() != 40 {
            return Err(GameError::InvalidAccount(format!(
                "{} must have 40 hex digits, found {}",
                s,
                digits.len()
            )));
        }

        hex::decode(digits).map_err(|e| GameError::InvalidAccount(format!("{}: {}", s, e)))?;

        Ok(Self(format!("0x{}", digits.to_ascii_lowercase())))
    }

    /// For addresses known to be well formed at compile time
    pub(crate) fn from_static(s: &'static str) -> Self {
        Self(s.to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form for display, e.g. `0x1234...abcd`
    pub fn shortened(&self) -> String {
        let len = self.0.len();
        format!("{}...{}", &self.0[..6], &self.0[len - 4..])
    }
}

impl FromStr for AccountId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AccountId {
    type Error = GameError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<AccountId> for String {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0xf0Fb0F1c703b1129634e042e459Ec41cF79650B7";

    #[test]
    fn test_drawn_number_bounds() {
        assert!(DrawnNumber::new(1).is_ok());
        assert!(DrawnNumber::new(100).is_ok());
        assert!(matches!(DrawnNumber::new(0), Err(GameError::OutOfRange(0))));
        assert!(matches!(
            DrawnNumber::new(101),
            Err(GameError::OutOfRange(101))
        ));
    }

    #[test]
    fn test_drawn_number_rejects_out_of_range_json() {
        assert!(serde_json::from_str::<DrawnNumber>("42").is_ok());
        assert!(serde_json::from_str::<DrawnNumber>("0").is_err());
    }

    #[test]
    fn test_choice_parsing() {
        assert_eq!("High".parse::<Choice>().unwrap(), Choice::High);
        assert_eq!(" l ".parse::<Choice>().unwrap(), Choice::Low);
        assert!("medium".parse::<Choice>().is_err());
    }

    #[test]
    fn test_account_parse_and_shorten() {
        let account = AccountId::parse(ADDR).unwrap();
        assert_eq!(account.as_str(), "0xf0fb0f1c703b1129634e042e459ec41cf79650b7");
        assert_eq!(account.shortened(), "0xf0fb...50b7");
    }

    #[test]
    fn test_account_ignores_case() {
        let mixed = AccountId::parse(ADDR).unwrap();
        let upper = AccountId::parse(&ADDR.to_uppercase()).unwrap();
        assert_eq!(mixed, upper);
        assert_eq!(AccountId::from_static(ADDR), mixed);
    }

    #[test]
    fn test_account_rejects_malformed() {
        assert!(AccountId::parse("f0Fb0F1c703b1129634e042e459Ec41cF79650B7").is_err());
        assert!(AccountId::parse("0x1234").is_err());
        assert!(AccountId::parse("0xzzFb0F1c703b1129634e042e459Ec41cF79650B7").is_err());
    }
}
