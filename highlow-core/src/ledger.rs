use crate::claim::{ClaimRequest, TransactionSubmitter, TxReceipt};
use crate::{AccountId, GameError, Result, TokenAmount};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Default, Serialize, Deserialize)]
struct LedgerData {
    balances: HashMap<AccountId, TokenAmount>,
}

/// Local reward token ledger, optionally backed by a JSON file
#[derive(Debug)]
pub struct TokenLedger {
    path: Option<PathBuf>,
    balances: RwLock<HashMap<AccountId, TokenAmount>>,
    // one claim at a time between reading balances and committing them
    submit_lock: Mutex<()>,
}

impl TokenLedger {
    pub fn in_memory() -> Self {
        Self {
            path: None,
            balances: RwLock::new(HashMap::new()),
            submit_lock: Mutex::new(()),
        }
    }

    /// Load balances from `path`. A missing file is an empty ledger.
    pub async fn open(path: &Path) -> Result<Self> {
        let data = match tokio::fs::read_to_string(path).await {
            Ok(content) => serde_json::from_str::<LedgerData>(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => LedgerData::default(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(
            "Opened ledger {} with {} accounts",
            path.display(),
            data.balances.len()
        );

        Ok(Self {
            path: Some(path.to_path_buf()),
            balances: RwLock::new(data.balances),
            submit_lock: Mutex::new(()),
        })
    }

    pub fn balance_of(&self, account: &AccountId) -> TokenAmount {
        self.balances
            .read()
            .get(account)
            .copied()
            .unwrap_or(TokenAmount::ZERO)
    }

    /// Balances after crediting `quantity` to `recipient`, without committing them
    fn credited(
        &self,
        recipient: &AccountId,
        quantity: TokenAmount,
    ) -> Result<(HashMap<AccountId, TokenAmount>, TokenAmount)> {
        let mut balances = self.balances.read().clone();
        let balance = balances.entry(recipient.clone()).or_default();
        *balance = balance
            .checked_add(quantity)
            .ok_or_else(|| GameError::transaction("balance overflow"))?;
        let balance = *balance;
        Ok((balances, balance))
    }

    async fn save(&self, balances: &HashMap<AccountId, TokenAmount>) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let content = serde_json::to_string_pretty(&LedgerData {
            balances: balances.clone(),
        })?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, content).await?;
        Ok(())
    }
}

fn tx_hash(request: &ClaimRequest, nonce: Uuid) -> String {
    let mut hasher = Sha256::new();
    hasher.update(request.recipient.as_str().as_bytes());
    hasher.update(request.quantity.units().to_le_bytes());
    hasher.update(request.round_id.as_bytes());
    hasher.update(nonce.as_bytes());
    format!("0x{}", hex::encode(hasher.finalize()))
}

#[async_trait]
impl TransactionSubmitter for TokenLedger {
    async fn submit_claim(&self, request: &ClaimRequest) -> Result<TxReceipt> {
        let _guard = self.submit_lock.lock().await;

        let (balances, balance) = self.credited(&request.recipient, request.quantity)?;
        self.save(&balances)
            .await
            .map_err(|e| GameError::transaction(format!("failed to persist ledger: {}", e)))?;
        *self.balances.write() = balances;

        let receipt = TxReceipt {
            tx_hash: tx_hash(request, Uuid::new_v4()),
            recipient: request.recipient.clone(),
            quantity: request.quantity,
            confirmed_at: Utc::now(),
        };

        tracing::info!(
            "Minted {} tokens to {} (balance {}): {}",
            request.quantity,
            request.recipient.shortened(),
            balance,
            receipt.tx_hash
        );

        Ok(receipt)
    }
}
