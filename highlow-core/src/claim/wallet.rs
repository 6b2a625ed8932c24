use crate::AccountId;
use parking_lot::RwLock;

/// Supplies the connected account, if any
pub trait WalletIdentity: Send + Sync {
    fn account(&self) -> Option<AccountId>;
}

/// Wallet connection that can be switched at runtime
#[derive(Debug, Default)]
pub struct ConnectedWallet {
    account: RwLock<Option<AccountId>>,
}

impl ConnectedWallet {
    pub fn connected(account: AccountId) -> Self {
        Self {
            account: RwLock::new(Some(account)),
        }
    }

    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn connect(&self, account: AccountId) {
        tracing::info!("Wallet connected: {}", account.shortened());
        *self.account.write() = Some(account);
    }

    pub fn disconnect(&self) {
        if let Some(account) = self.account.write().take() {
            tracing::info!("Wallet disconnected: {}", account.shortened());
        }
    }

    pub fn is_connected(&self) -> bool {
        self.account.read().is_some()
    }
}

impl WalletIdentity for ConnectedWallet {
    fn account(&self) -> Option<AccountId> {
        self.account.read().clone()
    }
}
