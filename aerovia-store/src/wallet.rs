use aerovia_core::repository::StorageResult;
use aerovia_core::{LedgerError, Wallet, WalletLedger};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;

/// Per-user prepaid balances. The balance check and the subtraction happen
/// under one lock, so two concurrent debits can never jointly spend more
/// than the balance held when the first one commits.
pub struct InMemoryWalletLedger {
    wallets: Mutex<HashMap<String, Wallet>>,
}

impl InMemoryWalletLedger {
    pub fn new() -> Self {
        Self {
            wallets: Mutex::new(HashMap::new()),
        }
    }

    /// Seeding only. The booking core never increases a balance.
    pub async fn open_wallet(&self, user_id: &str, opening_balance: Decimal) {
        let mut wallets = self.wallets.lock().await;
        wallets.insert(
            user_id.to_string(),
            Wallet {
                user_id: user_id.to_string(),
                balance: opening_balance,
            },
        );
    }
}

impl Default for InMemoryWalletLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WalletLedger for InMemoryWalletLedger {
    async fn balance_of(&self, user_id: &str) -> StorageResult<Option<Wallet>> {
        let wallets = self.wallets.lock().await;
        Ok(wallets.get(user_id).cloned())
    }

    async fn debit_if_sufficient(
        &self,
        user_id: &str,
        amount: Decimal,
    ) -> Result<Decimal, LedgerError> {
        let mut wallets = self.wallets.lock().await;
        let wallet = wallets
            .get_mut(user_id)
            .ok_or_else(|| LedgerError::WalletNotFound(user_id.to_string()))?;

        if wallet.balance < amount {
            return Err(LedgerError::InsufficientFunds {
                balance: wallet.balance,
                required: amount,
            });
        }

        wallet.balance -= amount;
        debug!(user_id, amount = %amount, balance = %wallet.balance, "wallet debited");
        Ok(wallet.balance)
    }
}
