//! Server-side record of which identities find which listings interesting.
//!
//! Kept in process memory only; a restart forgets every relationship.

use crate::identity::Identity;
use crate::identity::UserId;
use crate::interest::InterestSnapshot;
use crate::interest::ItemId;
use crate::listing::catalog_entry;
use std::collections::HashMap;
use std::collections::HashSet;
use thiserror::Error;
use tokio::sync::OnceCell;
use tokio::sync::RwLock;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LedgerError {
    #[error("authentication required")]
    AuthenticationRequired,
    #[error("unknown listing {0}")]
    UnknownListing(ItemId),
}

#[derive(Debug, Default)]
pub struct InterestLedger {
    stars: HashMap<ItemId, HashSet<UserId>>,
}

impl InterestLedger {
    /// Flips `identity`'s relationship with `item` and returns the new state.
    pub fn toggle(
        &mut self,
        item: &ItemId,
        identity: &Identity,
    ) -> Result<InterestSnapshot, LedgerError> {
        if !identity.is_authenticated() {
            return Err(LedgerError::AuthenticationRequired);
        }
        if catalog_entry(item).is_none() {
            return Err(LedgerError::UnknownListing(item.clone()));
        }

        let admirers = self.stars.entry(item.clone()).or_default();
        if !admirers.remove(&identity.id) {
            admirers.insert(identity.id.clone());
        }

        Ok(InterestSnapshot::new(
            admirers.contains(&identity.id),
            admirers.len() as u64,
        ))
    }

    /// Reads `identity`'s relationship with `item` without changing it.
    pub fn snapshot(&self, item: &ItemId, identity: &Identity) -> InterestSnapshot {
        match self.stars.get(item) {
            Some(admirers) => InterestSnapshot::new(
                identity.is_authenticated() && admirers.contains(&identity.id),
                admirers.len() as u64,
            ),
            None => InterestSnapshot::default(),
        }
    }
}

/// The process-wide ledger, created on first use.
pub async fn ledger() -> &'static RwLock<InterestLedger> {
    static LEDGER: OnceCell<RwLock<InterestLedger>> = OnceCell::const_new();

    LEDGER
        .get_or_init(|| async { RwLock::new(InterestLedger::default()) })
        .await
}
