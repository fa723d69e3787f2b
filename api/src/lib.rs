//! This crate contains all shared fullstack server functions.

pub mod identity;
pub mod interest;
#[cfg(not(target_arch = "wasm32"))]
mod interest_ledger;
pub mod listing;
pub mod prefs;

use dioxus::prelude::*;
use identity::Identity;
use interest::ItemId;
use interest::ToggleAck;
use listing::Listing;
use prefs::session_prefs::SessionPrefs;
use prefs::user_prefs::UserPrefs;

pub type ApiError = anyhow::Error;

/// Retrieves the user's preferences.
///
/// In the future this may read from a settings file.  For now it just
/// returns the default settings, which read from env vars.
#[post("/api/get_user_prefs")]
pub async fn get_user_prefs() -> Result<UserPrefs, ApiError> {
    Ok(UserPrefs::default())
}

/// The identity requests are served as.
#[post("/api/current_identity")]
pub async fn current_identity() -> Result<Identity, ApiError> {
    Ok(SessionPrefs::from_env().identity())
}

/// All listings, each with the caller's interest attached.
#[post("/api/listings")]
pub async fn listings() -> Result<Vec<Listing>, ApiError> {
    let identity = SessionPrefs::from_env().identity();
    let ledger = interest_ledger::ledger().await.read().await;

    Ok(listing::CATALOG
        .iter()
        .map(|entry| entry.with_interest(ledger.snapshot(&ItemId::from(entry.id), &identity)))
        .collect())
}

/// Listings the caller has marked as interesting. Empty for guests.
#[post("/api/favorites")]
pub async fn favorites() -> Result<Vec<Listing>, ApiError> {
    let identity = SessionPrefs::from_env().identity();
    if !identity.is_authenticated() {
        return Ok(Vec::new());
    }
    let ledger = interest_ledger::ledger().await.read().await;

    Ok(listing::CATALOG
        .iter()
        .map(|entry| entry.with_interest(ledger.snapshot(&ItemId::from(entry.id), &identity)))
        .filter(|listing| listing.interest.is_starred)
        .collect())
}

/// Flips the caller's interest in one listing.
///
/// Carries no request body. On success the acknowledgement holds the new
/// relationship state.
#[post("/api/listings/{item_id}/interest")]
pub async fn toggle_interest(item_id: ItemId) -> Result<ToggleAck, ApiError> {
    let identity = SessionPrefs::from_env().identity();
    let snapshot = interest_ledger::ledger()
        .await
        .write()
        .await
        .toggle(&item_id, &identity)?;

    dioxus_logger::tracing::info!(
        "interest in {} by {} is now {} ({} total)",
        item_id,
        identity.id,
        snapshot.is_starred,
        snapshot.count
    );

    Ok(ToggleAck::with(snapshot))
}
