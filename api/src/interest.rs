//! Types for the "interesting item" relationship between an identity and a listing.

use serde::Deserialize;
use serde::Serialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Opaque identifier of an item, e.g. a listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_owned()))
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One identity's view of its relationship with one item.
///
/// `count` is the aggregate number of identities holding the relationship and
/// is only ever replaced wholesale from server data, never adjusted locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestSnapshot {
    pub is_starred: bool,
    pub count: u64,
}

impl InterestSnapshot {
    pub fn new(is_starred: bool, count: u64) -> Self {
        Self { is_starred, count }
    }
}

/// Acknowledgement of a toggle.
///
/// The remote layer does not always attach the new relationship state, so
/// `data` may be missing even when the mutation succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ToggleAck {
    #[serde(default)]
    pub data: Option<InterestSnapshot>,
}

impl ToggleAck {
    pub fn with(snapshot: InterestSnapshot) -> Self {
        Self {
            data: Some(snapshot),
        }
    }

    pub fn empty() -> Self {
        Self { data: None }
    }
}
