use crate::identity::Identity;
use crate::identity::Role;
use crate::identity::UserId;
use std::env;
use std::str::FromStr;

/// The identity this process serves requests as.
///
/// Session issuance happens elsewhere; until it is wired in, the signed-in
/// actor is configured through the environment.
#[derive(Clone, PartialEq, Debug)]
pub struct SessionPrefs {
    user_id: String,
    role: Role,
}

impl SessionPrefs {
    /// Creates a SessionPrefs instance from environment variables,
    /// with a conservative in-code default.
    ///
    /// # Environment Variables
    /// - `MARKET_USER_ID`: opaque id of the signed-in actor. defaults to "anonymous".
    /// - `MARKET_ROLE`: "guest", "buyer", "seller" or "admin" (case-insensitive).
    ///   Unknown values fall back to guest.
    pub fn from_env() -> Self {
        const USER_ID: &str = "anonymous";

        let user_id = env::var("MARKET_USER_ID")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| USER_ID.to_string());

        let role = env::var("MARKET_ROLE")
            .ok()
            .map(|s| Self::parse_role(&s))
            .unwrap_or_default();

        Self { user_id, role }
    }

    fn parse_role(s: &str) -> Role {
        match Role::from_str(s.trim()) {
            Ok(role) => role,
            Err(_) => {
                dioxus_logger::tracing::warn!("unknown MARKET_ROLE {:?}, using guest", s);
                Role::Guest
            }
        }
    }

    pub fn identity(&self) -> Identity {
        Identity::new(UserId::new(self.user_id.clone()), self.role)
    }
}

impl Default for SessionPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}
