use serde::Deserialize;
use serde::Serialize;
use std::env;

/// Represents all user prefs. Intended for saving to a file. editing in settings dialog, etc.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UserPrefs {
    login_path: String,
    notice_secs: u64,
}

impl UserPrefs {
    /// # Environment Variables
    /// - `MARKET_LOGIN_PATH`: where unauthenticated users are sent. defaults to "/login".
    /// - `MARKET_NOTICE_SECS`: seconds a notification stays on screen. defaults to 4.
    pub fn from_env() -> Self {
        const LOGIN_PATH: &str = "/login";
        const NOTICE_SECS: u64 = 4;

        let login_path = env::var("MARKET_LOGIN_PATH")
            .ok()
            .filter(|s| s.starts_with('/'))
            .unwrap_or_else(|| LOGIN_PATH.to_string());

        let notice_secs = env::var("MARKET_NOTICE_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(NOTICE_SECS);

        Self {
            login_path,
            notice_secs,
        }
    }

    /// The authentication entry point.
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn notice_secs(&self) -> u64 {
        self.notice_secs
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}
