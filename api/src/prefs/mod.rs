pub mod session_prefs;
pub mod user_prefs;
