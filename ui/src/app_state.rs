use api::identity::Identity;
use api::prefs::user_prefs::UserPrefs;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, PartialEq, Eq)]
pub struct AppStateData {
    pub identity: Identity,
    pub prefs: UserPrefs,
}

/// Startup data that never changes while the app runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(identity: Identity, prefs: UserPrefs) -> Self {
        Self(Arc::new(AppStateData { identity, prefs }))
    }
}
