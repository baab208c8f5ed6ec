//! Application state management

use std::sync::Arc;

use crate::{
    config::Config,
    error::Result,
    repository::{StaticUserSource, UserSource},
};

/// Application state shared across handlers
///
/// Generic over the user source so handlers stay independent of storage.
/// Use `AppState` (the default) for the built-in static directory.
pub struct AppState<S = StaticUserSource> {
    config: Arc<Config>,
    users: Arc<S>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            users: Arc::clone(&self.users),
        }
    }
}

impl<S: UserSource> AppState<S> {
    /// Create state from a configuration and a user source
    pub fn new(config: Config, users: S) -> Self {
        Self {
            config: Arc::new(config),
            users: Arc::new(users),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the user source
    pub fn users(&self) -> &S {
        &self.users
    }
}

impl AppState {
    /// State backed by the built-in seed directory
    pub fn seeded(config: Config) -> Result<Self> {
        Ok(Self::new(config, StaticUserSource::seeded()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_state() {
        let state = AppState::seeded(Config::default()).unwrap();
        assert_eq!(state.config().service.port, 3000);
        assert_eq!(state.users().count().await.unwrap(), 35);
    }

    #[test]
    fn test_clone_shares_source() {
        let state = AppState::seeded(Config::default()).unwrap();
        let clone = state.clone();
        assert!(std::ptr::eq(state.users(), clone.users()));
    }
}
