//! Route table

use axum::{routing::get, Router};

use crate::{
    handlers::{list_tags, list_users},
    health::{health, readiness},
    repository::UserSource,
    state::AppState,
};

/// Build the application router with state applied
///
/// The listing lives at `listing.base_path` and tags at `<base_path>/tags`.
pub fn router<S>(state: AppState<S>) -> Router
where
    S: UserSource + 'static,
{
    let listing = &state.config().listing;
    let users_path = listing.base_path.clone();
    let tags_path = listing.tags_path();

    Router::new()
        .route(&users_path, get(list_users::<S>))
        .route(&tags_path, get(list_tags::<S>))
        .route("/health", get(health::<S>))
        .route("/ready", get(readiness::<S>))
        .with_state(state)
}
