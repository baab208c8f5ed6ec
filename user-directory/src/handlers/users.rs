//! HTTP handlers for the user directory

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tracing::debug;

use super::query::UserListQuery;
use crate::{
    error::{Error, Result},
    listing::{self, UserPage},
    repository::UserSource,
    state::AppState,
};

/// List users: search, tag filter, sort, paginate
pub async fn list_users<S: UserSource>(
    State(state): State<AppState<S>>,
    query: std::result::Result<Query<UserListQuery>, QueryRejection>,
) -> Result<Json<UserPage>> {
    let Query(query) = query.map_err(|e| Error::BadRequest(e.body_text()))?;
    let listing_config = &state.config().listing;
    let params = query.validate(listing_config)?;

    let users = state.users().all_users().await?;
    let page = listing::process(&users, &params, &listing_config.base_path);

    debug!(
        page = page.current_page,
        limit = page.items_per_page,
        sort_by = %page.sort_by,
        order = %page.sort_order,
        total_items = page.total_items,
        returned = page.results.len(),
        "listed users"
    );

    Ok(Json(page))
}

/// Distinct tags across the whole directory
pub async fn list_tags<S: UserSource>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<String>>> {
    let users = state.users().all_users().await?;
    let tags = listing::distinct_tags(users.iter());

    debug!(count = tags.len(), "listed tags");

    Ok(Json(tags))
}
