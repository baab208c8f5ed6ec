//! HTTP handlers
//!
//! - [`list_users`]: `GET /api/users`, the paginated listing
//! - [`list_tags`]: `GET /api/users/tags`, distinct tag labels
//! - [`UserListQuery`]: raw query string, validated into
//!   [`ListingParams`](crate::listing::ListingParams)

mod query;
mod users;

pub use query::UserListQuery;
pub use users::{list_tags, list_users};
