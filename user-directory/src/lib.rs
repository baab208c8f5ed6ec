//! # user-directory
//!
//! Read-only HTTP listing over an in-memory user directory.
//!
//! ## Features
//!
//! - **Listing**: `GET /api/users` with search, tag filtering, sorting and pagination
//! - **Navigation**: first/last/next/previous links carrying the query state
//! - **Tags**: `GET /api/users/tags` enumerates every tag in first-seen order
//! - **Middleware stack**: request tracking, panic recovery, body size limits, CORS
//! - **Health checks**: Liveness and readiness probes
//! - **Graceful shutdown**: Proper signal handling (SIGTERM, SIGINT)
//!
//! ## Example
//!
//! ```rust,no_run
//! use user_directory::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let state = AppState::seeded(config.clone())?;
//!     let app = router(state);
//!
//!     Server::new(config).serve(app).await
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod health;
pub mod listing;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod repository;
pub mod routes;
pub mod server;
pub mod state;

pub mod prelude {
    pub use crate::config::{Config, ListingConfig, MiddlewareConfig, ServiceConfig};
    pub use crate::error::{Error, ErrorResponse, Result};
    pub use crate::handlers::{list_tags, list_users, UserListQuery};
    pub use crate::health::{health, readiness};
    pub use crate::listing::{
        process, ListingParams, SortField, SortOrder, TagMode, UserPage,
    };
    pub use crate::middleware::{
        request_id_layer, request_id_propagation_layer, sensitive_headers_layer,
        SENSITIVE_HEADERS,
    };
    pub use crate::models::User;
    pub use crate::observability::init_tracing;
    pub use crate::repository::{
        RepositoryError, RepositoryErrorKind, RepositoryOperation, RepositoryResult,
        StaticUserSource, UserSource,
    };
    pub use crate::routes::router;
    pub use crate::server::Server;
    pub use crate::state::AppState;

    pub use axum::{
        extract::{Query, State},
        routing::get,
        Json, Router,
    };
}
