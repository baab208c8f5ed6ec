//! Read-only user source trait
//!
//! Handlers never see the concrete store. They receive a [`UserSource`]
//! through [`AppState`](crate::state::AppState), so the static seed can be
//! swapped for a real backend without touching the query pipeline.

use std::future::Future;
use std::sync::Arc;

use super::error::RepositoryError;
use crate::models::User;

/// Result type for user source operations
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Read-only access to the user collection
///
/// Uses RPITIT (Return Position Impl Trait In Traits) so implementors write
/// plain `async fn` bodies.
///
/// # Example
///
/// ```rust,ignore
/// impl UserSource for PgUserSource {
///     async fn all_users(&self) -> RepositoryResult<Arc<[User]>> {
///         let rows = sqlx::query_as!(User, "SELECT * FROM users ORDER BY id")
///             .fetch_all(&self.pool)
///             .await
///             .map_err(|e| RepositoryError::unavailable(RepositoryOperation::ListAll, e.to_string()))?;
///         Ok(rows.into())
///     }
/// }
/// ```
pub trait UserSource: Send + Sync {
    /// Every user, in storage order
    ///
    /// Storage order matters: stable sorts keep it for equal keys.
    fn all_users(&self) -> impl Future<Output = RepositoryResult<Arc<[User]>>> + Send;

    /// Number of users in the source
    fn count(&self) -> impl Future<Output = RepositoryResult<usize>> + Send {
        async move { Ok(self.all_users().await?.len()) }
    }
}
