//! In-memory, immutable user source

use std::collections::HashSet;
use std::sync::Arc;

use super::error::RepositoryError;
use super::seed::seed_users;
use super::traits::{RepositoryResult, UserSource};
use crate::models::User;

/// A fixed collection held for the life of the process
///
/// Cloning is cheap; every clone shares the same records.
#[derive(Debug, Clone)]
pub struct StaticUserSource {
    users: Arc<[User]>,
}

impl StaticUserSource {
    /// Wrap a collection, rejecting duplicate ids
    pub fn new(users: Vec<User>) -> RepositoryResult<Self> {
        let mut seen = HashSet::with_capacity(users.len());
        if let Some(dup) = users.iter().find(|u| !seen.insert(u.id)) {
            return Err(RepositoryError::duplicate_id(dup.id));
        }
        Ok(Self {
            users: users.into(),
        })
    }

    /// The built-in directory
    pub fn seeded() -> RepositoryResult<Self> {
        Self::new(seed_users())
    }

    /// Number of records, without going through the async trait
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the source holds no records
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserSource for StaticUserSource {
    async fn all_users(&self) -> RepositoryResult<Arc<[User]>> {
        Ok(Arc::clone(&self.users))
    }
}
