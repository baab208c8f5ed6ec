//! Distinct tag enumeration

use std::collections::HashSet;

use crate::models::User;

/// Every distinct tag across `users`, in first-encounter order
pub fn distinct_tags<'a, I>(users: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a User>,
{
    let mut seen = HashSet::new();
    users
        .into_iter()
        .flat_map(|u| u.tags.iter())
        .filter(|tag| seen.insert(*tag))
        .cloned()
        .collect()
}
