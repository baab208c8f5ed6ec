//! Search and tag predicates

use super::params::TagMode;
use crate::models::User;

/// Case-insensitive substring match on name or email
///
/// `needle` must already be lower-cased; an empty needle matches everyone.
pub fn matches_search(user: &User, needle: &str) -> bool {
    needle.is_empty()
        || user.name.to_lowercase().contains(needle)
        || user.email.to_lowercase().contains(needle)
}

/// Tag predicate for the given mode
///
/// No requested tags, or an unrecognized mode, matches everyone.
pub fn matches_tags(user: &User, tags: &[String], mode: TagMode) -> bool {
    if tags.is_empty() {
        return true;
    }
    match mode {
        TagMode::All => tags.iter().all(|t| user.has_tag(t)),
        TagMode::Any => tags.iter().any(|t| user.has_tag(t)),
        TagMode::Unrecognized => true,
    }
}
