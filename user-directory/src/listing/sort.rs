//! Field ordering
//!
//! Text fields compare with the CLDR root collation at tertiary strength:
//! letters compare without regard to accents or case first, punctuation
//! sorts ahead of digits, and lower-case sorts before upper-case when the
//! strings are otherwise equal. `"bob" < "Bob" < "carl"`, `"Adam" < "Émile"`.

use std::borrow::Cow;
use std::cmp::Ordering;

use icu_collator::{options::CollatorOptions, Collator, CollatorBorrowed};

use super::params::{SortField, SortOrder};
use crate::models::User;

/// Root-locale collator, or `None` if its data failed to load
pub fn root_collator() -> Option<CollatorBorrowed<'static>> {
    match Collator::try_new(Default::default(), CollatorOptions::default()) {
        Ok(collator) => Some(collator),
        Err(e) => {
            tracing::warn!(
                error = %e,
                "root collation unavailable, falling back to code point order"
            );
            None
        }
    }
}

fn compare_text(collator: Option<&CollatorBorrowed<'static>>, a: &str, b: &str) -> Ordering {
    match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    }
}

/// Compare two strings in root-locale collation order
pub fn collate(a: &str, b: &str) -> Ordering {
    compare_text(root_collator().as_ref(), a, b)
}

fn sort_by_text<F>(users: &mut [User], key: F)
where
    F: Fn(&User) -> Cow<'_, str>,
{
    let collator = root_collator();
    users.sort_by(|a, b| compare_text(collator.as_ref(), &key(a), &key(b)));
}

/// Stable sort ascending by `field`, then reverse the whole sequence for
/// [`SortOrder::Desc`]
///
/// Reversal (rather than a descending comparator) means users with equal
/// keys come out in reverse storage order under `desc`.
pub fn sort_users(users: &mut [User], field: SortField, order: SortOrder) {
    match field {
        SortField::Id => users.sort_by_key(|u| u.id),
        SortField::Age => users.sort_by_key(|u| u.age),
        SortField::Name => sort_by_text(users, |u| Cow::Borrowed(&u.name)),
        SortField::Email => sort_by_text(users, |u| Cow::Borrowed(&u.email)),
        SortField::Tags => sort_by_text(users, |u| Cow::Owned(u.joined_tags())),
    }

    if order == SortOrder::Desc {
        users.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::seed::seed_users;

    fn ids(users: &[User]) -> Vec<u32> {
        users.iter().map(|u| u.id).collect()
    }

    #[test]
    fn test_collate_ignores_case_first() {
        assert_eq!(collate("alice", "Bob"), Ordering::Less);
        assert_eq!(collate("Zed", "adam"), Ordering::Greater);
        assert_eq!(collate("bob", "Bob"), Ordering::Less);
        assert_eq!(collate("Bob", "carl"), Ordering::Less);
        assert_eq!(collate("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_collate_prefix_sorts_first() {
        assert_eq!(collate("john@example.com", "johnny@example.com"), Ordering::Less);
        assert_eq!(collate("Ann", "Anna"), Ordering::Less);
    }

    #[test]
    fn test_collate_accents_and_punctuation() {
        assert_eq!(collate("Émile", "Zoe"), Ordering::Less);
        assert_eq!(collate("Adam", "Émile"), Ordering::Less);
        assert_eq!(collate("a_b", "a1"), Ordering::Less);
        assert_eq!(collate("a1", "Adam"), Ordering::Less);
    }

    #[test]
    fn test_sort_by_name_is_locale_aware() {
        let mut users: Vec<User> = ["Zoe", "Émile", "a1", "Adam", "a_b"]
            .into_iter()
            .zip(1..)
            .map(|(name, id)| User::new(id, name, 30, "x@example.com", ["a"]))
            .collect();

        sort_users(&mut users, SortField::Name, SortOrder::Asc);
        let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["a_b", "a1", "Adam", "Émile", "Zoe"]);

        sort_users(&mut users, SortField::Name, SortOrder::Desc);
        assert_eq!(users[0].name, "Zoe");
        assert_eq!(users[1].name, "Émile");
    }

    #[test]
    fn test_sort_by_age_asc_is_stable() {
        let mut users = seed_users();
        sort_users(&mut users, SortField::Age, SortOrder::Asc);
        // 23, 24, 25, then the two 26-year-olds in storage order
        assert_eq!(ids(&users[..5]), vec![28, 33, 18, 6, 31]);
    }

    #[test]
    fn test_sort_by_age_desc_reverses_ties() {
        let mut asc = seed_users();
        sort_users(&mut asc, SortField::Age, SortOrder::Asc);

        let mut desc = seed_users();
        sort_users(&mut desc, SortField::Age, SortOrder::Desc);

        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);
        // 47, then the two 45-year-olds with Victor (23) ahead of David (5)
        assert_eq!(ids(&desc[..5]), vec![9, 23, 5, 34, 13]);
    }

    #[test]
    fn test_sort_by_name() {
        let mut users = seed_users();
        sort_users(&mut users, SortField::Name, SortOrder::Asc);
        assert_eq!(ids(&users[..3]), vec![2, 28, 29]);

        sort_users(&mut users, SortField::Name, SortOrder::Desc);
        assert_eq!(ids(&users[..3]), vec![27, 26, 25]);
    }

    #[test]
    fn test_sort_by_email() {
        let mut users = seed_users();
        sort_users(&mut users, SortField::Email, SortOrder::Asc);
        assert_eq!(users[0].email, "alice@example.com");
        assert_eq!(users[34].email, "zachary@example.com");
    }

    #[test]
    fn test_sort_by_joined_tags() {
        let mut users = seed_users();
        sort_users(&mut users, SortField::Tags, SortOrder::Asc);
        // "designerhiker" < "designerpainter" < "designerphotographer"
        assert_eq!(ids(&users[..4]), vec![12, 6, 2, 18]);
    }

    #[test]
    fn test_sort_by_id_restores_storage_order() {
        let mut users = seed_users();
        users.reverse();
        sort_users(&mut users, SortField::Id, SortOrder::Asc);
        assert_eq!(ids(&users), (1..=35).collect::<Vec<_>>());
    }
}
