//! Built-in user records served by [`StaticUserSource`](super::StaticUserSource)

use crate::models::User;

type SeedRow = (u32, &'static str, u32, &'static str, &'static [&'static str]);

const SEED: &[SeedRow] = &[
    (1, "John", 35, "john@example.com", &["developer", "musician"]),
    (2, "Alice", 28, "alice@example.com", &["designer", "photographer"]),
    (3, "Bob", 42, "bob@example.com", &["developer", "surfer"]),
    (4, "Claire", 31, "claire@example.com", &["teacher", "hiker"]),
    (5, "David", 45, "david@example.com", &["developer", "gamer"]),
    (6, "Emma", 26, "emma@example.com", &["designer", "painter"]),
    (7, "Frank", 39, "frank@example.com", &["musician", "gamer"]),
    (8, "Grace", 33, "grace@example.com", &["developer", "hiker"]),
    (9, "Henry", 47, "henry@example.com", &["surfer", "hiker"]),
    (10, "Isabella", 29, "isabella@example.com", &["teacher", "photographer"]),
    (11, "James", 36, "james@example.com", &["developer", "musician"]),
    (12, "Katie", 27, "katie@example.com", &["designer", "hiker"]),
    (13, "Liam", 43, "liam@example.com", &["surfer", "gamer"]),
    (14, "Mia", 30, "mia@example.com", &["teacher", "painter"]),
    (15, "Nathan", 38, "nathan@example.com", &["developer", "photographer"]),
    (16, "Olivia", 27, "olivia@example.com", &["teacher", "surfer"]),
    (17, "Patrick", 34, "patrick@example.com", &["developer", "musician"]),
    (18, "Quinn", 25, "quinn@example.com", &["designer", "photographer"]),
    (19, "Rachel", 39, "rachel@example.com", &["developer", "hiker"]),
    (20, "Samuel", 42, "samuel@example.com", &["surfer", "gamer"]),
    (21, "Tiffany", 29, "tiffany@example.com", &["teacher", "painter"]),
    (22, "Ursula", 37, "ursula@example.com", &["developer", "musician"]),
    (23, "Victor", 45, "victor@example.com", &["designer", "photographer"]),
    (24, "William", 32, "william@example.com", &["developer", "hiker"]),
    (25, "Xavier", 40, "xavier@example.com", &["surfer", "gamer"]),
    (26, "Yara", 28, "yara@example.com", &["teacher", "painter"]),
    (27, "Zachary", 36, "zachary@example.com", &["developer", "musician"]),
    (28, "Avery", 23, "avery@example.com", &["designer", "photographer"]),
    (29, "Benjamin", 41, "benjamin@example.com", &["developer", "hiker"]),
    (30, "Cameron", 30, "cameron@example.com", &["surfer", "gamer"]),
    (31, "Danielle", 26, "danielle@example.com", &["teacher", "painter"]),
    (32, "Ethan", 35, "ethan@example.com", &["developer", "musician"]),
    (33, "Fiona", 24, "fiona@example.com", &["designer", "photographer"]),
    (34, "Gabriel", 43, "gabriel@example.com", &["developer", "hiker"]),
    (35, "Hannah", 31, "hannah@example.com", &["surfer", "gamer"]),
];

/// The built-in directory, in id order
pub fn seed_users() -> Vec<User> {
    SEED.iter()
        .map(|&(id, name, age, email, tags)| User::new(id, name, age, email, tags.iter().copied()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_size_and_order() {
        let users = seed_users();
        assert_eq!(users.len(), 35);
        let ids: Vec<u32> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, (1..=35).collect::<Vec<_>>());
    }

    #[test]
    fn test_seed_ids_unique() {
        let users = seed_users();
        let ids: HashSet<u32> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), users.len());
    }

    #[test]
    fn test_seed_record_shape() {
        let users = seed_users();
        let hannah = &users[34];
        assert_eq!(hannah.name, "Hannah");
        assert_eq!(hannah.age, 31);
        assert_eq!(hannah.email, "hannah@example.com");
        assert_eq!(hannah.tags, vec!["surfer", "gamer"]);
    }
}
