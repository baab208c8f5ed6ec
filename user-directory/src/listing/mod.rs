//! Query processing over the user collection
//!
//! [`process`] is a pure function from (collection, parameters) to one
//! [`UserPage`]. The pipeline runs in a fixed order:
//!
//! 1. search filter (name or email, case-insensitive substring)
//! 2. tag filter (`all` / `any`)
//! 3. totals, computed on the filtered set
//! 4. stable ascending sort, reversed for `desc`
//! 5. page slice
//! 6. navigation links
//!
//! # Example
//!
//! ```rust
//! use user_directory::listing::{process, ListingParams, SortField, SortOrder, TagMode};
//! use user_directory::repository::seed::seed_users;
//!
//! let users = seed_users();
//! let params = ListingParams::default()
//!     .with_tags(["surfer"], TagMode::All)
//!     .with_sort(SortField::Age, SortOrder::Desc)
//!     .with_limit(3);
//!
//! let page = process(&users, &params, "/api/users");
//! assert_eq!(page.total_items, 8);
//! assert_eq!(page.total_pages, 3);
//! assert_eq!(page.results[0].name, "Henry");
//! ```

mod filter;
mod page;
mod params;
mod sort;
mod tags;

pub use filter::{matches_search, matches_tags};
pub use page::{LinkBuilder, PageWindow, UserPage};
pub use params::{ListingParams, SortField, SortOrder, TagMode, UnknownVariant, DEFAULT_LIMIT};
pub use sort::{collate, root_collator, sort_users};
pub use tags::distinct_tags;

use crate::models::User;

/// Run the listing pipeline; `base_path` prefixes every navigation link
pub fn process(users: &[User], params: &ListingParams, base_path: &str) -> UserPage {
    let needle = params.search.to_lowercase();

    let mut matched: Vec<User> = users
        .iter()
        .filter(|u| matches_search(u, &needle))
        .filter(|u| matches_tags(u, &params.tags, params.tag_mode))
        .cloned()
        .collect();

    let window = PageWindow::new(params.page, params.limit, matched.len());

    sort_users(&mut matched, params.sort_by, params.order);

    let range = window.range(matched.len());
    let results: Vec<User> = matched.drain(range).collect();

    let links = LinkBuilder::new(
        base_path,
        window.limit,
        params.sort_by,
        params.order,
        &params.tags,
    );

    UserPage::new(results, window, &links, params.sort_by, params.order)
}
