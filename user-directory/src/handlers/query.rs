//! Query string parsing and validation for the listing endpoint
//!
//! Every field arrives as raw text so that a malformed value becomes a
//! structured `400` instead of an extractor rejection.
//!
//! # Example
//!
//! ```rust
//! use user_directory::config::ListingConfig;
//! use user_directory::handlers::UserListQuery;
//! use user_directory::listing::{SortField, TagMode};
//!
//! let query = UserListQuery {
//!     page: Some("2".into()),
//!     sort_by: Some("age".into()),
//!     tags: Some("surfer,painter".into()),
//!     tag_mode: Some("any".into()),
//!     ..Default::default()
//! };
//!
//! let params = query.validate(&ListingConfig::default()).unwrap();
//! assert_eq!(params.page, 2);
//! assert_eq!(params.limit, 10);
//! assert_eq!(params.sort_by, SortField::Age);
//! assert_eq!(params.tags, vec!["surfer", "painter"]);
//! assert_eq!(params.tag_mode, TagMode::Any);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::ListingConfig;
use crate::error::{Error, Result};
use crate::listing::{ListingParams, SortField, SortOrder, TagMode};

/// Raw query parameters of `GET /api/users`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    /// Comma-separated tag labels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl UserListQuery {
    /// Validate into pipeline parameters
    ///
    /// Absent or empty values take their defaults. `page` and `limit` must be
    /// integers >= 1 (`limit` also <= `max_limit`); `sortBy` and `order`
    /// must be known names. An unknown `tagMode` is accepted and disables
    /// tag filtering.
    pub fn validate(&self, config: &ListingConfig) -> Result<ListingParams> {
        let page = parse_positive("page", self.page.as_deref(), 1)?;
        let limit = parse_positive("limit", self.limit.as_deref(), config.default_limit)?;
        if limit > config.max_limit {
            return Err(Error::invalid_parameter(
                "limit",
                format!("must not exceed {}", config.max_limit),
            ));
        }

        let sort_by = match non_empty(self.sort_by.as_deref()) {
            Some(raw) => raw
                .parse::<SortField>()
                .map_err(|e| Error::invalid_parameter("sortBy", e.to_string()))?,
            None => SortField::default(),
        };

        let order = match non_empty(self.order.as_deref()) {
            Some(raw) => raw
                .parse::<SortOrder>()
                .map_err(|e| Error::invalid_parameter("order", e.to_string()))?,
            None => SortOrder::default(),
        };

        let tag_mode = match non_empty(self.tag_mode.as_deref()) {
            Some(raw) => {
                let mode = TagMode::parse(raw);
                if mode == TagMode::Unrecognized {
                    tracing::warn!(tag_mode = raw, "unrecognized tagMode, tag filter skipped");
                }
                mode
            }
            None => TagMode::default(),
        };

        Ok(ListingParams {
            page,
            limit,
            sort_by,
            order,
            tags: split_tags(self.tags.as_deref()),
            tag_mode,
            search: self.search.clone().unwrap_or_default(),
        })
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.is_empty())
}

fn parse_positive(name: &'static str, raw: Option<&str>, default: u32) -> Result<u32> {
    let Some(raw) = non_empty(raw.map(str::trim)) else {
        return Ok(default);
    };
    match raw.parse::<u32>() {
        Ok(0) | Err(_) => Err(Error::invalid_parameter(
            name,
            format!("expected a positive integer, got `{raw}`"),
        )),
        Ok(n) => Ok(n),
    }
}

/// Split a comma-separated tag list, dropping empty segments
fn split_tags(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
