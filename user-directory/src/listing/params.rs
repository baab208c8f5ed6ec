//! Validated listing parameters

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default page size when the client sends none
pub const DEFAULT_LIMIT: u32 = 10;

/// A value that is not one of the accepted names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown value `{value}`, expected one of: {expected}")]
pub struct UnknownVariant {
    pub value: String,
    pub expected: &'static str,
}

/// Field the result page is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Id,
    Name,
    Age,
    Email,
    Tags,
}

impl SortField {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Age => "age",
            Self::Email => "email",
            Self::Tags => "tags",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "age" => Ok(Self::Age),
            "email" => Ok(Self::Email),
            "tags" => Ok(Self::Tags),
            other => Err(UnknownVariant {
                value: other.to_string(),
                expected: "id, name, age, email, tags",
            }),
        }
    }
}

/// Sort direction
///
/// ```rust
/// use user_directory::listing::SortOrder;
///
/// assert_eq!(SortOrder::default(), SortOrder::Asc);
/// assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
/// assert_eq!(SortOrder::Desc.to_string(), "desc");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending (A-Z, 0-9)
    #[default]
    Asc,
    /// The ascending order, reversed
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(UnknownVariant {
                value: other.to_string(),
                expected: "asc, desc",
            }),
        }
    }
}

/// How requested tags are matched against a user's tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagMode {
    /// Every requested tag must be present
    #[default]
    All,
    /// At least one requested tag must be present
    Any,
    /// Not a known mode; tag filtering is skipped
    Unrecognized,
}

impl TagMode {
    /// Parse a client value; anything but `all`/`any` is [`TagMode::Unrecognized`]
    pub fn parse(s: &str) -> Self {
        match s {
            "all" => Self::All,
            "any" => Self::Any,
            _ => Self::Unrecognized,
        }
    }
}

/// Fully validated inputs to [`process`](super::process)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingParams {
    /// 1-indexed page number, never zero
    pub page: u32,
    /// Page size, never zero
    pub limit: u32,
    pub sort_by: SortField,
    pub order: SortOrder,
    /// Requested tag labels, in request order
    pub tags: Vec<String>,
    pub tag_mode: TagMode,
    /// Free-text search; empty means no search
    pub search: String,
}

impl Default for ListingParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
            sort_by: SortField::default(),
            order: SortOrder::default(),
            tags: Vec::new(),
            tag_mode: TagMode::default(),
            search: String::new(),
        }
    }
}

impl ListingParams {
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit.max(1);
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort_by: SortField, order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.order = order;
        self
    }

    #[must_use]
    pub fn with_tags<I, T>(mut self, tags: I, mode: TagMode) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self.tag_mode = mode;
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_field_parse() {
        assert_eq!("age".parse::<SortField>().unwrap(), SortField::Age);
        assert_eq!("tags".parse::<SortField>().unwrap(), SortField::Tags);

        let err = "Age".parse::<SortField>().unwrap_err();
        assert_eq!(err.value, "Age");
        assert!(err.to_string().contains("id, name, age, email, tags"));
    }

    #[test]
    fn test_sort_field_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&SortField::Email).unwrap(), "\"email\"");
        assert_eq!(SortField::Name.to_string(), "name");
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert!("DESC".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_tag_mode_parse() {
        assert_eq!(TagMode::parse("all"), TagMode::All);
        assert_eq!(TagMode::parse("any"), TagMode::Any);
        assert_eq!(TagMode::parse("none"), TagMode::Unrecognized);
    }

    #[test]
    fn test_builder_clamps_zero() {
        let params = ListingParams::default().with_page(0).with_limit(0);
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 1);
    }
}
