//! # Query Options
//!
//! Per-call option structures for listing endpoints. Every field is optional: an unset
//! field is left out of the query string entirely, so the server applies its own
//! default instead of receiving a zero or empty value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort direction for listing endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("invalid sort order '{}', expected asc or desc", other)),
        }
    }
}

/// Pagination and sorting options shared by all listing endpoints
///
/// # Examples
///
/// ```rust
/// use agent_monitor_client::{ListOptions, SortOrder};
///
/// let options = ListOptions::new()
///     .skip(20)
///     .limit(10)
///     .sort_order(SortOrder::Asc);
///
/// let pairs = options.query_pairs();
/// assert!(pairs.contains(&("limit", "10".to_string())));
/// assert!(!pairs.iter().any(|(key, _)| *key == "sort_by"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub include_pagination: Option<bool>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn sort_by(mut self, field: impl Into<String>) -> Self {
        self.sort_by = Some(field.into());
        self
    }

    pub fn sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = Some(order);
        self
    }

    pub fn include_pagination(mut self, include: bool) -> Self {
        self.include_pagination = Some(include);
        self
    }

    /// Query-string pairs for the options that were explicitly set
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(skip) = self.skip {
            pairs.push(("skip", skip.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sort_by", sort_by.clone()));
        }
        if let Some(order) = self.sort_order {
            pairs.push(("sort_order", order.to_string()));
        }
        if let Some(include) = self.include_pagination {
            pairs.push(("include_pagination", include.to_string()));
        }
        pairs
    }
}

/// Options for `GET /conversation`
///
/// The response shape depends on the flags: an id filter yields a mapping keyed by
/// conversation id, `include_pagination` yields an `{items, page_info}` envelope, and
/// otherwise the server returns a plain list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationQuery {
    pub ids: Vec<String>,
    pub include_messages: Option<bool>,
    pub list: ListOptions,
}

impl ConversationQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn include_messages(mut self, include: bool) -> Self {
        self.include_messages = Some(include);
        self
    }

    pub fn list(mut self, list: ListOptions) -> Self {
        self.list = list;
        self
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(ids) = join_ids(&self.ids) {
            pairs.push(("ids", ids));
        }
        pairs.extend(self.list.query_pairs());
        if let Some(include) = self.include_messages {
            pairs.push(("include_messages", include.to_string()));
        }
        pairs
    }
}

/// Join an id filter into the single comma-separated `ids` value
///
/// Returns `None` for an empty filter so no `ids` parameter is sent.
pub fn join_ids<S: AsRef<str>>(ids: &[S]) -> Option<String> {
    if ids.is_empty() {
        return None;
    }
    Some(
        ids.iter()
            .map(|id| id.as_ref())
            .collect::<Vec<&str>>()
            .join(","),
    )
}

/// Query pairs for the plain `ids` filter used by collection, group, agent and user lists
pub fn id_filter_pairs<S: AsRef<str>>(ids: &[S]) -> Vec<(&'static str, String)> {
    join_ids(ids).map(|ids| ("ids", ids)).into_iter().collect()
}
