//! Customer search filters
//!
//! Serializes to the body of `POST /v2/customers/search`:
//!
//! ```json
//! {"limit": 10, "cursor": "...",
//!  "query": {"filter": {"email_address": {"fuzzy": "example.com"}},
//!            "sort": {"field": "CREATED_AT", "order": "DESC"}}}
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::enums::{CreationSource, SortField, SortOrder};
use crate::constants::{MAX_SEARCH_LIMIT, MIN_SEARCH_LIMIT};
use crate::errors::{DomainError, Result};

/// Match on a text attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFilter {
    /// Exact, case-sensitive match.
    Exact(String),
    /// Partial match, as defined by the server.
    Fuzzy(String),
}

impl TextFilter {
    pub fn exact(value: impl Into<String>) -> Self {
        Self::Exact(value.into())
    }

    pub fn fuzzy(value: impl Into<String>) -> Self {
        Self::Fuzzy(value.into())
    }
}

impl From<&str> for TextFilter {
    fn from(value: &str) -> Self {
        Self::Exact(value.to_string())
    }
}

impl From<String> for TextFilter {
    fn from(value: String) -> Self {
        Self::Exact(value)
    }
}

/// Inclusive time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FilterRule {
    Include,
    Exclude,
}

/// Restricts results by creation source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreationSourceFilter {
    pub values: Vec<CreationSource>,
    pub rule: FilterRule,
}

/// Group membership constraints. Empty lists are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupFilter {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub any: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub all: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub none: Vec<String>,
}

impl GroupFilter {
    /// Customer must belong to every listed group.
    pub fn all<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { all: ids.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    /// Customer must belong to at least one listed group.
    pub fn any<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { any: ids.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    /// Customer must belong to none of the listed groups.
    pub fn none<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { none: ids.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    pub fn is_empty(&self) -> bool {
        self.any.is_empty() && self.all.is_empty() && self.none.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CustomerFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_source: Option<CreationSourceFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<TimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<TimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<TextFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<TextFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<TextFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<GroupFilter>,
}

impl CustomerFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchSort {
    pub field: SortField,
    pub order: SortOrder,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    #[serde(skip_serializing_if = "CustomerFilter::is_empty")]
    pub filter: CustomerFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SearchSort>,
}

/// Validated customer search request. Build with [`CustomerSearch::builder`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CustomerSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cursor: Option<String>,
    query: SearchQuery,
}

impl CustomerSearch {
    pub fn builder() -> CustomerSearchBuilder {
        CustomerSearchBuilder::default()
    }

    pub const fn limit(&self) -> Option<u32> {
        self.limit
    }

    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    pub const fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Same search, continuing from `cursor`.
    pub fn with_cursor(&self, cursor: impl Into<String>) -> Self {
        Self { cursor: Some(cursor.into()), ..self.clone() }
    }
}

/// Builder for [`CustomerSearch`]
#[derive(Debug, Default)]
pub struct CustomerSearchBuilder {
    limit: Option<u32>,
    cursor: Option<String>,
    filter: CustomerFilter,
    sort: Option<SearchSort>,
}

impl CustomerSearchBuilder {
    /// Results per page, between 1 and 100 inclusive.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub fn sort(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort = Some(SearchSort { field, order });
        self
    }

    pub fn created_at(mut self, start_at: DateTime<Utc>, end_at: DateTime<Utc>) -> Self {
        self.filter.created_at = Some(TimeRange { start_at, end_at });
        self
    }

    pub fn updated_at(mut self, start_at: DateTime<Utc>, end_at: DateTime<Utc>) -> Self {
        self.filter.updated_at = Some(TimeRange { start_at, end_at });
        self
    }

    /// Include or exclude customers by how they were created.
    pub fn creation_source(
        mut self,
        rule: FilterRule,
        sources: impl IntoIterator<Item = CreationSource>,
    ) -> Self {
        self.filter.creation_source =
            Some(CreationSourceFilter { values: sources.into_iter().collect(), rule });
        self
    }

    pub fn email_address(mut self, filter: impl Into<TextFilter>) -> Self {
        self.filter.email_address = Some(filter.into());
        self
    }

    /// Phone numbers must be in E.164 form.
    pub fn phone_number(mut self, filter: impl Into<TextFilter>) -> Self {
        self.filter.phone_number = Some(filter.into());
        self
    }

    pub fn reference_id(mut self, filter: impl Into<TextFilter>) -> Self {
        self.filter.reference_id = Some(filter.into());
        self
    }

    pub fn group_ids(mut self, filter: GroupFilter) -> Self {
        self.filter.group_ids = Some(filter);
        self
    }

    /// # Errors
    /// Returns `DomainError::InvalidInput` when the limit is out of range or a
    /// creation source filter has no values.
    pub fn build(self) -> Result<CustomerSearch> {
        if let Some(limit) = self.limit {
            if !(MIN_SEARCH_LIMIT..=MAX_SEARCH_LIMIT).contains(&limit) {
                return Err(DomainError::InvalidInput(format!(
                    "limit must be within {MIN_SEARCH_LIMIT}-{MAX_SEARCH_LIMIT} inclusive, got {limit}"
                )));
            }
        }
        if self.filter.creation_source.as_ref().is_some_and(|f| f.values.is_empty()) {
            return Err(DomainError::InvalidInput(
                "creation source filter needs at least one value".into(),
            ));
        }
        if self.filter.group_ids.as_ref().is_some_and(GroupFilter::is_empty) {
            return Err(DomainError::InvalidInput("group filter needs at least one id".into()));
        }

        Ok(CustomerSearch {
            limit: self.limit,
            cursor: self.cursor,
            query: SearchQuery { filter: self.filter, sort: self.sort },
        })
    }
}
