//! Domain types and models
//!
//! Wire-level representations of Square customer directory resources.
//! Timestamps are RFC 3339 and deserialize into `DateTime<Utc>`. Fields the
//! API may omit are `Option`s; unknown fields are ignored.

pub mod address;
pub mod birthday;
pub mod card;
pub mod customer;
pub mod enums;
pub mod group;
pub mod page;
pub mod search;
pub mod segment;

pub use address::Address;
pub use birthday::Birthday;
pub use card::{Card, CreateCardRequest};
pub use customer::{Customer, CustomerFields, CustomerPreferences, ListCustomersParams};
pub use enums::{CardBrand, CardPrepaidType, CreationSource, SortField, SortOrder};
pub use group::{Group, GroupFields};
pub use page::Page;
pub use search::{
    CreationSourceFilter, CustomerFilter, CustomerSearch, CustomerSearchBuilder, FilterRule,
    GroupFilter, SearchQuery, SearchSort, TextFilter, TimeRange,
};
pub use segment::Segment;
