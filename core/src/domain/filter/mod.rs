//! Condition builder shared by the filter endpoints.
//!
//! A [`FilterSchema`] turns a [`FilterRequest`] into a [`QueryFragment`]:
//! predicate clauses plus the values bound to their `$n` placeholders.

pub mod fragment;
pub mod range;
pub mod request;
pub mod schema;
pub mod value;

pub use fragment::{Placeholder, QueryFragment};
pub use range::{DateRange, range_fragment};
pub use request::FilterRequest;
pub use schema::{Comparison, FilterField, FilterSchema, Predicate};
pub use value::{FilterValue, ValueKind};
