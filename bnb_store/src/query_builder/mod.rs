//! Query builder utilities
//!
//! Structured construction of parameterized statements: an ordered list of
//! predicate fragments plus one parameter accumulator, rendered in one pass.

pub mod aggregation;
pub mod builder;
pub mod filter;
pub mod grouping;
pub mod insert;
pub mod join;
pub mod ordering;
pub mod sql_generation;
pub mod value;

#[cfg(test)]
mod tests;

pub use aggregation::SelectField;
pub use builder::{BuiltQuery, SelectBuilder};
pub use filter::{Predicate, QueryOperator};
pub use grouping::GroupBy;
pub use insert::InsertBuilder;
pub use join::{JoinClause, JoinType};
pub use ordering::SortOrder;
pub use value::SqlValue;
