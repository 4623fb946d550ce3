//! Predicate fragments
//!
//! A predicate is one `<expression> <operator> $n` fragment. Expressions are
//! `&'static str` so column names can never come from request input.

use crate::query_builder::value::SqlValue;

/// Comparison operators supported by predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOperator {
    Eq,    // =
    Gt,    // >
    Gte,   // >=
    Lt,    // <
    Lte,   // <=
    ILike, // ILIKE (case insensitive)
}

impl QueryOperator {
    pub fn to_sql(&self) -> &'static str {
        match self {
            QueryOperator::Eq => "=",
            QueryOperator::Gt => ">",
            QueryOperator::Gte => ">=",
            QueryOperator::Lt => "<",
            QueryOperator::Lte => "<=",
            QueryOperator::ILike => "ILIKE",
        }
    }
}

/// Single condition rendered in a WHERE or HAVING clause
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub expr: &'static str,
    pub operator: QueryOperator,
    pub value: SqlValue,
}

impl Predicate {
    pub fn new(expr: &'static str, operator: QueryOperator, value: impl Into<SqlValue>) -> Self {
        Self {
            expr,
            operator,
            value: value.into(),
        }
    }

    /// Equal condition
    pub fn eq(expr: &'static str, value: impl Into<SqlValue>) -> Self {
        Self::new(expr, QueryOperator::Eq, value)
    }

    /// Greater than condition
    pub fn gt(expr: &'static str, value: impl Into<SqlValue>) -> Self {
        Self::new(expr, QueryOperator::Gt, value)
    }

    /// Greater than or equal condition
    pub fn gte(expr: &'static str, value: impl Into<SqlValue>) -> Self {
        Self::new(expr, QueryOperator::Gte, value)
    }

    /// Less than condition
    pub fn lt(expr: &'static str, value: impl Into<SqlValue>) -> Self {
        Self::new(expr, QueryOperator::Lt, value)
    }

    /// Less than or equal condition
    pub fn lte(expr: &'static str, value: impl Into<SqlValue>) -> Self {
        Self::new(expr, QueryOperator::Lte, value)
    }

    /// ILIKE condition with a caller-supplied pattern
    pub fn ilike(expr: &'static str, pattern: &str) -> Self {
        Self::new(expr, QueryOperator::ILike, pattern)
    }

    /// Case-insensitive substring match, binds `%needle%`
    pub fn contains_ignore_case(expr: &'static str, needle: &str) -> Self {
        Self::ilike(expr, &format!("%{}%", needle))
    }
}
