//! SELECT statement builder
//!
//! Collects the parts of a statement (fields, joins, row predicates, grouping,
//! ordering, limit) and renders them in one pass through `SqlGenerator`.

use crate::query_builder::aggregation::SelectField;
use crate::query_builder::filter::Predicate;
use crate::query_builder::grouping::GroupBy;
use crate::query_builder::join::JoinClause;
use crate::query_builder::ordering::SortOrder;
use crate::query_builder::sql_generation::SqlGenerator;
use crate::query_builder::value::SqlValue;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

/// Finished statement: SQL text plus its ordered positional parameters
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

impl BuiltQuery {
    /// Number of `$n` placeholders bound by this statement
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Prepare a typed sqlx query with every parameter bound in order
    pub fn query_as<T>(&self) -> QueryAs<'_, Postgres, T, PgArguments>
    where
        T: for<'r> FromRow<'r, PgRow>,
    {
        self.params
            .iter()
            .cloned()
            .fold(sqlx::query_as::<_, T>(&self.sql), |query, value| {
                value.bind_to(query)
            })
    }
}

/// Builder for parameterized SELECT statements
#[derive(Debug, Clone)]
pub struct SelectBuilder {
    pub(crate) distinct: bool,
    pub(crate) fields: Vec<SelectField>,
    pub(crate) from: &'static str,
    pub(crate) joins: Vec<JoinClause>,
    pub(crate) conditions: Vec<Predicate>,
    pub(crate) group_by: Option<GroupBy>,
    pub(crate) order_by: Vec<(&'static str, SortOrder)>,
    pub(crate) limit: Option<u32>,
}

impl SelectBuilder {
    pub fn new(from: &'static str) -> Self {
        Self {
            distinct: false,
            fields: Vec::new(),
            from,
            joins: Vec::new(),
            conditions: Vec::new(),
            group_by: None,
            order_by: Vec::new(),
            limit: None,
        }
    }

    /// Collapse duplicate rows (`SELECT DISTINCT`)
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Add a selected field
    pub fn select(mut self, field: SelectField) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a join
    pub fn join(mut self, join: JoinClause) -> Self {
        self.joins.push(join);
        self
    }

    /// Add a row-level condition (combined with AND)
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.conditions.push(predicate);
        self
    }

    /// Set the grouping clause
    pub fn group_by(mut self, group_by: GroupBy) -> Self {
        self.group_by = Some(group_by);
        self
    }

    /// Add a condition on aggregated values; starts an empty grouping if none
    /// was set yet
    pub fn having(mut self, predicate: Predicate) -> Self {
        let group = self.group_by.take().unwrap_or_else(|| GroupBy::new(Vec::new()));
        self.group_by = Some(group.having(predicate));
        self
    }

    /// Add ordering
    pub fn order_by(mut self, field: &'static str, order: SortOrder) -> Self {
        self.order_by.push((field, order));
        self
    }

    /// Add limit
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Render the statement and its parameters
    pub fn build(&self) -> BuiltQuery {
        let mut generator = SqlGenerator::new();
        generator.write_select(self.distinct, &self.fields);
        generator.write_from(self.from);
        generator.write_joins(&self.joins);
        generator.write_conditions("WHERE", &self.conditions);
        generator.write_group_by(self.group_by.as_ref());
        generator.write_order(&self.order_by);
        generator.write_limit(self.limit);
        generator.finish()
    }
}
