//! INSERT statement builder
//!
//! Columns and values are pushed as pairs, so the column list and the
//! placeholder list can never drift apart.

use crate::query_builder::builder::BuiltQuery;
use crate::query_builder::sql_generation::SqlGenerator;
use crate::query_builder::value::SqlValue;

#[derive(Debug, Clone)]
pub struct InsertBuilder {
    table: &'static str,
    values: Vec<(&'static str, SqlValue)>,
    returning_all: bool,
}

impl InsertBuilder {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            values: Vec::new(),
            returning_all: false,
        }
    }

    /// Set one column
    pub fn value(mut self, column: &'static str, value: impl Into<SqlValue>) -> Self {
        self.values.push((column, value.into()));
        self
    }

    /// Append `RETURNING *`
    pub fn returning_all(mut self) -> Self {
        self.returning_all = true;
        self
    }

    pub fn columns(&self) -> Vec<&'static str> {
        self.values.iter().map(|(column, _)| *column).collect()
    }

    pub fn build(&self) -> BuiltQuery {
        let mut generator = SqlGenerator::new();
        let placeholders: Vec<String> = self
            .values
            .iter()
            .map(|(_, value)| generator.push_param(value.clone()))
            .collect();

        generator.push_str(&format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            self.columns().join(", "),
            placeholders.join(", ")
        ));
        if self.returning_all {
            generator.push_str("RETURNING *");
        }
        generator.finish()
    }
}
