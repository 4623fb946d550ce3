//! Statement text assembly
//!
//! `SqlGenerator` writes clauses in order and owns the single parameter
//! accumulator, so placeholders are numbered `$1..$n` in emission order across
//! every clause of a statement.

use crate::query_builder::aggregation::SelectField;
use crate::query_builder::builder::BuiltQuery;
use crate::query_builder::filter::Predicate;
use crate::query_builder::grouping::GroupBy;
use crate::query_builder::join::JoinClause;
use crate::query_builder::ordering::SortOrder;
use crate::query_builder::value::SqlValue;

pub struct SqlGenerator {
    sql: String,
    params: Vec<SqlValue>,
}

impl SqlGenerator {
    pub fn new() -> Self {
        Self {
            sql: String::with_capacity(256),
            params: Vec::new(),
        }
    }

    /// Append a keyword or fragment, separated from the previous one by a space
    pub fn push_str(&mut self, fragment: &str) {
        if !self.sql.is_empty() {
            self.sql.push(' ');
        }
        self.sql.push_str(fragment);
    }

    /// Bind a value and return its placeholder (`$n`)
    pub fn push_param(&mut self, value: SqlValue) -> String {
        self.params.push(value);
        format!("${}", self.params.len())
    }

    /// Build SELECT clause from fields
    pub fn write_select(&mut self, distinct: bool, fields: &[SelectField]) {
        let columns = if fields.is_empty() {
            "*".to_string()
        } else {
            fields
                .iter()
                .map(SelectField::to_sql)
                .collect::<Vec<_>>()
                .join(", ")
        };
        let keyword = if distinct { "SELECT DISTINCT" } else { "SELECT" };
        self.push_str(&format!("{} {}", keyword, columns));
    }

    pub fn write_from(&mut self, table: &str) {
        self.push_str(&format!("FROM {}", table));
    }

    /// Build JOIN clauses
    pub fn write_joins(&mut self, joins: &[JoinClause]) {
        for join in joins {
            self.push_str(&join.to_sql());
        }
    }

    /// Write conditions introduced by `keyword`; the first gets the keyword,
    /// every later one gets `AND`
    pub fn write_conditions(&mut self, keyword: &str, conditions: &[Predicate]) {
        for (index, condition) in conditions.iter().enumerate() {
            let joiner = if index == 0 { keyword } else { "AND" };
            let placeholder = self.push_param(condition.value.clone());
            self.push_str(&format!(
                "{} {} {} {}",
                joiner,
                condition.expr,
                condition.operator.to_sql(),
                placeholder
            ));
        }
    }

    /// Build GROUP BY clause followed by its HAVING conditions
    pub fn write_group_by(&mut self, group_by: Option<&GroupBy>) {
        let Some(group) = group_by else {
            return;
        };
        if !group.fields.is_empty() {
            self.push_str(&format!("GROUP BY {}", group.fields.join(", ")));
        }
        self.write_conditions("HAVING", &group.having);
    }

    /// Build ORDER BY clause
    pub fn write_order(&mut self, order_by: &[(&'static str, SortOrder)]) {
        if order_by.is_empty() {
            return;
        }

        let order_items: Vec<String> = order_by
            .iter()
            .map(|(field, order)| format!("{} {}", field, order.to_sql()))
            .collect();

        self.push_str(&format!("ORDER BY {}", order_items.join(", ")));
    }

    /// Build LIMIT clause; the limit is bound like any other value
    pub fn write_limit(&mut self, limit: Option<u32>) {
        if let Some(limit) = limit {
            let placeholder = self.push_param(SqlValue::from(limit));
            self.push_str(&format!("LIMIT {}", placeholder));
        }
    }

    pub fn finish(self) -> BuiltQuery {
        BuiltQuery {
            sql: self.sql,
            params: self.params,
        }
    }
}

impl Default for SqlGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_follow_push_order() {
        let mut generator = SqlGenerator::new();
        assert_eq!(generator.push_param(SqlValue::from("a")), "$1");
        assert_eq!(generator.push_param(SqlValue::Int(2)), "$2");
        assert_eq!(
            generator.finish().params,
            vec![SqlValue::from("a"), SqlValue::Int(2)]
        );
    }

    #[test]
    fn test_conditions_use_keyword_then_and() {
        let mut generator = SqlGenerator::new();
        generator.write_conditions(
            "WHERE",
            &[Predicate::eq("a", 1_i64), Predicate::lt("b", 2_i64)],
        );
        let built = generator.finish();
        assert_eq!(built.sql, "WHERE a = $1 AND b < $2");
    }

    #[test]
    fn test_having_continues_numbering() {
        let mut generator = SqlGenerator::new();
        generator.write_conditions("WHERE", &[Predicate::eq("a", 1_i64)]);
        generator.write_group_by(Some(
            &GroupBy::single("t.id").having(Predicate::gte("avg(x)", 3.0)),
        ));
        let built = generator.finish();
        assert_eq!(built.sql, "WHERE a = $1 GROUP BY t.id HAVING avg(x) >= $2");
        assert_eq!(built.params.len(), 2);
    }

    #[test]
    fn test_empty_clauses_write_nothing() {
        let mut generator = SqlGenerator::new();
        generator.write_conditions("WHERE", &[]);
        generator.write_group_by(None);
        generator.write_order(&[]);
        generator.write_limit(None);
        let built = generator.finish();
        assert!(built.sql.is_empty());
        assert!(built.params.is_empty());
    }
}
