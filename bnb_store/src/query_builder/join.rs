/// Represents the type of SQL JOIN operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    /// INNER JOIN - returns records that have matching values in both tables
    Inner,
    /// LEFT JOIN - returns all records from the left table and matched records from the right table
    Left,
}

impl JoinType {
    /// Convert JoinType to SQL string
    pub fn to_sql(&self) -> &'static str {
        match self {
            JoinType::Inner => "JOIN",
            JoinType::Left => "LEFT JOIN",
        }
    }
}

/// Represents a complete JOIN clause (`<type> <table> ON <left> = <right>`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinClause {
    pub join_type: JoinType,
    pub table: &'static str,
    pub left_field: &'static str,
    pub right_field: &'static str,
}

impl JoinClause {
    /// Create a new JOIN clause with ON condition
    pub fn new_on(
        join_type: JoinType,
        table: &'static str,
        left_field: &'static str,
        right_field: &'static str,
    ) -> Self {
        Self {
            join_type,
            table,
            left_field,
            right_field,
        }
    }

    pub fn to_sql(&self) -> String {
        format!(
            "{} {} ON {} = {}",
            self.join_type.to_sql(),
            self.table,
            self.left_field,
            self.right_field
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_type_to_sql() {
        assert_eq!(JoinType::Inner.to_sql(), "JOIN");
        assert_eq!(JoinType::Left.to_sql(), "LEFT JOIN");
    }

    #[test]
    fn test_join_clause_to_sql() {
        let join = JoinClause::new_on(
            JoinType::Inner,
            "property_reviews",
            "properties.id",
            "property_reviews.property_id",
        );

        assert_eq!(
            join.to_sql(),
            "JOIN property_reviews ON properties.id = property_reviews.property_id"
        );
    }

    #[test]
    fn test_left_join_clause_to_sql() {
        let join = JoinClause::new_on(JoinType::Left, "b", "a.id", "b.a_id");
        assert_eq!(join.to_sql(), "LEFT JOIN b ON a.id = b.a_id");
    }
}
