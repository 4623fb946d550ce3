//! Builder edge cases

use crate::query_builder::{
    GroupBy, JoinClause, JoinType, Predicate, SelectBuilder, SelectField, SortOrder, SqlValue,
};

fn listing_base() -> SelectBuilder {
    SelectBuilder::new("properties")
        .select(SelectField::all_from("properties"))
        .select(SelectField::average("rating", "average_rating"))
        .join(JoinClause::new_on(
            JoinType::Inner,
            "property_reviews",
            "properties.id",
            "property_reviews.property_id",
        ))
}

// ========================================
// Clause ordering
// ========================================

#[test]
fn test_bare_select() {
    let built = SelectBuilder::new("users").build();
    assert_eq!(built.sql, "SELECT * FROM users");
    assert_eq!(built.param_count(), 0);
}

#[test]
fn test_full_statement_clause_order() {
    let built = listing_base()
        .filter(Predicate::contains_ignore_case("city", "van"))
        .group_by(GroupBy::single("properties.id"))
        .having(Predicate::gte("avg(rating)", 3.0))
        .order_by("cost_per_night", SortOrder::Asc)
        .limit(5)
        .build();

    assert_eq!(
        built.sql,
        "SELECT properties.*, avg(rating)::float8 AS average_rating FROM properties \
         JOIN property_reviews ON properties.id = property_reviews.property_id \
         WHERE city ILIKE $1 GROUP BY properties.id HAVING avg(rating) >= $2 \
         ORDER BY cost_per_night ASC LIMIT $3"
    );
    assert_eq!(
        built.params,
        vec![
            SqlValue::from("%van%"),
            SqlValue::Float(3.0),
            SqlValue::Int(5)
        ]
    );
}

#[test]
fn test_many_filters_single_where() {
    let mut builder = SelectBuilder::new("t");
    for _ in 0..50 {
        builder = builder.filter(Predicate::eq("x", 1_i64));
    }
    let built = builder.build();

    assert_eq!(built.sql.matches("WHERE").count(), 1);
    assert_eq!(built.sql.matches(" AND ").count(), 49);
    assert_eq!(built.param_count(), 50);
    assert!(built.sql.ends_with("x = $50"));
}

#[test]
fn test_having_without_group_fields() {
    let built = SelectBuilder::new("property_reviews")
        .select(SelectField::average("rating", "average_rating"))
        .having(Predicate::gt("avg(rating)", 1.0))
        .build();

    assert!(!built.sql.contains("GROUP BY"));
    assert!(built.sql.ends_with("HAVING avg(rating) > $1"));
}

#[test]
fn test_having_replaced_group_keeps_conditions_order() {
    let built = SelectBuilder::new("t")
        .group_by(GroupBy::single("t.id"))
        .having(Predicate::gte("avg(a)", 1.0))
        .having(Predicate::lte("avg(a)", 2.0))
        .build();

    assert!(built
        .sql
        .ends_with("GROUP BY t.id HAVING avg(a) >= $1 AND avg(a) <= $2"));
}

#[test]
fn test_multiple_order_fields() {
    let built = SelectBuilder::new("t")
        .order_by("a", SortOrder::Asc)
        .order_by("b", SortOrder::Desc)
        .build();
    assert!(built.sql.ends_with("ORDER BY a ASC, b DESC"));
}

// ========================================
// Injection safety
// ========================================

#[test]
fn test_values_never_reach_sql_text() {
    let hostile = "'; DROP TABLE properties; --";
    let built = SelectBuilder::new("properties")
        .filter(Predicate::contains_ignore_case("city", hostile))
        .build();

    assert!(!built.sql.contains("DROP"));
    assert_eq!(built.params, vec![SqlValue::Text(format!("%{}%", hostile))]);
}

#[test]
fn test_unicode_values_are_bound() {
    let built = SelectBuilder::new("properties")
        .filter(Predicate::contains_ignore_case("city", "Montréal"))
        .build();
    assert_eq!(built.params, vec![SqlValue::from("%Montréal%")]);
}
