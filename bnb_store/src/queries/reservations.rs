use super::ReviewJoin;
use crate::query_builder::{
    BuiltQuery, GroupBy, JoinClause, JoinType, Predicate, SelectBuilder, SelectField, SortOrder,
};

/// Reservations of one guest with their property and its mean rating,
/// earliest stay first
pub fn guest_reservations(guest_id: i32, limit: u32, review_join: ReviewJoin) -> BuiltQuery {
    SelectBuilder::new("reservations")
        .select(SelectField::field_as("reservations.id", "reservation_id"))
        .select(SelectField::field("reservations.start_date"))
        .select(SelectField::field("reservations.end_date"))
        .select(SelectField::field("reservations.guest_id"))
        .select(SelectField::all_from("properties"))
        .select(SelectField::average("rating", "average_rating"))
        .join(JoinClause::new_on(
            JoinType::Inner,
            "properties",
            "reservations.property_id",
            "properties.id",
        ))
        .join(JoinClause::new_on(
            review_join.join_type(),
            "property_reviews",
            "properties.id",
            "property_reviews.property_id",
        ))
        .filter(Predicate::eq("reservations.guest_id", guest_id))
        .group_by(GroupBy::new(vec!["properties.id", "reservations.id"]))
        .order_by("reservations.start_date", SortOrder::Asc)
        .limit(limit)
        .build()
}
