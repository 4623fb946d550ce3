use crate::models::NewUser;
use crate::query_builder::{BuiltQuery, Predicate, SelectBuilder};

/// At most one row even when the key is duplicated in storage
fn single_user(predicate: Predicate) -> BuiltQuery {
    SelectBuilder::new("users")
        .distinct()
        .filter(predicate)
        .limit(1)
        .build()
}

pub fn user_by_email(email: &str) -> BuiltQuery {
    single_user(Predicate::eq("email", email))
}

pub fn user_by_id(id: i32) -> BuiltQuery {
    single_user(Predicate::eq("id", id))
}

pub fn insert_user(user: &NewUser) -> BuiltQuery {
    user.insert().build()
}
