use super::filter::Predicate;

/// Represents a GROUP BY clause with optional HAVING conditions
#[derive(Debug, Clone, PartialEq)]
pub struct GroupBy {
    /// Fields to group by
    pub fields: Vec<&'static str>,
    /// HAVING conditions, evaluated after aggregation
    pub having: Vec<Predicate>,
}

impl GroupBy {
    /// Create a new GROUP BY clause with the specified fields
    pub fn new(fields: Vec<&'static str>) -> Self {
        Self {
            fields,
            having: Vec::new(),
        }
    }

    /// Create a GROUP BY clause with a single field
    pub fn single(field: &'static str) -> Self {
        Self::new(vec![field])
    }

    /// Add a single HAVING condition
    pub fn having(mut self, condition: Predicate) -> Self {
        self.having.push(condition);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_new() {
        let group_by = GroupBy::new(vec!["properties.id", "reservations.id"]);

        assert_eq!(group_by.fields, vec!["properties.id", "reservations.id"]);
        assert!(group_by.having.is_empty());
    }

    #[test]
    fn test_group_by_having_chain() {
        let group_by = GroupBy::single("properties.id")
            .having(Predicate::gte("avg(rating)", 4.0))
            .having(Predicate::lt("count(*)", 100_i64));

        assert_eq!(group_by.having.len(), 2);
        assert_eq!(group_by.having[0].expr, "avg(rating)");
    }
}
