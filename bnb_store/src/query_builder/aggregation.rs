/// Represents a field selection in a SELECT clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectField {
    /// Every column of one table: `table.*`
    AllFrom(&'static str),
    /// A single column or expression
    Field(&'static str),
    /// Column with alias: `field AS alias`
    FieldWithAlias {
        field: &'static str,
        alias: &'static str,
    },
    /// Arithmetic mean: `avg(field)::float8 AS alias`
    ///
    /// The cast keeps the aggregate decodable as `f64` (PostgreSQL returns
    /// `numeric` for averages of integer columns).
    Average {
        field: &'static str,
        alias: &'static str,
    },
}

impl SelectField {
    pub fn all_from(table: &'static str) -> Self {
        SelectField::AllFrom(table)
    }

    pub fn field(field: &'static str) -> Self {
        SelectField::Field(field)
    }

    pub fn field_as(field: &'static str, alias: &'static str) -> Self {
        SelectField::FieldWithAlias { field, alias }
    }

    pub fn average(field: &'static str, alias: &'static str) -> Self {
        SelectField::Average { field, alias }
    }

    pub fn to_sql(&self) -> String {
        match self {
            SelectField::AllFrom(table) => format!("{}.*", table),
            SelectField::Field(field) => field.to_string(),
            SelectField::FieldWithAlias { field, alias } => format!("{} AS {}", field, alias),
            SelectField::Average { field, alias } => {
                format!("avg({})::float8 AS {}", field, alias)
            }
        }
    }
}
