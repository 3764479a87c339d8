//! WHERE clause building.
//!
//! Values never appear in conditions directly: the right-hand side of a
//! comparison is an SQL expression, normally a `:name` placeholder obtained
//! from [`QueryBuilder::create_named_parameter`](super::QueryBuilder::create_named_parameter).

/// Represents different types of SQL conditions
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Simple {
        field: String,
        operator: String,
        value: String,
    },
    In {
        field: String,
        values: Vec<String>,
    },
    InSubquery {
        field: String,
        subquery: String,
    },
    IsNotNull {
        field: String,
    },
    Exists {
        subquery: String,
    },
    NotExists {
        subquery: String,
    },
    Nested(WhereClause),
    Raw {
        sql: String,
    },
}

impl Condition {
    /// `field = value`
    pub fn eq(field: &str, value: &str) -> Self {
        Condition::Simple {
            field: field.to_string(),
            operator: "=".to_string(),
            value: value.to_string(),
        }
    }

    /// `field <> value`
    pub fn neq(field: &str, value: &str) -> Self {
        Condition::Simple {
            field: field.to_string(),
            operator: "<>".to_string(),
            value: value.to_string(),
        }
    }

    /// `field IN (v1, v2, ...)`
    pub fn in_list<S: AsRef<str>>(field: &str, values: &[S]) -> Self {
        Condition::In {
            field: field.to_string(),
            values: values.iter().map(|v| v.as_ref().to_string()).collect(),
        }
    }

    /// Convert condition to SQL string
    pub fn to_sql(&self) -> String {
        match self {
            Condition::Simple {
                field,
                operator,
                value,
            } => format!("{field} {operator} {value}"),
            Condition::In { field, values } => {
                format!("{field} IN ({})", values.join(", "))
            }
            Condition::InSubquery { field, subquery } => format!("{field} IN ({subquery})"),
            Condition::IsNotNull { field } => format!("{field} IS NOT NULL"),
            Condition::Exists { subquery } => format!("EXISTS ({subquery})"),
            Condition::NotExists { subquery } => format!("NOT EXISTS ({subquery})"),
            Condition::Nested(clause) => clause.to_sql(),
            Condition::Raw { sql } => sql.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    And,
    Or,
}

/// A composite boolean expression: conditions joined by one operator
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
    pub conditions: Vec<Condition>,
    pub operator: LogicalOperator,
}

impl WhereClause {
    /// Conjunction of the given conditions
    pub fn and(conditions: Vec<Condition>) -> Self {
        Self {
            conditions,
            operator: LogicalOperator::And,
        }
    }

    /// Disjunction of the given conditions
    pub fn or(conditions: Vec<Condition>) -> Self {
        Self {
            conditions,
            operator: LogicalOperator::Or,
        }
    }

    /// Single-condition clause
    pub fn single(condition: Condition) -> Self {
        Self::and(vec![condition])
    }

    /// Raw SQL condition
    pub fn raw(sql: &str) -> Self {
        Self::single(Condition::Raw {
            sql: sql.to_string(),
        })
    }

    /// Append a condition
    pub fn add(&mut self, condition: Condition) -> &mut Self {
        self.conditions.push(condition);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Convert to SQL string
    pub fn to_sql(&self) -> String {
        if self.conditions.is_empty() {
            return "1=1".to_string();
        }

        if self.conditions.len() == 1 {
            return self.conditions[0].to_sql();
        }

        let operator_str = match self.operator {
            LogicalOperator::And => " AND ",
            LogicalOperator::Or => " OR ",
        };

        let condition_sqls: Vec<String> = self.conditions.iter().map(|c| c.to_sql()).collect();

        format!("({})", condition_sqls.join(operator_str))
    }
}
