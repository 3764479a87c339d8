//! Declarative join and filter descriptions built by command handlers.

use serde_json::Value;
use std::collections::HashSet;

/// One table join needed to answer a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinSpecification {
    /// Alias the join hangs off
    pub from_alias: String,
    /// Table name without prefix
    pub table: String,
    pub alias: String,
    pub condition: String,
}

impl JoinSpecification {
    pub fn new(from_alias: &str, table: &str, alias: &str, condition: &str) -> Self {
        Self {
            from_alias: from_alias.to_string(),
            table: table.to_string(),
            alias: alias.to_string(),
            condition: condition.to_string(),
        }
    }

    /// Check that every join only refers to `base_alias`, its own alias, or
    /// aliases introduced by earlier joins.
    ///
    /// Returns the first offending alias.
    pub fn validate_chain(base_alias: &str, joins: &[JoinSpecification]) -> Result<(), String> {
        let mut bound: HashSet<&str> = HashSet::from([base_alias]);

        for join in joins {
            if !bound.contains(join.from_alias.as_str()) {
                return Err(join.from_alias.clone());
            }
            for referenced in referenced_aliases(&join.condition) {
                if referenced != join.alias && !bound.contains(referenced) {
                    return Err(referenced.to_string());
                }
            }
            bound.insert(join.alias.as_str());
        }

        Ok(())
    }
}

/// Aliases qualifying column references (`alias.column`) in a condition
fn referenced_aliases(condition: &str) -> Vec<&str> {
    condition
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '.'))
        .filter_map(|token| token.split_once('.'))
        .map(|(alias, _)| alias)
        .filter(|alias| alias.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_'))
        .collect()
}

/// Primary match column plus fixed equality filters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpecification {
    /// Column compared against the raw search argument
    pub primary_column: Option<String>,
    /// `(column, literal)` pairs ANDed in, in order
    pub fixed_filters: Vec<(String, Value)>,
}

impl FilterSpecification {
    pub fn new(primary_column: &str) -> Self {
        Self {
            primary_column: Some(primary_column.to_string()),
            fixed_filters: Vec::new(),
        }
    }

    /// Add a fixed `column = value` filter
    pub fn with_filter(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.fixed_filters.push((column.to_string(), value.into()));
        self
    }
}
