use crate::config::SearchConfig;
use crate::query_builder::{Join, QueryBuilder, WhereClause};
use crate::search::JoinSpecification;
use tracing::debug;

/// Lead-side relationship handling for search commands
#[derive(Debug, Clone)]
pub struct LeadRepository {
    table_prefix: String,
    lead_table: String,
    lead_alias: String,
}

impl LeadRepository {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            table_prefix: config.table_prefix.clone(),
            lead_table: config.lead_table.clone(),
            lead_alias: config.lead_alias.clone(),
        }
    }

    pub fn lead_alias(&self) -> &str {
        &self.lead_alias
    }

    /// Fresh query over the lead table
    pub fn create_query(&self) -> QueryBuilder {
        QueryBuilder::from_aliased(&self.table(&self.lead_table), &self.lead_alias)
    }

    pub fn table(&self, name: &str) -> String {
        format!("{}{}", self.table_prefix, name)
    }

    /// Join the related tables a search command needs and AND its predicate in.
    ///
    /// Joins are added in order, as INNER JOINs when `inner_join` is set and
    /// LEFT JOINs otherwise. A join whose alias is already present on `query`
    /// is skipped, so the same relationship is never joined twice; the
    /// predicate is ANDed in regardless. Empty `joins` is a no-op. Results
    /// are grouped by lead and counted distinctly.
    pub fn apply_search_query_relationship(
        &self,
        query: &mut QueryBuilder,
        joins: &[JoinSpecification],
        inner_join: bool,
        where_expression: Option<WhereClause>,
    ) {
        if joins.is_empty() {
            return;
        }

        for spec in joins {
            if query.has_alias(&spec.alias) {
                debug!(alias = %spec.alias, "Relationship already joined, reusing it");
                continue;
            }
            let table = self.table(&spec.table);
            let join = if inner_join {
                Join::inner(&table, &spec.alias, &spec.condition)
            } else {
                Join::left(&table, &spec.alias, &spec.condition)
            };
            query.add_join(join);
        }

        if let Some(expression) = where_expression {
            query.and_where(expression);
        }

        query.add_group_by(&format!("{}.id", self.lead_alias));
        query.set_distinct_count(true);
    }
}
