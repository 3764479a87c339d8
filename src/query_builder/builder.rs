use super::parameters::{format_value, inline_parameters};
use super::{Join, Pagination, WhereClause};
use serde_json::Value;
use sqlx::PgPool;

/// Prefix of parameters created by [`QueryBuilder::create_named_parameter`]
const NAMED_PARAMETER_PREFIX: &str = "dcValue";

/// Prefix of aliases handed to search command invocations
const SEARCH_ALIAS_PREFIX: &str = "leadsearch";

/// Query builder shared by one search request.
///
/// Search handlers receive it by exclusive reference and append joins,
/// WHERE conjunctions and named parameters to it. Rendering keeps `:name`
/// placeholders; [`build_inlined_sql`](Self::build_inlined_sql) substitutes
/// the bound values.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryBuilder {
    base_table: String,
    base_alias: Option<String>,
    select_fields: Vec<String>,
    joins: Vec<Join>,
    where_clauses: Vec<WhereClause>,
    group_by: Vec<String>,
    order_by: Vec<String>,
    pagination: Option<Pagination>,
    parameters: Vec<(String, Value)>,
    parameter_count: usize,
    distinct_count: bool,
}

impl QueryBuilder {
    /// Create a new query builder for the given table
    pub fn new(table: &str) -> Self {
        Self {
            base_table: table.to_string(),
            base_alias: None,
            select_fields: vec!["*".to_string()],
            joins: Vec::new(),
            where_clauses: Vec::new(),
            group_by: Vec::new(),
            order_by: Vec::new(),
            pagination: None,
            parameters: Vec::new(),
            parameter_count: 0,
            distinct_count: false,
        }
    }

    /// Create a query builder over an aliased table
    pub fn from_aliased(table: &str, alias: &str) -> Self {
        let mut builder = Self::new(table);
        builder.base_alias = Some(alias.to_string());
        builder.select_fields = vec![format!("{alias}.*")];
        builder
    }

    /// Set specific fields to select
    pub fn select(mut self, fields: &[&str]) -> Self {
        self.set_select(fields);
        self
    }

    /// Replace the selected fields in place
    pub fn set_select(&mut self, fields: &[&str]) {
        self.select_fields = fields.iter().map(|f| f.to_string()).collect();
    }

    /// Add a JOIN clause
    pub fn join(mut self, join: Join) -> Self {
        self.add_join(join);
        self
    }

    pub fn add_join(&mut self, join: Join) {
        self.joins.push(join);
    }

    /// Whether `alias` is already bound by the base table or a join
    pub fn has_alias(&self, alias: &str) -> bool {
        self.base_alias.as_deref() == Some(alias) || self.joins.iter().any(|j| j.alias == alias)
    }

    /// Add a WHERE clause
    pub fn where_clause(mut self, clause: WhereClause) -> Self {
        self.and_where(clause);
        self
    }

    /// AND a clause into the WHERE conjunction
    pub fn and_where(&mut self, clause: WhereClause) {
        self.where_clauses.push(clause);
    }

    /// Add a GROUP BY field (ignored if already present)
    pub fn add_group_by(&mut self, field: &str) {
        if !self.group_by.iter().any(|g| g == field) {
            self.group_by.push(field.to_string());
        }
    }

    /// Add ORDER BY clause
    pub fn order_by(mut self, field: &str, direction: &str) -> Self {
        self.order_by.push(format!("{field} {direction}"));
        self
    }

    /// Add ORDER BY DESC
    pub fn order_desc(self, field: &str) -> Self {
        self.order_by(field, "DESC")
    }

    /// Add pagination (LIMIT/OFFSET)
    pub fn paginate(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Add LIMIT clause
    pub fn limit(self, limit: u32) -> Self {
        self.paginate(Pagination::limit_only(limit))
    }

    /// Count rows with `COUNT(DISTINCT alias.id)` because joins fan out rows
    pub fn set_distinct_count(&mut self, distinct: bool) {
        self.distinct_count = distinct;
    }

    pub fn uses_distinct_count(&self) -> bool {
        self.distinct_count
    }

    /// Bind `value` under a freshly generated name and return its placeholder
    pub fn create_named_parameter(&mut self, value: impl Into<Value>) -> String {
        self.parameter_count += 1;
        let name = format!("{NAMED_PARAMETER_PREFIX}{}", self.parameter_count);
        self.parameters.push((name.clone(), value.into()));
        format!(":{name}")
    }

    /// Bind `value` under `name`, replacing an earlier binding of the same name
    pub fn set_parameter(&mut self, name: &str, value: impl Into<Value>) {
        let value = value.into();
        match self.parameters.iter_mut().find(|(bound, _)| bound == name) {
            Some((_, existing)) => *existing = value,
            None => self.parameters.push((name.to_string(), value)),
        }
    }

    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters
            .iter()
            .find(|(bound, _)| bound == name)
            .map(|(_, value)| value)
    }

    pub fn parameters(&self) -> &[(String, Value)] {
        &self.parameters
    }

    /// Name for a search command's argument that is not yet bound on this query
    pub fn next_search_alias(&self) -> String {
        let mut n = self.parameters.len() + 1;
        loop {
            let alias = format!("{SEARCH_ALIAS_PREFIX}{n}");
            if self.parameter(&alias).is_none() {
                return alias;
            }
            n += 1;
        }
    }

    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    pub fn where_clauses(&self) -> &[WhereClause] {
        &self.where_clauses
    }

    pub fn group_by_fields(&self) -> &[String] {
        &self.group_by
    }

    fn from_sql(&self) -> String {
        match &self.base_alias {
            Some(alias) => format!(" FROM {} {}", self.base_table, alias),
            None => format!(" FROM {}", self.base_table),
        }
    }

    fn push_joins_and_where(&self, sql: &mut String) {
        for join in &self.joins {
            sql.push(' ');
            sql.push_str(&join.to_sql());
        }

        if !self.where_clauses.is_empty() {
            sql.push_str(" WHERE ");
            let where_parts: Vec<String> = self
                .where_clauses
                .iter()
                .map(|clause| clause.to_sql())
                .collect();
            sql.push_str(&where_parts.join(" AND "));
        }
    }

    /// Build the complete SQL query string with `:name` placeholders
    pub fn build_sql(&self) -> String {
        let mut sql = String::from("SELECT ");
        sql.push_str(&self.select_fields.join(", "));
        sql.push_str(&self.from_sql());
        self.push_joins_and_where(&mut sql);

        if !self.group_by.is_empty() {
            sql.push_str(&format!(" GROUP BY {}", self.group_by.join(", ")));
        }

        if !self.order_by.is_empty() {
            sql.push_str(&format!(" ORDER BY {}", self.order_by.join(", ")));
        }

        if let Some(ref pagination) = self.pagination {
            sql.push_str(&pagination.to_sql());
        }

        sql
    }

    /// Build a count query over the same joins and filters
    pub fn count_sql(&self) -> String {
        let count = match (&self.base_alias, self.distinct_count) {
            (Some(alias), true) => format!("COUNT(DISTINCT {alias}.id)"),
            _ => "COUNT(*)".to_string(),
        };
        let mut sql = format!("SELECT {count}");
        sql.push_str(&self.from_sql());
        self.push_joins_and_where(&mut sql);
        sql
    }

    /// Build the SQL with every bound parameter replaced by its literal
    pub fn build_inlined_sql(&self) -> String {
        inline_parameters(&self.build_sql(), &self.parameters)
    }

    /// Bound parameters rendered as SQL literals, for diagnostics
    pub fn describe_parameters(&self) -> Vec<(String, String)> {
        self.parameters
            .iter()
            .map(|(name, value)| (name.clone(), format_value(value)))
            .collect()
    }

    /// Execute the query and return the selected lead ids.
    ///
    /// The first selected column must be the lead id.
    pub async fn fetch_lead_ids(&self, pool: &PgPool) -> Result<Vec<i64>, sqlx::Error> {
        let sql = self.build_inlined_sql();
        sqlx::query_scalar::<_, i64>(&sql).fetch_all(pool).await
    }

    /// Execute count query
    pub async fn count(&self, pool: &PgPool) -> Result<i64, sqlx::Error> {
        let sql = inline_parameters(&self.count_sql(), &self.parameters);
        sqlx::query_scalar::<_, i64>(&sql).fetch_one(pool).await
    }
}
