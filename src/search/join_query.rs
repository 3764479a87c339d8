use super::context::QueryContext;
use super::specification::{FilterSpecification, JoinSpecification};
use crate::query_builder::{Condition, WhereClause};
use crate::repository::LeadRepository;
use tracing::debug;

/// Turns join and filter specifications into joins and a WHERE conjunction
/// on the context's query.
///
/// Malformed specifications (no joins, no primary column, or a join that
/// refers to an alias not bound before it) leave the context untouched so the
/// caller falls back to free-text search.
#[derive(Debug, Clone, Copy)]
pub struct JoinQueryBuilder<'a> {
    leads: &'a LeadRepository,
}

impl<'a> JoinQueryBuilder<'a> {
    pub fn new(leads: &'a LeadRepository) -> Self {
        Self { leads }
    }

    /// Apply `primary_column = :alias` plus every fixed filter.
    ///
    /// Returns whether the query was modified.
    pub fn build(
        &self,
        ctx: &mut QueryContext<'_>,
        joins: &[JoinSpecification],
        filter: &FilterSpecification,
    ) -> bool {
        let Some(column) = filter.primary_column.as_deref() else {
            debug!(command = %ctx.command(), "Filter has no primary column, skipping");
            return false;
        };
        if joins.is_empty() {
            debug!(command = %ctx.command(), "No joins specified, skipping");
            return false;
        }
        if !self.valid_chain(ctx, joins) {
            return false;
        }

        let placeholder = format!(":{}", ctx.alias());
        let mut expression = WhereClause::single(Condition::eq(column, &placeholder));
        for (name, value) in &filter.fixed_filters {
            let param = ctx.query_mut().create_named_parameter(value.clone());
            expression.add(Condition::eq(name, &param));
        }

        self.apply(ctx, joins, expression)
    }

    /// Join `joins` with a prepared predicate and mark the search handled.
    ///
    /// Used directly by commands whose predicate is not a plain conjunction
    /// of equalities.
    pub fn apply(
        &self,
        ctx: &mut QueryContext<'_>,
        joins: &[JoinSpecification],
        expression: WhereClause,
    ) -> bool {
        if joins.is_empty() || !self.valid_chain(ctx, joins) {
            return false;
        }

        self.leads
            .apply_search_query_relationship(ctx.query_mut(), joins, true, Some(expression));

        ctx.set_return_parameters(true);
        ctx.set_strict(true);
        ctx.set_search_status(true);
        true
    }

    fn valid_chain(&self, ctx: &QueryContext<'_>, joins: &[JoinSpecification]) -> bool {
        match JoinSpecification::validate_chain(self.leads.lead_alias(), joins) {
            Ok(()) => true,
            Err(alias) => {
                debug!(command = %ctx.command(), alias = %alias, "Join refers to an unbound alias, skipping");
                false
            }
        }
    }
}
