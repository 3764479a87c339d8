use crate::query_builder::QueryBuilder;
use serde::{Deserialize, Serialize};

/// State of one search-command invocation.
///
/// Borrows the request's query builder exclusively for the duration of the
/// invocation. Handlers write joins and predicates into the query and report
/// back through the three result flags and the optional sub-query.
#[derive(Debug)]
pub struct QueryContext<'q> {
    query: &'q mut QueryBuilder,
    command: String,
    argument: String,
    alias: String,
    strict: bool,
    return_parameters: bool,
    search_status: bool,
    sub_query: Option<String>,
}

impl<'q> QueryContext<'q> {
    /// `alias` names the parameter the raw `argument` is bound to by the caller
    pub fn new(query: &'q mut QueryBuilder, command: &str, argument: &str, alias: &str) -> Self {
        Self {
            query,
            command: command.to_string(),
            argument: argument.to_string(),
            alias: alias.to_string(),
            strict: false,
            return_parameters: false,
            search_status: false,
            sub_query: None,
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn argument(&self) -> &str {
        &self.argument
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn query(&self) -> &QueryBuilder {
        self.query
    }

    pub fn query_mut(&mut self) -> &mut QueryBuilder {
        self.query
    }

    /// Disable LIKE matching for the argument
    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// The argument is consumed as a bound parameter rather than display text
    pub fn set_return_parameters(&mut self, return_parameters: bool) {
        self.return_parameters = return_parameters;
    }

    pub fn returns_parameters(&self) -> bool {
        self.return_parameters
    }

    /// The command was fully handled; generic free-text search must not run
    pub fn set_search_status(&mut self, done: bool) {
        self.search_status = done;
    }

    pub fn is_search_done(&self) -> bool {
        self.search_status
    }

    /// Hand a finished predicate to the caller instead of joining; marks the
    /// search as done
    pub fn set_sub_query(&mut self, sub_query: String) {
        self.sub_query = Some(sub_query);
        self.search_status = true;
    }

    pub fn sub_query(&self) -> Option<&str> {
        self.sub_query.as_deref()
    }

    pub fn outcome(&self) -> SearchOutcome {
        SearchOutcome {
            alias: self.alias.clone(),
            strict: self.strict,
            return_parameters: self.return_parameters,
            search_status: self.search_status,
            sub_query: self.sub_query.clone(),
        }
    }
}

/// Result-shaping signals of one search command, as seen by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub alias: String,
    pub strict: bool,
    pub return_parameters: bool,
    pub search_status: bool,
    pub sub_query: Option<String>,
}

impl SearchOutcome {
    /// True when none of the signals was raised
    pub fn is_untouched(&self) -> bool {
        !self.strict && !self.return_parameters && !self.search_status && self.sub_query.is_none()
    }
}
