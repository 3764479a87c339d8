//! # Query Builder System
//!
//! The SQL session object that search commands write into.
//!
//! ## Key Components
//!
//! - [`builder`] - Core query builder with SQL generation and named parameters
//! - [`conditions`] - WHERE clause building (equality, IN, sub-queries, composites)
//! - [`joins`] - JOIN clause management (INNER, LEFT)
//! - [`pagination`] - LIMIT/OFFSET windows
//! - [`parameters`] - `:name` placeholder inlining
//!
//! ## Example Usage
//!
//! ```rust
//! use lead_search::query_builder::{Condition, Join, QueryBuilder, WhereClause};
//!
//! let mut query = QueryBuilder::from_aliased("leads", "l")
//!     .join(Join::inner("email_stats", "es", "l.id = es.lead_id"));
//! let read = query.create_named_parameter(1);
//! query.and_where(WhereClause::single(Condition::eq("es.is_read", &read)));
//!
//! assert!(query.build_inlined_sql().ends_with("WHERE es.is_read = 1"));
//! ```

pub mod builder;
pub mod conditions;
pub mod joins;
pub mod pagination;
pub mod parameters;

pub use builder::QueryBuilder;
pub use conditions::{Condition, LogicalOperator, WhereClause};
pub use joins::{Join, JoinType};
pub use pagination::Pagination;
