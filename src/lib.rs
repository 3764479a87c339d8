#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

//! # Lead Search Core
//!
//! Search-command interpreter for CRM lead lists.
//!
//! ## Overview
//!
//! A lead search string such as `email_sent:12 page_source:google` is split by
//! the host application into commands and arguments. For each command this
//! crate resolves the (possibly localized) token, adds the joins and filters
//! it needs to the lead query, and reports whether the argument was consumed
//! as a bound parameter and whether generic free-text search should be
//! skipped.
//!
//! ## Module Organization
//!
//! - [`search`] - command vocabulary, dispatcher, join/filter builder, subscriber
//! - [`query_builder`] - SQL session object with joins, WHERE composites and named parameters
//! - [`repository`] - email lookups and the lead relationship-join primitive
//! - [`config`] - configuration loading
//! - [`constants`] - table names, statuses, permissions, translation keys
//! - [`error`] - structured error handling
//! - [`logging`] - tracing setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use lead_search::config::SearchConfig;
//! use lead_search::repository::PgEmailRepository;
//! use lead_search::search::{CanonicalLocalizer, GrantedPermissions, LeadSearchSubscriber};
//! use sqlx::PgPool;
//!
//! # async fn example(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
//! let config = SearchConfig::load(None)?;
//! let emails = Arc::new(PgEmailRepository::new(pool.clone(), &config));
//! let subscriber = LeadSearchSubscriber::new(
//!     config,
//!     Arc::new(CanonicalLocalizer),
//!     Arc::new(GrantedPermissions::new(["lead:leads:viewother"])),
//!     emails,
//! );
//!
//! let mut query = subscriber.leads().create_query();
//! let outcome = subscriber.apply_search_command(&mut query, "email_sent", "12").await?;
//! if outcome.search_status {
//!     let lead_ids = query.fetch_lead_ids(&pool).await?;
//!     println!("{} leads received email 12", lead_ids.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod query_builder;
pub mod repository;
pub mod search;

pub use config::SearchConfig;
pub use constants::MessageQueueStatus;
pub use error::{Result, SearchError};
pub use query_builder::QueryBuilder;
pub use search::{LeadSearchSubscriber, QueryContext, SearchCommand, SearchOutcome};
