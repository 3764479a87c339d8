//! # Repositories
//!
//! Collaborators the search subscriber reads from or writes through:
//!
//! - [`email`] - email entity, the [`EmailRepository`] boundary and the pending-recipient query
//! - [`lead`] - the relationship-join primitive over the lead query
//! - [`postgres`] - `sqlx` implementation of [`EmailRepository`]

pub mod email;
pub mod lead;
pub mod postgres;

pub use email::{pending_query, Email, EmailRepository};
pub use lead::LeadRepository;
pub use postgres::PgEmailRepository;
