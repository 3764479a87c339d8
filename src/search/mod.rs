//! # Lead Search Commands
//!
//! Interprets structured search commands (`email_sent:12`, `page_source:google`)
//! into joins and filters on the lead query.
//!
//! ## Flow
//!
//! 1. [`CommandDispatcher`] resolves the token, accepting the label in the
//!    active locale and in the canonical locale.
//! 2. The command's handler describes the joins ([`JoinSpecification`]) and
//!    filters ([`FilterSpecification`]) it needs.
//! 3. [`JoinQueryBuilder`] writes them into the [`QueryContext`]'s query and
//!    raises the `strict`, `return_parameters` and `search_status` flags.
//!
//! `email_queued` builds its own predicate (status IN pending/rescheduled),
//! and `email_pending` for a known email hands back a sub-query over the
//! email's pending recipients instead of joining.
//!
//! ## Commands
//!
//! | Command | Joins | Primary column | Fixed filters |
//! |---|---|---|---|
//! | `email_read` | email_stats es | es.email_id | es.is_read = 1 |
//! | `email_sent` | email_stats es | es.email_id | |
//! | `email_queued` | message_queue mq | mq.channel_id | channel = email, status IN (pending, rescheduled) |
//! | `email_pending` | message_queue mq, or sub-query | mq.channel_id | channel = email, status = pending |
//! | `page_source` | page_hits ph | ph.source | |
//! | `page_source_id` | page_hits ph | ph.source_id | |
//! | `page_id` | page_hits ph | ph.redirect_id | |
//! | `import_id` | lead_event_log lel | lel.object_id | lel.object = import |
//! | `import_action` | lead_event_log lel | lel.action | |
//! | `sms_sent` | sms_message_stats ss | ss.sms_id | |
//! | `web_sent` | push_notification_stats ns, push_notifications pn | pn.id | pn.mobile = 0 |
//! | `mobile_sent` | push_notification_stats ns, push_notifications pn | pn.id | pn.mobile = 1 |

pub mod command;
pub mod context;
pub mod dispatcher;
pub mod global;
pub mod handlers;
pub mod join_query;
pub mod localizer;
pub mod specification;
pub mod subscriber;

pub use command::SearchCommand;
pub use context::{QueryContext, SearchOutcome};
pub use dispatcher::CommandDispatcher;
pub use global::{Authorizer, GlobalSearchRequest, GlobalSearchSummary, GrantedPermissions, SearchFilter};
pub use join_query::JoinQueryBuilder;
pub use localizer::{CanonicalLocalizer, Localizer};
pub use specification::{FilterSpecification, JoinSpecification};
pub use subscriber::LeadSearchSubscriber;
