use super::command::SearchCommand;
use super::context::{QueryContext, SearchOutcome};
use super::dispatcher::CommandDispatcher;
use super::global::Authorizer;
use super::handlers;
use super::join_query::JoinQueryBuilder;
use super::localizer::Localizer;
use crate::config::SearchConfig;
use crate::constants::{channels, MessageQueueStatus};
use crate::error::Result;
use crate::logging::log_search_command;
use crate::query_builder::{Condition, QueryBuilder, WhereClause};
use crate::repository::{EmailRepository, LeadRepository};
use std::sync::Arc;
use tracing::debug;

/// Lead search subscriber.
///
/// Interprets search commands such as `email_sent:12` against the lead
/// query. One instance serves many requests; all per-request state lives in
/// the [`QueryContext`].
pub struct LeadSearchSubscriber {
    pub(crate) config: SearchConfig,
    pub(crate) dispatcher: CommandDispatcher,
    pub(crate) localizer: Arc<dyn Localizer>,
    pub(crate) authorizer: Arc<dyn Authorizer>,
    emails: Arc<dyn EmailRepository>,
    leads: LeadRepository,
}

impl LeadSearchSubscriber {
    pub fn new(
        config: SearchConfig,
        localizer: Arc<dyn Localizer>,
        authorizer: Arc<dyn Authorizer>,
        emails: Arc<dyn EmailRepository>,
    ) -> Self {
        let dispatcher =
            CommandDispatcher::new(localizer.as_ref(), &config.locale, &config.canonical_locale);
        let leads = LeadRepository::new(&config);
        Self {
            config,
            dispatcher,
            localizer,
            authorizer,
            emails,
            leads,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }

    pub fn leads(&self) -> &LeadRepository {
        &self.leads
    }

    /// Handle the command carried by `ctx`.
    ///
    /// Tokens outside the vocabulary leave the context untouched. Only a
    /// failing email lookup is reported as an error.
    pub async fn on_build_search_commands(&self, ctx: &mut QueryContext<'_>) -> Result<()> {
        let Some(command) = self.dispatcher.resolve(ctx.command()) else {
            debug!(token = %ctx.command(), "Not a lead search command");
            return Ok(());
        };

        let lead = self.leads.lead_alias().to_string();
        let builder = JoinQueryBuilder::new(&self.leads);

        let handled = match command {
            SearchCommand::EmailRead => {
                let (joins, filter) = handlers::email_read(&lead);
                builder.build(ctx, &joins, &filter)
            }
            SearchCommand::EmailSent => {
                let (joins, filter) = handlers::email_sent(&lead);
                builder.build(ctx, &joins, &filter)
            }
            SearchCommand::EmailQueued => self.build_email_queued(ctx, &builder, &lead),
            SearchCommand::EmailPending => self.build_email_pending(ctx, &builder, &lead).await?,
            SearchCommand::PageSource => {
                let (joins, filter) = handlers::page_source(&lead);
                builder.build(ctx, &joins, &filter)
            }
            SearchCommand::PageSourceId => {
                let (joins, filter) = handlers::page_source_id(&lead);
                builder.build(ctx, &joins, &filter)
            }
            SearchCommand::ImportId => {
                let (joins, filter) = handlers::import_id(&lead);
                builder.build(ctx, &joins, &filter)
            }
            SearchCommand::ImportAction => {
                let (joins, filter) = handlers::import_action(&lead);
                builder.build(ctx, &joins, &filter)
            }
            SearchCommand::PageId => {
                let (joins, filter) = handlers::page_id(&lead);
                builder.build(ctx, &joins, &filter)
            }
            SearchCommand::SmsSent => {
                let (joins, filter) = handlers::sms_sent(&lead);
                builder.build(ctx, &joins, &filter)
            }
            SearchCommand::WebSent => {
                let (joins, filter) = handlers::notification_sent(&lead, false);
                builder.build(ctx, &joins, &filter)
            }
            SearchCommand::MobileSent => {
                let (joins, filter) = handlers::notification_sent(&lead, true);
                builder.build(ctx, &joins, &filter)
            }
        };

        log_search_command(
            command.canonical_name(),
            ctx.alias(),
            if handled { "handled" } else { "skipped" },
            ctx.sub_query().map(|_| "sub-query"),
        );
        Ok(())
    }

    /// Run one command against `query` and bind its argument.
    ///
    /// A sub-query produced by the command is ANDed into the WHERE clause;
    /// when the command consumed the argument as a parameter it is bound
    /// under the generated alias, even when empty.
    pub async fn apply_search_command(
        &self,
        query: &mut QueryBuilder,
        token: &str,
        argument: &str,
    ) -> Result<SearchOutcome> {
        let alias = query.next_search_alias();
        let outcome = {
            let mut ctx = QueryContext::new(query, token, argument, &alias);
            self.on_build_search_commands(&mut ctx).await?;
            ctx.outcome()
        };

        if let Some(sub_query) = &outcome.sub_query {
            query.and_where(WhereClause::raw(sub_query));
        }
        if outcome.return_parameters {
            query.set_parameter(&alias, argument);
        }

        Ok(outcome)
    }

    /// `mq.status` must be pending or rescheduled, which needs an IN list
    fn build_email_queued(
        &self,
        ctx: &mut QueryContext<'_>,
        builder: &JoinQueryBuilder<'_>,
        lead: &str,
    ) -> bool {
        let joins = handlers::message_queue(lead);
        let placeholder = format!(":{}", ctx.alias());
        let mut expression = WhereClause::single(Condition::eq("mq.channel_id", &placeholder));

        let query = ctx.query_mut();
        let channel = query.create_named_parameter(channels::EMAIL);
        expression.add(Condition::eq("mq.channel", &channel));
        let statuses: Vec<String> = MessageQueueStatus::queued()
            .iter()
            .map(|status| query.create_named_parameter(status.as_str()))
            .collect();
        expression.add(Condition::in_list("mq.status", &statuses));

        builder.apply(ctx, &joins, expression)
    }

    /// A known email id becomes a sub-query over its pending recipients;
    /// anything else falls back to pending rows in the message queue
    async fn build_email_pending(
        &self,
        ctx: &mut QueryContext<'_>,
        builder: &JoinQueryBuilder<'_>,
        lead: &str,
    ) -> Result<bool> {
        let email_id = parse_entity_id(ctx.argument());

        if let Some(email) = self.emails.find_by_id(email_id).await? {
            let variant_ids = self.emails.related_ids(&email);
            let Some(mut pending) =
                self.emails
                    .email_pending_query(&self.config, email_id, &variant_ids)
            else {
                debug!(email_id, "No pending query for email");
                return Ok(false);
            };

            let lead_id = format!("{lead}.id");
            pending.set_select(&[lead_id.as_str()]);
            let condition = Condition::InSubquery {
                field: lead_id,
                subquery: pending.build_inlined_sql(),
            };
            ctx.set_sub_query(condition.to_sql());
            return Ok(true);
        }

        let (joins, filter) = handlers::email_pending_fallback(lead);
        Ok(builder.build(ctx, &joins, &filter))
    }
}

/// Leading integer of a search argument (`"12abc"` is 12); no leading digits is id 0
fn parse_entity_id(argument: &str) -> i64 {
    let trimmed = argument.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['-', '+']));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return 0;
    }
    trimmed[..sign_len + digits_len].parse().unwrap_or(0)
}
