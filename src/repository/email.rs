//! Email lookups used by the `email_pending` command.

use crate::config::SearchConfig;
use crate::constants::{channels, tables, MessageQueueStatus};
use crate::error::Result;
use crate::query_builder::{Condition, QueryBuilder, WhereClause};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// An email together with its A/B-test and translation relatives
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Email {
    pub id: i64,
    pub name: String,
    pub variant_parent_id: Option<i64>,
    pub variant_children: Vec<i64>,
    pub translation_parent_id: Option<i64>,
    pub translation_children: Vec<i64>,
}

impl Email {
    /// Ids of every related email (variant and translation parents and
    /// children), excluding this email, ascending and deduplicated
    pub fn related_entity_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self
            .variant_parent_id
            .into_iter()
            .chain(self.variant_children.iter().copied())
            .chain(self.translation_parent_id)
            .chain(self.translation_children.iter().copied())
            .filter(|id| *id != self.id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

/// Email lookup consumed by the search subscriber
#[async_trait]
pub trait EmailRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Email>>;

    /// Variant group of `email`
    fn related_ids(&self, email: &Email) -> Vec<i64> {
        email.related_entity_ids()
    }

    /// Query selecting leads `email_id` (or one of its variants) is still due to reach
    fn email_pending_query(
        &self,
        config: &SearchConfig,
        email_id: i64,
        variant_ids: &[i64],
    ) -> Option<QueryBuilder> {
        Some(pending_query(config, email_id, variant_ids))
    }
}

/// Leads that belong to a segment the email is sent to, have an address,
/// were not sent the email or one of its variants yet, are not marked
/// do-not-contact for email, and have no unsent queue entry for it.
pub fn pending_query(config: &SearchConfig, email_id: i64, variant_ids: &[i64]) -> QueryBuilder {
    let lead = config.lead_alias.as_str();
    let mut query = QueryBuilder::from_aliased(&config.table(&config.lead_table), lead);

    let mut ids = vec![email_id];
    for id in variant_ids {
        if !ids.contains(id) {
            ids.push(*id);
        }
    }

    let email_param = query.create_named_parameter(email_id);
    let not_removed = query.create_named_parameter(false);
    let segment = format!(
        "SELECT null FROM {} ll WHERE ll.lead_id = {lead}.id AND ll.manually_removed = {not_removed} \
         AND ll.leadlist_id IN (SELECT el.leadlist_id FROM {} el WHERE el.email_id = {email_param})",
        config.table(tables::LEAD_LISTS_LEADS),
        config.table(tables::EMAIL_LIST_XREF),
    );

    let dnc_channel = query.create_named_parameter(channels::EMAIL);
    let dnc = format!(
        "SELECT null FROM {} dnc WHERE dnc.lead_id = {lead}.id AND dnc.channel = {dnc_channel}",
        config.table(tables::LEAD_DONOTCONTACT),
    );

    let stat_ids: Vec<String> = ids.iter().map(|id| query.create_named_parameter(*id)).collect();
    let stats = format!(
        "SELECT null FROM {} stat WHERE stat.lead_id = {lead}.id AND {}",
        config.table(tables::EMAIL_STATS),
        Condition::in_list("stat.email_id", &stat_ids).to_sql(),
    );

    let sent = query.create_named_parameter(MessageQueueStatus::Sent.as_str());
    let mq_channel = query.create_named_parameter(channels::EMAIL);
    let mq_ids: Vec<String> = ids.iter().map(|id| query.create_named_parameter(*id)).collect();
    let queued = format!(
        "SELECT null FROM {} mq WHERE mq.lead_id = {lead}.id AND mq.status <> {sent} \
         AND mq.channel = {mq_channel} AND {}",
        config.table(tables::MESSAGE_QUEUE),
        Condition::in_list("mq.channel_id", &mq_ids).to_sql(),
    );

    let empty = query.create_named_parameter("");
    let email_column = format!("{lead}.email");
    query.and_where(WhereClause::and(vec![
        Condition::Exists { subquery: segment },
        Condition::NotExists { subquery: dnc },
        Condition::NotExists { subquery: stats },
        Condition::NotExists { subquery: queued },
        Condition::IsNotNull {
            field: email_column.clone(),
        },
        Condition::neq(&email_column, &empty),
    ]));

    query
}
