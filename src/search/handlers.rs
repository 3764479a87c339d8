//! Join and filter specifications per search command.
//!
//! Every join hangs off the lead alias `lead`. Table names are unprefixed;
//! the relationship primitive applies the configured prefix.

use super::specification::{FilterSpecification, JoinSpecification};
use crate::constants::{channels, tables, MessageQueueStatus, IMPORT_OBJECT};

fn lead_join(lead: &str, table: &str, alias: &str) -> JoinSpecification {
    JoinSpecification::new(lead, table, alias, &format!("{lead}.id = {alias}.lead_id"))
}

pub fn email_read(lead: &str) -> (Vec<JoinSpecification>, FilterSpecification) {
    (
        vec![lead_join(lead, tables::EMAIL_STATS, "es")],
        FilterSpecification::new("es.email_id").with_filter("es.is_read", 1),
    )
}

pub fn email_sent(lead: &str) -> (Vec<JoinSpecification>, FilterSpecification) {
    (
        vec![lead_join(lead, tables::EMAIL_STATS, "es")],
        FilterSpecification::new("es.email_id"),
    )
}

/// Message-queue join shared by `email_queued` and the `email_pending` fallback
pub fn message_queue(lead: &str) -> Vec<JoinSpecification> {
    vec![lead_join(lead, tables::MESSAGE_QUEUE, "mq")]
}

pub fn email_pending_fallback(lead: &str) -> (Vec<JoinSpecification>, FilterSpecification) {
    (
        message_queue(lead),
        FilterSpecification::new("mq.channel_id")
            .with_filter("mq.channel", channels::EMAIL)
            .with_filter("mq.status", MessageQueueStatus::Pending.as_str()),
    )
}

pub fn page_source(lead: &str) -> (Vec<JoinSpecification>, FilterSpecification) {
    (
        vec![lead_join(lead, tables::PAGE_HITS, "ph")],
        FilterSpecification::new("ph.source"),
    )
}

pub fn page_source_id(lead: &str) -> (Vec<JoinSpecification>, FilterSpecification) {
    (
        vec![lead_join(lead, tables::PAGE_HITS, "ph")],
        FilterSpecification::new("ph.source_id"),
    )
}

pub fn page_id(lead: &str) -> (Vec<JoinSpecification>, FilterSpecification) {
    (
        vec![lead_join(lead, tables::PAGE_HITS, "ph")],
        FilterSpecification::new("ph.redirect_id"),
    )
}

pub fn import_id(lead: &str) -> (Vec<JoinSpecification>, FilterSpecification) {
    (
        vec![lead_join(lead, tables::LEAD_EVENT_LOG, "lel")],
        FilterSpecification::new("lel.object_id").with_filter("lel.object", IMPORT_OBJECT),
    )
}

pub fn import_action(lead: &str) -> (Vec<JoinSpecification>, FilterSpecification) {
    (
        vec![lead_join(lead, tables::LEAD_EVENT_LOG, "lel")],
        FilterSpecification::new("lel.action"),
    )
}

pub fn sms_sent(lead: &str) -> (Vec<JoinSpecification>, FilterSpecification) {
    (
        vec![lead_join(lead, tables::SMS_MESSAGE_STATS, "ss")],
        FilterSpecification::new("ss.sms_id"),
    )
}

/// `web_sent` (`mobile = false`) and `mobile_sent` (`mobile = true`)
pub fn notification_sent(lead: &str, mobile: bool) -> (Vec<JoinSpecification>, FilterSpecification) {
    (
        vec![
            lead_join(lead, tables::PUSH_NOTIFICATION_STATS, "ns"),
            JoinSpecification::new("ns", tables::PUSH_NOTIFICATIONS, "pn", "pn.id = ns.notification_id"),
        ],
        FilterSpecification::new("pn.id").with_filter("pn.mobile", i64::from(mobile)),
    )
}
