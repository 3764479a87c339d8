//! # Search Constants
//!
//! Table names, channel names, message-queue statuses, permissions and
//! translation keys shared by the search subscriber and its collaborators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Locale whose labels are always accepted by the dispatcher.
pub const CANONICAL_LOCALE: &str = "en_US";

/// Tables joined by search commands (before the configured prefix is applied)
pub mod tables {
    pub const LEADS: &str = "leads";
    pub const EMAILS: &str = "emails";
    pub const EMAIL_STATS: &str = "email_stats";
    pub const EMAIL_LIST_XREF: &str = "email_list_xref";
    pub const MESSAGE_QUEUE: &str = "message_queue";
    pub const PAGE_HITS: &str = "page_hits";
    pub const LEAD_EVENT_LOG: &str = "lead_event_log";
    pub const LEAD_LISTS_LEADS: &str = "lead_lists_leads";
    pub const LEAD_DONOTCONTACT: &str = "lead_donotcontact";
    pub const SMS_MESSAGE_STATS: &str = "sms_message_stats";
    pub const PUSH_NOTIFICATION_STATS: &str = "push_notification_stats";
    pub const PUSH_NOTIFICATIONS: &str = "push_notifications";
}

/// Outbound channels
pub mod channels {
    pub const EMAIL: &str = "email";
}

/// `lead_event_log.object` value written by contact imports
pub const IMPORT_OBJECT: &str = "import";

/// Permissions consulted by global search and the command list
pub mod permissions {
    pub const LEADS_VIEW_OWN: &str = "lead:leads:viewown";
    pub const LEADS_VIEW_OTHER: &str = "lead:leads:viewother";
}

/// Translation keys resolved through the [`Localizer`](crate::search::Localizer)
pub mod translation_keys {
    pub const IS_ANONYMOUS: &str = "lead.lead.searchcommand.isanonymous";
    pub const IS_MINE: &str = "core.searchcommand.ismine";
    pub const LEADS_GROUP: &str = "lead.leads";
}

/// Status of a row in the message queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageQueueStatus {
    Pending,
    Rescheduled,
    Sent,
    Cancelled,
}

impl MessageQueueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Rescheduled => "rescheduled",
            Self::Sent => "sent",
            Self::Cancelled => "cancelled",
        }
    }

    /// Statuses counted as "queued" by the `email_queued` command
    pub fn queued() -> [MessageQueueStatus; 2] {
        [Self::Pending, Self::Rescheduled]
    }
}

impl fmt::Display for MessageQueueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MessageQueueStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "rescheduled" => Ok(Self::Rescheduled),
            "sent" => Ok(Self::Sent),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("Invalid message queue status: {s}")),
        }
    }
}
