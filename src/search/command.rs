use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed vocabulary of lead search commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchCommand {
    /// Leads that opened an email
    EmailRead,
    /// Leads an email was sent to
    EmailSent,
    /// Leads with a pending or rescheduled email in the message queue
    EmailQueued,
    /// Leads an email is still due to be sent to
    EmailPending,
    PageSource,
    PageSourceId,
    /// Leads created or updated by an import
    ImportId,
    ImportAction,
    PageId,
    SmsSent,
    WebSent,
    MobileSent,
}

impl SearchCommand {
    /// Every command, in resolution priority order
    pub const ALL: [SearchCommand; 12] = [
        Self::EmailRead,
        Self::EmailSent,
        Self::EmailQueued,
        Self::EmailPending,
        Self::PageSource,
        Self::PageSourceId,
        Self::ImportId,
        Self::ImportAction,
        Self::PageId,
        Self::SmsSent,
        Self::WebSent,
        Self::MobileSent,
    ];

    /// Locale-independent name of the command
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Self::EmailRead => "email_read",
            Self::EmailSent => "email_sent",
            Self::EmailQueued => "email_queued",
            Self::EmailPending => "email_pending",
            Self::PageSource => "page_source",
            Self::PageSourceId => "page_source_id",
            Self::ImportId => "import_id",
            Self::ImportAction => "import_action",
            Self::PageId => "page_id",
            Self::SmsSent => "sms_sent",
            Self::WebSent => "web_sent",
            Self::MobileSent => "mobile_sent",
        }
    }

    /// Key under which the command's label is translated
    pub fn translation_key(&self) -> String {
        format!("lead.lead.searchcommand.{}", self.canonical_name())
    }

    /// Inverse of [`translation_key`](Self::translation_key)
    pub fn from_translation_key(key: &str) -> Option<Self> {
        let name = key.strip_prefix("lead.lead.searchcommand.")?;
        name.parse().ok()
    }
}

impl fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl std::str::FromStr for SearchCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|command| command.canonical_name() == s)
            .ok_or_else(|| format!("Unknown search command: {s}"))
    }
}
