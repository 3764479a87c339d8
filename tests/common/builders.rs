use async_trait::async_trait;
use lead_search::config::SearchConfig;
use lead_search::constants::{permissions, translation_keys};
use lead_search::repository::{Email, EmailRepository};
use lead_search::search::{
    Authorizer, CanonicalLocalizer, GrantedPermissions, LeadSearchSubscriber, Localizer, SearchCommand,
};
use lead_search::{Result, SearchError};
use std::collections::HashMap;
use std::sync::Arc;

/// Email lookup over a fixed set of emails
#[derive(Debug, Default)]
pub struct InMemoryEmailRepository {
    emails: HashMap<i64, Email>,
}

impl InMemoryEmailRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, email: Email) -> Self {
        self.emails.insert(email.id, email);
        self
    }
}

#[async_trait]
impl EmailRepository for InMemoryEmailRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Email>> {
        Ok(self.emails.get(&id).cloned())
    }
}

/// Email lookup whose backing store is down
#[derive(Debug, Default)]
pub struct FailingEmailRepository;

#[async_trait]
impl EmailRepository for FailingEmailRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Email>> {
        Err(SearchError::LookupFailure(format!("emails table unavailable for {id}")))
    }
}

/// Email 12 with variant children 5 and 7
pub fn ab_test_email() -> Email {
    Email {
        id: 12,
        name: "Spring newsletter".to_string(),
        variant_children: vec![5, 7],
        ..Email::default()
    }
}

pub const FRENCH: &str = "fr_FR";

/// Localizer with French command labels; the canonical locale and unknown
/// keys fall back to English
#[derive(Debug, Default)]
pub struct FrenchLocalizer;

impl FrenchLocalizer {
    pub fn command_label(command: SearchCommand) -> &'static str {
        match command {
            SearchCommand::EmailRead => "courriel_lu",
            SearchCommand::EmailSent => "courriel_envoye",
            SearchCommand::EmailQueued => "courriel_en_file",
            SearchCommand::EmailPending => "courriel_en_attente",
            SearchCommand::PageSource => "source_page",
            SearchCommand::PageSourceId => "id_source_page",
            SearchCommand::ImportId => "id_import",
            SearchCommand::ImportAction => "action_import",
            SearchCommand::PageId => "id_page",
            SearchCommand::SmsSent => "sms_envoye",
            SearchCommand::WebSent => "web_envoye",
            SearchCommand::MobileSent => "mobile_envoye",
        }
    }
}

impl Localizer for FrenchLocalizer {
    fn translate(&self, key: &str, locale: Option<&str>) -> String {
        if locale.unwrap_or(FRENCH) != FRENCH {
            return CanonicalLocalizer.translate(key, locale);
        }
        if let Some(command) = SearchCommand::from_translation_key(key) {
            return Self::command_label(command).to_string();
        }
        match key {
            translation_keys::IS_ANONYMOUS => "est:anonyme".to_string(),
            translation_keys::IS_MINE => "est:moi".to_string(),
            _ => CanonicalLocalizer.translate(key, locale),
        }
    }
}

pub fn view_other() -> Arc<dyn Authorizer> {
    Arc::new(GrantedPermissions::new([permissions::LEADS_VIEW_OWN, permissions::LEADS_VIEW_OTHER]))
}

/// English subscriber over `emails`
pub fn subscriber_with(emails: impl EmailRepository + 'static) -> LeadSearchSubscriber {
    LeadSearchSubscriber::new(
        SearchConfig::default(),
        Arc::new(CanonicalLocalizer),
        view_other(),
        Arc::new(emails),
    )
}

/// English subscriber that knows [`ab_test_email`]
pub fn subscriber() -> LeadSearchSubscriber {
    subscriber_with(InMemoryEmailRepository::new().with(ab_test_email()))
}

/// French subscriber with the given permissions
pub fn french_subscriber(authorizer: Arc<dyn Authorizer>) -> LeadSearchSubscriber {
    let config = SearchConfig {
        locale: FRENCH.to_string(),
        ..SearchConfig::default()
    };
    LeadSearchSubscriber::new(
        config,
        Arc::new(FrenchLocalizer),
        authorizer,
        Arc::new(InMemoryEmailRepository::new().with(ab_test_email())),
    )
}
