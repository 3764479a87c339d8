//! Translation boundary.
//!
//! Catalog loading and pluralisation belong to the host application; the
//! search subscriber only needs label lookups.

use super::command::SearchCommand;
use crate::constants::translation_keys;

/// Resolves translation keys to labels
pub trait Localizer: Send + Sync {
    /// Label for `key` in `locale`, or in the localizer's active locale when
    /// `locale` is `None`. Unknown keys come back unchanged.
    fn translate(&self, key: &str, locale: Option<&str>) -> String;
}

/// Localizer that answers every locale with the canonical English labels
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalLocalizer;

impl CanonicalLocalizer {
    pub fn label(key: &str) -> Option<String> {
        if let Some(command) = SearchCommand::from_translation_key(key) {
            return Some(command.canonical_name().to_string());
        }
        match key {
            translation_keys::IS_ANONYMOUS => Some("is:anonymous".to_string()),
            translation_keys::IS_MINE => Some("is:mine".to_string()),
            translation_keys::LEADS_GROUP => Some("Contacts".to_string()),
            _ => None,
        }
    }
}

impl Localizer for CanonicalLocalizer {
    fn translate(&self, key: &str, _locale: Option<&str>) -> String {
        Self::label(key).unwrap_or_else(|| key.to_string())
    }
}
