use super::command::SearchCommand;
use super::localizer::Localizer;
use std::collections::HashMap;

/// Maps command tokens to [`SearchCommand`]s.
///
/// Each command answers to its label in the active locale and to its label
/// in the canonical locale. Tokens are compared trimmed and lowercased. When
/// two commands share a label, the one earlier in [`SearchCommand::ALL`] wins.
#[derive(Debug, Clone)]
pub struct CommandDispatcher {
    locale: String,
    table: HashMap<String, SearchCommand>,
    labels: Vec<(SearchCommand, String)>,
}

impl CommandDispatcher {
    pub fn new(localizer: &dyn Localizer, locale: &str, canonical_locale: &str) -> Self {
        let mut table = HashMap::new();
        let mut labels = Vec::with_capacity(SearchCommand::ALL.len());

        for command in SearchCommand::ALL {
            let key = command.translation_key();
            let localized = localizer.translate(&key, Some(locale));
            let canonical = localizer.translate(&key, Some(canonical_locale));

            table.entry(normalize(&localized)).or_insert(command);
            table.entry(normalize(&canonical)).or_insert(command);
            labels.push((command, localized));
        }

        Self {
            locale: locale.to_string(),
            table,
            labels,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Resolve a raw token; `None` for anything outside the vocabulary
    pub fn resolve(&self, token: &str) -> Option<SearchCommand> {
        self.table.get(&normalize(token)).copied()
    }

    /// Localized labels of all commands, in vocabulary order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|(_, label)| label.as_str())
    }
}

fn normalize(token: &str) -> String {
    token.trim().to_lowercase()
}
