use crate::common::{french_subscriber, view_other, FrenchLocalizer};
use lead_search::search::SearchCommand;

#[test]
fn test_localized_and_canonical_labels_resolve_to_same_command() {
    let subscriber = french_subscriber(view_other());
    let dispatcher = subscriber.dispatcher();

    assert_eq!(dispatcher.locale(), "fr_FR");
    for command in SearchCommand::ALL {
        assert_eq!(dispatcher.resolve(FrenchLocalizer::command_label(command)), Some(command));
        assert_eq!(dispatcher.resolve(command.canonical_name()), Some(command));
    }
}

#[test]
fn test_tokens_are_matched_case_insensitively() {
    let subscriber = french_subscriber(view_other());
    assert_eq!(subscriber.dispatcher().resolve("Courriel_Lu"), Some(SearchCommand::EmailRead));
    assert_eq!(subscriber.dispatcher().resolve("MOBILE_SENT"), Some(SearchCommand::MobileSent));
    assert_eq!(subscriber.dispatcher().resolve("courriel"), None);
}

#[tokio::test]
async fn test_localized_token_builds_same_query_as_canonical() {
    let subscriber = french_subscriber(view_other());

    for command in SearchCommand::ALL {
        let mut localized = subscriber.leads().create_query();
        let mut canonical = subscriber.leads().create_query();

        let a = subscriber
            .apply_search_command(&mut localized, FrenchLocalizer::command_label(command), "12")
            .await
            .unwrap();
        let b = subscriber
            .apply_search_command(&mut canonical, command.canonical_name(), "12")
            .await
            .unwrap();

        assert_eq!(a, b, "{command}");
        assert_eq!(localized, canonical, "{command}");
        assert!(a.search_status, "{command}");
    }
}
