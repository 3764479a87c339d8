use crate::common::{french_subscriber, subscriber, view_other, FrenchLocalizer};
use lead_search::constants::permissions;
use lead_search::search::{GlobalSearchSummary, GrantedPermissions, SearchCommand};
use std::sync::Arc;

#[test]
fn test_global_search_hides_anonymous_leads() {
    let request = subscriber().on_global_search("john").expect("request");

    assert_eq!(request.filter.string, "john");
    assert_eq!(request.filter.force, " !is:anonymous");
    assert_eq!(request.limit, 5);
    assert!(request.with_total_count);
    assert_eq!(request.pagination().to_sql(), " LIMIT 5");
}

#[test]
fn test_global_search_keeps_explicit_anonymous_filter() {
    let request = subscriber().on_global_search("is:anonymous smith").expect("request");
    assert_eq!(request.filter.force, "");
}

#[test]
fn test_global_search_limits_to_own_leads_without_view_other() {
    let subscriber = french_subscriber(Arc::new(GrantedPermissions::new([permissions::LEADS_VIEW_OWN])));
    let request = subscriber.on_global_search("dupont").expect("request");
    assert_eq!(request.filter.force, " !est:anonyme est:moi");
}

#[test]
fn test_global_search_requires_input_and_permission() {
    assert!(subscriber().on_global_search("").is_none());

    let subscriber = french_subscriber(Arc::new(GrantedPermissions::default()));
    assert!(subscriber.on_global_search("dupont").is_none());
}

#[test]
fn test_summary_reports_remaining_leads() {
    let summary = GlobalSearchSummary::new(12, 5);
    assert_eq!(summary.count, 12);
    assert_eq!(summary.remaining, Some(7));
    assert_eq!(GlobalSearchSummary::new(2, 5).remaining, None);
}

#[test]
fn test_command_list_uses_localized_labels() {
    let (group, labels) = french_subscriber(view_other())
        .on_build_command_list()
        .expect("command list");

    assert_eq!(group, "Contacts");
    let expected: Vec<String> = SearchCommand::ALL
        .iter()
        .map(|command| FrenchLocalizer::command_label(*command).to_string())
        .collect();
    assert_eq!(labels, expected);
}

#[test]
fn test_command_list_requires_view_permission() {
    let own_only = french_subscriber(Arc::new(GrantedPermissions::new([permissions::LEADS_VIEW_OWN])));
    assert!(own_only.on_build_command_list().is_some());

    let none = french_subscriber(Arc::new(GrantedPermissions::new(["email:emails:view"])));
    assert!(none.on_build_command_list().is_none());
}
