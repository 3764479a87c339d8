use crate::common::subscriber;
use lead_search::query_builder::parameters::placeholder_names;
use lead_search::query_builder::{JoinType, QueryBuilder};
use serde_json::json;

#[tokio::test]
async fn test_email_read_joins_stats_and_requires_read() {
    let subscriber = subscriber();
    let mut query = subscriber.leads().create_query();

    let outcome = subscriber
        .apply_search_command(&mut query, "email_read", "12")
        .await
        .unwrap();

    assert_eq!(outcome.alias, "leadsearch1");
    assert!(outcome.strict);
    assert!(outcome.return_parameters);
    assert!(outcome.search_status);
    assert!(outcome.sub_query.is_none());
    assert_eq!(
        query.build_sql(),
        "SELECT l.* FROM leads l INNER JOIN email_stats es ON l.id = es.lead_id \
         WHERE (es.email_id = :leadsearch1 AND es.is_read = :dcValue1) GROUP BY l.id"
    );
    assert_eq!(query.parameter("dcValue1"), Some(&json!(1)));
    assert_eq!(query.parameter("leadsearch1"), Some(&json!("12")));
    assert!(query.uses_distinct_count());
}

#[tokio::test]
async fn test_single_column_commands() {
    let cases = [
        ("email_sent", "email_stats es ON l.id = es.lead_id", "es.email_id"),
        ("page_source", "page_hits ph ON l.id = ph.lead_id", "ph.source"),
        ("page_source_id", "page_hits ph ON l.id = ph.lead_id", "ph.source_id"),
        ("page_id", "page_hits ph ON l.id = ph.lead_id", "ph.redirect_id"),
        ("import_action", "lead_event_log lel ON l.id = lel.lead_id", "lel.action"),
        ("sms_sent", "sms_message_stats ss ON l.id = ss.lead_id", "ss.sms_id"),
    ];
    let subscriber = subscriber();

    for (token, join, column) in cases {
        let mut query = subscriber.leads().create_query();
        let outcome = subscriber
            .apply_search_command(&mut query, token, "google")
            .await
            .unwrap();

        assert!(outcome.strict && outcome.return_parameters && outcome.search_status, "{token}");
        assert_eq!(
            query.build_sql(),
            format!("SELECT l.* FROM leads l INNER JOIN {join} WHERE {column} = :leadsearch1 GROUP BY l.id"),
            "{token}"
        );
        assert_eq!(query.parameters(), &[("leadsearch1".to_string(), json!("google"))]);
    }
}

#[tokio::test]
async fn test_import_id_filters_import_events() {
    let subscriber = subscriber();
    let mut query = subscriber.leads().create_query();

    subscriber
        .apply_search_command(&mut query, "import_id", "8")
        .await
        .unwrap();

    assert_eq!(
        query.build_inlined_sql(),
        "SELECT l.* FROM leads l INNER JOIN lead_event_log lel ON l.id = lel.lead_id \
         WHERE (lel.object_id = '8' AND lel.object = 'import') GROUP BY l.id"
    );
}

#[tokio::test]
async fn test_email_queued_accepts_pending_and_rescheduled() {
    let subscriber = subscriber();
    let mut query = subscriber.leads().create_query();

    let outcome = subscriber
        .apply_search_command(&mut query, "email_queued", "3")
        .await
        .unwrap();

    assert!(outcome.strict && outcome.return_parameters && outcome.search_status);
    assert_eq!(
        query.build_sql(),
        "SELECT l.* FROM leads l INNER JOIN message_queue mq ON l.id = mq.lead_id \
         WHERE (mq.channel_id = :leadsearch1 AND mq.channel = :dcValue1 \
         AND mq.status IN (:dcValue2, :dcValue3)) GROUP BY l.id"
    );
    assert_eq!(query.parameter("dcValue1"), Some(&json!("email")));
    assert_eq!(query.parameter("dcValue2"), Some(&json!("pending")));
    assert_eq!(query.parameter("dcValue3"), Some(&json!("rescheduled")));
}

#[tokio::test]
async fn test_notification_commands_join_stats_then_notifications() {
    let subscriber = subscriber();

    for (token, mobile) in [("web_sent", 0), ("mobile_sent", 1)] {
        let mut query = subscriber.leads().create_query();
        subscriber
            .apply_search_command(&mut query, token, "2")
            .await
            .unwrap();

        let joins = query.joins();
        assert_eq!(joins.len(), 2);
        assert_eq!(joins[0].alias, "ns");
        assert_eq!(joins[0].on_condition, "l.id = ns.lead_id");
        assert_eq!(joins[1].alias, "pn");
        assert_eq!(joins[1].on_condition, "pn.id = ns.notification_id");
        assert!(joins.iter().all(|join| join.join_type == JoinType::Inner));
        assert_eq!(
            query.build_inlined_sql(),
            format!(
                "SELECT l.* FROM leads l \
                 INNER JOIN push_notification_stats ns ON l.id = ns.lead_id \
                 INNER JOIN push_notifications pn ON pn.id = ns.notification_id \
                 WHERE (pn.id = '2' AND pn.mobile = {mobile}) GROUP BY l.id"
            )
        );
    }
}

#[tokio::test]
async fn test_unrecognized_token_leaves_query_untouched() {
    let subscriber = subscriber();

    for token in ["is:mine", "email", "", "email_sent_x", "name"] {
        let mut query = subscriber.leads().create_query();
        let before = query.clone();

        let outcome = subscriber
            .apply_search_command(&mut query, token, "12")
            .await
            .unwrap();

        assert!(outcome.is_untouched(), "{token}");
        assert_eq!(query, before, "{token}");
    }
}

#[tokio::test]
async fn test_empty_argument_is_still_bound() {
    let subscriber = subscriber();
    let mut query = subscriber.leads().create_query();

    let outcome = subscriber
        .apply_search_command(&mut query, "page_source", "")
        .await
        .unwrap();

    assert!(outcome.return_parameters);
    assert_eq!(query.parameter(&outcome.alias), Some(&json!("")));
    assert!(query.build_inlined_sql().contains("ph.source = ''"));
}

#[tokio::test]
async fn test_same_command_on_fresh_queries_is_identical() {
    let subscriber = subscriber();
    let mut first = subscriber.leads().create_query();
    let mut second = subscriber.leads().create_query();

    subscriber.apply_search_command(&mut first, "mobile_sent", "9").await.unwrap();
    subscriber.apply_search_command(&mut second, "mobile_sent", "9").await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_repeated_command_does_not_duplicate_joins() {
    let subscriber = subscriber();
    let mut query = subscriber.leads().create_query();

    let first = subscriber.apply_search_command(&mut query, "email_sent", "1").await.unwrap();
    let second = subscriber.apply_search_command(&mut query, "email_sent", "2").await.unwrap();

    assert_ne!(first.alias, second.alias);
    assert!(second.search_status);
    assert_eq!(query.joins().len(), 1);
    assert_eq!(query.where_clauses().len(), 2);
    assert_eq!(query.group_by_fields(), &["l.id".to_string()]);
    assert_eq!(
        query.build_inlined_sql(),
        "SELECT l.* FROM leads l INNER JOIN email_stats es ON l.id = es.lead_id \
         WHERE es.email_id = '1' AND es.email_id = '2' GROUP BY l.id"
    );
}

#[tokio::test]
async fn test_commands_sharing_a_join_keep_both_predicates() {
    let subscriber = subscriber();
    let mut query = subscriber.leads().create_query();

    subscriber.apply_search_command(&mut query, "email_sent", "1").await.unwrap();
    let outcome = subscriber.apply_search_command(&mut query, "email_read", "2").await.unwrap();

    assert_eq!(outcome.alias, "leadsearch2");
    assert!(outcome.strict && outcome.return_parameters && outcome.search_status);
    assert_eq!(query.joins().len(), 1);
    assert_eq!(
        query.build_inlined_sql(),
        "SELECT l.* FROM leads l INNER JOIN email_stats es ON l.id = es.lead_id \
         WHERE es.email_id = '1' AND (es.email_id = '2' AND es.is_read = 1) GROUP BY l.id"
    );
    assert_every_parameter_is_used(&query);
}

#[tokio::test]
async fn test_queued_and_pending_fallback_keep_their_status_filters() {
    let subscriber = subscriber();
    let mut query = subscriber.leads().create_query();

    subscriber.apply_search_command(&mut query, "email_queued", "1").await.unwrap();
    let outcome = subscriber.apply_search_command(&mut query, "email_pending", "99").await.unwrap();

    assert_eq!(outcome.alias, "leadsearch5");
    assert!(outcome.search_status);
    assert_eq!(query.joins().len(), 1);
    assert_eq!(
        query.build_inlined_sql(),
        "SELECT l.* FROM leads l INNER JOIN message_queue mq ON l.id = mq.lead_id \
         WHERE (mq.channel_id = '1' AND mq.channel = 'email' AND mq.status IN ('pending', 'rescheduled')) \
         AND (mq.channel_id = '99' AND mq.channel = 'email' AND mq.status = 'pending') GROUP BY l.id"
    );
    assert_every_parameter_is_used(&query);
}

fn assert_every_parameter_is_used(query: &QueryBuilder) {
    let placeholders = placeholder_names(&query.build_sql());
    for (name, _) in query.parameters() {
        assert!(placeholders.contains(name), "{name} is bound but never referenced");
    }
}

#[tokio::test]
async fn test_commands_combine_on_one_query() {
    let subscriber = subscriber();
    let mut query = subscriber.leads().create_query();

    subscriber.apply_search_command(&mut query, "email_read", "12").await.unwrap();
    let outcome = subscriber.apply_search_command(&mut query, "page_source", "google").await.unwrap();

    assert_eq!(outcome.alias, "leadsearch3");
    assert_eq!(
        query.build_inlined_sql(),
        "SELECT l.* FROM leads l \
         INNER JOIN email_stats es ON l.id = es.lead_id \
         INNER JOIN page_hits ph ON l.id = ph.lead_id \
         WHERE (es.email_id = '12' AND es.is_read = 1) AND ph.source = 'google' GROUP BY l.id"
    );
}
