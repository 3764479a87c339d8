use lead_search::search::SearchCommand;
use proptest::prelude::*;

/// Any command in the vocabulary
pub fn command_strategy() -> impl Strategy<Value = SearchCommand> {
    prop::sample::select(SearchCommand::ALL.to_vec())
}

/// Tokens that never name a command
pub fn unknown_token_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,6}:?[a-z]{0,6}"
        .prop_filter("Not a command", |token| token.parse::<SearchCommand>().is_err())
}

/// Raw search arguments, including quotes and whitespace
pub fn argument_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        (0i64..100_000).prop_map(|id| id.to_string()),
        "[a-zA-Z0-9 '_%-]{0,24}",
    ]
}

/// Token with random ASCII casing and surrounding blanks
pub fn cased_token_strategy() -> impl Strategy<Value = (SearchCommand, String)> {
    (command_strategy(), prop::collection::vec(any::<bool>(), 16), 0usize..3, 0usize..3).prop_map(
        |(command, upper, lead, trail)| {
            let cased: String = command
                .canonical_name()
                .chars()
                .zip(upper.iter().cycle())
                .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c })
                .collect();
            (command, format!("{}{cased}{}", " ".repeat(lead), " ".repeat(trail)))
        },
    )
}
