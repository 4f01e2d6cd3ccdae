use proptest::prelude::*;
use proptest::test_runner::Config;
use redis_cli_kit::config::MAX_COMMAND_HISTORY;
use redis_cli_kit::{
    CommandHistory, CommandTable, ExecutionResult, OutputRenderer, command_name,
    db_index_from_select_query, is_blocking, is_unsupported,
};

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn listed_command_with_args_is_unsupported(
        commands in prop::collection::hash_set("[a-z]{4}", 1..8),
        pick in any::<prop::sample::Index>(),
        args in "[a-z0-9 ]{0,20}",
    ) {
        let list: Vec<String> = commands.into_iter().collect();
        let command = pick.get(&list);
        let line = format!("{} {}", command.to_uppercase(), args);
        prop_assert_eq!(is_unsupported(&list, &line), Some(command.as_str()));
    }

    #[test]
    fn unlisted_command_is_allowed(
        list in prop::collection::vec("[a-z]{2,6}", 0..8),
        line in "[a-zA-Z ]{0,24}",
    ) {
        let lowered = line.trim().to_lowercase();
        prop_assume!(!list.iter().any(|c| lowered.starts_with(c.as_str())));
        prop_assert_eq!(is_unsupported(&list, &line), None);
        prop_assert_eq!(is_blocking(&list, &line), None);
    }

    #[test]
    fn history_never_exceeds_capacity(
        commands in prop::collection::vec("[A-Z]{1,5}( [a-z]{1,5})?", 0..60),
    ) {
        let mut history = CommandHistory::new();
        for command in &commands {
            history.record(command);
        }
        prop_assert!(history.len() <= MAX_COMMAND_HISTORY);
        prop_assert_eq!(history.len(), commands.len().min(MAX_COMMAND_HISTORY));
        for (entry, command) in history.iter().zip(commands.iter().rev()) {
            prop_assert_eq!(entry, command.as_str());
        }
    }

    #[test]
    fn select_index_is_parsed(index in 0_i64..100_000, quoted in any::<bool>()) {
        let query = if quoted {
            format!("select '{index}'")
        } else {
            format!("SELECT {index}")
        };
        prop_assert_eq!(db_index_from_select_query(&query), Ok(index));
    }

    #[test]
    fn first_token_is_the_command_name(
        command in "[A-Z]{1,10}",
        args in prop::collection::vec("[a-z0-9]{1,6}", 0..4),
    ) {
        let query = format!("{} {}", command, args.join(" "));
        prop_assert_eq!(command_name(&query, &CommandTable::new()), Some(command));
    }

    #[test]
    fn group_result_splits_only_successes(lines in prop::collection::vec("[a-z]{1,8}", 1..10)) {
        let renderer = OutputRenderer::new();
        let response = lines.join("\n");

        let ok = ExecutionResult::success("CMD", response.as_str());
        let ok = renderer.commands_group_result(&ok, None);
        prop_assert_eq!(ok.len(), lines.len() + 1);

        let fail = ExecutionResult::fail("CMD", response.as_str());
        let fail = renderer.commands_group_result(&fail, None);
        prop_assert_eq!(fail.len(), 2);
        prop_assert_eq!(fail[1].as_text(), response.as_str());
    }
}
