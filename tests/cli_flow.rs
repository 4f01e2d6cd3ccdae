//! Submission flow as a CLI front end drives it: classify, render, record.

use redis_cli_kit::config::CLI_HISTORY_KEY;
use redis_cli_kit::models::{SegmentData, segments_to_text};
use redis_cli_kit::utils::{KeyValueStore, MemoryStorage};
use redis_cli_kit::{
    CliSettings, ClusterNode, CommandExecutionStatus, CommandHistory, CommandTable,
    LoadedModule, OutputRenderer, RedisModule, Response, Transcript, Verdict, classify,
    command_name, db_index_from_select_query, update_history_storage,
};

#[test]
fn test_submit_allowed_command() {
    let settings = CliSettings::default();
    let modules = vec![LoadedModule::new("ReJSON")];
    let renderer = OutputRenderer::new();
    let mut transcript = Transcript::new();
    let mut store = MemoryStorage::new();

    let line = "JSON.GET doc $";
    assert_eq!(classify(&settings, &modules, line), Verdict::Allowed);

    transcript.extend(renderer.command_output(line, 0));
    transcript.extend(renderer.text_response_with_offset(
        &Response::text("[{\"a\":1}]"),
        line,
        CommandExecutionStatus::Success,
    ));
    assert_eq!(
        segments_to_text(&transcript.to_vec()),
        "\n> JSON.GET doc $\n[{\"a\":1}]\n"
    );

    let mut seen = Vec::new();
    update_history_storage(&mut store, line, |history| {
        seen = history.entries().to_vec();
    })
    .unwrap();
    assert_eq!(seen, vec![line.to_string()]);
    assert!(store.get_item(CLI_HISTORY_KEY).is_some());
}

#[test]
fn test_reject_missing_module() {
    let verdict = classify(&CliSettings::default(), &[], "TS.RANGE t - +");
    assert_eq!(verdict, Verdict::MissingModule(RedisModule::TimeSeries));
}

#[test]
fn test_select_switches_prompt() {
    let renderer = OutputRenderer::new();
    let db = db_index_from_select_query("SELECT 4").unwrap();
    let prompt = renderer.prompt_text(u32::try_from(db).unwrap());
    assert_eq!(prompt, "[db4] > ");
}

#[test]
fn test_redirected_reply() {
    let renderer = OutputRenderer::new();
    let node = ClusterNode::new("127.0.0.1", 30002, 5798);
    let segments = renderer.text_response_with_redirect(
        &Response::text("\"bar\""),
        "GET foo",
        CommandExecutionStatus::Success,
        Some(&node),
    );
    assert_eq!(
        segments_to_text(&segments),
        "-> Redirected to slot [5798] located at 127.0.0.1:30002\n\"bar\"\n"
    );
}

#[test]
fn test_command_name_for_help_lookup() {
    let commands = CommandTable::from_json(r#"{"XINFO STREAM": {}, "XINFO": {}}"#).unwrap();
    assert_eq!(
        command_name("xinfo stream mystream", &commands).as_deref(),
        Some("xinfo stream")
    );
}

#[test]
fn test_clear_output_keeps_history() {
    let renderer = OutputRenderer::new();
    let mut transcript = Transcript::new();
    let mut store = MemoryStorage::new();

    transcript.extend(renderer.command_output("PING", 0));
    update_history_storage(&mut store, "PING", |_| {}).unwrap();
    transcript.clear();

    assert!(transcript.is_empty());
    assert_eq!(CommandHistory::load(&store).entries(), ["PING"]);
    assert!(matches!(
        renderer.command_output("PING", 0)[0].data,
        SegmentData::LineBreak
    ));
}
