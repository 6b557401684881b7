//! End-to-end tests driving the console with scripted input.

use rewind_console::{Command, Console, ConsoleConfig, Flow};
use rewind_tictactoe::{Mark, Status};
use std::io::{Cursor, Write};

fn run(config: ConsoleConfig, script: &str) -> (Console, String) {
    let mut console = Console::new(config).expect("Valid config");
    let mut output = Vec::new();
    console
        .run(Cursor::new(script.to_string()), &mut output)
        .expect("In-memory I/O");
    (console, String::from_utf8(output).expect("UTF-8 output"))
}

#[test]
fn test_initial_frame() {
    let (_, output) = run(ConsoleConfig::default(), "");
    assert!(output.starts_with("   0 1 2\n0  . . .\n"));
    assert!(output.contains("Next player: X"));
}

#[test]
fn test_top_row_win() {
    let (console, output) = run(
        ConsoleConfig::default(),
        "play 0 0\nplay 1 1\nplay 0 1\nplay 1 0\nplay 0 2\n",
    );
    assert_eq!(console.store().state().status(), Status::Winner(Mark::X));
    assert!(output.ends_with("Winner is: X\n"));
    assert!(output.contains("0  X X X"));
}

#[test]
fn test_rejected_moves_are_silent() {
    let (console, output) = run(ConsoleConfig::default(), "p 1 1\np 1 1\np 7 7\nj 9\n");
    assert_eq!(console.store().state().history().len(), 2);
    assert!(!output.contains("occupied"));
    assert!(!output.contains("outside"));
    // One frame at start plus one per command.
    assert_eq!(output.matches("Next player").count(), 5);
}

#[test]
fn test_time_travel_branch() {
    let (console, output) = run(
        ConsoleConfig::default(),
        "p 0 0\np 1 1\np 2 2\nj 1\nhistory\np 0 2\nh\n",
    );
    let state = console.store().state();
    assert_eq!(state.history().len(), 3);
    assert_eq!(state.current_move(), 2);
    assert!(output.contains("> 1: Go to move #1\n  2: Go to move #2\n  3: Go to move #3"));
    assert!(output.ends_with("  0: Go to game start\n  1: Go to move #1\n> 2: Go to move #2\n"));
}

#[test]
fn test_resize_commands() {
    let (console, _) = run(ConsoleConfig::default(), "grow\n+\nshrink\nsize 2\n");
    assert_eq!(console.store().state().board_size(), 4);

    let (console, output) = run(ConsoleConfig::default(), "size 6\n");
    assert_eq!(console.store().state().board_size(), 6);
    assert!(output.contains("   0 1 2 3 4 5\n"));
}

#[test]
fn test_resize_respects_configured_maximum() {
    let config = ConsoleConfig::parse("board_size = 4\nmax_board_size = 4").unwrap();
    let (console, _) = run(config, "p 0 0\ngrow\nsize 5\n");
    let state = console.store().state();
    assert_eq!(state.board_size(), 4);
    assert_eq!(state.history().len(), 2);
}

#[test]
fn test_quit_stops_reading() {
    let (console, _) = run(ConsoleConfig::default(), "p 0 0\nquit\np 1 1\n");
    assert_eq!(console.store().state().history().len(), 2);
}

#[test]
fn test_bad_input_gets_hint() {
    let (_, output) = run(ConsoleConfig::default(), "dance\nplay x 1\n");
    assert!(output.contains("Unrecognized command \"dance\". Type `help` for commands."));
    assert!(output.contains("row must be a non-negative integer, got \"x\""));
}

#[test]
fn test_state_dump_is_json() {
    let (_, output) = run(ConsoleConfig::default(), "p 1 1\nstate\n");
    let start = output.find('{').expect("JSON object in output");
    let json: serde_json::Value = serde_json::from_str(&output[start..]).expect("Valid JSON");
    assert_eq!(json["current_move"], 1);
}

#[test]
fn test_show_history_config() {
    let config = ConsoleConfig::default().with_show_history(true);
    let (_, output) = run(config, "p 0 0\n");
    assert!(output.ends_with("  0: Go to game start\n> 1: Go to move #1\n"));
}

#[test]
fn test_execute_reports_flow() {
    let mut console = Console::new(ConsoleConfig::default()).unwrap();
    let mut sink = Vec::new();
    assert_eq!(console.execute(Command::Help, &mut sink).unwrap(), Flow::Continue);
    assert_eq!(console.execute(Command::Quit, &mut sink).unwrap(), Flow::Quit);
    assert!(String::from_utf8(sink).unwrap().contains("Commands:"));
}

#[test]
fn test_config_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "board_size = 5").unwrap();
    writeln!(file, "log_filter = \"debug\"").unwrap();

    let config = ConsoleConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.board_size(), 5);
    assert_eq!(config.log_filter(), "debug");

    let (console, _) = run(config, "");
    assert_eq!(console.store().state().board_size(), 5);
}

#[test]
fn test_invalid_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "board_size = \"big\"").unwrap();
    assert!(ConsoleConfig::from_file(file.path()).is_err());
}
