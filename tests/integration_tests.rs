// tests/integration_tests.rs
// Console transcripts driven through DebugContext with a collecting sink

use script_debugger::executor::MISSING_VARIABLE_MESSAGE;
use script_debugger::{DebugContext, DebuggerError};

// Helper: feed console lines, collect everything emitted
fn run_transcript(commands: &[&str]) -> Vec<String> {
    let mut ctx = DebugContext::new(Vec::<String>::new());
    for command in commands {
        ctx.execute_line(command).expect("command failed");
    }
    ctx.into_output()
}

#[cfg(test)]
mod debugger_tests {
    use super::*;

    const COUNTDOWN: &str = "set a 10\nprint a\nprint a\nsub a 4\nprint a\nrem a";

    const NESTED: &str = "def one\n    set a 20\n    sub a 5\n    call two\n    print a\ndef two\n    sub a 5\n    sub a 5\ncall one";

    const TEST_FN: &str = "def test\n    set a 5\n    sub a 3\n    print a\ncall test";

    #[test]
    fn test_commands_and_run() {
        let out = run_transcript(&["set code", COUNTDOWN, "end code", "run"]);
        assert_eq!(out, vec!["10", "10", "6"]);
    }

    #[test]
    fn test_commands_and_steps() {
        let mut commands = vec!["set code", COUNTDOWN, "end code"];
        commands.extend(std::iter::repeat("step").take(6));
        assert_eq!(run_transcript(&commands), vec!["10", "10", "6"]);
    }

    #[test]
    fn test_stops_after_missing_variable() {
        let out = run_transcript(&["set code", "print a\nset a 5\nprint a", "end code", "run"]);
        assert_eq!(out, vec![MISSING_VARIABLE_MESSAGE]);
    }

    #[test]
    fn test_simple_function() {
        let out = run_transcript(&[
            "set code",
            "def test\n    set a 10\n    print a\ncall test\nprint a",
            "end code",
            "run",
        ]);
        assert_eq!(out, vec!["10", "10"]);
    }

    #[test]
    fn test_function_sees_top_level_variable() {
        let out = run_transcript(&[
            "set code",
            "def test\n    set a 10\n    sub a 3\n    print b\nset b 7\ncall test",
            "end code",
            "run",
        ]);
        assert_eq!(out, vec!["7"]);
    }

    #[test]
    fn test_call_before_definition() {
        let out = run_transcript(&[
            "set code",
            "call test\nprint a\ndef test\n    set a 5",
            "end code",
            "run",
        ]);
        assert_eq!(out, vec!["5"]);
    }

    #[test]
    fn test_zero_value_is_fatal() {
        let mut ctx = DebugContext::new(Vec::<String>::new());
        ctx.execute_line("set code").unwrap();
        ctx.execute_line("set m 0").unwrap();

        let err = ctx.execute_line("run").unwrap_err();
        assert!(matches!(err, DebuggerError::InvalidValue { value: 0, .. }));
        assert_eq!(ctx.engine().cursor(), 0);
        assert!(ctx.engine().executor().memory().is_empty());
    }

    #[test]
    fn test_sub_below_one_is_fatal() {
        let mut ctx = DebugContext::new(Vec::<String>::new());
        ctx.execute_line("set code").unwrap();
        ctx.execute_line("set a 3\nsub a 3").unwrap();
        assert!(matches!(
            ctx.execute_line("run"),
            Err(DebuggerError::InvalidValue { line: 1, .. })
        ));
    }

    #[test]
    fn test_function_calls_function() {
        let out = run_transcript(&["set code", NESTED, "end code", "run"]);
        assert_eq!(out, vec!["5"]);
    }

    #[test]
    fn test_second_run_repeats_output() {
        let out = run_transcript(&["set code", TEST_FN, "end code", "run", "run"]);
        assert_eq!(out, vec!["2", "2"]);
    }

    #[test]
    fn test_second_run_after_error_repeats_output() {
        let out = run_transcript(&[
            "set code",
            "sub a\nset a 4\nprint a",
            "end code",
            "run",
            "run",
        ]);
        assert_eq!(out, vec![MISSING_VARIABLE_MESSAGE, MISSING_VARIABLE_MESSAGE]);
    }

    #[test]
    fn test_print_mem_between_runs() {
        let out = run_transcript(&[
            "set code",
            TEST_FN,
            "end code",
            "add break 2",
            "run",
            "print mem",
            "run",
            "run",
            "print mem",
            "run",
        ]);
        assert_eq!(out, vec!["a 5 1", "2", "a 5 1", "2"]);
    }

    #[test]
    fn test_breakpoint_stops_execution() {
        let out = run_transcript(&[
            "set code",
            "def test\n    set a 5\n    print a\n    sub a 3\n    print a\ncall test",
            "end code",
            "add break 3",
            "run",
        ]);
        assert_eq!(out, vec!["5"]);
    }

    #[test]
    fn test_print_mem_on_breakpoint() {
        let out = run_transcript(&[
            "set code", TEST_FN, "end code", "add break 2", "run", "print mem", "run",
        ]);
        assert_eq!(out, vec!["a 5 1", "2"]);
    }

    #[test]
    fn test_print_mem_shows_last_change_line() {
        let out = run_transcript(&[
            "set code",
            "set a 9\nset b 1\nsub a 2\nprint b",
            "add break 3",
            "run",
            "print mem",
        ]);
        assert_eq!(out, vec!["a 7 2", "b 1 1"]);
    }

    #[test]
    fn test_print_trace_of_two_functions() {
        let out = run_transcript(&[
            "set code",
            "def one\n    set a 15\n    sub a 5\n    call two\n    print a\ndef two\n    sub a 5\n    sub a 5\ncall one",
            "end code",
            "add break 7",
            "run",
            "print trace",
        ]);
        assert_eq!(out, vec!["3 two", "8 one"]);
    }

    #[test]
    fn test_print_trace_on_every_function_line() {
        let out = run_transcript(&[
            "set code",
            "def trace\n    set a 5\n    sub a 3\n    print a\ncall trace\n",
            "end code",
            "add break 0",
            "add break 1",
            "add break 2",
            "add break 3",
            "run",
            "print trace",
            "run",
            "print trace",
            "run",
            "print trace",
            "run",
            "print trace",
            "run",
        ]);
        assert_eq!(out, vec!["4 trace", "4 trace", "4 trace", "4 trace", "2"]);
    }

    #[test]
    fn test_same_function_called_from_different_lines() {
        let out = run_transcript(&[
            "set code",
            "def test\n    set a 4\nset b 5\ncall test\nsub a 3\ncall test\nprint a\n",
            "end code",
            "add break 1",
            "run",
            "print trace",
            "run",
            "print trace",
            "run",
        ]);
        assert_eq!(out, vec!["3 test", "5 test", "4"]);
    }

    #[test]
    fn test_empty_command_is_noop() {
        let out = run_transcript(&["set code", "", "end code"]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_breakpoints_survive_reload() {
        let mut ctx = DebugContext::new(Vec::<String>::new());
        ctx.execute_line("add break 1").unwrap();
        ctx.execute_line("set code").unwrap();
        ctx.execute_line("set a 1\nprint a").unwrap();
        ctx.execute_line("run").unwrap();
        assert_eq!(ctx.engine().cursor(), 1);

        ctx.execute_line("set code").unwrap();
        ctx.execute_line("set b 2\nprint b\nprint b").unwrap();
        assert_eq!(ctx.engine().cursor(), 0);
        assert!(ctx.engine().executor().memory().is_empty());

        ctx.execute_line("run").unwrap();
        assert_eq!(ctx.engine().cursor(), 1);
        assert!(ctx.breakpoints().contains(1));
    }

    #[test]
    fn test_unknown_function_is_an_error() {
        let mut ctx = DebugContext::new(Vec::<String>::new());
        ctx.execute_line("set code").unwrap();
        ctx.execute_line("set a 1\ncall missing").unwrap();
        assert!(matches!(
            ctx.execute_line("run"),
            Err(DebuggerError::UnknownFunction { line: 1, .. })
        ));
        assert_eq!(ctx.engine().cursor(), 0);
    }

    #[test]
    fn test_invalid_breakpoint_command() {
        let mut ctx = DebugContext::new(Vec::<String>::new());
        assert!(matches!(
            ctx.execute_line("add break here"),
            Err(DebuggerError::InvalidBreakpoint { .. })
        ));
        assert!(ctx.breakpoints().is_empty());
    }

    #[test]
    fn test_bad_breakpoint_keeps_paused_session() {
        let mut ctx = DebugContext::new(Vec::<String>::new());
        ctx.execute_line("set code").unwrap();
        ctx.execute_line("set a 5\nset b 6\nprint a\nprint b").unwrap();
        ctx.execute_line("add break 2").unwrap();
        ctx.execute_line("run").unwrap();
        assert_eq!(ctx.engine().cursor(), 2);
        assert_eq!(ctx.engine().executor().memory().len(), 2);

        assert!(matches!(
            ctx.execute_line("add break x"),
            Err(DebuggerError::InvalidBreakpoint { .. })
        ));
        assert_eq!(ctx.engine().cursor(), 2);
        assert_eq!(ctx.engine().executor().memory().get("a"), Some(5));
        assert_eq!(ctx.engine().executor().memory().get("b"), Some(6));

        ctx.execute_line("run").unwrap();
        assert_eq!(ctx.into_output(), vec!["5", "6"]);
    }
}
