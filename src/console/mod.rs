mod protocol;
mod server;

use crate::config::DebuggerConfig;
use crate::debugger::DebugContext;
use crate::error::Result;
use crate::output::StdoutSink;
use log::{error, info};
use std::fs;
use std::io::{self, BufRead, Write};

pub use protocol::{Request, Response};
pub use server::JsonServer;

pub fn run_json_mode(config: &DebuggerConfig) -> io::Result<()> {
    info!("JSON-lines mode");
    let stdin = io::stdin();
    let stdout = io::stdout();
    JsonServer::new(config).serve(stdin.lock(), stdout.lock())
}

/// Console-only commands handled before the debugger sees the line
#[derive(Debug, PartialEq, Eq)]
enum ConsoleAction {
    Load(String),
    Quit,
    Forward,
}

fn classify(line: &str) -> ConsoleAction {
    if matches!(line, "quit" | "q") {
        return ConsoleAction::Quit;
    }
    if let Some(rest) = line.strip_prefix("load ") {
        if let Some(args) = shlex::split(rest) {
            if let [path] = args.as_slice() {
                return ConsoleAction::Load(path.clone());
            }
        }
    }
    ConsoleAction::Forward
}

pub fn run_interactive_mode(config: &DebuggerConfig, source: Option<String>) -> Result<()> {
    let mut ctx = DebugContext::with_config(StdoutSink, config);
    if let Some(code) = source {
        ctx.load_source(&code);
    }

    eprintln!("Commands: set code, run, step, step over, print mem, print trace, add break <line>, load <path>, quit");

    let stdin = io::stdin();
    loop {
        eprint!("> ");
        io::stderr().flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        let line = input.trim_end_matches(['\r', '\n']);

        match classify(line) {
            ConsoleAction::Quit => break,
            ConsoleAction::Load(path) => match fs::read_to_string(&path) {
                Ok(code) => ctx.load_source(&code),
                Err(e) => error!("❌ Failed to read {}: {}", path, e),
            },
            ConsoleAction::Forward => {
                if let Err(e) = ctx.execute_line(line) {
                    if e.is_program_error() {
                        return Err(e);
                    }
                    error!("❌ {}", e);
                }
            }
        }
    }
    Ok(())
}
