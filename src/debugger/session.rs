use crate::error::{DebuggerError, Result};
use crate::parser::tokenize;

/// Marks the next console line as program source
pub const SET_CODE: &str = "set code";

/// One debugger console command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    SetCode,
    Run,
    Step,
    StepOver,
    PrintMem,
    PrintTrace,
    PrintBreaks,
    AddBreak(usize),
    RemoveBreak(usize),
    ClearBreaks,
}

impl ConsoleCommand {
    /// Parse a console line. Unknown commands yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let command = match line {
            SET_CODE => Self::SetCode,
            "run" => Self::Run,
            "step" => Self::Step,
            "step over" => Self::StepOver,
            "print mem" => Self::PrintMem,
            "print trace" => Self::PrintTrace,
            "print breaks" => Self::PrintBreaks,
            "clear breaks" => Self::ClearBreaks,
            _ => {
                return match tokenize(line).as_slice() {
                    ["add", "break", rest @ ..] => {
                        Ok(Some(Self::AddBreak(breakpoint_line(line, rest)?)))
                    }
                    ["remove", "break", rest @ ..] => {
                        Ok(Some(Self::RemoveBreak(breakpoint_line(line, rest)?)))
                    }
                    _ => Ok(None),
                };
            }
        };
        Ok(Some(command))
    }
}

fn breakpoint_line(line: &str, args: &[&str]) -> Result<usize> {
    match args {
        [n] => n.parse().map_err(|_| DebuggerError::InvalidBreakpoint {
            text: line.to_string(),
        }),
        _ => Err(DebuggerError::InvalidBreakpoint {
            text: line.to_string(),
        }),
    }
}
