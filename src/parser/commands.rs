use super::types::{Command, Operation, ParsedLine};
use crate::error::{DebuggerError, Result};

pub const DEF_KEYWORD: &str = "def";
pub const CALL_KEYWORD: &str = "call";

/// Split a line into whitespace-separated tokens
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Parse one source line. `line` is its index, stamped onto statements.
pub fn parse_line(text: &str, line: usize) -> Result<ParsedLine> {
    let tokens = tokenize(text);

    let (&keyword, rest) = tokens
        .split_first()
        .ok_or_else(|| DebuggerError::malformed(line, text, "empty statement"))?;

    let name = rest
        .first()
        .map(|s| s.to_string())
        .ok_or_else(|| DebuggerError::malformed(line, text, "missing name"))?;

    match keyword {
        DEF_KEYWORD => Ok(ParsedLine::Definition { name }),
        CALL_KEYWORD => Ok(ParsedLine::Call { name }),
        _ => {
            let op = Operation::from_keyword(keyword).ok_or_else(|| {
                DebuggerError::malformed(line, text, format!("unknown operation '{}'", keyword))
            })?;

            let command = match rest.get(1) {
                None => Command::Plain {
                    op,
                    variable: name,
                    line,
                },
                Some(raw) => {
                    let value = raw.parse::<i64>().map_err(|_| {
                        DebuggerError::malformed(line, text, format!("'{}' is not an integer", raw))
                    })?;
                    Command::WithValue {
                        op,
                        variable: name,
                        value,
                        line,
                    }
                }
            };

            Ok(ParsedLine::Statement(command))
        }
    }
}
