use super::memory::VariableStore;
use crate::error::{DebuggerError, Result};
use crate::output::OutputSink;
use crate::parser::{Command, Operation};
use log::debug;

pub const MISSING_VARIABLE_MESSAGE: &str = "variable absent from memory";

/// Applies parsed statements to variable memory.
#[derive(Debug)]
pub struct Executor {
    memory: VariableStore,
    previous_succeeded: bool,
}

impl Default for Executor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor {
    pub fn new() -> Self {
        Self {
            memory: VariableStore::new(),
            previous_succeeded: true,
        }
    }

    pub fn memory(&self) -> &VariableStore {
        &self.memory
    }

    /// False once a statement referenced a missing variable, until `reset`
    pub fn previous_succeeded(&self) -> bool {
        self.previous_succeeded
    }

    pub fn execute(&mut self, command: Command, out: &mut dyn OutputSink) -> Result<()> {
        debug!("executing `{}` from line {}", command, command.line());

        if command.op() != Operation::Set && !self.memory.contains(command.variable()) {
            out.emit_line(MISSING_VARIABLE_MESSAGE);
            self.previous_succeeded = false;
            return Ok(());
        }

        match command {
            Command::WithValue {
                op: Operation::Set,
                variable,
                value,
                line,
            } => {
                self.memory.set(&variable, value, line)?;
                self.memory.set_last_change_line(&variable, line);
            }
            Command::WithValue {
                op: Operation::Sub,
                variable,
                value,
                line,
            } => {
                let current = self.memory.get(&variable).unwrap_or_default();
                let result = current.checked_sub(value).ok_or_else(|| {
                    DebuggerError::malformed(
                        line,
                        format!("sub {} {}", variable, value),
                        "value out of range",
                    )
                })?;
                self.memory.set(&variable, result, line)?;
                self.memory.set_last_change_line(&variable, line);
            }
            Command::Plain {
                op: Operation::Print,
                variable,
                ..
            } => {
                if let Some(value) = self.memory.get(&variable) {
                    out.emit_line(&value.to_string());
                }
            }
            Command::Plain {
                op: Operation::Rem,
                variable,
                ..
            } => self.memory.remove(&variable),
            Command::Plain {
                op: op @ (Operation::Set | Operation::Sub),
                variable,
                line,
            } => {
                return Err(DebuggerError::malformed(
                    line,
                    format!("{} {}", op.keyword(), variable),
                    "missing value",
                ));
            }
            cmd @ Command::WithValue {
                op: Operation::Print | Operation::Rem,
                ..
            } => {
                return Err(DebuggerError::malformed(
                    cmd.line(),
                    cmd.to_string(),
                    "unexpected value",
                ));
            }
        }

        Ok(())
    }

    /// Clear the failure flag and wipe memory
    pub fn reset(&mut self) {
        self.previous_succeeded = true;
        self.memory.clear();
    }
}
