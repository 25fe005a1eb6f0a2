use super::runner::Executor;
use crate::config::DEFAULT_MAX_CALL_DEPTH;
use crate::debugger::Frame;
use crate::error::{DebuggerError, Result};
use crate::output::OutputSink;
use crate::parser::{build_function_table, is_function_body, parse_line, split_source, ParsedLine};
use log::{debug, info};
use std::collections::HashMap;

/// Line-pointer state machine over a loaded program.
#[derive(Debug)]
pub struct ProgramEngine {
    lines: Option<Vec<String>>,
    functions: HashMap<String, usize>,
    call_stack: Vec<Frame>,
    cursor: usize,
    executor: Executor,
    max_call_depth: usize,
}

impl Default for ProgramEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CALL_DEPTH)
    }
}

impl ProgramEngine {
    pub fn new(max_call_depth: usize) -> Self {
        Self {
            lines: None,
            functions: HashMap::new(),
            call_stack: Vec::new(),
            cursor: 0,
            executor: Executor::new(),
            max_call_depth,
        }
    }

    /// Replace the program, rebuild the function table and start from a clean session.
    pub fn load_source(&mut self, code: &str) {
        let lines = split_source(code);
        self.functions = build_function_table(&lines);
        info!(
            "📝 Loaded {} lines, {} functions",
            lines.len(),
            self.functions.len()
        );
        self.lines = Some(lines);
        self.call_stack.clear();
        self.reset();
    }

    pub fn has_source(&self) -> bool {
        self.lines.is_some()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Innermost frame last
    pub fn call_stack(&self) -> &[Frame] {
        &self.call_stack
    }

    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    pub fn previous_succeeded(&self) -> bool {
        self.executor.previous_succeeded()
    }

    pub fn function_line(&self, name: &str) -> Option<usize> {
        self.functions.get(name).copied()
    }

    fn line_count(&self) -> usize {
        self.lines.as_ref().map_or(0, Vec::len)
    }

    fn current_line(&self) -> Option<&str> {
        self.lines
            .as_ref()
            .and_then(|lines| lines.get(self.cursor))
            .map(String::as_str)
    }

    /// Program finished: cursor past the last line with nothing left to return to
    pub fn is_code_end(&self) -> bool {
        self.has_source() && self.cursor >= self.line_count() && self.call_stack.is_empty()
    }

    /// Does the cursor still sit inside the body of the active function?
    pub fn is_inside_active_body(&self) -> bool {
        self.current_line().is_some_and(is_function_body)
    }

    /// Parse the line under the cursor, move the cursor and execute any statement found.
    pub fn parse_and_execute_one_line(&mut self, out: &mut dyn OutputSink) -> Result<()> {
        if !self.has_source() || self.is_code_end() {
            return Ok(());
        }

        let active = self.call_stack.last().map(|frame| frame.function.clone());
        match active {
            Some(function) => self.step_in_function(function, out),
            None => self.step_line(out),
        }
    }

    fn step_in_function(&mut self, function: String, out: &mut dyn OutputSink) -> Result<()> {
        let definition_line = self.function_line(&function);

        if definition_line == Some(self.cursor) {
            self.cursor += 1;
        } else if self.is_inside_active_body() {
            self.step_line(out)?;
        } else if let Some(frame) = self.call_stack.pop() {
            debug!("↩️  return from {} to line {}", frame.function, frame.call_line + 1);
            self.cursor = frame.call_line + 1;
        }
        Ok(())
    }

    fn step_line(&mut self, out: &mut dyn OutputSink) -> Result<()> {
        let line = self.cursor;
        let text = self.current_line().unwrap_or_default();

        match parse_line(text, line)? {
            ParsedLine::Definition { .. } => self.skip_function_definition(),
            ParsedLine::Call { name } => self.enter_function(name)?,
            ParsedLine::Statement(command) => {
                self.cursor += 1;
                self.executor.execute(command, out)?;
            }
        }
        Ok(())
    }

    fn skip_function_definition(&mut self) {
        self.cursor += 1;
        while self.current_line().is_some_and(is_function_body) {
            self.cursor += 1;
        }
    }

    fn enter_function(&mut self, name: String) -> Result<()> {
        let line = self.cursor;
        let target = self
            .function_line(&name)
            .ok_or_else(|| DebuggerError::UnknownFunction {
                name: name.clone(),
                line,
            })?;

        if self.call_stack.len() >= self.max_call_depth {
            return Err(DebuggerError::CallDepthExceeded {
                limit: self.max_call_depth,
                line,
            });
        }

        debug!("📞 call {} from line {} (jumping to line {})", name, line, target);
        self.call_stack.push(Frame::new(name, line));
        self.cursor = target;
        Ok(())
    }

    /// Back to line 0 with empty memory and stack; the program itself is kept.
    pub fn reset(&mut self) {
        debug!("session reset");
        self.cursor = 0;
        self.call_stack.clear();
        self.executor.reset();
    }
}
