use super::breakpoints::Breakpoints;
use super::session::ConsoleCommand;
use crate::config::DebuggerConfig;
use crate::error::{DebuggerError, Result};
use crate::executor::ProgramEngine;
use crate::output::{OutputSink, StdoutSink};
use log::{debug, info, warn};

/// One debugging session: the program engine, breakpoints and the output sink.
pub struct DebugContext<S: OutputSink = StdoutSink> {
    engine: ProgramEngine,
    breakpoints: Breakpoints,
    awaiting_source: bool,
    out: S,
}

impl<S: OutputSink> DebugContext<S> {
    pub fn new(out: S) -> Self {
        Self::with_config(out, &DebuggerConfig::default())
    }

    pub fn with_config(out: S, config: &DebuggerConfig) -> Self {
        Self {
            engine: ProgramEngine::new(config.max_call_depth),
            breakpoints: Breakpoints::new(),
            awaiting_source: false,
            out,
        }
    }

    pub fn engine(&self) -> &ProgramEngine {
        &self.engine
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    pub fn output(&self) -> &S {
        &self.out
    }

    pub fn output_mut(&mut self) -> &mut S {
        &mut self.out
    }

    pub fn into_output(self) -> S {
        self.out
    }

    pub fn load_source(&mut self, code: &str) {
        self.engine.load_source(code);
    }

    /// Handle one console line.
    ///
    /// The line after `set code` is taken as program source. When the program ends,
    /// a statement fails its variable lookup, or the program itself fails, the session
    /// is reset before returning. Source and breakpoints are kept. Console errors such
    /// as a malformed `add break` leave the session untouched.
    pub fn execute_line(&mut self, command: &str) -> Result<()> {
        if command.is_empty() {
            return Ok(());
        }

        if self.awaiting_source {
            self.awaiting_source = false;
            self.load_source(command);
            return Ok(());
        }

        let result = self.dispatch(command);

        let program_failed = result
            .as_ref()
            .is_err_and(DebuggerError::is_program_error);

        if program_failed || self.engine.is_code_end() || !self.engine.previous_succeeded() {
            self.engine.reset();
        }

        result
    }

    fn dispatch(&mut self, command: &str) -> Result<()> {
        let Some(cmd) = ConsoleCommand::parse(command)? else {
            debug!("ignoring console command {:?}", command);
            return Ok(());
        };

        match cmd {
            ConsoleCommand::SetCode => self.awaiting_source = true,
            ConsoleCommand::Run => self.run()?,
            ConsoleCommand::Step => self.step()?,
            ConsoleCommand::StepOver => self.step_over()?,
            ConsoleCommand::PrintMem => self.print_mem(),
            ConsoleCommand::PrintTrace => self.print_trace(),
            ConsoleCommand::PrintBreaks => self.print_breaks(),
            ConsoleCommand::AddBreak(line) => self.breakpoints.add(line),
            ConsoleCommand::RemoveBreak(line) => self.breakpoints.remove(line),
            ConsoleCommand::ClearBreaks => self.breakpoints.clear(),
        }
        Ok(())
    }

    fn step(&mut self) -> Result<()> {
        if !self.engine.has_source() {
            warn!("no source loaded, nothing to execute");
            return Ok(());
        }
        self.engine.parse_and_execute_one_line(&mut self.out)
    }

    /// Step until the program ends, a lookup fails, or the cursor reaches a breakpoint.
    fn run(&mut self) -> Result<()> {
        if !self.engine.has_source() {
            warn!("no source loaded, nothing to run");
            return Ok(());
        }

        loop {
            self.step()?;

            if !self.engine.previous_succeeded() || self.engine.is_code_end() {
                break;
            }
            if self.breakpoints.contains(self.engine.cursor()) {
                info!("🛑 Stopped at breakpoint on line {}", self.engine.cursor());
                break;
            }
        }
        Ok(())
    }

    /// One step; a function entered by that step runs until it returns past its call line.
    /// Breakpoints are not consulted.
    fn step_over(&mut self) -> Result<()> {
        let depth_before = self.engine.call_stack().len();
        self.step()?;

        if self.engine.call_stack().len() <= depth_before {
            return Ok(());
        }

        let Some(return_line) = self.engine.call_stack().last().map(|f| f.call_line + 1) else {
            return Ok(());
        };
        debug!("⏭️  Step over until line {}", return_line);

        while self.engine.previous_succeeded()
            && !self.engine.is_code_end()
            && self.engine.cursor() != return_line
        {
            self.step()?;
        }
        Ok(())
    }

    fn print_mem(&mut self) {
        for (name, entry) in self.engine.executor().memory().iter() {
            self.out
                .emit_line(&format!("{} {} {}", name, entry.value, entry.last_change_line));
        }
    }

    fn print_trace(&mut self) {
        for frame in self.engine.call_stack().iter().rev() {
            self.out
                .emit_line(&format!("{} {}", frame.call_line, frame.function));
        }
    }

    fn print_breaks(&mut self) {
        for line in self.breakpoints.sorted() {
            self.out.emit_line(&line.to_string());
        }
    }
}
