mod breakpoints;
mod context;
mod session;

pub use breakpoints::Breakpoints;
pub use context::DebugContext;
pub use session::{ConsoleCommand, SET_CODE};

/// One call-stack entry: the function entered and the line that called it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub function: String,
    pub call_line: usize,
}

impl Frame {
    pub fn new(function: String, call_line: usize) -> Self {
        Self {
            function,
            call_line,
        }
    }
}
