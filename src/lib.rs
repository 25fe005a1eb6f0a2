pub mod config;
pub mod console;
pub mod debugger;
pub mod error;
pub mod executor;
pub mod output;
pub mod parser;

pub use config::DebuggerConfig;
pub use debugger::DebugContext;
pub use error::{DebuggerError, Result};
pub use output::{OutputSink, StdoutSink};
