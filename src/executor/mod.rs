mod engine;
mod memory;
mod runner;

pub use engine::ProgramEngine;
pub use memory::{VariableEntry, VariableStore};
pub use runner::{Executor, MISSING_VARIABLE_MESSAGE};
