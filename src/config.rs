use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Result;

pub const DEFAULT_MAX_CALL_DEPTH: usize = 1000;

/// Debugger settings, loaded from a JSON file passed with `--config`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DebuggerConfig {
    /// Deepest call stack a program may build before `call` fails
    pub max_call_depth: usize,
    /// Log filter used when RUST_LOG is not set (e.g. "info", "debug")
    pub log_level: Option<String>,
}

impl Default for DebuggerConfig {
    fn default() -> Self {
        Self {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            log_level: None,
        }
    }
}

impl DebuggerConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
