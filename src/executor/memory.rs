use crate::error::{DebuggerError, Result};
use std::collections::HashMap;

/// One stored variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableEntry {
    pub value: i64,
    pub last_change_line: usize,
}

/// Variable memory of a running program. Values are always natural numbers.
#[derive(Debug, Default)]
pub struct VariableStore {
    entries: HashMap<String, VariableEntry>,
    order: Vec<String>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.entries.get(name).map(|e| e.value)
    }

    /// Store `value` under `name`, creating the variable if needed.
    /// `line` is used as the error location when the value is rejected.
    pub fn set(&mut self, name: &str, value: i64, line: usize) -> Result<()> {
        if value <= 0 {
            return Err(DebuggerError::InvalidValue {
                name: name.to_string(),
                value,
                line,
            });
        }

        match self.entries.get_mut(name) {
            Some(entry) => entry.value = value,
            None => {
                self.entries.insert(
                    name.to_string(),
                    VariableEntry {
                        value,
                        last_change_line: line,
                    },
                );
                self.order.push(name.to_string());
            }
        }
        Ok(())
    }

    pub fn remove(&mut self, name: &str) {
        if self.entries.remove(name).is_some() {
            self.order.retain(|n| n != name);
        }
    }

    pub fn set_last_change_line(&mut self, name: &str, line: usize) {
        if let Some(entry) = self.entries.get_mut(name) {
            entry.last_change_line = line;
        }
    }

    pub fn last_change_line(&self, name: &str) -> Option<usize> {
        self.entries.get(name).map(|e| e.last_change_line)
    }

    /// Names in insertion order
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariableEntry)> {
        self.order
            .iter()
            .filter_map(move |name| self.entries.get(name).map(|e| (name.as_str(), e)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}
