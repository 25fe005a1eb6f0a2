use super::commands::{tokenize, DEF_KEYWORD};
use std::collections::HashMap;

/// Scan for `def <name>` headers, mapping each function name to its definition line.
/// A later definition of the same name wins.
pub fn build_function_table<S: AsRef<str>>(lines: &[S]) -> HashMap<String, usize> {
    let mut map = HashMap::new();
    for (i, line) in lines.iter().enumerate() {
        let tokens = tokenize(line.as_ref());
        if let [DEF_KEYWORD, name, ..] = tokens.as_slice() {
            map.insert(name.to_string(), i);
        }
    }
    map
}
