mod commands;
mod functions;
mod preprocessor;
mod types;

pub use commands::{parse_line, tokenize, CALL_KEYWORD, DEF_KEYWORD};
pub use functions::build_function_table;
pub use preprocessor::{is_function_body, split_source, BODY_INDENT};
pub use types::{Command, Operation, ParsedLine};
