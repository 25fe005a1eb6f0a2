/// Leading marker of every line inside a function body
pub const BODY_INDENT: &str = "    ";

/// Split program text on `\n`, dropping empty lines.
pub fn split_source(code: &str) -> Vec<String> {
    code.split('\n')
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Is this line part of an indented function body?
pub fn is_function_body(line: &str) -> bool {
    line.starts_with(BODY_INDENT)
}
