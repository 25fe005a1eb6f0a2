/// Destination for lines produced by `print`, `print mem`, `print trace` and lookup failures.
pub trait OutputSink {
    fn emit_line(&mut self, line: &str);
}

impl OutputSink for Vec<String> {
    fn emit_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Writes each line to stdout as it is produced
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit_line(&mut self, line: &str) {
        println!("{}", line);
    }
}
