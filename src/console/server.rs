use super::protocol::{Request, Response};
use crate::config::DebuggerConfig;
use crate::debugger::DebugContext;
use log::{debug, error};
use std::io::{self, BufRead, Write};

/// JSON-lines front end: one `Request` per input line, one `Response` per output line.
pub struct JsonServer {
    ctx: DebugContext<Vec<String>>,
}

impl JsonServer {
    pub fn new(config: &DebuggerConfig) -> Self {
        Self {
            ctx: DebugContext::with_config(Vec::new(), config),
        }
    }

    pub fn context(&self) -> &DebugContext<Vec<String>> {
        &self.ctx
    }

    pub fn handle_request(&mut self, request: Request) -> Response {
        debug!("📨 Received #{}: {:?}", request.seq, request.command);

        let result = self.ctx.execute_line(&request.command);
        let output = std::mem::take(self.ctx.output_mut());

        match result {
            Ok(()) => Response {
                request_seq: request.seq,
                success: true,
                output,
                message: None,
            },
            Err(e) => {
                error!("❌ Command #{} failed: {}", request.seq, e);
                Response {
                    request_seq: request.seq,
                    success: false,
                    output,
                    message: Some(e.to_string()),
                }
            }
        }
    }

    /// Decode and handle one raw input line
    pub fn handle_line(&mut self, line: &str) -> Response {
        match serde_json::from_str::<Request>(line) {
            Ok(request) => self.handle_request(request),
            Err(e) => Response {
                request_seq: 0,
                success: false,
                output: Vec::new(),
                message: Some(format!("invalid request: {}", e)),
            },
        }
    }

    pub fn serve<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let response = self.handle_line(&line);
            let json = serde_json::to_string(&response).map_err(io::Error::other)?;
            writeln!(output, "{}", json)?;
            output.flush()?;
        }
        Ok(())
    }
}
