use serde::{Deserialize, Serialize};

/// One console command sent over the JSON-lines interface
#[derive(Debug, Serialize, Deserialize)]
pub struct Request {
    pub seq: u64,
    pub command: String,
}

/// Lines emitted while handling the request with the matching `seq`
#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
    pub request_seq: u64,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub output: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
