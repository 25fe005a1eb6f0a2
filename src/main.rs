use log::info;
use script_debugger::{console, DebuggerConfig};
use std::fs;
use std::process::ExitCode;

/// Filter to apply when RUST_LOG is unset: the config level, else "warn"
fn fallback_filter(config: &DebuggerConfig, rust_log_set: bool) -> Option<&str> {
    if rust_log_set {
        return None;
    }
    Some(config.log_level.as_deref().unwrap_or("warn"))
}

fn init_logging(config: &DebuggerConfig) {
    let mut builder = env_logger::Builder::from_default_env();
    let rust_log_set = std::env::var_os("RUST_LOG").is_some();
    if let Some(filter) = fallback_filter(config, rust_log_set) {
        builder.parse_filters(filter);
    }
    builder.init();
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let json_mode = args.iter().any(|arg| arg == "--json");

    let config_path = args
        .iter()
        .position(|arg| arg == "--config")
        .and_then(|i| args.get(i + 1));

    let config = match config_path {
        Some(path) => match DebuggerConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => DebuggerConfig::default(),
    };

    init_logging(&config);
    info!("Args: {:?}", args);

    let script = args
        .iter()
        .enumerate()
        .filter(|(i, arg)| {
            !arg.starts_with("--") && (*i == 0 || args[i - 1] != "--config")
        })
        .map(|(_, arg)| arg)
        .next_back();

    if json_mode {
        if let Err(e) = console::run_json_mode(&config) {
            eprintln!("❌ {}", e);
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    let source = match script.map(fs::read_to_string).transpose() {
        Ok(source) => source,
        Err(e) => {
            eprintln!("❌ Could not read program: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match console::run_interactive_mode(&config, source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
