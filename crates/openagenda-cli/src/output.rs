//! Console output helpers shared by the subcommands.
//!
//! The binary exports the global `--json` / `--quiet` flags as environment
//! variables so every module can check them without threading flags through.

use serde_json::Value;

/// Machine-readable output requested.
pub fn is_json() -> bool {
    std::env::var("OAGENDA_JSON").is_ok()
}

/// Non-essential output suppressed.
pub fn is_quiet() -> bool {
    std::env::var("OAGENDA_QUIET").is_ok()
}

/// Print a progress/announcement line. Dropped in quiet and JSON modes.
pub fn announce(line: &str) {
    if !is_quiet() && !is_json() {
        println!("{line}");
    }
}

/// Print a fetched payload: pretty-printed by default, one compact JSON
/// document per line in `--json` mode.
pub fn print_payload(value: &Value) {
    if is_json() {
        println!("{value}");
    } else {
        match serde_json::to_string_pretty(value) {
            Ok(pretty) => println!("{pretty}"),
            Err(_) => println!("{value}"),
        }
    }
}
