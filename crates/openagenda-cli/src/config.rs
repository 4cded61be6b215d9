//! Run configuration, resolved once before the orchestrator starts.

use std::path::PathBuf;

use anyhow::{bail, Result};

/// Environment variable consulted when `--key` is absent.
pub const KEY_ENV_VAR: &str = "OPENAGENDA_KEY";

/// Everything a run needs. Built up front from flags and environment;
/// the orchestrator holds it immutably, no process-wide state.
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    /// Search keywords, in the order they will be queried.
    pub keywords: Vec<String>,
    /// Agenda search page size.
    pub agenda_size: u32,
    /// Event listing page size.
    pub event_size: u32,
    /// Agenda sort order.
    pub sort: String,
    /// Restrict discovery to official agendas.
    pub official: bool,
    /// Directory for JSON file export, when requested.
    pub out_dir: Option<PathBuf>,
}

/// Resolve the API key: explicit flag first, then [`KEY_ENV_VAR`].
pub fn resolve_key(flag: Option<String>) -> Result<String> {
    if let Some(key) = flag {
        if !key.is_empty() {
            return Ok(key);
        }
    }
    match std::env::var(KEY_ENV_VAR) {
        Ok(key) if !key.is_empty() => Ok(key),
        _ => bail!("no API key: pass --key or set {KEY_ENV_VAR}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_environment() {
        let key = resolve_key(Some("from-flag".into())).unwrap();
        assert_eq!(key, "from-flag");
    }

    #[test]
    fn test_empty_flag_is_absent() {
        // An empty --key does not count as a key.
        std::env::remove_var(KEY_ENV_VAR);
        assert!(resolve_key(Some(String::new())).is_err());
    }
}
