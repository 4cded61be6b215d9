//! OpenAgenda harvester library. Exposes the run machinery for the
//! `oagenda` binary and for integration testing.

pub mod config;
pub mod export;
pub mod orchestrator;
pub mod output;

pub use config::HarvestConfig;
pub use orchestrator::Orchestrator;
