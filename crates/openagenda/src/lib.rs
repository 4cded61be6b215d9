//! Client library for the OpenAgenda public events API.
//!
//! Provides agenda search and per-agenda event retrieval over plain HTTP
//! GET. Responses stay opaque JSON apart from the identifiers callers need;
//! the main entry point is [`OpenAgendaClient`], which requires a Tokio
//! runtime.

pub mod client;
pub mod error;
pub mod query;
pub mod types;

pub use client::{OpenAgendaClient, DEFAULT_BASE_URL};
pub use error::{FetchError, FetchResult};
pub use types::{Agenda, AgendaPage, AgendaQuery, EventQuery};
