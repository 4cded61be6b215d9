//! Typed request parameters and the thin response types callers read.
//!
//! Responses are kept opaque: only `uid` gets a typed field, everything else
//! rides along in a flattened map so payloads survive a round-trip untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::query::QueryPairs;

/// Filters for the agenda search endpoint (`GET /v2/agendas`).
///
/// Unset fields are omitted from the request entirely.
#[derive(Debug, Clone, Default)]
pub struct AgendaQuery {
    /// Page size.
    pub size: Option<u32>,
    /// Pagination cursor. Accepted but never driven across pages here.
    pub after: Option<String>,
    /// Free-text search keyword.
    pub search: Option<String>,
    /// Restrict to official agendas.
    pub official: bool,
    pub slug: Option<String>,
    pub uid: Option<u64>,
    pub network: Option<u64>,
    /// Sort order, e.g. `createdAt.desc`.
    pub sort: Option<String>,
    /// Comma-separated extra fields to include, e.g. `summary`.
    pub fields: Option<String>,
}

impl AgendaQuery {
    pub(crate) fn append_to(&self, params: &mut QueryPairs) {
        params.push_opt("size", self.size);
        params.push_opt("after", self.after.clone());
        params.push_opt("search", self.search.clone());
        params.push_flag("official", self.official);
        params.push_opt("slug", self.slug.clone());
        params.push_opt("uid", self.uid);
        params.push_opt("network", self.network);
        params.push_opt("sort", self.sort.clone());
        params.push_opt("fields", self.fields.clone());
    }
}

/// Filters for the event listing endpoint (`GET /v2/agendas/{uid}/events`).
#[derive(Debug, Clone, Default)]
pub struct EventQuery {
    /// Page size.
    pub size: Option<u32>,
    /// Pagination cursor. Accepted but never driven across pages here.
    pub after: Option<String>,
    /// Free-text search keyword (`searchWord` on the wire).
    pub search: Option<String>,
    /// Ask for detailed event records.
    pub detailed: bool,
    /// Start offset within the result set.
    pub from: Option<u32>,
    pub include_labels: Option<String>,
    pub include_fields: Option<String>,
    /// Collapse multilingual fields to one language, e.g. `fr`.
    pub monolingual: Option<String>,
}

impl EventQuery {
    pub(crate) fn append_to(&self, params: &mut QueryPairs) {
        params.push_opt("size", self.size);
        params.push_opt("after", self.after.clone());
        params.push_opt("searchWord", self.search.clone());
        params.push_flag("detailed", self.detailed);
        params.push_opt("from", self.from);
        params.push_opt("includeLabels", self.include_labels.clone());
        params.push_opt("includeFields", self.include_fields.clone());
        params.push_opt("monolingual", self.monolingual.clone());
    }
}

/// One agenda record. Only `uid` is interpreted; every other field is
/// carried through as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agenda {
    pub uid: u64,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, Value>,
}

/// One page of agenda search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaPage {
    #[serde(default)]
    pub agendas: Vec<Agenda>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, Value>,
}
