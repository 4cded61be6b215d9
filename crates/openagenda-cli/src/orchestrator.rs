//! Two-phase harvest: discover agendas by keyword, then sweep their events.
//!
//! Strictly sequential: at most one request in flight, each awaited to
//! completion before the next starts. The only state carried across
//! iterations is the accumulating discovery list built in phase 1.

use anyhow::{Context, Result};
use tracing::info;

use openagenda::{Agenda, AgendaQuery, EventQuery, OpenAgendaClient};

use crate::config::HarvestConfig;
use crate::export;
use crate::output;

/// Drives a run against one client with one immutable config.
pub struct Orchestrator {
    client: OpenAgendaClient,
    config: HarvestConfig,
}

impl Orchestrator {
    pub fn new(client: OpenAgendaClient, config: HarvestConfig) -> Self {
        Self { client, config }
    }

    /// Search variant: one agenda query per keyword, each result page
    /// printed in full.
    pub async fn search(&self) -> Result<()> {
        let mut discovered: Vec<Agenda> = Vec::new();

        for keyword in &self.config.keywords {
            let page = self
                .client
                .agendas(&self.agenda_query(keyword))
                .await
                .with_context(|| format!("agenda search for \"{keyword}\" failed"))?;

            info!("agenda search \"{keyword}\": {} result(s)", page.agendas.len());
            output::announce(&format!("Results for \"{keyword}\":"));
            output::print_payload(&serde_json::to_value(&page)?);
            discovered.extend(page.agendas);
        }

        if let Some(dir) = &self.config.out_dir {
            let path = export::write_agendas(dir, &discovered)?;
            output::announce(&format!("Saved {} agenda(s) to {}", discovered.len(), path.display()));
        }
        Ok(())
    }

    /// Full two-phase run: discovery, then the (agenda × keyword) event sweep.
    pub async fn harvest(&self) -> Result<()> {
        let agendas = self.discover().await?;

        if let Some(dir) = &self.config.out_dir {
            let path = export::write_agendas(dir, &agendas)?;
            output::announce(&format!("Saved {} agenda(s) to {}", agendas.len(), path.display()));
        }

        // Full cross-product, identifier-major: every discovered occurrence
        // is swept once per keyword. Duplicates from phase 1 are swept again.
        for agenda in &agendas {
            for keyword in &self.config.keywords {
                let events = self
                    .client
                    .events(agenda.uid, &self.event_query(keyword))
                    .await
                    .with_context(|| {
                        format!("event fetch for agenda {} / \"{keyword}\" failed", agenda.uid)
                    })?;

                output::announce(&format!("Agenda {}: events matching \"{keyword}\"", agenda.uid));
                output::print_payload(&events);

                if let Some(dir) = &self.config.out_dir {
                    export::write_events(dir, agenda.uid, keyword, &events)?;
                }
            }
        }

        info!("harvest complete: {} agenda occurrence(s) swept", agendas.len());
        Ok(())
    }

    /// Phase 1: one agenda search per keyword, results accumulated in
    /// request order. No deduplication — an agenda matching two keywords
    /// appears twice in the returned list.
    async fn discover(&self) -> Result<Vec<Agenda>> {
        let mut discovered: Vec<Agenda> = Vec::new();

        for keyword in &self.config.keywords {
            let page = self
                .client
                .agendas(&self.agenda_query(keyword))
                .await
                .with_context(|| format!("agenda search for \"{keyword}\" failed"))?;

            info!("agenda search \"{keyword}\": {} result(s)", page.agendas.len());
            output::announce(&format!(
                "Keyword \"{keyword}\": {} agenda(s) found",
                page.agendas.len()
            ));
            discovered.extend(page.agendas);
        }

        Ok(discovered)
    }

    fn agenda_query(&self, keyword: &str) -> AgendaQuery {
        AgendaQuery {
            size: Some(self.config.agenda_size),
            search: Some(keyword.to_string()),
            sort: Some(self.config.sort.clone()),
            official: self.config.official,
            ..Default::default()
        }
    }

    fn event_query(&self, keyword: &str) -> EventQuery {
        EventQuery {
            size: Some(self.config.event_size),
            search: Some(keyword.to_string()),
            ..Default::default()
        }
    }
}
