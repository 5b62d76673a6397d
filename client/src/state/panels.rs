//! Panel state store — one ordered entry per model panel.
//!
//! DESIGN
//! ======
//! Panels are an indexable ordered collection keyed by request-time position.
//! `begin_run` freezes the current panel order into an [`ActiveRun`] mapping
//! `modelIndex → panel id`; events always route through that mapping, so
//! panels added mid-flight never participate and panels removed mid-flight
//! drop their late event without error. Each run carries a monotonically
//! increasing id so a straggling consumer loop from an earlier run can never
//! write into a later one.

#[cfg(test)]
#[path = "panels_test.rs"]
mod panels_test;

use events::GenerationResult;

use crate::catalog;

/// One UI slot dedicated to one model's request lifecycle and result.
#[derive(Clone, Debug)]
pub struct PanelState {
    /// Stable identity; survives model changes, dies with the panel.
    pub id: String,
    /// Currently selected model identifier.
    pub model: String,
    /// Outcome of the panel's slot in the most recent run, if any.
    pub result: Option<GenerationResult>,
    /// True from submission until this panel's event arrives (or the run
    /// settles without one).
    pub loading: bool,
}

impl PanelState {
    fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            model: catalog::default_model().to_owned(),
            result: None,
            loading: false,
        }
    }
}

/// Frozen `modelIndex → panel id` mapping for one in-flight run.
#[derive(Clone, Debug)]
struct ActiveRun {
    id: u64,
    panel_ids: Vec<String>,
}

/// Everything the stream consumer needs to issue and route one run.
#[derive(Clone, Debug)]
pub struct RunPlan {
    pub run_id: u64,
    /// Selected models in panel order; index here is the wire `modelIndex`.
    pub models: Vec<String>,
}

/// What [`PanelsState::apply_result`] did with an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Routed to its panel.
    Applied,
    /// The event belongs to a run that is no longer current.
    StaleRun,
    /// `modelIndex` falls outside the frozen run mapping.
    UnknownIndex,
    /// The target panel was removed mid-flight.
    PanelRemoved,
}

/// Ordered panel collection plus the in-flight run, if any.
#[derive(Clone, Debug)]
pub struct PanelsState {
    pub panels: Vec<PanelState>,
    run: Option<ActiveRun>,
    run_seq: u64,
}

impl Default for PanelsState {
    /// Two comparison panels, the default head-to-head shape.
    fn default() -> Self {
        Self { panels: vec![PanelState::new(), PanelState::new()], run: None, run_seq: 0 }
    }
}

impl PanelsState {
    /// Append a panel with the default model, empty result, not loading.
    pub fn add_panel(&mut self) {
        self.panels.push(PanelState::new());
    }

    /// Remove a panel by identity. Refused (returns false) if it would leave
    /// zero panels or the id is unknown.
    pub fn remove_panel(&mut self, id: &str) -> bool {
        if self.panels.len() <= 1 {
            return false;
        }
        let before = self.panels.len();
        self.panels.retain(|p| p.id != id);
        self.panels.len() != before
    }

    /// Change one panel's model without disturbing siblings.
    pub fn set_model(&mut self, id: &str, model: &str) {
        if let Some(panel) = self.panels.iter_mut().find(|p| p.id == id) {
            panel.model = model.to_owned();
        }
    }

    #[must_use]
    pub fn panel(&self, id: &str) -> Option<&PanelState> {
        self.panels.iter().find(|p| p.id == id)
    }

    /// Freeze the current panels as a new run: clear results, mark every
    /// participant loading, and hand back the ordered model list.
    pub fn begin_run(&mut self) -> RunPlan {
        for panel in &mut self.panels {
            panel.result = None;
            panel.loading = true;
        }
        self.run_seq += 1;
        let run_id = self.run_seq;
        self.run = Some(ActiveRun { id: run_id, panel_ids: self.panels.iter().map(|p| p.id.clone()).collect() });
        RunPlan { run_id, models: self.panels.iter().map(|p| p.model.clone()).collect() }
    }

    /// Route one event into the panel frozen at its `modelIndex`.
    pub fn apply_result(&mut self, run_id: u64, event: &GenerationResult) -> ApplyOutcome {
        let Some(run) = self.run.as_ref().filter(|run| run.id == run_id) else {
            return ApplyOutcome::StaleRun;
        };
        let Some(panel_id) = run.panel_ids.get(event.model_index) else {
            return ApplyOutcome::UnknownIndex;
        };
        let panel_id = panel_id.clone();
        let Some(panel) = self.panels.iter_mut().find(|p| p.id == panel_id) else {
            return ApplyOutcome::PanelRemoved;
        };
        panel.result = Some(event.clone());
        panel.loading = false;
        ApplyOutcome::Applied
    }

    /// Stream ended normally. Panels whose event never arrived (removed or
    /// short stream) settle to not-loading with no result.
    pub fn finish_run(&mut self, run_id: u64) {
        self.settle_run(run_id);
    }

    /// Transport failure: same settling, the caller raises the notice.
    pub fn abort_run(&mut self, run_id: u64) {
        self.settle_run(run_id);
    }

    fn settle_run(&mut self, run_id: u64) {
        if self.run.as_ref().is_some_and(|run| run.id != run_id) {
            return;
        }
        for panel in &mut self.panels {
            panel.loading = false;
        }
        self.run = None;
    }

    /// Clear results on all panels; the in-flight run (if any) is abandoned.
    pub fn reset(&mut self) {
        for panel in &mut self.panels {
            panel.result = None;
            panel.loading = false;
        }
        self.run = None;
    }

    #[must_use]
    pub fn any_loading(&self) -> bool {
        self.panels.iter().any(|p| p.loading)
    }
}
