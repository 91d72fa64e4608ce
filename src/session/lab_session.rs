// src/session/lab_session.rs - The lab session orchestrator
//
// All mutation goes through this struct so the container invariants (one
// entry per substance, append-only logs) are enforced in one place. Engine,
// mixture resolver, and hazard classifier stay pure; the session is where
// their results meet the logs.

use crate::catalog::Catalog;
use crate::constants::{
    COOLING_STEP_C, HEATER_CEILING_C, HEATER_STEP_C, ROOM_TEMP_C, TICK_INTERVAL_SECS,
};
use crate::container::{Container, ContainerKind, MixtureEntry};
use crate::hazard;
use crate::mixture;
use crate::reaction::engine::evaluate;
use crate::session::clock::LabClock;
use crate::substance::HazardLevel;
use serde::Serialize;
use std::collections::HashMap;

/// Kind and capacity a container is rebuilt from on reset.
#[derive(Debug, Clone)]
pub struct ContainerSpec {
    pub id: String,
    pub kind: ContainerKind,
    pub capacity_ml: f64,
}

impl ContainerSpec {
    pub fn new(id: &str, kind: ContainerKind) -> ContainerSpec {
        ContainerSpec {
            id: id.to_string(),
            kind,
            capacity_ml: kind.default_capacity_ml(),
        }
    }
}

/// Display/tutorial dimension. Free transitions, no engine behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabMode {
    Explore,
    Procedure,
}

impl LabMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabMode::Explore => "explore",
            LabMode::Procedure => "procedure",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReactionLogEntry {
    pub timestamp_secs: u64,
    pub equation: Option<String>,
    pub observation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentView {
    pub substance_id: String,
    pub name: String,
    pub volume_ml: f64,
    pub concentration: f64,
    pub hazard: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContainerView {
    pub id: String,
    pub kind: ContainerKind,
    pub capacity_ml: f64,
    pub contents: Vec<ContentView>,
    pub fill_fraction: f64,
    pub color: String,
    pub hazard: HazardLevel,
}

/// Read-only view the UI renders from after every mutating operation.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub temperature_c: f64,
    pub heater_on: bool,
    pub timer_secs: u64,
    pub timer_running: bool,
    pub mode: LabMode,
    pub procedure_step: usize,
    pub containers: Vec<ContainerView>,
    pub observations: Vec<String>,
    pub reaction_log: Vec<ReactionLogEntry>,
}

pub struct LabSession {
    catalog: Catalog,
    specs: Vec<ContainerSpec>,
    containers: Vec<Container>,
    temperature_c: f64,
    heater_on: bool,
    timer_secs: u64,
    timer_running: bool,
    clock: LabClock,
    observations: Vec<String>,
    reaction_log: Vec<ReactionLogEntry>,
    hazards: HashMap<String, HazardLevel>,
    mode: LabMode,
    procedure_step: usize,
}

impl LabSession {
    pub fn new(catalog: Catalog, specs: Vec<ContainerSpec>) -> LabSession {
        let containers = specs
            .iter()
            .map(|spec| Container::with_capacity(&spec.id, spec.kind, spec.capacity_ml))
            .collect();
        LabSession {
            catalog,
            specs,
            containers,
            temperature_c: ROOM_TEMP_C,
            heater_on: false,
            timer_secs: 0,
            timer_running: false,
            clock: LabClock::new(TICK_INTERVAL_SECS),
            observations: Vec::new(),
            reaction_log: Vec::new(),
            hazards: HashMap::new(),
            mode: LabMode::Explore,
            procedure_step: 0,
        }
    }

    /// A session over the standard bench: one beaker, one test tube, one
    /// flask, with the built-in catalog.
    pub fn with_default_bench() -> LabSession {
        LabSession::new(Catalog::built_in(), default_bench())
    }

    /// Pour one increment of a substance into a container, then run the
    /// reaction engine and the hazard classifier on the result.
    pub fn add_substance(&mut self, container_id: &str, substance_id: &str) -> Result<(), String> {
        let substance = match self.catalog.get(substance_id) {
            Some(s) => s.clone(),
            None => return Err(format!("Unknown substance id: {}", substance_id)),
        };
        let idx = self
            .containers
            .iter()
            .position(|c| c.id == container_id)
            .ok_or_else(|| format!("Unknown container id: {}", container_id))?;

        self.containers[idx].add_substance(substance_id, substance.concentration);
        let kind = self.containers[idx].kind;
        self.observations
            .push(format!("Added {} to {}", substance.name, kind.as_str()));

        if self.containers[idx].entry_count() >= 2 {
            let outcomes = evaluate(
                &self.containers[idx].contents,
                kind,
                &self.catalog,
                self.temperature_c,
            );
            for outcome in outcomes {
                self.observations.push(outcome.observation.clone());
                self.reaction_log.push(ReactionLogEntry {
                    timestamp_secs: self.timer_secs,
                    equation: outcome.equation,
                    observation: outcome.observation,
                });
            }
        }

        let level = hazard::classify(&self.containers[idx].contents, &self.catalog);
        self.hazards.insert(container_id.to_string(), level);
        if level >= HazardLevel::Medium {
            self.observations.push(format!(
                "Safety warning: the mixture in the {} is {} hazard",
                kind.as_str(),
                level.as_str()
            ));
        }

        Ok(())
    }

    pub fn toggle_heater(&mut self, on: bool) {
        self.heater_on = on;
        self.observations.push(if on {
            "Heater turned on".to_string()
        } else {
            "Heater turned off".to_string()
        });
    }

    pub fn start_timer(&mut self) {
        self.timer_running = true;
    }

    pub fn stop_timer(&mut self) {
        self.timer_running = false;
    }

    /// One clock interval: temperature drifts toward the heater setpoint or
    /// back to room temperature, and the running timer advances. Refused
    /// after teardown. Ticks never re-run reactions - temperature only
    /// gates rules at the next mixing action.
    pub fn tick(&mut self) {
        if !self.clock.tick() {
            return;
        }

        if self.heater_on {
            self.temperature_c = (self.temperature_c + HEATER_STEP_C).min(HEATER_CEILING_C);
        } else if self.temperature_c > ROOM_TEMP_C {
            self.temperature_c = (self.temperature_c - COOLING_STEP_C).max(ROOM_TEMP_C);
        }

        if self.timer_running {
            self.timer_secs += self.clock.interval_secs();
        }
    }

    /// Fresh glassware, default ambient state. The logs survive (they are
    /// append-only for the session's life); exactly one reset observation
    /// is recorded.
    pub fn reset_experiment(&mut self) {
        self.containers = self
            .specs
            .iter()
            .map(|spec| Container::with_capacity(&spec.id, spec.kind, spec.capacity_ml))
            .collect();
        self.temperature_c = ROOM_TEMP_C;
        self.heater_on = false;
        self.timer_secs = 0;
        self.timer_running = false;
        self.hazards.clear();
        self.clock.restart();
        self.observations.push("Experiment reset".to_string());
    }

    /// Stop the clock handle so a stale driver cannot mutate this session.
    pub fn teardown(&mut self) {
        self.clock.stop();
        self.timer_running = false;
    }

    pub fn set_mode(&mut self, mode: LabMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> LabMode {
        self.mode
    }

    /// Advance the procedure highlight. Monotonic; display-only.
    pub fn advance_procedure_step(&mut self) {
        self.procedure_step += 1;
    }

    pub fn procedure_step(&self) -> usize {
        self.procedure_step
    }

    pub fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    pub fn heater_on(&self) -> bool {
        self.heater_on
    }

    pub fn timer_secs(&self) -> u64 {
        self.timer_secs
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn observations(&self) -> &[String] {
        &self.observations
    }

    pub fn reaction_log(&self) -> &[ReactionLogEntry] {
        &self.reaction_log
    }

    pub fn hazard_for(&self, container_id: &str) -> HazardLevel {
        self.hazards
            .get(container_id)
            .copied()
            .unwrap_or(HazardLevel::Low)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let containers = self
            .containers
            .iter()
            .map(|container| ContainerView {
                id: container.id.clone(),
                kind: container.kind,
                capacity_ml: container.capacity_ml,
                contents: container
                    .contents
                    .iter()
                    .map(|entry| self.content_view(entry))
                    .collect(),
                fill_fraction: mixture::fill_fraction(&container.contents, container.capacity_ml),
                color: mixture::resolve_color(&container.contents, &self.catalog),
                hazard: self.hazard_for(&container.id),
            })
            .collect();

        SessionSnapshot {
            temperature_c: self.temperature_c,
            heater_on: self.heater_on,
            timer_secs: self.timer_secs,
            timer_running: self.timer_running,
            mode: self.mode,
            procedure_step: self.procedure_step,
            containers,
            observations: self.observations.clone(),
            reaction_log: self.reaction_log.clone(),
        }
    }

    fn content_view(&self, entry: &MixtureEntry) -> ContentView {
        let (name, hazard) = match self.catalog.get(&entry.substance_id) {
            Some(s) => (s.name.clone(), s.hazard_text().to_string()),
            None => (entry.substance_id.clone(), "unknown".to_string()),
        };
        ContentView {
            substance_id: entry.substance_id.clone(),
            name,
            volume_ml: entry.volume_ml,
            concentration: entry.concentration,
            hazard,
        }
    }

    pub fn export_report(&self) -> String {
        crate::report::build_report(&self.observations, &self.reaction_log)
    }
}

/// The fixed starting bench every session opens with.
pub fn default_bench() -> Vec<ContainerSpec> {
    vec![
        ContainerSpec::new("beaker-1", ContainerKind::Beaker),
        ContainerSpec::new("test-tube-1", ContainerKind::TestTube),
        ContainerSpec::new("flask-1", ContainerKind::Flask),
    ]
}
