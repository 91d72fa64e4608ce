// src/container.rs - Glassware and its mixture entries

use crate::constants::{
    BEAKER_CAPACITY_ML, FLASK_CAPACITY_ML, TEST_TUBE_CAPACITY_ML, VOLUME_INCREMENT_ML,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContainerKind {
    Beaker,
    TestTube,
    Flask,
}

impl ContainerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerKind::Beaker => "beaker",
            ContainerKind::TestTube => "test tube",
            ContainerKind::Flask => "flask",
        }
    }

    pub fn default_capacity_ml(&self) -> f64 {
        match self {
            ContainerKind::Beaker => BEAKER_CAPACITY_ML,
            ContainerKind::TestTube => TEST_TUBE_CAPACITY_ML,
            ContainerKind::Flask => FLASK_CAPACITY_ML,
        }
    }

    /// Only sealed narrow glassware collapses under the pressure of the
    /// metal + acid gas evolution.
    pub fn explosion_eligible(&self) -> bool {
        matches!(self, ContainerKind::TestTube)
    }
}

/// One substance's share of a container. At most one entry exists per
/// substance id - repeat additions accumulate volume instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MixtureEntry {
    pub substance_id: String,
    pub volume_ml: f64,
    pub concentration: f64,
}

/// Display-only bench position; the engine never reads it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BenchPosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Container {
    pub id: String,
    pub kind: ContainerKind,
    pub capacity_ml: f64,
    pub contents: Vec<MixtureEntry>,
    pub position: BenchPosition,
}

impl Container {
    pub fn new(id: &str, kind: ContainerKind) -> Container {
        Container {
            id: id.to_string(),
            kind,
            capacity_ml: kind.default_capacity_ml(),
            contents: Vec::new(),
            position: BenchPosition::default(),
        }
    }

    pub fn with_capacity(id: &str, kind: ContainerKind, capacity_ml: f64) -> Container {
        Container {
            capacity_ml,
            ..Container::new(id, kind)
        }
    }

    /// Pour one increment of a substance in. An existing entry gains volume;
    /// otherwise a new entry is appended with the declared concentration.
    /// Overflow past capacity is allowed here - it is a display concern.
    pub fn add_substance(&mut self, substance_id: &str, concentration: f64) {
        for entry in &mut self.contents {
            if entry.substance_id == substance_id {
                entry.volume_ml += VOLUME_INCREMENT_ML;
                return;
            }
        }
        self.contents.push(MixtureEntry {
            substance_id: substance_id.to_string(),
            volume_ml: VOLUME_INCREMENT_ML,
            concentration,
        });
    }

    pub fn total_volume_ml(&self) -> f64 {
        self.contents.iter().map(|e| e.volume_ml).sum()
    }

    pub fn entry_count(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn clear(&mut self) {
        self.contents.clear();
    }
}
