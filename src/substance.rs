// src/substance.rs - Substance catalog records and per-pair reaction rules

use crate::constants::DEFAULT_CONCENTRATION;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Partner key under which a substance declares its flame-test rule.
pub const FLAME_PSEUDO_REACTANT: &str = "flame";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubstanceCategory {
    Acid,
    Base,
    Salt,
    Indicator,
    Solvent,
    Catalyst,
    Metal,
}

impl SubstanceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubstanceCategory::Acid => "acid",
            SubstanceCategory::Base => "base",
            SubstanceCategory::Salt => "salt",
            SubstanceCategory::Indicator => "indicator",
            SubstanceCategory::Solvent => "solvent",
            SubstanceCategory::Catalyst => "catalyst",
            SubstanceCategory::Metal => "metal",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "acid" => Some(SubstanceCategory::Acid),
            "base" => Some(SubstanceCategory::Base),
            "salt" => Some(SubstanceCategory::Salt),
            "indicator" => Some(SubstanceCategory::Indicator),
            "solvent" => Some(SubstanceCategory::Solvent),
            "catalyst" => Some(SubstanceCategory::Catalyst),
            "metal" => Some(SubstanceCategory::Metal),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardLevel {
    Low,
    Medium,
    High,
}

impl HazardLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            HazardLevel::Low => "low",
            HazardLevel::Medium => "medium",
            HazardLevel::High => "high",
        }
    }
}

/// What a pair of substances does when mixed. Declared under one substance's
/// reaction table by convention but undirected in meaning - the catalog
/// mirrors it into a symmetric pair table at load time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactionRule {
    pub product_name: Option<String>,
    pub product_formula: Option<String>,
    pub color_change: Option<String>,
    pub precipitate: bool,
    pub precipitate_color: Option<String>,
    pub gas_production: bool,
    pub gas_name: Option<String>,
    pub temperature_change: f64,
    pub flame_color: Option<String>,
    pub equation: Option<String>,
}

/// Acid / base / neutral display colors for an indicator substance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorColors {
    pub acid: String,
    pub base: String,
    pub neutral: String,
}

fn default_concentration() -> f64 {
    DEFAULT_CONCENTRATION
}

/// One catalog entry. Read-only for the life of the process once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Substance {
    pub id: String,
    pub name: String,
    pub formula: String,
    pub category: SubstanceCategory,
    pub color: String,
    #[serde(default = "default_concentration")]
    pub concentration: f64,
    pub hazard: HazardLevel,
    #[serde(default)]
    pub hazard_label: Option<String>,
    #[serde(default)]
    pub indicator_colors: Option<IndicatorColors>,
    #[serde(default)]
    pub reactions: HashMap<String, ReactionRule>,
}

impl Substance {
    /// Free-text hazard label when the catalog declares one, otherwise the
    /// generic level name.
    pub fn hazard_text(&self) -> &str {
        match &self.hazard_label {
            Some(label) => label.as_str(),
            None => self.hazard.as_str(),
        }
    }

    pub fn is_high_hazard(&self) -> bool {
        self.hazard == HazardLevel::High
    }

    pub fn flame_rule(&self) -> Option<&ReactionRule> {
        self.reactions.get(FLAME_PSEUDO_REACTANT)
    }
}
