// src/catalog.rs - Substance catalog with a symmetric pair-rule table
//
// Source data declares each ReactionRule under one substance of a pair by
// convention. The catalog folds every declaration into a table keyed by the
// sorted id pair at load time, so the engine never has to probe both
// directions when it evaluates a mixture.

use crate::constants::TRANSPARENT_COLOR;
use crate::substance::{
    HazardLevel, IndicatorColors, ReactionRule, Substance, SubstanceCategory,
    FLAME_PSEUDO_REACTANT,
};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

type PairKey = (String, String);

fn pair_key(a: &str, b: &str) -> PairKey {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

pub struct Catalog {
    substances: HashMap<String, Substance>,
    // Every rule either side of a pair declares, in record order. Rules
    // declared by both sides are kept side by side - the engine does not
    // deduplicate.
    pair_rules: HashMap<PairKey, Vec<ReactionRule>>,
}

impl Catalog {
    /// Build a catalog from substance records. Rules pointing at partner ids
    /// absent from the record set are dropped here, which is what makes the
    /// engine tolerant of malformed external catalogs.
    pub fn from_records(records: Vec<Substance>) -> Catalog {
        let mut substances: HashMap<String, Substance> = HashMap::new();
        for record in &records {
            substances.insert(record.id.clone(), record.clone());
        }

        let mut pair_rules: HashMap<PairKey, Vec<ReactionRule>> = HashMap::new();
        for record in &records {
            for (partner_id, rule) in &record.reactions {
                if partner_id == FLAME_PSEUDO_REACTANT {
                    continue; // flame tests are not pairwise, see flame_rule()
                }
                if !substances.contains_key(partner_id) {
                    continue;
                }
                pair_rules
                    .entry(pair_key(&record.id, partner_id))
                    .or_default()
                    .push(rule.clone());
            }
        }

        Catalog {
            substances,
            pair_rules,
        }
    }

    /// Parse a JSON array of substance records.
    pub fn from_json_str(json_str: &str) -> Result<Catalog, String> {
        let records: Vec<Substance> = match serde_json::from_str(json_str) {
            Ok(parsed) => parsed,
            Err(e) => return Err(format!("Failed to parse catalog JSON: {}", e)),
        };
        Ok(Catalog::from_records(records))
    }

    /// Load a catalog from a JSON file on disk.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog, String> {
        let path = path.as_ref();
        let json_str = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => return Err(format!("Failed to read catalog {}: {}", path.display(), e)),
        };
        Catalog::from_json_str(&json_str)
    }

    /// Load from a file, falling back to the built-in default catalog when
    /// the file is missing or malformed.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Catalog {
        Catalog::load_from_file(path).unwrap_or_else(|_| Catalog::built_in())
    }

    /// The hard-coded default catalog: enough substances to exercise every
    /// rule category (neutralization, precipitates, gas evolution, flame
    /// tests, the reactive metal).
    pub fn built_in() -> Catalog {
        Catalog::from_records(DEFAULT_RECORDS.clone())
    }

    pub fn get(&self, id: &str) -> Option<&Substance> {
        self.substances.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.substances.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.substances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.substances.is_empty()
    }

    /// All rules declared for an unordered pair, regardless of which side
    /// declared them. Empty slice when the pair has no declared chemistry.
    pub fn rules_for(&self, a: &str, b: &str) -> &[ReactionRule] {
        match self.pair_rules.get(&pair_key(a, b)) {
            Some(rules) => rules.as_slice(),
            None => &[],
        }
    }
}

fn transparent() -> String {
    TRANSPARENT_COLOR.to_string()
}

static DEFAULT_RECORDS: Lazy<Vec<Substance>> = Lazy::new(|| {
    use HazardLevel::*;
    use SubstanceCategory::*;

    vec![
        Substance {
            id: "water".to_string(),
            name: "Distilled Water".to_string(),
            formula: "H₂O".to_string(),
            category: Solvent,
            color: transparent(),
            concentration: 1.0,
            hazard: Low,
            hazard_label: None,
            indicator_colors: None,
            reactions: HashMap::new(),
        },
        Substance {
            id: "h2o2".to_string(),
            name: "Hydrogen Peroxide".to_string(),
            formula: "H₂O₂".to_string(),
            category: Solvent,
            color: transparent(),
            concentration: 0.3,
            hazard: Low,
            hazard_label: None,
            indicator_colors: None,
            reactions: HashMap::from([(
                "mno2".to_string(),
                ReactionRule {
                    gas_production: true,
                    gas_name: Some("Oxygen".to_string()),
                    temperature_change: 8.0,
                    equation: Some("2H₂O₂ → 2H₂O + O₂↑".to_string()),
                    ..ReactionRule::default()
                },
            )]),
        },
        Substance {
            id: "hcl".to_string(),
            name: "Hydrochloric Acid".to_string(),
            formula: "HCl".to_string(),
            category: Acid,
            color: transparent(),
            concentration: 1.0,
            hazard: High,
            hazard_label: Some("corrosive".to_string()),
            indicator_colors: None,
            reactions: HashMap::from([
                (
                    "naoh".to_string(),
                    ReactionRule {
                        product_name: Some("Sodium Chloride".to_string()),
                        product_formula: Some("NaCl".to_string()),
                        color_change: Some(transparent()),
                        temperature_change: 12.0,
                        equation: Some("HCl + NaOH → NaCl + H₂O".to_string()),
                        ..ReactionRule::default()
                    },
                ),
                (
                    "agno3".to_string(),
                    ReactionRule {
                        product_name: Some("Silver Chloride".to_string()),
                        product_formula: Some("AgCl".to_string()),
                        precipitate: true,
                        precipitate_color: Some("#fdfdf5".to_string()),
                        equation: Some("HCl + AgNO₃ → AgCl↓ + HNO₃".to_string()),
                        ..ReactionRule::default()
                    },
                ),
            ]),
        },
        Substance {
            id: "naoh".to_string(),
            name: "Sodium Hydroxide".to_string(),
            formula: "NaOH".to_string(),
            category: Base,
            color: transparent(),
            concentration: 1.0,
            hazard: High,
            hazard_label: Some("caustic".to_string()),
            indicator_colors: None,
            reactions: HashMap::from([(
                "cuso4".to_string(),
                ReactionRule {
                    product_name: Some("Copper Hydroxide".to_string()),
                    product_formula: Some("Cu(OH)₂".to_string()),
                    precipitate: true,
                    precipitate_color: Some("#1f75fe".to_string()),
                    equation: Some("2NaOH + CuSO₄ → Cu(OH)₂↓ + Na₂SO₄".to_string()),
                    ..ReactionRule::default()
                },
            )]),
        },
        Substance {
            id: "phenolphthalein".to_string(),
            name: "Phenolphthalein".to_string(),
            formula: "C₂₀H₁₄O₄".to_string(),
            category: Indicator,
            color: transparent(),
            concentration: 0.01,
            hazard: Low,
            hazard_label: None,
            indicator_colors: Some(IndicatorColors {
                acid: transparent(),
                base: "#ff69b4".to_string(),
                neutral: transparent(),
            }),
            reactions: HashMap::new(),
        },
        Substance {
            id: "nacl".to_string(),
            name: "Sodium Chloride".to_string(),
            formula: "NaCl".to_string(),
            category: Salt,
            color: "#f8f8ff".to_string(),
            concentration: 1.0,
            hazard: Low,
            hazard_label: None,
            indicator_colors: None,
            reactions: HashMap::from([
                (
                    FLAME_PSEUDO_REACTANT.to_string(),
                    ReactionRule {
                        flame_color: Some("#FFD700".to_string()),
                        ..ReactionRule::default()
                    },
                ),
                (
                    "agno3".to_string(),
                    ReactionRule {
                        product_name: Some("Silver Chloride".to_string()),
                        product_formula: Some("AgCl".to_string()),
                        precipitate: true,
                        precipitate_color: Some("#fdfdf5".to_string()),
                        equation: Some("NaCl + AgNO₃ → AgCl↓ + NaNO₃".to_string()),
                        ..ReactionRule::default()
                    },
                ),
            ]),
        },
        Substance {
            id: "agno3".to_string(),
            name: "Silver Nitrate".to_string(),
            formula: "AgNO₃".to_string(),
            category: Salt,
            color: transparent(),
            concentration: 0.1,
            hazard: Medium,
            hazard_label: None,
            indicator_colors: None,
            reactions: HashMap::new(),
        },
        Substance {
            id: "cuso4".to_string(),
            name: "Copper Sulfate".to_string(),
            formula: "CuSO₄".to_string(),
            category: Salt,
            color: "#1e90ff".to_string(),
            concentration: 0.5,
            hazard: Medium,
            hazard_label: None,
            indicator_colors: None,
            reactions: HashMap::from([(
                FLAME_PSEUDO_REACTANT.to_string(),
                ReactionRule {
                    flame_color: Some("#00FF7F".to_string()),
                    ..ReactionRule::default()
                },
            )]),
        },
        Substance {
            id: "mno2".to_string(),
            name: "Manganese Dioxide".to_string(),
            formula: "MnO₂".to_string(),
            category: Catalyst,
            color: "#3b3b3b".to_string(),
            concentration: 1.0,
            hazard: Low,
            hazard_label: None,
            indicator_colors: None,
            reactions: HashMap::new(),
        },
        Substance {
            id: "zn".to_string(),
            name: "Zinc".to_string(),
            formula: "Zn".to_string(),
            category: Metal,
            color: "#a9a9a9".to_string(),
            concentration: 1.0,
            hazard: Low,
            hazard_label: None,
            indicator_colors: None,
            reactions: HashMap::new(),
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_in_catalog_covers_rule_categories() {
        let catalog = Catalog::built_in();
        assert_eq!(catalog.len(), 10);

        // one of each structural role the engine needs
        assert_eq!(catalog.get("hcl").unwrap().category, SubstanceCategory::Acid);
        assert_eq!(catalog.get("naoh").unwrap().category, SubstanceCategory::Base);
        assert_eq!(
            catalog.get("phenolphthalein").unwrap().category,
            SubstanceCategory::Indicator
        );
        assert_eq!(catalog.get("zn").unwrap().category, SubstanceCategory::Metal);
        assert_eq!(catalog.get("mno2").unwrap().category, SubstanceCategory::Catalyst);
        assert!(catalog.get("nacl").unwrap().flame_rule().is_some());
    }

    #[test]
    fn test_pair_rules_are_order_independent() {
        let catalog = Catalog::built_in();
        let forward = catalog.rules_for("hcl", "naoh");
        let reverse = catalog.rules_for("naoh", "hcl");
        assert_eq!(forward.len(), 1);
        assert_eq!(reverse.len(), 1);
        assert_eq!(
            forward[0].product_name.as_deref(),
            reverse[0].product_name.as_deref()
        );
    }

    #[test]
    fn test_flame_pseudo_rule_not_in_pair_table() {
        let catalog = Catalog::built_in();
        assert!(catalog.rules_for("nacl", "flame").is_empty());
        assert!(catalog.get("nacl").unwrap().flame_rule().is_some());
    }

    #[test]
    fn test_rule_with_missing_partner_is_dropped() {
        let json = r##"[{
            "id": "mystery",
            "name": "Mystery Reagent",
            "formula": "??",
            "category": "salt",
            "color": "#ffffff",
            "hazard": "low",
            "reactions": {
                "unobtainium": { "gas_production": true }
            }
        }]"##;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.rules_for("mystery", "unobtainium").is_empty());
    }

    #[test]
    fn test_both_sides_declaring_keeps_both_rules() {
        let json = r##"[
            {
                "id": "a", "name": "A", "formula": "A", "category": "salt",
                "color": "#ffffff", "hazard": "low",
                "reactions": { "b": { "gas_production": true, "gas_name": "Gas A" } }
            },
            {
                "id": "b", "name": "B", "formula": "B", "category": "salt",
                "color": "#ffffff", "hazard": "low",
                "reactions": { "a": { "precipitate": true } }
            }
        ]"##;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.rules_for("a", "b").len(), 2);
        assert_eq!(catalog.rules_for("b", "a").len(), 2);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Catalog::from_json_str("not json").is_err());
        assert!(Catalog::load_from_file("/path/that/does/not/exist.json").is_err());
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let catalog = Catalog::load_or_default("/path/that/does/not/exist.json");
        assert!(!catalog.is_empty());
        assert!(catalog.contains("hcl"));
    }
}
