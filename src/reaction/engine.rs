// The reaction engine. Pure: no I/O, no side effects, never errors.
// Entries that do not resolve against the catalog are skipped silently.

use crate::catalog::Catalog;
use crate::container::{ContainerKind, MixtureEntry};
use crate::reaction::combo_rules::{builtin_combo_rules, ComboContext};
use crate::reaction::outcome::{OutcomeKind, ReactionOutcome};
use crate::substance::{ReactionRule, Substance};

/// Evaluate every applicable rule for a container's contents.
///
/// The generic pass walks unordered substance pairs in first-occurrence
/// order and emits one outcome per populated rule field. The catalog's pair
/// table is symmetric, so a rule declared under either substance fires
/// exactly once per pair no matter which was poured first. Combination
/// rules (metal + strong acid, flame reveal) run after the generic pass.
///
/// No deduplication: two rules describing the same physical effect both
/// show up, matching the observation log's append semantics.
pub fn evaluate(
    contents: &[MixtureEntry],
    kind: ContainerKind,
    catalog: &Catalog,
    ambient_temp_c: f64,
) -> Vec<ReactionOutcome> {
    let present: Vec<&Substance> = contents
        .iter()
        .filter_map(|entry| catalog.get(&entry.substance_id))
        .collect();

    let mut outcomes = Vec::new();

    for (i, a) in present.iter().enumerate() {
        for b in &present[i + 1..] {
            for rule in catalog.rules_for(&a.id, &b.id) {
                emit_rule_outcomes(rule, &mut outcomes);
            }
        }
    }

    let ctx = ComboContext {
        substances: &present,
        entry_count: contents.len(),
        kind,
        ambient_temp_c,
    };
    for rule in builtin_combo_rules() {
        outcomes.extend(rule.apply(&ctx));
    }

    outcomes
}

/// One outcome per populated field, in fixed field order: color change,
/// precipitate, gas, temperature delta.
fn emit_rule_outcomes(rule: &ReactionRule, outcomes: &mut Vec<ReactionOutcome>) {
    if let Some(color) = &rule.color_change {
        outcomes.push(ReactionOutcome::new(
            OutcomeKind::Color,
            format!("The mixture changed color to {}", color),
            rule.equation.clone(),
        ));
    }

    if rule.precipitate {
        let what = rule.product_name.as_deref().unwrap_or("A precipitate");
        outcomes.push(ReactionOutcome::new(
            OutcomeKind::Precipitate,
            format!("{} formed in the solution", what),
            rule.equation.clone(),
        ));
    }

    if rule.gas_production {
        let what = rule.gas_name.as_deref().unwrap_or("Gas");
        outcomes.push(ReactionOutcome::new(
            OutcomeKind::Gas,
            format!("{} bubbles are forming in the mixture", what),
            rule.equation.clone(),
        ));
    }

    if rule.temperature_change != 0.0 {
        let direction = if rule.temperature_change > 0.0 {
            "increased"
        } else {
            "decreased"
        };
        outcomes.push(ReactionOutcome::new(
            OutcomeKind::Temperature,
            format!(
                "Temperature {} by {}°C",
                direction,
                rule.temperature_change.abs()
            ),
            rule.equation.clone(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ROOM_TEMP_C;

    fn entry(id: &str) -> MixtureEntry {
        MixtureEntry {
            substance_id: id.to_string(),
            volume_ml: 10.0,
            concentration: 1.0,
        }
    }

    #[test]
    fn test_neutralization_emits_color_and_temperature() {
        let catalog = Catalog::built_in();
        let contents = [entry("hcl"), entry("naoh")];
        let outcomes = evaluate(&contents, ContainerKind::Beaker, &catalog, ROOM_TEMP_C);

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].kind, OutcomeKind::Color);
        assert_eq!(
            outcomes[0].observation,
            "The mixture changed color to transparent"
        );
        assert_eq!(outcomes[1].kind, OutcomeKind::Temperature);
        assert_eq!(outcomes[1].observation, "Temperature increased by 12°C");
        assert_eq!(
            outcomes[0].equation.as_deref(),
            Some("HCl + NaOH → NaCl + H₂O")
        );
    }

    #[test]
    fn test_precipitate_outcome_names_product() {
        let catalog = Catalog::built_in();
        let contents = [entry("nacl"), entry("agno3")];
        let outcomes = evaluate(&contents, ContainerKind::Beaker, &catalog, ROOM_TEMP_C);

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].kind, OutcomeKind::Precipitate);
        assert_eq!(
            outcomes[0].observation,
            "Silver Chloride formed in the solution"
        );
    }

    #[test]
    fn test_nameless_rule_falls_back_to_generic_wording() {
        let json = r##"[
            { "id": "a", "name": "A", "formula": "A", "category": "salt",
              "color": "#ffffff", "hazard": "low",
              "reactions": { "b": { "precipitate": true, "gas_production": true } } },
            { "id": "b", "name": "B", "formula": "B", "category": "salt",
              "color": "#ffffff", "hazard": "low" }
        ]"##;
        let catalog = Catalog::from_json_str(json).unwrap();
        let contents = [entry("a"), entry("b")];
        let outcomes = evaluate(&contents, ContainerKind::Beaker, &catalog, ROOM_TEMP_C);

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].observation, "A precipitate formed in the solution");
        assert_eq!(
            outcomes[1].observation,
            "Gas bubbles are forming in the mixture"
        );
        assert!(outcomes[0].equation.is_none());
    }

    #[test]
    fn test_negative_temperature_delta_reads_decreased() {
        let json = r##"[
            { "id": "a", "name": "A", "formula": "A", "category": "salt",
              "color": "#ffffff", "hazard": "low",
              "reactions": { "b": { "temperature_change": -6.5 } } },
            { "id": "b", "name": "B", "formula": "B", "category": "salt",
              "color": "#ffffff", "hazard": "low" }
        ]"##;
        let catalog = Catalog::from_json_str(json).unwrap();
        let outcomes = evaluate(
            &[entry("a"), entry("b")],
            ContainerKind::Beaker,
            &catalog,
            ROOM_TEMP_C,
        );
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].observation, "Temperature decreased by 6.5°C");
    }

    #[test]
    fn test_empty_and_single_entry_produce_nothing() {
        let catalog = Catalog::built_in();
        assert!(evaluate(&[], ContainerKind::Beaker, &catalog, ROOM_TEMP_C).is_empty());
        assert!(
            evaluate(&[entry("hcl")], ContainerKind::Beaker, &catalog, ROOM_TEMP_C).is_empty()
        );
    }

    #[test]
    fn test_order_independence() {
        let catalog = Catalog::built_in();
        let forward = evaluate(
            &[entry("hcl"), entry("naoh")],
            ContainerKind::Beaker,
            &catalog,
            ROOM_TEMP_C,
        );
        let reverse = evaluate(
            &[entry("naoh"), entry("hcl")],
            ContainerKind::Beaker,
            &catalog,
            ROOM_TEMP_C,
        );

        let forward_obs: Vec<&str> = forward.iter().map(|o| o.observation.as_str()).collect();
        let reverse_obs: Vec<&str> = reverse.iter().map(|o| o.observation.as_str()).collect();
        assert_eq!(forward_obs, reverse_obs);
    }

    #[test]
    fn test_unresolvable_entries_are_skipped() {
        let catalog = Catalog::built_in();
        let outcomes = evaluate(
            &[entry("hcl"), entry("unobtainium"), entry("naoh")],
            ContainerKind::Beaker,
            &catalog,
            ROOM_TEMP_C,
        );
        // same result as without the unknown entry
        assert_eq!(outcomes.len(), 2);
    }

    #[test]
    fn test_metal_acid_special_case_runs_after_generic_pass() {
        let catalog = Catalog::built_in();
        let outcomes = evaluate(
            &[entry("zn"), entry("hcl")],
            ContainerKind::TestTube,
            &catalog,
            ROOM_TEMP_C,
        );
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].kind, OutcomeKind::Gas);
        assert_eq!(outcomes[1].kind, OutcomeKind::Explosion);
    }

    #[test]
    fn test_flame_reveal_requires_heat() {
        let catalog = Catalog::built_in();
        let contents = [entry("nacl"), entry("water")];

        let cold = evaluate(&contents, ContainerKind::Beaker, &catalog, ROOM_TEMP_C);
        assert!(cold.is_empty());

        let hot = evaluate(&contents, ContainerKind::Beaker, &catalog, 75.0);
        assert_eq!(hot.len(), 1);
        assert!(hot[0].observation.contains("golden yellow"));
    }
}
