// Named combination rules layered on top of the generic pairwise table.
// These see what a per-pair rule cannot: container kind, total entry count,
// and ambient temperature. Kept as an explicit finite list rather than
// folded into the catalog schema.

use crate::color_utils::flame_color_name;
use crate::constants::{FLAME_REVEAL_TEMP_C, HYDROGEN_GAS_EQUATION, HYDROGEN_GAS_NAME};
use crate::container::ContainerKind;
use crate::reaction::outcome::{OutcomeKind, ReactionOutcome};
use crate::substance::{Substance, SubstanceCategory};

/// Everything a combination rule may inspect. `substances` holds the
/// resolved catalog entries in container order; `entry_count` is the raw
/// entry count, including entries that did not resolve.
pub struct ComboContext<'a> {
    pub substances: &'a [&'a Substance],
    pub entry_count: usize,
    pub kind: ContainerKind,
    pub ambient_temp_c: f64,
}

pub trait ComboRule {
    /// The name of this rule (for identification and lookup)
    fn name(&self) -> &str;

    /// Outcomes this rule adds for the given mixture, empty when it does
    /// not apply.
    fn apply(&self, ctx: &ComboContext) -> Vec<ReactionOutcome>;
}

/// The rules the engine runs after the generic pass, in order.
pub fn builtin_combo_rules() -> Vec<Box<dyn ComboRule>> {
    vec![Box::new(MetalStrongAcidRule), Box::new(FlameRevealRule)]
}

/// A reactive metal dropped into a strong acid always evolves hydrogen.
/// In a test tube holding at least two entries the gas has nowhere to go
/// and the glassware gives way - a fixed narrative event, not a pressure
/// model.
pub struct MetalStrongAcidRule;

impl ComboRule for MetalStrongAcidRule {
    fn name(&self) -> &str {
        "MetalStrongAcid"
    }

    fn apply(&self, ctx: &ComboContext) -> Vec<ReactionOutcome> {
        let has_metal = ctx
            .substances
            .iter()
            .any(|s| s.category == SubstanceCategory::Metal);
        let has_strong_acid = ctx
            .substances
            .iter()
            .any(|s| s.category == SubstanceCategory::Acid && s.is_high_hazard());
        if !(has_metal && has_strong_acid) {
            return Vec::new();
        }

        let mut outcomes = vec![ReactionOutcome::new(
            OutcomeKind::Gas,
            format!("{} bubbles are forming in the mixture", HYDROGEN_GAS_NAME),
            Some(HYDROGEN_GAS_EQUATION.to_string()),
        )];

        if ctx.entry_count >= 2 && ctx.kind.explosion_eligible() {
            outcomes.push(ReactionOutcome::new(
                OutcomeKind::Explosion,
                format!(
                    "The {} shattered under the pressure of the trapped gas!",
                    ctx.kind.as_str()
                ),
                None,
            ));
        }

        outcomes
    }
}

/// Above the reveal temperature, every substance that declares a flame test
/// shows its color. One outcome per flame-capable substance.
pub struct FlameRevealRule;

impl ComboRule for FlameRevealRule {
    fn name(&self) -> &str {
        "FlameReveal"
    }

    fn apply(&self, ctx: &ComboContext) -> Vec<ReactionOutcome> {
        if ctx.ambient_temp_c <= FLAME_REVEAL_TEMP_C {
            return Vec::new();
        }

        let mut outcomes = Vec::new();
        for substance in ctx.substances {
            let Some(rule) = substance.flame_rule() else {
                continue;
            };
            let Some(hex) = &rule.flame_color else {
                continue;
            };
            outcomes.push(ReactionOutcome::new(
                OutcomeKind::Color,
                format!(
                    "The {} burns with a {} flame",
                    substance.name,
                    flame_color_name(hex)
                ),
                rule.equation.clone(),
            ));
        }
        outcomes
    }
}
