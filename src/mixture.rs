//! Pure resolution of a container's display state: the color the mixture
//! shows and how full the glassware is. The session reads these when it
//! builds a snapshot; nothing here mutates or reacts.

use crate::catalog::Catalog;
use crate::constants::{MIXED_COLOR, NEUTRAL_SALT_WATER_COLOR, TRANSPARENT_COLOR};
use crate::container::MixtureEntry;
use crate::substance::{Substance, SubstanceCategory};

/// The visual color of the mixture. Order-independent over the set of
/// substance ids present: entries are resolved and sorted before the
/// priority list runs, so pouring order never changes the result.
pub fn resolve_color(contents: &[MixtureEntry], catalog: &Catalog) -> String {
    let mut present: Vec<&Substance> = contents
        .iter()
        .filter_map(|entry| catalog.get(&entry.substance_id))
        .collect();

    if present.is_empty() {
        return TRANSPARENT_COLOR.to_string();
    }
    if present.len() == 1 {
        return present[0].color.clone();
    }
    present.sort_by(|a, b| a.id.cmp(&b.id));

    // Priority 1: strong acid + strong base neutralize to salt water.
    let has_strong_acid = present
        .iter()
        .any(|s| s.category == SubstanceCategory::Acid && s.is_high_hazard());
    let has_strong_base = present
        .iter()
        .any(|s| s.category == SubstanceCategory::Base && s.is_high_hazard());
    if has_strong_acid && has_strong_base {
        return NEUTRAL_SALT_WATER_COLOR.to_string();
    }

    // Priority 2: a precipitate-forming pair shows its precipitate color.
    for (i, a) in present.iter().enumerate() {
        for b in &present[i + 1..] {
            for rule in catalog.rules_for(&a.id, &b.id) {
                if rule.precipitate {
                    if let Some(color) = &rule.precipitate_color {
                        return color.clone();
                    }
                }
            }
        }
    }

    // Priority 3: an indicator reads out the acid/base balance.
    for substance in &present {
        if let Some(colors) = &substance.indicator_colors {
            let has_acid = present
                .iter()
                .any(|s| s.category == SubstanceCategory::Acid);
            let has_base = present
                .iter()
                .any(|s| s.category == SubstanceCategory::Base);
            return if has_acid {
                colors.acid.clone()
            } else if has_base {
                colors.base.clone()
            } else {
                colors.neutral.clone()
            };
        }
    }

    MIXED_COLOR.to_string()
}

/// How full the glassware looks, as a fraction in [0, 1]. Sum of entry
/// volumes over capacity, clamped - the model allows overfilling but the
/// display never shows more than a full vessel.
pub fn fill_fraction(contents: &[MixtureEntry], capacity_ml: f64) -> f64 {
    if capacity_ml <= 0.0 {
        return 0.0;
    }
    let total: f64 = contents.iter().map(|e| e.volume_ml.max(0.0)).sum();
    (total / capacity_ml).clamp(0.0, 1.0)
}
