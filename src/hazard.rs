//! Coarse hazard classification from static substance metadata. Runs before
//! any reaction fires, so the session can warn about a risky mix even when
//! no rule matches. Never consults reaction outcomes.

use crate::catalog::Catalog;
use crate::container::MixtureEntry;
use crate::substance::{HazardLevel, Substance, SubstanceCategory};

/// Classify a container's contents. Precedence:
/// 1. a high-hazard acid together with a high-hazard base → high
/// 2. two or more high-hazard substances → high
/// 3. exactly one high-hazard substance → medium
/// 4. otherwise low
pub fn classify(contents: &[MixtureEntry], catalog: &Catalog) -> HazardLevel {
    let present: Vec<&Substance> = contents
        .iter()
        .filter_map(|entry| catalog.get(&entry.substance_id))
        .collect();

    let strong_acid = present
        .iter()
        .any(|s| s.category == SubstanceCategory::Acid && s.is_high_hazard());
    let strong_base = present
        .iter()
        .any(|s| s.category == SubstanceCategory::Base && s.is_high_hazard());
    if strong_acid && strong_base {
        return HazardLevel::High;
    }

    let high_count = present.iter().filter(|s| s.is_high_hazard()).count();
    match high_count {
        0 => HazardLevel::Low,
        1 => HazardLevel::Medium,
        _ => HazardLevel::High,
    }
}
