// Reaction evaluation: a generic pairwise pass over the catalog's rule
// table, followed by a fixed list of named combination rules that also see
// container kind and ambient temperature.
pub mod combo_rules;
pub mod engine;
pub mod outcome;

// Re-export the main types for easier access
pub use combo_rules::{builtin_combo_rules, ComboContext, ComboRule};
pub use engine::evaluate;
pub use outcome::{OutcomeKind, ReactionOutcome};
