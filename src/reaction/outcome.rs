use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    Color,
    Precipitate,
    Gas,
    Temperature,
    Explosion,
}

impl OutcomeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeKind::Color => "color",
            OutcomeKind::Precipitate => "precipitate",
            OutcomeKind::Gas => "gas",
            OutcomeKind::Temperature => "temperature",
            OutcomeKind::Explosion => "explosion",
        }
    }
}

/// One observable effect of mixing. A single rule can yield several of
/// these, one per populated field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionOutcome {
    pub kind: OutcomeKind,
    pub observation: String,
    pub equation: Option<String>,
}

impl ReactionOutcome {
    pub fn new(kind: OutcomeKind, observation: String, equation: Option<String>) -> Self {
        ReactionOutcome {
            kind,
            observation,
            equation,
        }
    }
}
