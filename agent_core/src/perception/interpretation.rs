//! Interpretation records - what the agent made of each stimulus.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for interpretations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterpretationId(pub Uuid);

impl InterpretationId {
    /// Create a new random interpretation ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InterpretationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for InterpretationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The record produced by processing one stimulus.
///
/// Serializable so embedders can log or export the agent's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interpretation {
    pub id: InterpretationId,

    /// The stimulus text as received.
    pub stimulus: String,

    /// Name of the best-matching goal, if any goal name occurred in the
    /// stimulus.
    pub best_goal: Option<String>,

    /// Weighted score of the best match; 0.0 when nothing matched.
    pub relevance_score: f32,

    /// Whether the relevance cleared the alignment threshold.
    pub aligned: bool,
}

impl Interpretation {
    pub(crate) fn new(
        stimulus: impl Into<String>,
        best_goal: Option<String>,
        relevance_score: f32,
        aligned: bool,
    ) -> Self {
        Self {
            id: InterpretationId::new(),
            stimulus: stimulus.into(),
            best_goal,
            relevance_score,
            aligned,
        }
    }

    /// Whether any goal name occurred in the stimulus.
    pub fn matched(&self) -> bool {
        self.best_goal.is_some()
    }
}
