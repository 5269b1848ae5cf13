//! Perception pipeline - from text stimulus to reprioritized goals.
//!
//! Processing one stimulus works as follows:
//! 1. **Decay**: every goal's score decays by the wall-clock time elapsed
//!    since its last update
//! 2. **Relevance**: goals whose name occurs in the stimulus (case-insensitive
//!    substring) are scored by their role-weighted score
//! 3. **Selection**: the highest-scoring match becomes the best goal
//! 4. **Alignment**: relevance above the threshold reinforces that goal
//! 5. **Memory**: the interpretation is appended to the agent's history

mod interpretation;

pub use interpretation::*;

use std::collections::HashMap;

use identity_model::{Goal, RoleContext};
use thiserror::Error;

use crate::clock::{Clock, SystemClock};

/// Configuration for the perception pipeline.
#[derive(Debug, Clone)]
pub struct PerceptionConfig {
    /// Exponential decay rate applied per elapsed second.
    pub decay_rate: f32,

    /// Score boost (scaled by trait sigma) granted to an aligned goal.
    pub reinforce_boost: f32,

    /// Relevance must exceed this for a stimulus to count as aligned.
    pub alignment_threshold: f32,
}

impl Default for PerceptionConfig {
    fn default() -> Self {
        Self {
            decay_rate: 0.01,
            reinforce_boost: 0.5,
            alignment_threshold: 0.3,
        }
    }
}

/// Errors surfaced when assembling an agent.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Two goals with the same name would silently collapse in the goal map,
    /// so the collision is rejected at construction instead.
    #[error("duplicate goal name: '{0}'")]
    DuplicateGoal(String),
}

/// An agent tracking a set of named goals against a role context.
///
/// Goals are stored in insertion order, which doubles as the deterministic
/// tie-break: when two goals reach the same relevance or weighted score, the
/// one added first wins. The interpretation history is append-only.
#[derive(Debug)]
pub struct Agent {
    goals: Vec<Goal>,
    index: HashMap<String, usize>,
    history: Vec<Interpretation>,
    role_context: RoleContext,
    /// Free-form extension state; untouched by the core pipeline.
    state: HashMap<String, serde_json::Value>,
    config: PerceptionConfig,
    clock: Box<dyn Clock>,
}

impl Agent {
    /// Create an agent driven by the system wall clock.
    pub fn new(goals: Vec<Goal>, role_context: RoleContext) -> Result<Self, AgentError> {
        Self::with_clock(goals, role_context, SystemClock)
    }

    /// Create an agent driven by an injected clock.
    ///
    /// Every goal is stamped with the clock's current instant, so the first
    /// decay spans the time elapsed since construction.
    pub fn with_clock(
        goals: Vec<Goal>,
        role_context: RoleContext,
        clock: impl Clock + 'static,
    ) -> Result<Self, AgentError> {
        let mut agent = Self {
            goals: Vec::new(),
            index: HashMap::new(),
            history: Vec::new(),
            role_context,
            state: HashMap::new(),
            config: PerceptionConfig::default(),
            clock: Box::new(clock),
        };

        for goal in goals {
            agent.add_goal(goal)?;
        }

        Ok(agent)
    }

    /// Replace the perception configuration.
    pub fn with_config(mut self, config: PerceptionConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a goal under management, stamping its update time.
    ///
    /// Rejects a goal whose name is already tracked.
    pub fn add_goal(&mut self, mut goal: Goal) -> Result<(), AgentError> {
        if self.index.contains_key(&goal.name) {
            return Err(AgentError::DuplicateGoal(goal.name.clone()));
        }

        goal.touch(self.clock.now());
        self.index.insert(goal.name.clone(), self.goals.len());
        self.goals.push(goal);
        Ok(())
    }

    /// Remove a goal by name, returning it if it was tracked.
    pub fn remove_goal(&mut self, name: &str) -> Option<Goal> {
        let removed = self.index.remove(name)?;
        let goal = self.goals.remove(removed);

        // Later goals shifted down by one.
        for idx in self.index.values_mut() {
            if *idx > removed {
                *idx -= 1;
            }
        }

        Some(goal)
    }

    /// Look up a goal by name.
    pub fn goal(&self, name: &str) -> Option<&Goal> {
        self.index.get(name).map(|&idx| &self.goals[idx])
    }

    /// All goals, in insertion order.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// The append-only interpretation history, oldest first.
    pub fn history(&self) -> &[Interpretation] {
        &self.history
    }

    /// The role context the agent weighs goals against.
    pub fn role_context(&self) -> &RoleContext {
        &self.role_context
    }

    /// The active perception configuration.
    pub fn config(&self) -> &PerceptionConfig {
        &self.config
    }

    /// Free-form extension state, read-only.
    pub fn state(&self) -> &HashMap<String, serde_json::Value> {
        &self.state
    }

    /// Free-form extension state, writable by embedders.
    pub fn state_mut(&mut self) -> &mut HashMap<String, serde_json::Value> {
        &mut self.state
    }

    /// Process one stimulus and return what the agent made of it.
    ///
    /// Decays every goal, scores the goals whose name occurs in the stimulus,
    /// reinforces the best match when its relevance clears the alignment
    /// threshold, and records the interpretation. Accepts any text; a
    /// stimulus matching nothing yields a non-aligned interpretation with
    /// relevance 0.
    pub fn perceive(&mut self, stimulus: &str) -> Interpretation {
        let now = self.clock.now();

        for goal in &mut self.goals {
            goal.decay(now, self.config.decay_rate);
        }

        let lowered = stimulus.to_lowercase();
        let mut best: Option<(usize, f32)> = None;

        for (idx, goal) in self.goals.iter().enumerate() {
            if !lowered.contains(&goal.name.to_lowercase()) {
                continue;
            }

            let relevance = goal.weighted_score(Some(&self.role_context));

            // Strict greater-than keeps the first goal in insertion order on
            // a tie.
            if best.map_or(true, |(_, top)| relevance > top) {
                best = Some((idx, relevance));
            }
        }

        let (best_goal, relevance_score) = match best {
            Some((idx, relevance)) => (Some(self.goals[idx].name.clone()), relevance),
            None => (None, 0.0),
        };
        let aligned = relevance_score > self.config.alignment_threshold;

        if aligned {
            if let Some((idx, _)) = best {
                self.goals[idx].reinforce(now, self.config.reinforce_boost);
                tracing::debug!(
                    "reinforced goal '{}' at relevance {:.2}",
                    self.goals[idx].name,
                    relevance_score
                );
            }
        } else {
            tracing::trace!("stimulus '{}' aligned with no goal", stimulus);
        }

        let interpretation = Interpretation::new(stimulus, best_goal, relevance_score, aligned);
        self.history.push(interpretation.clone());
        interpretation
    }

    /// All goals sorted by descending role-weighted score.
    ///
    /// A stable sort keeps insertion order for equal scores. Reads only; no
    /// decay or other mutation happens here.
    pub fn prioritized_goals(&self) -> Vec<&Goal> {
        let mut goals: Vec<&Goal> = self.goals.iter().collect();
        goals.sort_by(|a, b| {
            let score_a = a.weighted_score(Some(&self.role_context));
            let score_b = b.weighted_score(Some(&self.role_context));
            score_b
                .partial_cmp(&score_a)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        goals
    }

    /// A textual report on the most recent interpretation.
    ///
    /// Reads only the last history entry; never mutates.
    pub fn act(&self) -> String {
        let Some(latest) = self.history.last() else {
            return "Waiting for stimuli...".to_string();
        };

        match (&latest.best_goal, latest.aligned) {
            (Some(goal), true) => {
                format!("Reinforcing '{}': aligned with '{}'.", goal, latest.stimulus)
            }
            _ => format!("Holding stimulus '{}'—not yet actionable.", latest.stimulus),
        }
    }
}
