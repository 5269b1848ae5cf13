//! Goal definitions - named objectives with decaying priority scores.
//!
//! A goal's raw score shrinks exponentially with elapsed wall-clock time and
//! grows when the goal is reinforced. The score actually used for ranking is
//! the weighted score: raw score scaled by the goal's trait sigma and by the
//! role-context skew for its trait.

use std::fmt;
use std::time::Instant;

use crate::roles::RoleContext;

/// A single tracked objective.
///
/// Goals carry an optional identity path (category -> subcategory -> trait)
/// and a fixed trait sigma weighting coefficient. The raw score and its
/// timestamp are private: they change only through [`Goal::decay`],
/// [`Goal::reinforce`] and [`Goal::touch`], which keeps the score
/// non-negative.
#[derive(Debug, Clone)]
pub struct Goal {
    /// Unique name, also the keyword matched against stimuli.
    pub name: String,

    /// Broad identity category (e.g. "development").
    pub category: Option<String>,

    /// Narrower grouping under the category (e.g. "systems").
    pub subcategory: Option<String>,

    /// Terminal trait used for role-skew lookup (e.g. "constructive").
    pub trait_name: Option<String>,

    /// Fixed weighting coefficient for the trait association.
    trait_sigma: f32,

    /// Current priority, decaying over time.
    score: f32,

    /// When the score was last decayed, reinforced or stamped.
    last_updated: Option<Instant>,
}

impl Goal {
    /// Create a new goal with sigma 1.0 and an initial score of 1.0.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: None,
            subcategory: None,
            trait_name: None,
            trait_sigma: 1.0,
            score: 1.0,
            last_updated: None,
        }
    }

    /// Set the category label.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the subcategory label.
    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    /// Associate a trait and its sigma weighting with this goal.
    pub fn with_trait(mut self, trait_name: impl Into<String>, sigma: f32) -> Self {
        self.trait_name = Some(trait_name.into());
        self.trait_sigma = sigma;
        self
    }

    /// Set the initial priority score. Negative values clamp to 0.0.
    pub fn with_initial_score(mut self, score: f32) -> Self {
        self.score = score.max(0.0);
        self
    }

    /// The current raw priority score.
    pub fn score(&self) -> f32 {
        self.score
    }

    /// The fixed trait sigma coefficient.
    pub fn trait_sigma(&self) -> f32 {
        self.trait_sigma
    }

    /// When the score was last updated, if it ever was.
    pub fn last_updated(&self) -> Option<Instant> {
        self.last_updated
    }

    /// Stamp the goal with the current instant without changing the score.
    ///
    /// The owning agent calls this at construction so the first decay spans
    /// the time actually elapsed since the goal came under management.
    pub fn touch(&mut self, now: Instant) {
        self.last_updated = Some(now);
    }

    /// Decay the score by the time elapsed since the last update.
    ///
    /// Multiplies the score by `exp(-rate * elapsed_secs)` and stamps `now`.
    /// Decays compose: two consecutive decays equal one decay over the total
    /// span. A goal that was never touched only gets stamped.
    pub fn decay(&mut self, now: Instant, rate: f32) {
        if let Some(prev) = self.last_updated {
            let elapsed = now.saturating_duration_since(prev).as_secs_f32();
            self.score *= (-rate * elapsed).exp();
        }
        self.last_updated = Some(now);
    }

    /// Reinforce the goal, adding `boost * trait_sigma` to the score.
    pub fn reinforce(&mut self, now: Instant, boost: f32) {
        self.score += boost * self.trait_sigma;
        self.last_updated = Some(now);
    }

    /// The role-weighted priority score: `score * sigma * skew`.
    ///
    /// The skew factor applies only when the goal has a trait and a role
    /// context is provided; otherwise it is 1.0. Pure, no mutation.
    pub fn weighted_score(&self, role_context: Option<&RoleContext>) -> f32 {
        let skew = match (&self.trait_name, role_context) {
            (Some(trait_name), Some(context)) => context.skew_for(trait_name),
            _ => 1.0,
        };
        self.score * self.trait_sigma * skew
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Goal(name='{}', score={:.2}, category={}, subcategory={}, trait={}, sigma={})",
            self.name,
            self.score,
            self.category.as_deref().unwrap_or("-"),
            self.subcategory.as_deref().unwrap_or("-"),
            self.trait_name.as_deref().unwrap_or("-"),
            self.trait_sigma,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_goal_builder() {
        let goal = Goal::new("build")
            .with_category("development")
            .with_subcategory("systems")
            .with_trait("constructive", 1.2)
            .with_initial_score(0.8);

        assert_eq!(goal.name, "build");
        assert_eq!(goal.category.as_deref(), Some("development"));
        assert_eq!(goal.subcategory.as_deref(), Some("systems"));
        assert_eq!(goal.trait_name.as_deref(), Some("constructive"));
        assert_eq!(goal.trait_sigma(), 1.2);
        assert_eq!(goal.score(), 0.8);
        assert!(goal.last_updated().is_none());
    }

    #[test]
    fn test_goal_defaults() {
        let goal = Goal::new("eat");
        assert_eq!(goal.trait_sigma(), 1.0);
        assert_eq!(goal.score(), 1.0);
        assert!(goal.category.is_none());
        assert!(goal.trait_name.is_none());
    }

    #[test]
    fn test_initial_score_clamps_to_zero() {
        let goal = Goal::new("test").with_initial_score(-2.0);
        assert_eq!(goal.score(), 0.0);
    }

    #[test]
    fn test_decay_with_zero_elapsed_keeps_score() {
        let now = Instant::now();
        let mut goal = Goal::new("build");
        goal.touch(now);
        goal.decay(now, 0.01);

        assert_eq!(goal.score(), 1.0);
    }

    #[test]
    fn test_decay_shrinks_score_over_time() {
        let start = Instant::now();
        let mut goal = Goal::new("build");
        goal.touch(start);
        goal.decay(start + Duration::from_secs(100), 0.01);

        // exp(-0.01 * 100) = e^-1
        let expected = (-1.0f32).exp();
        assert!((goal.score() - expected).abs() < 1e-4);
    }

    #[test]
    fn test_decay_composes() {
        let start = Instant::now();

        let mut chained = Goal::new("build");
        chained.touch(start);
        chained.decay(start + Duration::from_secs(30), 0.01);
        chained.decay(start + Duration::from_secs(75), 0.01);

        let mut single = Goal::new("build");
        single.touch(start);
        single.decay(start + Duration::from_secs(75), 0.01);

        assert!((chained.score() - single.score()).abs() < 1e-4);
    }

    #[test]
    fn test_untouched_goal_only_gets_stamped_by_decay() {
        let now = Instant::now();
        let mut goal = Goal::new("build");
        goal.decay(now, 0.01);

        assert_eq!(goal.score(), 1.0);
        assert_eq!(goal.last_updated(), Some(now));
    }

    #[test]
    fn test_reinforce_adds_boost_times_sigma() {
        let now = Instant::now();
        let mut goal = Goal::new("build").with_trait("constructive", 1.2);
        goal.reinforce(now, 0.5);

        assert!((goal.score() - 1.6).abs() < 1e-6);
        assert_eq!(goal.last_updated(), Some(now));

        // Independent of the current score.
        goal.reinforce(now, 0.5);
        assert!((goal.score() - 2.2).abs() < 1e-6);
    }

    #[test]
    fn test_weighted_score_without_context_or_trait() {
        let traitless = Goal::new("eat").with_initial_score(0.2);
        assert!((traitless.weighted_score(None) - 0.2).abs() < 1e-6);

        let with_trait = Goal::new("build").with_trait("constructive", 1.2);
        // Trait set but no context: skew stays 1.0.
        assert!((with_trait.weighted_score(None) - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_weighted_score_applies_role_skew() {
        use crate::roles::RoleProfile;

        let context = RoleContext::new(vec![
            RoleProfile::new("engineer").with_skew("constructive", 1.2)
        ]);
        let goal = Goal::new("build").with_trait("constructive", 1.2);

        assert!((goal.weighted_score(Some(&context)) - 1.44).abs() < 1e-4);
    }

    #[test]
    fn test_weighted_score_is_linear_in_score_and_skew() {
        use crate::roles::RoleProfile;

        let goal_1x = Goal::new("model")
            .with_trait("analytical", 1.4)
            .with_initial_score(1.0);
        let goal_3x = Goal::new("model")
            .with_trait("analytical", 1.4)
            .with_initial_score(3.0);

        let skew_1x = RoleContext::new(vec![
            RoleProfile::new("base").with_skew("analytical", 1.0)
        ]);
        let skew_2x = RoleContext::new(vec![
            RoleProfile::new("base").with_skew("analytical", 2.0)
        ]);

        let base = goal_1x.weighted_score(Some(&skew_1x));
        assert!((goal_3x.weighted_score(Some(&skew_1x)) - 3.0 * base).abs() < 1e-4);
        assert!((goal_1x.weighted_score(Some(&skew_2x)) - 2.0 * base).abs() < 1e-4);
    }

    #[test]
    fn test_display_rendering() {
        let goal = Goal::new("build")
            .with_category("development")
            .with_subcategory("systems")
            .with_trait("constructive", 1.2)
            .with_initial_score(1.456);

        let rendered = goal.to_string();
        assert!(rendered.contains("name='build'"));
        assert!(rendered.contains("score=1.46"));
        assert!(rendered.contains("category=development"));
        assert!(rendered.contains("trait=constructive"));
        assert!(rendered.contains("sigma=1.2"));
    }

    #[test]
    fn test_display_renders_unset_labels_as_dash() {
        let rendered = Goal::new("eat").to_string();
        assert!(rendered.contains("category=-"));
        assert!(rendered.contains("subcategory=-"));
        assert!(rendered.contains("trait=-"));
    }
}
