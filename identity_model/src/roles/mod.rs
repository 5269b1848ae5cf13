//! Role profiles and the layered role context.
//!
//! A role profile is one contextual identity (e.g. "parent", "engineer")
//! expressed as trait-to-multiplier skews. A [`RoleContext`] stacks several
//! profiles; the effective skew for a trait is the product of every profile's
//! multiplier for it, so roles compound rather than override each other.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One named role with its trait skew coefficients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleProfile {
    /// Human-readable role name (e.g. "parent").
    pub name: String,

    /// Trait name -> positive multiplier. Traits absent here contribute 1.0.
    skews: HashMap<String, f32>,
}

impl RoleProfile {
    /// Create a new role profile with no skews.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            skews: HashMap::new(),
        }
    }

    /// Add a trait skew to this profile.
    pub fn with_skew(mut self, trait_name: impl Into<String>, multiplier: f32) -> Self {
        self.skews.insert(trait_name.into(), multiplier);
        self
    }

    /// Get this profile's multiplier for a trait, if it defines one.
    pub fn skew_for(&self, trait_name: &str) -> Option<f32> {
        self.skews.get(trait_name).copied()
    }

    /// Number of traits this profile skews.
    pub fn len(&self) -> usize {
        self.skews.len()
    }

    /// Check whether this profile skews no traits at all.
    pub fn is_empty(&self) -> bool {
        self.skews.is_empty()
    }
}

/// An ordered stack of role profiles.
///
/// Constructed once at agent setup and read-only thereafter. The effective
/// skew for a trait is the product of each profile's multiplier, with a
/// default of 1.0 per profile that lacks the trait, so an empty context is
/// always neutral.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RoleContext {
    profiles: Vec<RoleProfile>,
}

impl RoleContext {
    /// Create a role context from an ordered stack of profiles.
    pub fn new(profiles: Vec<RoleProfile>) -> Self {
        Self { profiles }
    }

    /// Create a context with no active roles. Every trait skews to 1.0.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The combined skew for a trait across all active roles.
    ///
    /// Never fails: an unknown trait or an empty context yields exactly 1.0.
    pub fn skew_for(&self, trait_name: &str) -> f32 {
        self.profiles
            .iter()
            .map(|profile| profile.skew_for(trait_name).unwrap_or(1.0))
            .product()
    }

    /// The active role profiles, in stacking order.
    pub fn profiles(&self) -> &[RoleProfile] {
        &self.profiles
    }
}
