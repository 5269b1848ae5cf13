//! # Identity Model
//!
//! The "Identity Bible" crate - contains the trait-based identity structure the
//! agent reasons over. This crate is the single source of truth for goals and
//! role skews and does not contain any perception logic.
//!
//! ## Core Components
//!
//! - **roles**: Named role profiles (parent, engineer, introvert, ...) stacked
//!   into a [`RoleContext`] that combines trait multipliers
//! - **goals**: Named objectives with decaying, reinforceable priority scores
//!   weighted by trait sigma and role skew

pub mod goals;
pub mod roles;

pub use goals::*;
pub use roles::*;
