//! # Agent Core
//!
//! The "brain" of the Salience system. This crate interfaces with
//! `identity_model`, perceives text stimuli, and reprioritizes goals through
//! decay and reinforcement.
//!
//! ## Core Components
//!
//! - **clock**: Injectable time source so decay is deterministic under test
//! - **perception**: The stimulus pipeline - decay, relevance scoring,
//!   reinforcement, and the append-only interpretation history
//!
//! ## Design Philosophy
//!
//! - **State-Driven**: Prioritization reads only current goal scores and the
//!   role context, never hidden globals
//! - **Single-Threaded**: One agent is driven from one logical thread;
//!   embedders needing sharing wrap the whole agent in one lock, since
//!   decay-then-score is not safe to interleave
//! - **Forgiving Inputs**: Any stimulus text is accepted; absence (no match,
//!   no trait, empty history) resolves to neutral defaults

pub mod clock;
pub mod perception;

pub use clock::*;
pub use perception::*;
