//! Immutable visual description trees.

pub mod fingerprint;
pub mod model;
