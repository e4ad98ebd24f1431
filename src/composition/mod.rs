//! Compositions: scenes on a timeline, how to build them, and ready-made section patterns.

pub mod dsl;
pub mod model;
pub mod patterns;
