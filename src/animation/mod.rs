//! Frame-driven animation primitives.
//!
//! Everything here is a pure function of the frame index and a small configuration value. There
//! are no timers or counters, so frames can be sampled in any order and from any thread.

pub mod chapters;
pub mod counter;
pub mod ease;
pub mod motion;
pub mod stagger;
pub mod timing;
pub mod typewriter;
