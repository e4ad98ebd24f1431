//! Batch evaluation of frame ranges.

pub mod pipeline;

pub use pipeline::{RenderStats, RenderThreading, render_frames};
