//! Design tokens, themes and layered value resolution.

pub mod model;
pub mod presets;
pub mod resolve;
pub mod tokens;
