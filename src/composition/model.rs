use std::collections::BTreeSet;

use crate::{
    components::Component,
    foundation::core::{Canvas, Fps, FrameSpan},
    foundation::error::{FramecraftError, FramecraftResult},
    theme::{
        model::{Theme, ThemeOverrides, create_theme},
        presets::theme_or_default,
    },
};

/// A video timeline: scenes laid over `duration` frames.
///
/// Loaded from JSON or built with [`crate::CompositionBuilder`]; never mutated during
/// evaluation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Composition {
    pub fps: Fps,
    pub canvas: Canvas,
    /// Total frames.
    pub duration: u64,
    /// Active theme; components fall back to global tokens when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeSpec>,
    /// Root background; the theme background when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    pub scenes: Vec<Scene>,
}

/// One component tree shown over a frame span. Frames inside the scene are counted from
/// `span.start`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    pub id: String,
    pub span: FrameSpan,
    pub content: Component,
}

/// Theme selection: a preset name or an override document merged over the default theme.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ThemeSpec {
    /// Preset name such as `dark-tech`. Unknown names fall back to `minimal-white`.
    Preset(String),
    Custom {
        name: String,
        #[serde(default)]
        overrides: ThemeOverrides,
    },
}

impl ThemeSpec {
    pub fn resolve(&self) -> Theme {
        match self {
            Self::Preset(name) => theme_or_default(name),
            Self::Custom { name, overrides } => create_theme(name.clone(), overrides.clone()),
        }
    }
}

impl Composition {
    pub fn validate(&self) -> FramecraftResult<()> {
        self.fps.validate()?;
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(FramecraftError::validation(
                "canvas width/height must be > 0",
            ));
        }
        if self.duration == 0 {
            return Err(FramecraftError::validation("duration must be > 0 frames"));
        }

        let mut ids = BTreeSet::new();
        for scene in &self.scenes {
            if scene.id.trim().is_empty() {
                return Err(FramecraftError::validation("scene id must be non-empty"));
            }
            if !ids.insert(scene.id.as_str()) {
                return Err(FramecraftError::validation(format!(
                    "duplicate scene id '{}'",
                    scene.id
                )));
            }
            scene.span.validate().map_err(|e| {
                FramecraftError::validation(format!("scene '{}': {e}", scene.id))
            })?;
            if scene.span.end() > self.duration {
                return Err(FramecraftError::validation(format!(
                    "scene '{}' span exceeds composition duration",
                    scene.id
                )));
            }
            scene.content.validate()?;
        }
        Ok(())
    }

    /// Theme the evaluator renders with.
    pub fn resolved_theme(&self) -> Option<Theme> {
        self.theme.as_ref().map(ThemeSpec::resolve)
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> FramecraftResult<Self> {
        let comp: Self = serde_json::from_str(s)?;
        comp.validate()?;
        tracing::debug!(
            scenes = comp.scenes.len(),
            duration = comp.duration,
            "composition loaded"
        );
        Ok(comp)
    }

    /// Parse and validate a JSON document from `reader`.
    pub fn from_reader(reader: impl std::io::Read) -> FramecraftResult<Self> {
        let comp: Self = serde_json::from_reader(reader)?;
        comp.validate()?;
        Ok(comp)
    }

    pub fn to_json_string_pretty(&self) -> FramecraftResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
