use crate::{
    components::Component,
    composition::model::{Composition, Scene, ThemeSpec},
    foundation::core::{Canvas, Fps, FrameSpan},
    foundation::error::{FramecraftError, FramecraftResult},
    theme::{model::ThemeOverrides, presets::ThemeName},
};

pub struct CompositionBuilder {
    fps: Fps,
    canvas: Canvas,
    duration: u64,
    theme: Option<ThemeSpec>,
    background: Option<String>,
    scenes: Vec<Scene>,
}

impl CompositionBuilder {
    pub fn new(fps: Fps, canvas: Canvas, duration: u64) -> Self {
        Self {
            fps,
            canvas,
            duration,
            theme: None,
            background: None,
            scenes: Vec::new(),
        }
    }

    pub fn theme(mut self, name: ThemeName) -> Self {
        self.theme = Some(ThemeSpec::Preset(name.as_str().to_owned()));
        self
    }

    pub fn custom_theme(mut self, name: impl Into<String>, overrides: ThemeOverrides) -> Self {
        self.theme = Some(ThemeSpec::Custom {
            name: name.into(),
            overrides,
        });
        self
    }

    pub fn background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    pub fn scene(mut self, scene: Scene) -> Self {
        self.scenes.push(scene);
        self
    }

    pub fn build(self) -> FramecraftResult<Composition> {
        let comp = Composition {
            fps: self.fps,
            canvas: self.canvas,
            duration: self.duration,
            theme: self.theme,
            background: self.background,
            scenes: self.scenes,
        };
        comp.validate()?;
        Ok(comp)
    }
}

pub struct SceneBuilder {
    id: String,
    span: FrameSpan,
    content: Option<Component>,
}

impl SceneBuilder {
    pub fn new(id: impl Into<String>, start: u64, duration: u64) -> Self {
        Self {
            id: id.into(),
            span: FrameSpan { start, duration },
            content: None,
        }
    }

    pub fn content(mut self, content: impl Into<Component>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn build(self) -> FramecraftResult<Scene> {
        if self.id.trim().is_empty() {
            return Err(FramecraftError::validation("scene id must be non-empty"));
        }
        self.span.validate()?;
        let content = self.content.ok_or_else(|| {
            FramecraftError::validation(format!("scene '{}' has no content", self.id))
        })?;
        content.validate()?;
        Ok(Scene {
            id: self.id,
            span: self.span,
            content,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/dsl.rs"]
mod tests;
