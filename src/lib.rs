#![forbid(unsafe_code)]
//! `framecraft` is a component and design-token library for programmatic video.
//!
//! Every visual value is a pure function of the frame index. A [`Composition`] places
//! [`Component`] trees on a timeline, and [`Evaluator::eval_frame`] turns one frame into an
//! immutable [`VisualNode`] tree for a host renderer to rasterize. Because nothing is carried
//! between frames, frames may be evaluated in any order or in parallel ([`render_frames`]).
//!
//! ```no_run
//! use framecraft::{
//!     Canvas, CompositionBuilder, Evaluator, FadeIn, Fps, FrameIndex, SceneBuilder, ThemeName,
//!     Title,
//! };
//!
//! # fn main() -> framecraft::FramecraftResult<()> {
//! let intro = SceneBuilder::new("intro", 0, 90)
//!     .content(FadeIn::new(vec![Title::hero("Hello").into()]))
//!     .build()?;
//! let comp = CompositionBuilder::new(Fps::new(30, 1)?, Canvas::HD, 90)
//!     .theme(ThemeName::DarkTech)
//!     .scene(intro)
//!     .build()?;
//! let frame = Evaluator::eval_frame(&comp, FrameIndex(12))?;
//! assert_eq!(frame.text_content(), "Hello");
//! # Ok(())
//! # }
//! ```

pub mod animation;
pub mod components;
pub mod composition;
pub mod eval;
pub mod foundation;
pub mod node;
pub mod render;
pub mod theme;

pub use animation::{
    chapters::{Chapter, ChapterState, ChapterStatus, ChapterTimeline},
    counter::{NumberStyle, format_compact, format_number},
    ease::Ease,
    motion::{Direction, Pulse, RevealDirection},
    stagger::{Stagger, StaggerAnimation},
    timing::Timing,
    typewriter::TypewriterTiming,
};
pub use components::{
    Align, Badge, Button, Caption, Card, ChapterProgressBar, Code, Component, Container,
    ContentArea, Counter, CoverMedia, DataDisplay, Divider, DualLayerMedia, FadeIn, FullBleed,
    GlassMorphism, GlowWrapper, GradientBackground, GradientShift, Grid, Icon, Image, List,
    NoiseOverlay, ProgressBar, PulsingGlow, Quote, RadialGlow, Render, Reveal, SafeArea,
    SectionIndicator, Sequence, SlideIn, Span, SpringPop, Stack, StaggerGroup, Stat, Tag,
    TagGroup, Text, TextGlow, Title, Typewriter, Vignette,
};
pub use composition::{
    dsl::{CompositionBuilder, SceneBuilder},
    model::{Composition, Scene, ThemeSpec},
    patterns::{data_dashboard, feature_list, hero_section, outro_section, timeline},
};
pub use eval::{
    context::{FrameCtx, RenderCtx},
    evaluator::Evaluator,
};
pub use foundation::{
    core::{Canvas, Fps, FrameIndex, FrameRange, FrameSpan, Vec2},
    error::{FramecraftError, FramecraftResult},
};
pub use node::{
    fingerprint::{NodeFingerprint, fingerprint},
    model::{NodeKind, Style, StyleValue, TransformOp, VisualNode},
};
pub use render::{RenderStats, RenderThreading, render_frames};
pub use theme::{
    model::{Theme, ThemeOverrides, create_theme},
    presets::{ThemeName, get_theme, theme_or_default},
};
