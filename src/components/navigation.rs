use crate::{
    animation::chapters::{ChapterStatus, ChapterTimeline},
    components::{Render, accent_color, font_family, muted_color, text_color, themed_str},
    eval::context::RenderCtx,
    foundation::error::{FramecraftError, FramecraftResult},
    node::model::{Style, VisualNode},
    theme::tokens::{font_size, font_weight, radii},
};

const SEGMENT_HEIGHT: f64 = 80.0;
const SEGMENT_RADIUS: f64 = 40.0;

/// Segmented bar pinned to the bottom of the frame, one segment per chapter.
///
/// Segments are sized by chapter length. The active segment fills with the chapter's local
/// progress; a thin line along the bottom edge tracks the whole video. Chapters are located by
/// the absolute frame, not the scene-local one.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ChapterProgressBar {
    pub chapters: ChapterTimeline,
    /// Length of the video; the end of the last chapter when unset.
    pub total_frames: Option<u64>,
    pub height: f64,
    pub active_color: Option<String>,
    pub completed_color: Option<String>,
    pub upcoming_color: Option<String>,
    pub style: Style,
}

impl Default for ChapterProgressBar {
    fn default() -> Self {
        Self {
            chapters: ChapterTimeline::default(),
            total_frames: None,
            height: 130.0,
            active_color: None,
            completed_color: None,
            upcoming_color: None,
            style: Style::new(),
        }
    }
}

impl ChapterProgressBar {
    pub fn new(chapters: ChapterTimeline) -> Self {
        Self {
            chapters,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> FramecraftResult<()> {
        if self.total_frames == Some(0) {
            return Err(FramecraftError::validation(
                "chapter progress bar total_frames must be > 0",
            ));
        }
        Ok(())
    }

    fn total_frames(&self) -> u64 {
        self.total_frames.unwrap_or_else(|| self.chapters.end_frame())
    }
}

impl Render for ChapterProgressBar {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let frame = ctx.frame.frame;
        let total = self.total_frames();
        let overall = if total == 0 {
            0.0
        } else {
            (frame.0 as f64 / total as f64).min(1.0)
        };

        let active = self.active_color.as_deref().unwrap_or("#4f6ef7");
        let completed = self.completed_color.as_deref().unwrap_or("#f3f4f6");
        let upcoming = self.upcoming_color.as_deref().unwrap_or("#f9fafb");
        let border = themed_str(ctx, None, |t| t.colors.border.as_deref(), "#e5e7eb");
        let bg = themed_str(ctx, None, |t| Some(t.colors.bg.as_str()), "#fff");

        let mut segments = Vec::with_capacity(self.chapters.len() + 1);
        for (index, chapter) in self.chapters.chapters().iter().enumerate() {
            let status = self.chapters.status(index, frame);
            let is_active = status == ChapterStatus::Active;
            let (background, label_color) = match status {
                ChapterStatus::Active => (active, "#fff".to_owned()),
                ChapterStatus::Completed => (completed, text_color(ctx)),
                ChapterStatus::Upcoming => (upcoming, muted_color(ctx)),
            };

            let mut segment = VisualNode::container(
                Style::new()
                    .num("flex", chapter.duration_frames as f64)
                    .px("height", SEGMENT_HEIGHT)
                    .px("borderRadius", SEGMENT_RADIUS)
                    .kw("position", "relative")
                    .kw("overflow", "hidden")
                    .kw("background", background)
                    .kw(
                        "border",
                        if is_active {
                            "none".to_owned()
                        } else {
                            format!("1px solid {border}")
                        },
                    )
                    .kw("display", "flex")
                    .kw("alignItems", "center")
                    .kw("justifyContent", "center"),
            );
            if is_active {
                segment = segment.with_child(VisualNode::container(
                    Style::new()
                        .kw("position", "absolute")
                        .px("left", 0.0)
                        .px("top", 0.0)
                        .px("bottom", 0.0)
                        .pct("width", chapter.fill(frame) * 100.0)
                        .kw("background", "rgba(255,255,255,0.25)")
                        .px("borderRadius", SEGMENT_RADIUS),
                ));
            }
            let label = Style::new()
                .kw("position", "relative")
                .num("zIndex", 1.0)
                .kw("color", label_color)
                .px("fontSize", font_size::SUBTITLE)
                .num(
                    "fontWeight",
                    if is_active {
                        font_weight::BOLD
                    } else {
                        font_weight::MEDIUM
                    },
                )
                .kw("whiteSpace", "nowrap")
                .kw("overflow", "hidden")
                .kw("textOverflow", "ellipsis")
                .kw("padding", "0 20px");
            segments.push(segment.with_child(VisualNode::text(&chapter.label, label)));
        }

        let line = VisualNode::container(
            Style::new()
                .kw("position", "absolute")
                .px("bottom", 0.0)
                .px("left", 0.0)
                .px("right", 0.0)
                .px("height", 4.0)
                .kw("background", border.clone()),
        )
        .with_child(VisualNode::container(
            Style::new()
                .pct("height", 100.0)
                .pct("width", overall * 100.0)
                .kw("background", active),
        ));
        segments.push(line);

        let style = Style::new()
            .kw("position", "absolute")
            .px("bottom", 0.0)
            .px("left", 0.0)
            .px("right", 0.0)
            .px("height", self.height)
            .kw("background", bg)
            .kw("borderTop", format!("1px solid {border}"))
            .kw("display", "flex")
            .kw("alignItems", "center")
            .kw("padding", "0 50px")
            .px("gap", 16.0)
            .kw("fontFamily", font_family(ctx))
            .merge(&self.style);
        Ok(VisualNode::container(style).with_children(segments))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorVariant {
    #[default]
    Dots,
    Numbers,
    Progress,
}

/// "Section n of m" indicator.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SectionIndicator {
    pub total: usize,
    /// Zero-based index of the current section.
    pub current: usize,
    pub variant: IndicatorVariant,
    pub size: f64,
    pub gap: f64,
    pub active_color: Option<String>,
    pub inactive_color: Option<String>,
    pub style: Style,
}

impl Default for SectionIndicator {
    fn default() -> Self {
        Self {
            total: 0,
            current: 0,
            variant: IndicatorVariant::Dots,
            size: 12.0,
            gap: 12.0,
            active_color: None,
            inactive_color: None,
            style: Style::new(),
        }
    }
}

impl SectionIndicator {
    pub fn new(total: usize, current: usize, variant: IndicatorVariant) -> Self {
        Self {
            total,
            current,
            variant,
            ..Self::default()
        }
    }

    fn dots(&self, active: &str, inactive: &str) -> VisualNode {
        let dots = (0..self.total).map(|i| {
            let is_current = i == self.current;
            VisualNode::container(
                Style::new()
                    .px("width", if is_current { self.size * 2.5 } else { self.size })
                    .px("height", self.size)
                    .px("borderRadius", radii::FULL)
                    .kw("background", if is_current { active } else { inactive }),
            )
        });
        VisualNode::container(Style::new().kw("display", "flex").px("gap", self.gap))
            .with_children(dots)
    }

    fn numbers(&self, active: &str, inactive: &str) -> VisualNode {
        let current = VisualNode::text(
            format!("{:02}", self.current + 1),
            Style::new()
                .px("fontSize", self.size * 2.0)
                .num("fontWeight", font_weight::BOLD)
                .kw("color", active),
        );
        let total = VisualNode::text(
            format!("/ {:02}", self.total),
            Style::new()
                .px("fontSize", self.size * 1.5)
                .kw("color", inactive),
        );
        VisualNode::container(
            Style::new()
                .kw("display", "flex")
                .kw("alignItems", "center")
                .px("gap", self.gap),
        )
        .with_children([current, total])
    }

    fn progress(&self, active: &str, inactive: &str) -> VisualNode {
        let progress = if self.total == 0 {
            0.0
        } else {
            ((self.current + 1) as f64 / self.total as f64).min(1.0) * 100.0
        };
        VisualNode::container(
            Style::new()
                .px("width", 200.0)
                .px("height", self.size)
                .kw("background", inactive)
                .px("borderRadius", radii::FULL)
                .kw("overflow", "hidden"),
        )
        .with_child(VisualNode::container(
            Style::new()
                .pct("width", progress)
                .pct("height", 100.0)
                .kw("background", active)
                .px("borderRadius", radii::FULL),
        ))
    }
}

impl Render for SectionIndicator {
    fn render(&self, ctx: &RenderCtx<'_>) -> FramecraftResult<VisualNode> {
        let active = accent_color(ctx, self.active_color.as_deref());
        let inactive = self.inactive_color.as_deref().unwrap_or("rgba(0,0,0,0.2)");
        let body = match self.variant {
            IndicatorVariant::Dots => self.dots(&active, inactive),
            IndicatorVariant::Numbers => self.numbers(&active, inactive),
            IndicatorVariant::Progress => self.progress(&active, inactive),
        };
        Ok(VisualNode::container(self.style.clone()).with_child(body))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/navigation.rs"]
mod tests;
