use crate::{
    components::{Render, themed_str},
    composition::model::Composition,
    eval::context::{FrameCtx, RenderCtx},
    foundation::core::FrameIndex,
    foundation::error::{FramecraftError, FramecraftResult},
    node::model::{Style, VisualNode},
    theme::{model::Theme, tokens},
};

pub struct Evaluator;

impl Evaluator {
    /// Render the node tree of one absolute `frame`.
    ///
    /// Scenes covering the frame are rendered in declaration order as children of a root
    /// canvas-sized container.
    #[tracing::instrument(skip(comp))]
    pub fn eval_frame(comp: &Composition, frame: FrameIndex) -> FramecraftResult<VisualNode> {
        comp.validate()?;
        let theme = comp.resolved_theme();
        eval_frame_with_theme(comp, theme.as_ref(), frame)
    }
}

/// Evaluate an already validated composition with a pre-resolved theme.
pub(crate) fn eval_frame_with_theme(
    comp: &Composition,
    theme: Option<&Theme>,
    frame: FrameIndex,
) -> FramecraftResult<VisualNode> {
    if frame.0 >= comp.duration {
        return Err(FramecraftError::evaluation("frame is out of bounds"));
    }

    let root_ctx = RenderCtx::new(
        FrameCtx::new(frame, comp.fps, comp.duration, comp.canvas),
        theme,
    );
    let background = themed_str(
        &root_ctx,
        comp.background.as_deref(),
        |t| Some(t.colors.bg.as_str()),
        tokens::DEFAULT.bg,
    );
    let mut root = VisualNode::container(
        Style::new()
            .kw("position", "absolute")
            .px("width", f64::from(comp.canvas.width))
            .px("height", f64::from(comp.canvas.height))
            .kw("overflow", "hidden")
            .kw("background", background),
    );

    for scene in comp.scenes.iter().filter(|s| s.span.contains(frame.0)) {
        let ctx = root_ctx.with_frame(FrameCtx {
            local_frame: FrameIndex(frame.0 - scene.span.start),
            duration: scene.span.duration,
            ..root_ctx.frame
        });
        let node = scene.content.render(&ctx).map_err(|e| match e {
            FramecraftError::Evaluation(msg) => {
                FramecraftError::evaluation(format!("scene '{}': {msg}", scene.id))
            }
            other => other,
        })?;
        root = root.with_child(node);
    }

    tracing::trace!(frame = frame.0, children = root.children.len(), "frame evaluated");
    Ok(root)
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
