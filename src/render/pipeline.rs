use std::collections::HashSet;

use rayon::prelude::*;

use crate::{
    composition::model::Composition,
    eval::evaluator::eval_frame_with_theme,
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{FramecraftError, FramecraftResult},
    node::{fingerprint::fingerprint, model::VisualNode},
    theme::model::Theme,
};

/// How [`render_frames`] spreads work over threads.
#[derive(Clone, Debug)]
pub struct RenderThreading {
    pub parallel: bool,
    /// Frames evaluated per batch; `0` is treated as `1`.
    pub chunk_size: usize,
    /// Worker count; rayon's default when unset.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub frames_total: u64,
    /// Frames whose tree differs from every other frame in the range.
    pub frames_distinct: u64,
}

/// Evaluate every frame of `range` (start inclusive, end exclusive).
///
/// Frames are independent, so the parallel path returns exactly the trees the sequential path
/// does, in frame order.
#[tracing::instrument(skip(comp, threading))]
pub fn render_frames(
    comp: &Composition,
    range: FrameRange,
    threading: &RenderThreading,
) -> FramecraftResult<(Vec<VisualNode>, RenderStats)> {
    if range.is_empty() {
        return Err(FramecraftError::validation("render range must be non-empty"));
    }
    if range.end.0 > comp.duration {
        return Err(FramecraftError::validation(
            "render range must be within composition duration",
        ));
    }
    comp.validate()?;
    let theme = comp.resolved_theme();

    let len = range.len_frames();
    let mut out = Vec::with_capacity(len.min(4096) as usize);
    let chunk_size = normalized_chunk_size(threading.chunk_size);
    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };

    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = (chunk_start + chunk_size).min(range.end.0);
        let chunk = FrameRange::new(FrameIndex(chunk_start), FrameIndex(chunk_end))
            .map_err(|e| FramecraftError::evaluation(format!("invalid chunk range: {e}")))?;
        let mut frames = match &pool {
            Some(pool) => eval_chunk_parallel(comp, theme.as_ref(), chunk, pool)?,
            None => eval_chunk_sequential(comp, theme.as_ref(), chunk)?,
        };
        out.append(&mut frames);
        chunk_start = chunk_end;
    }

    let distinct: HashSet<_> = out.iter().map(fingerprint).collect();
    let stats = RenderStats {
        frames_total: len,
        frames_distinct: distinct.len() as u64,
    };
    tracing::debug!(
        frames_total = stats.frames_total,
        frames_distinct = stats.frames_distinct,
        parallel = threading.parallel,
        "frames rendered"
    );
    Ok((out, stats))
}

fn eval_chunk_sequential(
    comp: &Composition,
    theme: Option<&Theme>,
    range: FrameRange,
) -> FramecraftResult<Vec<VisualNode>> {
    (range.start.0..range.end.0)
        .map(|f| eval_frame_with_theme(comp, theme, FrameIndex(f)))
        .collect()
}

fn eval_chunk_parallel(
    comp: &Composition,
    theme: Option<&Theme>,
    range: FrameRange,
    pool: &rayon::ThreadPool,
) -> FramecraftResult<Vec<VisualNode>> {
    pool.install(|| {
        (range.start.0..range.end.0)
            .into_par_iter()
            .map(|f| eval_frame_with_theme(comp, theme, FrameIndex(f)))
            .collect()
    })
}

fn build_thread_pool(threads: Option<usize>) -> FramecraftResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(FramecraftError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        FramecraftError::evaluation(format!("failed to build rayon thread pool: {e}"))
    })
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
