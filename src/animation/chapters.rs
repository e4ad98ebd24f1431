use crate::{
    foundation::core::{FrameIndex, FrameSpan},
    foundation::error::{FramecraftError, FramecraftResult},
};

/// One named `(start, duration)` range of the video timeline.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Chapter {
    /// Stable identifier.
    pub name: String,
    /// Text shown in navigation components.
    pub label: String,
    /// First frame of the chapter.
    pub start_frame: u64,
    /// Chapter length in frames. Must be > 0.
    pub duration_frames: u64,
}

impl Chapter {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        start_frame: u64,
        duration_frames: u64,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            start_frame,
            duration_frames,
        }
    }

    pub fn span(&self) -> FrameSpan {
        FrameSpan {
            start: self.start_frame,
            duration: self.duration_frames,
        }
    }

    /// Exclusive end frame.
    pub fn end_frame(&self) -> u64 {
        self.span().end()
    }

    /// 0 before the chapter, local progress inside it, 1 at or after its end.
    pub fn fill(&self, frame: FrameIndex) -> f64 {
        if frame.0 < self.start_frame {
            return 0.0;
        }
        if frame.0 >= self.end_frame() {
            return 1.0;
        }
        (frame.0 - self.start_frame) as f64 / self.duration_frames as f64
    }
}

/// Where a frame falls relative to a [`ChapterTimeline`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChapterPosition {
    /// Before the first chapter (or the timeline is empty).
    Before,
    /// Inside chapter `index` with local progress in `[0, 1)`.
    Active { index: usize, progress: f64 },
    /// Between two chapters; `previous` has completed and the next has not started.
    Gap { previous: usize },
    /// At or after the end of the last chapter.
    After { last: usize },
}

/// Display state of one chapter at a given frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChapterStatus {
    Completed,
    Active,
    Upcoming,
}

/// Summary of the active chapter at a frame.
///
/// `current` is `None` before the first chapter, in gaps and after the last one; `progress` is 0
/// and both flags are `false` in that case.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChapterState {
    pub current: Option<usize>,
    pub progress: f64,
    pub is_first: bool,
    pub is_last: bool,
}

/// Sorted, non-overlapping chapter ranges.
///
/// Ranges need not cover the whole timeline. Frames in a gap have no active chapter; completed
/// chapters hold a fill of 1 and upcoming ones 0 until the next chapter starts.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Chapter>", into = "Vec<Chapter>")]
pub struct ChapterTimeline {
    chapters: Vec<Chapter>,
}

impl ChapterTimeline {
    /// Validate and wrap `chapters`.
    pub fn new(chapters: Vec<Chapter>) -> FramecraftResult<Self> {
        for (i, ch) in chapters.iter().enumerate() {
            ch.span().validate().map_err(|e| {
                FramecraftError::validation(format!("chapter {i} ('{}'): {e}", ch.name))
            })?;
            if let Some(prev) = i.checked_sub(1).map(|p| &chapters[p])
                && ch.start_frame < prev.end_frame()
            {
                return Err(FramecraftError::validation(format!(
                    "chapter {i} ('{}') starts at {} before '{}' ends at {}",
                    ch.name,
                    ch.start_frame,
                    prev.name,
                    prev.end_frame()
                )));
            }
        }
        Ok(Self { chapters })
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// End frame of the last chapter, or 0 for an empty timeline.
    pub fn end_frame(&self) -> u64 {
        self.chapters.last().map_or(0, Chapter::end_frame)
    }

    /// Locate `frame` by linear scan.
    pub fn locate(&self, frame: FrameIndex) -> ChapterPosition {
        let mut previous = None;
        for (index, ch) in self.chapters.iter().enumerate() {
            if frame.0 < ch.start_frame {
                break;
            }
            if ch.span().contains(frame.0) {
                return ChapterPosition::Active {
                    index,
                    progress: ch.fill(frame),
                };
            }
            previous = Some(index);
        }

        match previous {
            None => ChapterPosition::Before,
            Some(last) if last + 1 == self.chapters.len() => ChapterPosition::After { last },
            Some(previous) => ChapterPosition::Gap { previous },
        }
    }

    pub fn state(&self, frame: FrameIndex) -> ChapterState {
        match self.locate(frame) {
            ChapterPosition::Active { index, progress } => ChapterState {
                current: Some(index),
                progress,
                is_first: index == 0,
                is_last: index + 1 == self.chapters.len(),
            },
            _ => ChapterState {
                current: None,
                progress: 0.0,
                is_first: false,
                is_last: false,
            },
        }
    }

    /// Fill of chapter `index` at `frame`; 0 for an unknown index.
    pub fn chapter_fill(&self, index: usize, frame: FrameIndex) -> f64 {
        self.chapters.get(index).map_or(0.0, |ch| ch.fill(frame))
    }

    /// Status of chapter `index` at `frame`.
    pub fn status(&self, index: usize, frame: FrameIndex) -> ChapterStatus {
        match self.chapters.get(index) {
            Some(ch) if ch.span().contains(frame.0) => ChapterStatus::Active,
            Some(ch) if frame.0 >= ch.end_frame() => ChapterStatus::Completed,
            _ => ChapterStatus::Upcoming,
        }
    }
}

impl TryFrom<Vec<Chapter>> for ChapterTimeline {
    type Error = FramecraftError;

    fn try_from(chapters: Vec<Chapter>) -> Result<Self, Self::Error> {
        Self::new(chapters)
    }
}

impl From<ChapterTimeline> for Vec<Chapter> {
    fn from(timeline: ChapterTimeline) -> Self {
        timeline.chapters
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/chapters.rs"]
mod tests;
