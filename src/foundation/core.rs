use std::cmp::Ordering;
use std::ops::Add;

use crate::foundation::error::{SceneError, SceneResult};

pub use glam::{DMat4, DVec3};
pub use kurbo::{Affine, Point, Vec2};

/// The time base that frame numbers are measured against.
///
/// Two frames are only comparable through subtraction when they share a timeline.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    frame_count: f64,
    duration_secs: f64,
}

impl Timeline {
    /// Create a validated timeline with a positive frame count and duration.
    pub fn new(frame_count: f64, duration_secs: f64) -> SceneResult<Self> {
        if !(frame_count.is_finite() && frame_count > 0.0) {
            return Err(SceneError::validation("Timeline frame_count must be > 0"));
        }
        if !(duration_secs.is_finite() && duration_secs > 0.0) {
            return Err(SceneError::validation("Timeline duration_secs must be > 0"));
        }
        Ok(Self {
            frame_count,
            duration_secs,
        })
    }

    /// Total number of frames.
    pub fn frame_count(self) -> f64 {
        self.frame_count
    }

    /// Total duration in seconds.
    pub fn duration_secs(self) -> f64 {
        self.duration_secs
    }

    /// A frame location on this timeline.
    pub fn frame(self, number: f64) -> Frame {
        Frame {
            timeline: self,
            number,
        }
    }

    /// A span of `frames` frames on this timeline.
    pub fn span(self, frames: f64) -> FrameSpan {
        FrameSpan {
            timeline: self,
            frames,
        }
    }
}

/// A frame location on a [`Timeline`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    timeline: Timeline,
    number: f64,
}

impl Frame {
    /// The frame number.
    pub fn number(self) -> f64 {
        self.number
    }

    /// The timeline this frame is measured against.
    pub fn timeline(self) -> Timeline {
        self.timeline
    }

    /// The location as a proportion of the timeline.
    pub fn progress(self) -> f64 {
        self.number / self.timeline.frame_count
    }

    /// The location as seconds from the start of the timeline.
    pub fn time_secs(self) -> f64 {
        self.progress() * self.timeline.duration_secs
    }

    /// The span from `earlier` to `self`.
    ///
    /// Fails with [`SceneError::InvalidArgument`] when the frames belong to different
    /// timelines, since the difference would be meaningless.
    pub fn checked_sub(self, earlier: Frame) -> SceneResult<FrameSpan> {
        if self.timeline != earlier.timeline {
            return Err(SceneError::invalid_argument(
                "cannot subtract frames from different timelines",
            ));
        }
        Ok(FrameSpan {
            timeline: self.timeline,
            frames: self.number - earlier.number,
        })
    }
}

impl Add<FrameSpan> for Frame {
    type Output = Frame;

    fn add(self, span: FrameSpan) -> Frame {
        Frame {
            timeline: self.timeline,
            number: self.number + span.frames,
        }
    }
}

impl PartialOrd for Frame {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.timeline != other.timeline {
            return None;
        }
        self.number.partial_cmp(&other.number)
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}s", self.number, self.progress(), self.time_secs())
    }
}

/// A signed number of frames on a [`Timeline`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameSpan {
    timeline: Timeline,
    frames: f64,
}

impl FrameSpan {
    /// Number of frames in the span (negative when it runs backwards).
    pub fn frames(self) -> f64 {
        self.frames
    }

    /// Length of the span in seconds.
    pub fn time_secs(self) -> f64 {
        self.frames / self.timeline.frame_count * self.timeline.duration_secs
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
