use crate::config::Tuning;
use crate::game::judgment::Judgment;
use crate::game::note::{HitEffect, Note};

/// The session's tick source. The session never owns threads or timers;
/// it asks the embedder for its next frame and generator callbacks and the
/// embedder delivers them by calling `frame_tick` / `generator_tick`.
///
/// A loop ends itself by not re-requesting: once `playing` goes false,
/// tick functions return without touching the scheduler.
pub trait Scheduler {
    /// Schedule one `frame_tick` call for the next animation frame.
    fn request_frame(&mut self);

    /// Schedule one `generator_tick` call `delay_ms` from now.
    fn request_generator(&mut self, delay_ms: f64);
}

/// Observer for everything the session wants shown or sounded. Every
/// method defaults to a no-op so a sink implements only what it uses.
pub trait PresentationSink {
    /// One frame of drawable state, after notes and effects have moved.
    fn on_frame(&mut self, _frame: &FrameView<'_>) {}

    /// A note was caught. `points` is the tier's base award, before the
    /// combo multiplier is applied to the score.
    fn on_judgment(&mut self, _judgment: Judgment, _points: u32) {}

    /// A whiffed press or a note that fell past the bottom unhit.
    fn on_miss(&mut self) {}

    /// Score or combo moved. `score` is the raw fractional accumulator;
    /// flooring for display is the sink's concern.
    fn on_score_changed(&mut self, _score: f64, _combo: u32) {}
}

/// Fixed playfield layout, derived once from the tuning.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LaneGeometry {
    pub lanes: usize,
    pub lane_width: f32,
    pub hit_line_y: f32,
    pub canvas_width: f32,
    pub canvas_height: f32,
}

impl LaneGeometry {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            lanes: tuning.lanes,
            lane_width: tuning.lane_width(),
            hit_line_y: tuning.hit_line_y(),
            canvas_width: tuning.canvas_width,
            canvas_height: tuning.canvas_height,
        }
    }

    #[inline(always)]
    pub fn lane_center_x(&self, lane: usize) -> f32 {
        lane as f32 * self.lane_width + self.lane_width / 2.0
    }
}

/// Everything a renderer needs for one frame, borrowed from the session.
pub struct FrameView<'a> {
    pub notes: &'a [Note],
    pub effects: &'a [HitEffect],
    pub key_down: &'a [bool],
    pub geometry: LaneGeometry,
}
