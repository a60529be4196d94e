//! Four-lane falling-note rhythm game core.
//!
//! Owns the whole session state machine: pseudo-random note generation,
//! hit-line judgment, combo-multiplied scoring and hit-effect feedback.
//! Everything host-facing is a seam: a [`Scheduler`] delivers the frame
//! and generator callbacks, a [`PresentationSink`] receives what to draw
//! and sound. The core holds no threads, timers or rendering of its own,
//! so the same session runs under a real-time loop or a synchronous test
//! driver unchanged.
//!
//! # Quick start
//! ```
//! use notefall::{session, PresentationSink, Scheduler, Tuning};
//!
//! struct Host;
//! impl Scheduler for Host {
//!     fn request_frame(&mut self) {}
//!     fn request_generator(&mut self, _delay_ms: f64) {}
//! }
//!
//! struct Silent;
//! impl PresentationSink for Silent {}
//!
//! let mut state = session::init_seeded(Tuning::default(), 7);
//! session::start(&mut state, &mut Host);
//! session::generator_tick(&mut state, &mut Host, 600.0);
//! session::frame_tick(&mut state, &mut Host, &mut Silent);
//! assert_eq!(state.notes.len(), 1);
//! ```

pub mod config; // Gameplay constants and the Tuning knob bundle
pub mod core; // Host seams: scheduling, presentation, input mapping
pub mod game; // Notes, judgment and the session state machine

pub use crate::config::Tuning;
pub use crate::core::host::{FrameView, LaneGeometry, PresentationSink, Scheduler};
pub use crate::core::input::lane_for_key;
pub use crate::game::judgment::Judgment;
pub use crate::game::note::{HitEffect, Note};
pub use crate::game::session::{self, State};
