use crate::config::Tuning;
use crate::core::host::{FrameView, LaneGeometry, PresentationSink, Scheduler};
use crate::core::input::lane_for_key;
use crate::game::judgment;
use crate::game::note::{HitEffect, Note};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The whole session in one place, owned by the embedder. All operations
/// are free functions over `&mut State`; none of them block or read a
/// clock. Time only enters through the scheduler's callbacks.
pub struct State {
    pub score: f64,
    pub combo: u32,
    pub max_combo: u32,
    pub playing: bool,
    pub notes: Vec<Note>,
    pub effects: Vec<HitEffect>,
    pub last_note_time_ms: f64,
    pub note_interval_ms: f64,
    pub key_down: Vec<bool>,
    pub geometry: LaneGeometry,
    pub tuning: Tuning,
    rng: StdRng,
}

/// Builds an idle session with an OS-seeded generator.
pub fn init(tuning: Tuning) -> State {
    init_with_rng(tuning, StdRng::from_os_rng())
}

/// Builds an idle session with a deterministic generator. Two sessions
/// given the same seed and the same tick sequence spawn identical notes.
pub fn init_seeded(tuning: Tuning, seed: u64) -> State {
    init_with_rng(tuning, StdRng::seed_from_u64(seed))
}

fn init_with_rng(tuning: Tuning, rng: StdRng) -> State {
    debug_assert_eq!(tuning.key_bindings.len(), tuning.lanes);
    info!(
        "Initializing session: {} lanes, hit line at y={}",
        tuning.lanes,
        tuning.hit_line_y()
    );

    let geometry = LaneGeometry::from_tuning(&tuning);
    State {
        score: 0.0,
        combo: 0,
        max_combo: 0,
        playing: false,
        notes: Vec::new(),
        effects: Vec::new(),
        last_note_time_ms: 0.0,
        note_interval_ms: tuning.initial_note_interval_ms,
        key_down: vec![false; tuning.lanes],
        geometry,
        tuning,
        rng,
    }
}

/// Starts (or restarts) a run: score, combo, notes and effects reset while
/// `max_combo`, the key map and the generator bookkeeping carry over. The
/// two callback loops are requested only if the session was idle, so a
/// redundant `start` cannot double-pump them.
pub fn start(state: &mut State, scheduler: &mut impl Scheduler) {
    let was_playing = state.playing;
    state.playing = true;
    state.score = 0.0;
    state.combo = 0;
    state.notes.clear();
    state.effects.clear();

    info!("Session started");

    if !was_playing {
        scheduler.request_frame();
        scheduler.request_generator(0.0);
    }
}

/// Flags the session idle. Nothing is torn down here; both loops observe
/// the flag on their next tick and stop re-requesting themselves.
/// Idempotent.
pub fn stop(state: &mut State) {
    if state.playing {
        info!(
            "Session stopped: score {:.0}, max combo {}",
            state.score, state.max_combo
        );
    }
    state.playing = false;
}

/// A key went down. Ignored while idle, for unbound keys, and for repeats
/// while the lane is already held; otherwise the lane is marked held and
/// judged.
pub fn handle_key_down(state: &mut State, key: char, sink: &mut impl PresentationSink) {
    if !state.playing {
        return;
    }
    let Some(lane) = lane_for_key(key, &state.tuning.key_bindings) else {
        return;
    };
    if state.key_down[lane] {
        return;
    }
    state.key_down[lane] = true;
    check_hit(state, lane, sink);
}

/// A key came up. Not gated on `playing`: a release while idle still
/// clears the lane, so the next run cannot start with a stuck key.
pub fn handle_key_up(state: &mut State, key: char) {
    if let Some(lane) = lane_for_key(key, &state.tuning.key_bindings) {
        state.key_down[lane] = false;
    }
}

/// One generator callback. Spawns at most one note per tick, once the
/// current interval has elapsed, then redraws the interval. Re-requests
/// itself every tick while the session runs.
pub fn generator_tick(state: &mut State, scheduler: &mut impl Scheduler, now_ms: f64) {
    if !state.playing {
        return;
    }

    if now_ms - state.last_note_time_ms > state.note_interval_ms {
        let lane = state.rng.random_range(0..state.tuning.lanes);
        state.notes.push(Note {
            lane,
            y: -state.tuning.spawn_margin,
            hit: false,
        });
        state.last_note_time_ms = now_ms;
        state.note_interval_ms = state
            .rng
            .random_range(state.tuning.note_interval_min_ms..state.tuning.note_interval_max_ms);
        debug!(
            "Spawned note: Lane {}, next interval {:.0}ms",
            lane, state.note_interval_ms
        );
    }

    scheduler.request_generator(state.tuning.generator_period_ms);
}

/// One animation-frame callback: advance notes (catching passive misses),
/// age hit effects, hand the frame to the sink, request the next one.
pub fn frame_tick(
    state: &mut State,
    scheduler: &mut impl Scheduler,
    sink: &mut impl PresentationSink,
) {
    if !state.playing {
        return;
    }

    advance_notes(state, sink);
    age_effects(state);

    sink.on_frame(&frame_view(state));
    scheduler.request_frame();
}

/// Drawable state for the current frame. `notes` still contains caught
/// notes riding off screen; renderers usually skip the `hit` ones.
pub fn frame_view(state: &State) -> FrameView<'_> {
    FrameView {
        notes: &state.notes,
        effects: &state.effects,
        key_down: &state.key_down,
        geometry: state.geometry,
    }
}

fn check_hit(state: &mut State, lane: usize, sink: &mut impl PresentationSink) {
    let hit_line_y = state.geometry.hit_line_y;

    // Closest unhit note in the lane; ties keep the oldest.
    let mut best_index = None;
    let mut best_distance = f32::INFINITY;
    for (index, note) in state.notes.iter().enumerate() {
        if note.lane != lane || note.hit {
            continue;
        }
        let distance = (note.y - hit_line_y).abs();
        if distance < best_distance {
            best_distance = distance;
            best_index = Some(index);
        }
    }

    let caught = best_index
        .and_then(|index| judgment::classify(best_distance, &state.tuning).map(|j| (index, j)));

    let Some((index, verdict)) = caught else {
        state.combo = 0;
        info!("MISSED: Lane {}, nothing in the catch window", lane);
        sink.on_miss();
        sink.on_score_changed(state.score, state.combo);
        return;
    };

    state.notes[index].hit = true;
    state.combo += 1;

    let base_points = judgment::base_points_for(verdict);
    let multiplier = judgment::combo_multiplier(state.combo, &state.tuning);
    state.score += base_points as f64 * multiplier;
    state.max_combo = state.max_combo.max(state.combo);

    state.effects.push(HitEffect {
        x: state.geometry.lane_center_x(lane),
        y: hit_line_y,
        text: judgment::label_for(verdict),
        color: judgment::color_for(verdict),
        alpha: 1.0,
        scale: 1.0,
    });

    info!(
        "JUDGED: Lane {}, Distance: {:.2}px, Grade: {:?}, Combo: {}",
        lane, best_distance, verdict, state.combo
    );

    sink.on_judgment(verdict, base_points);
    sink.on_score_changed(state.score, state.combo);
}

fn advance_notes(state: &mut State, sink: &mut impl PresentationSink) {
    let despawn_y = state.tuning.despawn_y();
    let note_speed = state.tuning.note_speed;

    // Count the misses during the retain pass, notify after it; the sink
    // must not run while the notes vec is mid-compaction.
    let mut fell_unhit = 0usize;
    state.notes.retain_mut(|note| {
        note.y += note_speed;
        if note.y > despawn_y {
            if !note.hit {
                fell_unhit += 1;
            }
            return false;
        }
        true
    });

    for _ in 0..fell_unhit {
        state.combo = 0;
        info!("MISSED: note fell past the bottom unhit");
        sink.on_miss();
        sink.on_score_changed(state.score, state.combo);
    }
}

fn age_effects(state: &mut State) {
    let fade = state.tuning.effect_fade_step;
    let grow = state.tuning.effect_grow_step;
    let rise = state.tuning.effect_rise_step;

    state.effects.retain_mut(|effect| {
        effect.alpha -= fade;
        effect.scale += grow;
        effect.y -= rise;
        effect.alpha > 0.0
    });
}
