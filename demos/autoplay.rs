use log::{info, LevelFilter};
use notefall::game::judgment::label_for;
use notefall::{session, FrameView, Judgment, PresentationSink, Scheduler, State, Tuning};
use std::thread;
use std::time::{Duration, Instant};

const RUN_SECONDS: u64 = 15;
const FRAME_MS: u64 = 16;
const AUTOPLAY_WINDOW: f32 = 10.0; // Press when an unhit note is this close

/// Single-threaded stand-in for a host event loop: frame requests become a
/// flag drained once per iteration, generator requests become a deadline.
struct LoopScheduler {
    frame_due: bool,
    generator_at: Option<Instant>,
}

impl Scheduler for LoopScheduler {
    fn request_frame(&mut self) {
        self.frame_due = true;
    }

    fn request_generator(&mut self, delay_ms: f64) {
        self.generator_at = Some(Instant::now() + Duration::from_secs_f64(delay_ms / 1000.0));
    }
}

#[derive(Default)]
struct ConsoleSink {
    frames: u64,
}

impl PresentationSink for ConsoleSink {
    fn on_frame(&mut self, frame: &FrameView<'_>) {
        self.frames += 1;
        if self.frames % 60 == 0 {
            let falling = frame.notes.iter().filter(|n| !n.hit).count();
            info!(
                "{} notes falling, {} effects alive",
                falling,
                frame.effects.len()
            );
        }
    }

    fn on_judgment(&mut self, judgment: Judgment, points: u32) {
        info!("{} (+{})", label_for(judgment), points);
    }

    fn on_miss(&mut self) {
        info!("MISS");
    }
}

/// Presses a lane's key while an unhit note sits near the hit line and
/// releases it once the lane is clear again.
fn autoplay_keys(state: &mut State, bindings: &[char], sink: &mut ConsoleSink) {
    let hit_line_y = state.geometry.hit_line_y;
    for (lane, key) in bindings.iter().copied().enumerate() {
        let due = state
            .notes
            .iter()
            .any(|n| n.lane == lane && !n.hit && (n.y - hit_line_y).abs() < AUTOPLAY_WINDOW);
        if due && !state.key_down[lane] {
            session::handle_key_down(state, key, sink);
        } else if !due && state.key_down[lane] {
            session::handle_key_up(state, key);
        }
    }
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Info)
        .init();

    info!("Autoplay demo starting ({}s run)...", RUN_SECONDS);

    let mut state = session::init(Tuning::default());
    let mut scheduler = LoopScheduler {
        frame_due: false,
        generator_at: None,
    };
    let mut sink = ConsoleSink::default();
    let bindings = state.tuning.key_bindings.clone();

    let started = Instant::now();
    session::start(&mut state, &mut scheduler);

    while started.elapsed() < Duration::from_secs(RUN_SECONDS) {
        if let Some(due) = scheduler.generator_at {
            if Instant::now() >= due {
                scheduler.generator_at = None;
                let now_ms = started.elapsed().as_secs_f64() * 1000.0;
                session::generator_tick(&mut state, &mut scheduler, now_ms);
            }
        }

        if scheduler.frame_due {
            scheduler.frame_due = false;
            autoplay_keys(&mut state, &bindings, &mut sink);
            session::frame_tick(&mut state, &mut scheduler, &mut sink);
        }

        thread::sleep(Duration::from_millis(FRAME_MS));
    }

    session::stop(&mut state);
    info!(
        "Run over: score {:.0}, max combo {}, {} notes left on screen",
        state.score.floor(),
        state.max_combo,
        state.notes.len()
    );
}
