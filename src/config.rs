// Playfield
pub const LANES: usize = 4;
pub const CANVAS_WIDTH: f32 = 400.0;
pub const CANVAS_HEIGHT: f32 = 600.0;
pub const HIT_LINE_FROM_BOTTOM: f32 = 100.0;
pub const NOTE_SPEED: f32 = 3.0; // Pixels per frame, not delta-scaled
pub const NOTE_SPAWN_MARGIN: f32 = 20.0; // Notes enter this far above the top edge
pub const NOTE_DESPAWN_MARGIN: f32 = 20.0; // And leave this far below the bottom edge

// Judgment Windows (pixels from the hit line)
pub const PERFECT_WINDOW: f32 = 15.0;
pub const GREAT_WINDOW: f32 = 30.0;
pub const CATCH_WINDOW: f32 = 50.0; // Presses farther out than this are whiffs

// Scoring
pub const COMBO_MILESTONE: u32 = 10;
pub const COMBO_MILESTONE_BONUS: f64 = 0.1; // Extra score multiplier per full milestone

// Note Generator
pub const NOTE_INTERVAL_INITIAL_MS: f64 = 500.0;
pub const NOTE_INTERVAL_MIN_MS: f64 = 300.0;
pub const NOTE_INTERVAL_MAX_MS: f64 = 1000.0;
pub const GENERATOR_PERIOD_MS: f64 = 50.0;

// Hit Effect Animation (per frame)
pub const EFFECT_FADE_STEP: f32 = 0.02;
pub const EFFECT_GROW_STEP: f32 = 0.02;
pub const EFFECT_RISE_STEP: f32 = 1.0;

// Key Bindings (index = lane)
pub const KEY_BINDINGS: [char; LANES] = ['d', 'f', 'j', 'k'];

/// Every gameplay knob in one place so embedders and tests can vary them.
/// `Default` reproduces the constants above.
#[derive(Debug, Clone)]
pub struct Tuning {
    pub lanes: usize,
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub hit_line_from_bottom: f32,
    pub note_speed: f32,
    pub spawn_margin: f32,
    pub despawn_margin: f32,
    pub perfect_window: f32,
    pub great_window: f32,
    pub catch_window: f32,
    pub combo_milestone: u32,
    pub combo_milestone_bonus: f64,
    pub initial_note_interval_ms: f64,
    pub note_interval_min_ms: f64,
    pub note_interval_max_ms: f64,
    pub generator_period_ms: f64,
    pub effect_fade_step: f32,
    pub effect_grow_step: f32,
    pub effect_rise_step: f32,
    // One identifier per lane; compared case-insensitively.
    pub key_bindings: Vec<char>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            lanes: LANES,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            hit_line_from_bottom: HIT_LINE_FROM_BOTTOM,
            note_speed: NOTE_SPEED,
            spawn_margin: NOTE_SPAWN_MARGIN,
            despawn_margin: NOTE_DESPAWN_MARGIN,
            perfect_window: PERFECT_WINDOW,
            great_window: GREAT_WINDOW,
            catch_window: CATCH_WINDOW,
            combo_milestone: COMBO_MILESTONE,
            combo_milestone_bonus: COMBO_MILESTONE_BONUS,
            initial_note_interval_ms: NOTE_INTERVAL_INITIAL_MS,
            note_interval_min_ms: NOTE_INTERVAL_MIN_MS,
            note_interval_max_ms: NOTE_INTERVAL_MAX_MS,
            generator_period_ms: GENERATOR_PERIOD_MS,
            effect_fade_step: EFFECT_FADE_STEP,
            effect_grow_step: EFFECT_GROW_STEP,
            effect_rise_step: EFFECT_RISE_STEP,
            key_bindings: KEY_BINDINGS.to_vec(),
        }
    }
}

impl Tuning {
    #[inline(always)]
    pub fn hit_line_y(&self) -> f32 {
        self.canvas_height - self.hit_line_from_bottom
    }

    #[inline(always)]
    pub fn lane_width(&self) -> f32 {
        self.canvas_width / self.lanes as f32
    }

    /// Notes below this are off screen and get culled.
    #[inline(always)]
    pub fn despawn_y(&self) -> f32 {
        self.canvas_height + self.despawn_margin
    }
}
