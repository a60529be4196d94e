/// A falling note. `hit` is set once by judgment and never cleared; the
/// note then rides off screen and is culled without further evaluation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Note {
    pub lane: usize,
    pub y: f32,
    pub hit: bool,
}

/// Judgment text floating up from the hit line. Steps a fixed amount of
/// fade, growth and rise per frame; dead once `alpha` reaches zero.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitEffect {
    pub x: f32,
    pub y: f32,
    pub text: &'static str,
    pub color: [f32; 4],
    pub alpha: f32,
    pub scale: f32,
}
