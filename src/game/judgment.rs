use crate::config::Tuning;

pub const PERFECT_COLOR: [f32; 4] = [255.0 / 255.0, 215.0 / 255.0, 0.0 / 255.0, 1.0]; // #FFD700
pub const GREAT_COLOR: [f32; 4] = [0.0 / 255.0, 255.0 / 255.0, 0.0 / 255.0, 1.0]; // #00FF00
pub const GOOD_COLOR: [f32; 4] = [0.0 / 255.0, 191.0 / 255.0, 255.0 / 255.0, 1.0]; // #00BFFF

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Judgment {
    Perfect,
    Great,
    Good,
}

pub fn base_points_for(judgment: Judgment) -> u32 {
    match judgment {
        Judgment::Perfect => 300,
        Judgment::Great => 200,
        Judgment::Good => 100,
    }
}

pub fn label_for(judgment: Judgment) -> &'static str {
    match judgment {
        Judgment::Perfect => "PERFECT!",
        Judgment::Great => "GREAT!",
        Judgment::Good => "GOOD",
    }
}

pub fn color_for(judgment: Judgment) -> [f32; 4] {
    match judgment {
        Judgment::Perfect => PERFECT_COLOR,
        Judgment::Great => GREAT_COLOR,
        Judgment::Good => GOOD_COLOR,
    }
}

/// Grades a press by its distance from the hit line. All comparisons are
/// strict: a distance exactly on a window edge falls into the next tier,
/// and exactly on the catch window is no catch at all.
pub fn classify(distance: f32, tuning: &Tuning) -> Option<Judgment> {
    if distance >= tuning.catch_window {
        return None;
    }
    if distance < tuning.perfect_window {
        Some(Judgment::Perfect)
    } else if distance < tuning.great_window {
        Some(Judgment::Great)
    } else {
        Some(Judgment::Good)
    }
}

/// Score multiplier for the combo value a hit just reached. Integer
/// division floors, so the bonus steps up once per full milestone.
pub fn combo_multiplier(combo: u32, tuning: &Tuning) -> f64 {
    1.0 + (combo / tuning.combo_milestone) as f64 * tuning.combo_milestone_bonus
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_edges_fall_outward() {
        let tuning = Tuning::default();
        assert_eq!(classify(0.0, &tuning), Some(Judgment::Perfect));
        assert_eq!(classify(14.999, &tuning), Some(Judgment::Perfect));
        assert_eq!(classify(15.0, &tuning), Some(Judgment::Great));
        assert_eq!(classify(29.999, &tuning), Some(Judgment::Great));
        assert_eq!(classify(30.0, &tuning), Some(Judgment::Good));
        assert_eq!(classify(49.999, &tuning), Some(Judgment::Good));
        assert_eq!(classify(50.0, &tuning), None);
        assert_eq!(classify(120.0, &tuning), None);
    }

    #[test]
    fn base_points_per_tier() {
        assert_eq!(base_points_for(Judgment::Perfect), 300);
        assert_eq!(base_points_for(Judgment::Great), 200);
        assert_eq!(base_points_for(Judgment::Good), 100);
    }

    #[test]
    fn labels_match_display_strings() {
        assert_eq!(label_for(Judgment::Perfect), "PERFECT!");
        assert_eq!(label_for(Judgment::Great), "GREAT!");
        assert_eq!(label_for(Judgment::Good), "GOOD");
    }

    #[test]
    fn multiplier_steps_once_per_milestone() {
        let tuning = Tuning::default();
        assert_eq!(combo_multiplier(1, &tuning), 1.0);
        assert_eq!(combo_multiplier(9, &tuning), 1.0);
        assert_eq!(combo_multiplier(10, &tuning), 1.1);
        assert_eq!(combo_multiplier(19, &tuning), 1.1);
        assert_eq!(combo_multiplier(20, &tuning), 1.2);
        assert_eq!(combo_multiplier(100, &tuning), 2.0);
    }
}
