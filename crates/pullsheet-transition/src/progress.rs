//! The single scalar behind every visual of the transition.
//!
//! `progress` is 0 when the apps surface is fully pulled up and 1 when it
//! rests below the viewport. `progress * shift_range` is the authoritative
//! translation of the apps surface.

/// Snapshot of one progress write, handed to the visual fan-out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressFrame {
    pub progress: f32,
    pub shift_range: f32,
    pub shift_previous: f32,
    pub shift_current: f32,
}

impl ProgressFrame {
    /// Progress clamped to `[0, 1]` for colour and opacity math.
    pub fn clamped(&self) -> f32 {
        self.progress.clamp(0.0, 1.0)
    }

    /// Opacity of the apps content.
    pub fn apps_alpha(&self) -> f32 {
        1.0 - self.clamped()
    }

    /// Translation that keeps the hotseat glued to the top of the apps surface.
    pub fn hotseat_shift(&self) -> f32 {
        -self.shift_range + self.shift_current
    }

    pub fn shift_delta(&self) -> f32 {
        self.shift_current - self.shift_previous
    }
}

#[derive(Clone, Debug)]
pub struct ProgressModel {
    progress: f32,
    shift_range: f32,
    shift_start: f32,
    container_velocity: f32,
    recatch_rejection_fraction: f32,
}

impl ProgressModel {
    pub fn new(default_shift_range: f32, recatch_rejection_fraction: f32) -> Self {
        Self {
            progress: 1.0,
            shift_range: default_shift_range,
            shift_start: 0.0,
            container_velocity: 0.0,
            recatch_rejection_fraction,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn shift_range(&self) -> f32 {
        self.shift_range
    }

    pub fn set_shift_range(&mut self, shift_range: f32) {
        self.shift_range = shift_range;
    }

    pub fn shift_current(&self) -> f32 {
        self.progress * self.shift_range
    }

    pub fn shift_start(&self) -> f32 {
        self.shift_start
    }

    pub fn set_shift_start(&mut self, shift_start: f32) {
        self.shift_start = shift_start;
    }

    /// Anchors the next drag at the current translation.
    pub fn capture_shift_start(&mut self) {
        self.shift_start = self.shift_current();
    }

    pub fn container_velocity(&self) -> f32 {
        self.container_velocity
    }

    pub fn set_container_velocity(&mut self, velocity: f32) {
        self.container_velocity = velocity;
    }

    /// Writes `progress` unclamped and returns what changed.
    pub fn set_progress(&mut self, progress: f32) -> ProgressFrame {
        let shift_previous = self.shift_current();
        self.progress = progress;
        ProgressFrame {
            progress,
            shift_range: self.shift_range,
            shift_previous,
            shift_current: self.shift_current(),
        }
    }

    /// Progress for a drag `displacement` px away from the shift start,
    /// clamped to the shift range.
    pub fn drag_progress(&self, displacement: f32) -> f32 {
        if self.shift_range <= 0.0 {
            return self.progress;
        }
        let shift = (self.shift_start + displacement).max(0.0).min(self.shift_range);
        shift / self.shift_range
    }

    pub fn is_in_top_dead_zone(&self) -> bool {
        self.progress < self.recatch_rejection_fraction
    }

    pub fn is_in_bottom_dead_zone(&self) -> bool {
        self.progress > 1.0 - self.recatch_rejection_fraction
    }

    pub fn is_in_dead_zone(&self) -> bool {
        self.is_in_top_dead_zone() || self.is_in_bottom_dead_zone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> ProgressModel {
        let mut model = ProgressModel::new(10.0, 0.0875);
        model.set_shift_range(1000.0);
        model
    }

    #[test]
    fn starts_pulled_down_with_sentinel_range() {
        let model = ProgressModel::new(10.0, 0.0875);
        assert_eq!(model.progress(), 1.0);
        assert_eq!(model.shift_range(), 10.0);
        assert_eq!(model.shift_current(), 10.0);
    }

    #[test]
    fn set_progress_reports_previous_and_current_shift() {
        let mut model = model();
        let frame = model.set_progress(0.25);
        assert_eq!(frame.shift_previous, 1000.0);
        assert_eq!(frame.shift_current, 250.0);
        assert_eq!(frame.shift_delta(), -750.0);
        assert_eq!(frame.hotseat_shift(), -750.0);
        assert_eq!(frame.apps_alpha(), 0.75);
    }

    #[test]
    fn out_of_range_progress_is_stored_but_clamped_for_alpha() {
        let mut model = model();
        let frame = model.set_progress(1.4);
        assert_eq!(model.progress(), 1.4);
        assert_eq!(frame.apps_alpha(), 0.0);
        let frame = model.set_progress(-0.2);
        assert_eq!(frame.apps_alpha(), 1.0);
    }

    #[test]
    fn drag_progress_is_clamped_to_range() {
        let mut model = model();
        model.set_shift_start(900.0);
        assert_eq!(model.drag_progress(-100.0), 0.8);
        assert_eq!(model.drag_progress(-2000.0), 0.0);
        assert_eq!(model.drag_progress(400.0), 1.0);
    }

    #[test]
    fn dead_zones_sit_at_both_ends() {
        let mut model = model();
        model.set_progress(0.05);
        assert!(model.is_in_top_dead_zone());
        model.set_progress(0.95);
        assert!(model.is_in_bottom_dead_zone());
        model.set_progress(0.5);
        assert!(!model.is_in_dead_zone());
    }
}
