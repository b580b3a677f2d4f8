use bevy::prelude::*;

use crate::visual::utils::ease_out_cubic;

/// Display-side slide of the evasive button towards its logical position.
///
/// Purely visual: hit testing and evasion always use the controller's position.
#[derive(Component, Debug, Clone, Copy)]
pub struct SlideAnimation {
    from: Vec2,
    to: Vec2,
    elapsed: f32,
    duration: f32,
    started: bool,
}

impl SlideAnimation {
    pub fn new(duration: f32) -> Self {
        Self {
            from: Vec2::ZERO,
            to: Vec2::ZERO,
            elapsed: 0.0,
            duration: duration.max(0.0),
            started: false,
        }
    }

    /// Where the button is drawn right now
    pub fn current(&self) -> Vec2 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.from.lerp(self.to, ease_out_cubic(t))
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Start sliding from wherever the button is drawn now. The first target snaps.
    pub fn retarget(&mut self, to: Vec2) {
        if !self.started {
            self.started = true;
            self.from = to;
            self.to = to;
            self.elapsed = self.duration;
            return;
        }

        self.from = self.current();
        self.to = to;
        self.elapsed = 0.0;
    }

    /// Advance by `dt` seconds and return the new drawn position
    pub fn advance(&mut self, dt: f32) -> Vec2 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_target_snaps() {
        let mut slide = SlideAnimation::new(0.2);
        slide.retarget(Vec2::new(214.0, 130.0));

        assert!(slide.is_finished());
        assert_eq!(slide.current(), Vec2::new(214.0, 130.0));
    }

    #[test]
    fn test_slide_reaches_target() {
        let mut slide = SlideAnimation::new(0.2);
        slide.retarget(Vec2::new(0.0, 0.0));
        slide.retarget(Vec2::new(100.0, 50.0));

        assert_eq!(slide.current(), Vec2::ZERO);

        let halfway = slide.advance(0.1);
        assert!(halfway.x > 50.0 && halfway.x < 100.0, "eased past the midpoint");

        let done = slide.advance(0.5);
        assert_eq!(done, Vec2::new(100.0, 50.0));
        assert!(slide.is_finished());
    }

    #[test]
    fn test_retarget_mid_slide_starts_from_drawn_position() {
        let mut slide = SlideAnimation::new(0.2);
        slide.retarget(Vec2::ZERO);
        slide.retarget(Vec2::new(100.0, 0.0));
        let drawn = slide.advance(0.1);

        slide.retarget(Vec2::new(0.0, 100.0));
        assert_eq!(slide.current(), drawn);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut slide = SlideAnimation::new(0.0);
        slide.retarget(Vec2::ZERO);
        slide.retarget(Vec2::new(30.0, 40.0));
        assert_eq!(slide.current(), Vec2::new(30.0, 40.0));
    }
}
