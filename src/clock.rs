//! The single global transition clock. Two logical states: advancing
//! (progress < 1) and idle (progress == 1). `reset` re-arms it from any
//! state, which is what lets a reroll interrupt a running transition.

#[derive(Debug, Clone)]
pub struct AnimationClock {
    progress: f32,
    time_factor: f32,
}

impl AnimationClock {
    /// Starts idle at progress 1: the first displayed state is static and
    /// nothing moves until the first reroll.
    pub fn new(time_factor: f32) -> Self {
        Self {
            progress: 1.0,
            time_factor,
        }
    }

    /// Advances by wall-clock elapsed seconds scaled by the time factor.
    /// Negative elapsed (a misbehaving scheduler) is treated as zero.
    pub fn tick(&mut self, elapsed: f32) {
        if self.progress >= 1.0 {
            return;
        }
        let elapsed = if elapsed.is_finite() { elapsed.max(0.0) } else { 0.0 };
        self.progress = (self.progress + elapsed * self.time_factor).min(1.0);
    }

    pub fn reset(&mut self) {
        self.progress = 0.0;
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_idle(&self) -> bool {
        self.progress >= 1.0
    }

    /// Eased progress for consumers; raw progress is only for bookkeeping.
    pub fn eased(&self) -> f32 {
        ease_quad_in_out(self.progress)
    }
}

/// Quadratic ease-in-out: ease(0) = 0, ease(1) = 1, monotone non-decreasing.
pub fn ease_quad_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t / 2.0
    } else {
        let u = t - 1.0;
        (u * (2.0 - u) + 1.0) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::{ease_quad_in_out, AnimationClock};

    #[test]
    fn starts_idle() {
        let clock = AnimationClock::new(0.5);
        assert!(clock.is_idle());
        assert_eq!(clock.progress(), 1.0);
    }

    #[test]
    fn tick_scales_elapsed_and_clamps_to_one() {
        // Scenario: time_factor 0.5 from progress 0.
        let mut clock = AnimationClock::new(0.5);
        clock.reset();
        clock.tick(1.0);
        assert_eq!(clock.progress(), 0.5);
        clock.tick(2.0);
        assert_eq!(clock.progress(), 1.0);
        assert!(clock.is_idle());
    }

    #[test]
    fn tick_is_a_no_op_while_idle() {
        let mut clock = AnimationClock::new(2.0);
        clock.tick(10.0);
        assert_eq!(clock.progress(), 1.0);
    }

    #[test]
    fn negative_or_nan_elapsed_does_not_move_the_clock() {
        let mut clock = AnimationClock::new(0.5);
        clock.reset();
        clock.tick(-3.0);
        assert_eq!(clock.progress(), 0.0);
        clock.tick(f32::NAN);
        assert_eq!(clock.progress(), 0.0);
    }

    #[test]
    fn reset_rearms_mid_transition() {
        let mut clock = AnimationClock::new(1.0);
        clock.reset();
        clock.tick(0.4);
        assert!(!clock.is_idle());
        clock.reset();
        assert_eq!(clock.progress(), 0.0);
    }

    #[test]
    fn easing_fixes_endpoints_and_is_monotone() {
        assert_eq!(ease_quad_in_out(0.0), 0.0);
        assert_eq!(ease_quad_in_out(1.0), 1.0);
        assert_eq!(ease_quad_in_out(0.5), 0.5);

        let mut previous = 0.0;
        for step in 1..=100 {
            let eased = ease_quad_in_out(step as f32 / 100.0);
            assert!(eased >= previous);
            previous = eased;
        }
    }

    #[test]
    fn easing_clamps_out_of_range_progress() {
        assert_eq!(ease_quad_in_out(-0.5), 0.0);
        assert_eq!(ease_quad_in_out(1.5), 1.0);
    }
}
