//! Simulation clock with a rate-limited animation toggle.

/// Default minimum seconds between two accepted animation toggles.
pub const DEFAULT_TOGGLE_COOLDOWN: f32 = 0.2;

/// Initial value of the since-last-toggle counter, so the first request
/// always succeeds.
const INITIAL_SINCE_TOGGLE: f32 = 1.0;

/// Accumulated simulation time plus the animation on/off state.
///
/// Simulation time only moves through [`advance`](Self::advance). The
/// since-last-toggle counter moves with every frame delta passed to
/// [`tick`](Self::tick), whether animation is running or not.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationClock {
    sim_time: f32,
    animation_enabled: bool,
    since_last_toggle: f32,
    toggle_cooldown: f32,
}

impl SimulationClock {
    /// Creates a clock at `t = 0` with the given animation state and cooldown.
    pub fn new(animation_enabled: bool, toggle_cooldown: f32) -> Self {
        Self {
            sim_time: 0.0,
            animation_enabled,
            since_last_toggle: INITIAL_SINCE_TOGGLE,
            toggle_cooldown: toggle_cooldown.max(0.0),
        }
    }

    /// Accumulates `delta_time` into simulation time when `animation_enabled`
    /// is true. Negative and NaN deltas count as zero.
    pub fn advance(&mut self, delta_time: f32, animation_enabled: bool) {
        if animation_enabled {
            self.sim_time += sanitize(delta_time);
        }
    }

    /// Per-frame update: ages the toggle counter, then advances simulation
    /// time using the current animation state.
    pub fn tick(&mut self, delta_time: f32) {
        self.since_last_toggle += sanitize(delta_time);
        self.advance(delta_time, self.animation_enabled);
    }

    /// Flips the animation state if at least the cooldown has elapsed since
    /// the last accepted toggle. Returns whether the flip happened.
    pub fn request_toggle(&mut self) -> bool {
        if self.since_last_toggle < self.toggle_cooldown {
            return false;
        }
        self.animation_enabled = !self.animation_enabled;
        self.since_last_toggle = 0.0;
        log::debug!(
            "Animation {}",
            if self.animation_enabled { "resumed" } else { "paused" }
        );
        true
    }

    /// Accumulated simulation time in seconds.
    pub fn sim_time(&self) -> f32 {
        self.sim_time
    }

    /// Whether simulation time currently advances.
    pub fn animation_enabled(&self) -> bool {
        self.animation_enabled
    }

    /// Seconds since the last accepted toggle.
    pub fn since_last_toggle(&self) -> f32 {
        self.since_last_toggle
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(true, DEFAULT_TOGGLE_COOLDOWN)
    }
}

fn sanitize(delta_time: f32) -> f32 {
    // f32::max returns the non-NaN operand.
    delta_time.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_delta_is_noop() {
        let mut clock = SimulationClock::default();
        clock.advance(0.5, true);
        let before = clock.sim_time();
        clock.advance(0.0, true);
        clock.advance(0.0, false);
        assert_eq!(clock.sim_time(), before);
    }

    #[test]
    fn test_disabled_advance_freezes_time() {
        let mut clock = SimulationClock::default();
        for d in [0.01, 1.0, 1000.0] {
            clock.advance(d, false);
        }
        assert_eq!(clock.sim_time(), 0.0);
    }

    #[test]
    fn test_enabled_advance_accumulates() {
        let mut clock = SimulationClock::default();
        clock.advance(0.25, true);
        clock.advance(0.5, true);
        assert!((clock.sim_time() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_negative_and_nan_deltas_ignored() {
        let mut clock = SimulationClock::default();
        clock.advance(-1.0, true);
        clock.advance(f32::NAN, true);
        assert_eq!(clock.sim_time(), 0.0);
    }

    #[test]
    fn test_tick_respects_animation_state() {
        let mut clock = SimulationClock::new(false, DEFAULT_TOGGLE_COOLDOWN);
        clock.tick(1.0);
        assert_eq!(clock.sim_time(), 0.0);
        assert!(clock.request_toggle());
        clock.tick(1.0);
        assert!((clock.sim_time() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_first_toggle_succeeds() {
        let mut clock = SimulationClock::default();
        assert!(clock.request_toggle());
        assert!(!clock.animation_enabled());
        assert_eq!(clock.since_last_toggle(), 0.0);
    }

    #[test]
    fn test_double_toggle_within_cooldown_flips_once() {
        let mut clock = SimulationClock::default();
        assert!(clock.request_toggle());
        clock.tick(0.1);
        assert!(!clock.request_toggle());
        assert!(!clock.animation_enabled());
    }

    #[test]
    fn test_held_toggle_repeats_after_cooldown() {
        let mut clock = SimulationClock::default();
        let mut flips = 0;
        // One second of 60 Hz frames with the toggle requested every frame.
        for _ in 0..60 {
            clock.tick(1.0 / 60.0);
            if clock.request_toggle() {
                flips += 1;
            }
        }
        assert!((4..=5).contains(&flips), "got {flips} flips");
    }

    #[test]
    fn test_toggle_counter_ages_while_paused() {
        let mut clock = SimulationClock::default();
        assert!(clock.request_toggle());
        clock.tick(0.3);
        assert_eq!(clock.sim_time(), 0.0);
        assert!(clock.request_toggle());
        assert!(clock.animation_enabled());
    }
}
