//! Game clock with fixed-timestep accumulator

use std::time::Instant;

/// Longest frame time fed to the accumulator, in seconds. Bounds the number
/// of catch-up ticks after a stall (breakpoint, OS suspend, slow frame).
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Tracks game time and provides a fixed-timestep accumulator.
///
/// Wall-clock frame times are clamped to [`MAX_FRAME_TIME`] and accumulated;
/// the accumulator is drained in `fixed_timestep`-sized increments, so the
/// simulation advances at a constant rate regardless of render frame rate.
/// Leftover time below one step carries over to the next frame.
pub struct GameClock {
    /// Fixed simulation step in seconds (default: 1/60)
    pub fixed_timestep: f64,
    /// Clamped time since last frame in seconds
    pub delta_time: f64,
    /// Total elapsed (clamped) time in seconds
    pub total_time: f64,
    /// Accumulated time not yet consumed by simulation steps
    accumulator: f64,
    /// Last tick instant
    last_instant: Instant,
    /// Whether this is the first tick
    first_tick: bool,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            fixed_timestep: 1.0 / 60.0,
            delta_time: 0.0,
            total_time: 0.0,
            accumulator: 0.0,
            last_instant: Instant::now(),
            first_tick: true,
        }
    }
}

impl GameClock {
    /// Create a new game clock with the default 60Hz fixed timestep
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a game clock with a custom fixed timestep
    pub fn with_fixed_timestep(hz: f64) -> Self {
        Self {
            fixed_timestep: 1.0 / hz,
            ..Self::default()
        }
    }

    /// Advance the clock from the wall clock. Call once per frame.
    ///
    /// The first tick establishes the reference instant and yields a zero
    /// delta so startup time is not counted as a stall.
    pub fn tick(&mut self) {
        let now = Instant::now();

        if self.first_tick {
            self.first_tick = false;
            self.last_instant = now;
            self.delta_time = 0.0;
            return;
        }

        let elapsed = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;
        self.advance(elapsed);
    }

    /// Feed an explicit elapsed frame time, clamped to [`MAX_FRAME_TIME`].
    ///
    /// Used by hosts that sample time themselves, and by tests that need
    /// deterministic frame sequences.
    pub fn advance(&mut self, elapsed: f64) {
        self.delta_time = elapsed.min(MAX_FRAME_TIME);
        self.total_time += self.delta_time;
        self.accumulator += self.delta_time;
    }

    /// Returns true if there's enough accumulated time for a simulation step
    pub fn should_step(&self) -> bool {
        self.accumulator >= self.fixed_timestep
    }

    /// Consume one fixed timestep from the accumulator
    pub fn consume_step(&mut self) {
        self.accumulator -= self.fixed_timestep;
    }

    /// Unconsumed simulation time in seconds
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Interpolation alpha for rendering between fixed steps
    pub fn interpolation_alpha(&self) -> f64 {
        self.accumulator / self.fixed_timestep
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(clock: &mut GameClock) -> usize {
        let mut steps = 0;
        while clock.should_step() {
            clock.consume_step();
            steps += 1;
        }
        steps
    }

    #[test]
    fn clock_defaults() {
        let clock = GameClock::new();
        assert!((clock.fixed_timestep - 1.0 / 60.0).abs() < 1e-10);
        assert_eq!(clock.total_time, 0.0);
        assert_eq!(clock.delta_time, 0.0);
        assert!(!clock.should_step());
    }

    #[test]
    fn custom_timestep() {
        let clock = GameClock::with_fixed_timestep(30.0);
        assert!((clock.fixed_timestep - 1.0 / 30.0).abs() < 1e-10);
    }

    #[test]
    fn first_tick_zero_delta() {
        let mut clock = GameClock::new();
        clock.tick();
        assert_eq!(clock.delta_time, 0.0);
        assert_eq!(clock.accumulator(), 0.0);
    }

    #[test]
    fn frame_sequence_step_counts() {
        // 60Hz steps from frame times [0.0, 0.017, 0.017, 0.04]
        let mut clock = GameClock::new();
        let mut counts = Vec::new();
        for frame_time in [0.0, 0.017, 0.017, 0.04] {
            clock.advance(frame_time);
            counts.push(drain(&mut clock));
            assert!(clock.accumulator() >= 0.0);
            assert!(clock.accumulator() < clock.fixed_timestep);
        }
        assert_eq!(counts, vec![0, 1, 1, 2]);
    }

    #[test]
    fn leftover_time_carries_over() {
        let mut clock = GameClock::new();
        clock.advance(0.01); // below one step
        assert_eq!(drain(&mut clock), 0);
        clock.advance(0.01); // combined the two cross one step
        assert_eq!(drain(&mut clock), 1);
    }

    #[test]
    fn consumed_time_never_exceeds_wall_time() {
        let mut clock = GameClock::new();
        let frame_times = [0.001, 0.016, 0.033, 0.0, 0.1, 0.016, 0.25, 0.002];
        let mut total_steps = 0;
        for ft in frame_times {
            clock.advance(ft);
            total_steps += drain(&mut clock);
        }
        let wall: f64 = frame_times.iter().sum();
        let consumed = total_steps as f64 * clock.fixed_timestep;
        assert!(consumed <= wall + 1e-9);
        assert!((wall - consumed - clock.accumulator()).abs() < 1e-9);
    }

    #[test]
    fn stalled_frame_is_clamped() {
        // A 5-second stall must produce at most 0.25s worth of catch-up.
        let mut clock = GameClock::new();
        clock.advance(5.0);
        assert_eq!(clock.delta_time, MAX_FRAME_TIME);
        assert_eq!(drain(&mut clock), 15);
    }

    #[test]
    fn interpolation_alpha_fraction() {
        let mut clock = GameClock::new();
        clock.advance(clock.fixed_timestep * 0.5);
        assert!((clock.interpolation_alpha() - 0.5).abs() < 1e-10);
    }
}
