//! Frame clock: fixed-timestep accumulator with a catch-up cap.
//!
//! Wall-clock time accrues into a lag accumulator; the run loop drains
//! it in fixed `tick_duration` steps, at most [`MAX_TICKS_PER_FRAME`]
//! per frame so a stalled process replays a bounded amount of
//! simulation instead of freezing perceived responsiveness. What
//! happens to lag left over after a capped drain is a policy choice,
//! see [`LagPolicy`].

use std::time::{Duration, Instant};

/// Upper bound on simulation ticks drained in a single frame.
pub const MAX_TICKS_PER_FRAME: u32 = 5;

/// What to do with lag still pending after a capped drain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LagPolicy {
    /// Keep the remainder; the simulation fast-forwards over the next
    /// frames until it has caught up with wall time.
    #[default]
    Retain,
    /// Drop the remainder; a long stall resumes at normal speed and the
    /// lost wall time is never simulated.
    Discard,
}

/// Timing state for the run loop: tick/frame durations and the lag
/// accumulator. Owned exclusively by the loop.
#[derive(Debug)]
pub struct FrameClock {
    tick_duration: Duration,
    frame_duration: Duration,
    lag: Duration,
    previous: Instant,
    policy: LagPolicy,
}

impl FrameClock {
    /// Create a clock from a simulation tick rate and a max render
    /// rate, both in Hz.
    ///
    /// # Panics
    /// Panics if either rate is 0.
    pub fn new(tick_rate: u32, max_fps: u32, policy: LagPolicy) -> Self {
        assert!(tick_rate > 0 && max_fps > 0, "Clock rates must be non-zero");
        Self {
            tick_duration: Duration::from_secs_f64(1.0 / f64::from(tick_rate)),
            frame_duration: Duration::from_secs_f64(1.0 / f64::from(max_fps)),
            lag: Duration::ZERO,
            previous: Instant::now(),
            policy,
        }
    }

    /// Seconds per simulation step.
    #[inline]
    pub const fn tick_duration(&self) -> Duration {
        self.tick_duration
    }

    /// Seconds per rendered frame at the configured cap.
    #[inline]
    pub const fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Unspent wall-clock time waiting to become ticks.
    #[inline]
    pub const fn lag(&self) -> Duration {
        self.lag
    }

    /// Start a new frame: measure wall time elapsed since the previous
    /// frame, add it to the lag accumulator, and return the frame start
    /// instant (used later for the frame-cap sleep).
    pub fn begin_frame(&mut self) -> Instant {
        let now = Instant::now();
        self.accrue(now.saturating_duration_since(self.previous));
        self.previous = now;
        now
    }

    /// Add elapsed time to the accumulator directly.
    ///
    /// `begin_frame` calls this with measured wall time; tests call it
    /// with synthetic durations.
    pub fn accrue(&mut self, elapsed: Duration) {
        self.lag += elapsed;
    }

    /// Drain the accumulator into whole ticks, at most
    /// [`MAX_TICKS_PER_FRAME`], and return how many fired.
    ///
    /// Under [`LagPolicy::Discard`], hitting the cap with more than a
    /// tick still pending zeroes the accumulator; under
    /// [`LagPolicy::Retain`] the remainder carries into the next frame.
    pub fn drain_ticks(&mut self) -> u32 {
        let mut ticks = 0;
        while self.lag >= self.tick_duration && ticks < MAX_TICKS_PER_FRAME {
            self.lag -= self.tick_duration;
            ticks += 1;
        }

        if ticks == MAX_TICKS_PER_FRAME
            && self.policy == LagPolicy::Discard
            && self.lag >= self.tick_duration
        {
            self.lag = Duration::ZERO;
        }

        ticks
    }
}
