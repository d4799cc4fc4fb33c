//! Per-tick update and stop contracts.

/// Advance internal state by one tick.
///
/// Implemented by every ramped component and by the input edge tracker.
/// The external loop must call [`Periodic::update`] on each registered
/// component exactly once per tick, after all input dispatch for that tick
/// has run; ramps drift toward stale targets and edges misfire otherwise.
pub trait Periodic {
    /// Advance one tick: step ramps toward their targets, refresh
    /// snapshots, write outputs.
    fn update(&mut self);
}

/// Components that can come to a graceful, ramped stop.
pub trait Stop {
    /// Begin decelerating to zero through the normal ramp path.
    fn stop(&mut self);
}

/// Components that can stop without decelerating.
///
/// A ramped component asked only to decelerate keeps moving until its ramp
/// reaches zero, which can carry it past a now-pressed travel limit. An
/// immediate stop writes zero output directly and zeroes the ramp target,
/// bypassing the ramp for safety-critical boundary events.
pub trait HardStop: Stop {
    /// Zero the hardware output now, without ramping down.
    fn immediate_stop(&mut self);
}
