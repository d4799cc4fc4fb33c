//! Tick-rate conversions.
//!
//! The control loop runs at a fixed rate and every per-tick quantity
//! (ramp steps, timed routines) is derived from a per-second tuning value.
//! Keeping tunables in per-second units makes them independent of the
//! loop frequency.

use crate::error::{TdError, TdResult};
use crate::numeric::{ensure_finite, Real};
use serde::{Deserialize, Serialize};

/// Fixed invocation rate of the periodic control loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickRate {
    /// Ticks per second.
    hz: Real,
}

impl TickRate {
    /// Create a tick rate from a frequency in Hz.
    ///
    /// # Errors
    ///
    /// Returns an error if `hz` is not finite and positive.
    pub fn new(hz: Real) -> TdResult<Self> {
        let hz = ensure_finite(hz, "tick rate")?;
        if hz <= 0.0 {
            return Err(TdError::InvalidArg {
                what: "tick rate must be positive",
            });
        }
        Ok(Self { hz })
    }

    /// Ticks per second.
    pub fn hz(&self) -> Real {
        self.hz
    }

    /// Tick period in seconds.
    pub fn period(&self) -> Real {
        1.0 / self.hz
    }

    /// Convert a per-second rate of change into a per-tick step.
    ///
    /// A motor acceleration tuned as 4.5 units/s becomes 0.09 units/tick
    /// at 50 Hz.
    pub fn per_tick(&self, per_second: Real) -> Real {
        per_second / self.hz
    }

    /// Number of whole ticks spanning the given duration in seconds.
    pub fn ticks_in(&self, seconds: Real) -> u64 {
        (seconds * self.hz).ceil() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_tick_scales_by_frequency() {
        let rate = TickRate::new(50.0).unwrap();
        assert!((rate.per_tick(4.5) - 0.09).abs() < 1e-12);
        assert!((rate.period() - 0.02).abs() < 1e-12);
    }

    #[test]
    fn ticks_in_rounds_up() {
        let rate = TickRate::new(50.0).unwrap();
        assert_eq!(rate.ticks_in(5.0), 250);
        assert_eq!(rate.ticks_in(0.03), 2);
    }

    #[test]
    fn rejects_bad_rates() {
        assert!(matches!(
            TickRate::new(0.0),
            Err(TdError::InvalidArg { .. })
        ));
        assert!(TickRate::new(-50.0).is_err());
        assert!(matches!(
            TickRate::new(Real::NAN),
            Err(TdError::NonFinite { .. })
        ));
        assert!(matches!(
            TickRate::new(Real::INFINITY),
            Err(TdError::NonFinite { .. })
        ));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn per_tick_round_trips(
            hz in 1.0_f64..1000.0,
            per_second in -100.0_f64..100.0,
        ) {
            let rate = TickRate::new(hz).unwrap();
            let per_tick = rate.per_tick(per_second);
            prop_assert!((per_tick * hz - per_second).abs() < 1e-9);
        }

        #[test]
        fn ticks_in_covers_the_duration(
            hz in 1.0_f64..1000.0,
            seconds in 0.0_f64..60.0,
        ) {
            let rate = TickRate::new(hz).unwrap();
            let ticks = rate.ticks_in(seconds);
            // Enough ticks to span the duration, never a whole tick extra.
            prop_assert!(ticks as f64 >= seconds * hz);
            prop_assert!((ticks as f64) < seconds * hz + 1.0);
        }
    }
}
