//! Ball launcher behavior: winch + mirrored flywheels + pusher.

use td_control::{HardStop, Periodic, Stop};
use td_core::TickRate;
use td_hal::{Actuator, ButtonId};
use td_input::{Gamepad, GamepadDriven};

use crate::config::LauncherConfig;
use crate::error::BehaviorResult;
use crate::flywheel::{Flywheel, FlywheelState, Spin};
use crate::pusher::Pusher;
use crate::winch::Winch;

/// Speed multiplier while lowering under operator control; gravity helps,
/// so the winch lowers at half its nominal speed.
const LOWER_MULTIPLIER: f64 = 0.5;

/// The complete launcher mechanism.
///
/// The winch sets the launch angle, two mirrored flywheels shoot or intake
/// the ball, and the pusher shoves the ball into the spinning flywheels.
/// The flywheel halves always share one state; the right half is mounted
/// counter-clockwise so the pair spins toward each other.
///
/// Operator mapping, evaluated independently each tick:
/// - Start edge toggles shooting, Back edge toggles intaking.
/// - Y raises the winch; A lowers it at half speed; otherwise the winch
///   ramps to a stop. Exactly one of the three runs per tick.
/// - X extends the pusher while held.
pub struct Launcher {
    winch: Winch,
    left_fly: Flywheel,
    right_fly: Flywheel,
    pusher: Pusher,
}

impl core::fmt::Debug for Launcher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Launcher")
            .field("winch", &self.winch)
            .field("left_fly", &self.left_fly)
            .field("right_fly", &self.right_fly)
            .field("pusher", &self.pusher)
            .finish()
    }
}

impl Launcher {
    /// Assemble a launcher around an existing winch and pusher.
    ///
    /// The flywheels are built here from their motor handles so the
    /// mirrored mounting is enforced in one place.
    ///
    /// # Errors
    ///
    /// Returns an error if either flywheel speed is outside `[0, 1]`.
    pub fn new(
        winch: Winch,
        pusher: Pusher,
        left_fly_motor: impl Actuator + 'static,
        right_fly_motor: impl Actuator + 'static,
        shoot_speed: f64,
        intake_speed: f64,
    ) -> BehaviorResult<Self> {
        let left_fly = Flywheel::new(left_fly_motor, shoot_speed, intake_speed, Spin::Clockwise)?;
        let right_fly = Flywheel::new(
            right_fly_motor,
            shoot_speed,
            intake_speed,
            Spin::CounterClockwise,
        )?;
        Ok(Self {
            winch,
            left_fly,
            right_fly,
            pusher,
        })
    }

    /// Assemble a launcher from tuning config.
    pub fn from_config(
        winch_motor: impl Actuator + 'static,
        lower_limit: impl td_hal::LimitSwitch + 'static,
        upper_limit: impl td_hal::LimitSwitch + 'static,
        pusher_servo: impl Actuator + 'static,
        left_fly_motor: impl Actuator + 'static,
        right_fly_motor: impl Actuator + 'static,
        cfg: &LauncherConfig,
        winch_cfg: &crate::config::WinchConfig,
        rate: TickRate,
    ) -> BehaviorResult<Self> {
        let winch = Winch::from_config(winch_motor, lower_limit, upper_limit, winch_cfg, rate)?;
        let pusher = Pusher::new(pusher_servo, cfg.pusher_retracted, cfg.pusher_extended)?;
        Self::new(
            winch,
            pusher,
            left_fly_motor,
            right_fly_motor,
            cfg.shoot_speed,
            cfg.intake_speed,
        )
    }

    /// Shared state of the flywheel pair.
    pub fn flywheel_state(&self) -> FlywheelState {
        self.left_fly.state()
    }

    /// Drive both flywheel halves to the same state.
    pub fn set_flywheel_state(&mut self, state: FlywheelState) {
        self.left_fly.set_state(state);
        self.right_fly.set_state(state);
    }

    pub fn extend_pusher(&mut self) {
        self.pusher.extend();
    }

    pub fn retract_pusher(&mut self) {
        self.pusher.retract();
    }

    /// The angle-adjustment winch.
    pub fn winch(&self) -> &Winch {
        &self.winch
    }

    pub fn winch_mut(&mut self) -> &mut Winch {
        &mut self.winch
    }

    /// Whether the launch angle is at its upper travel limit.
    pub fn is_fully_up(&self) -> bool {
        self.winch.is_fully_up()
    }

    /// Whether the launch angle is at its lower travel limit.
    pub fn is_fully_down(&self) -> bool {
        self.winch.is_fully_down()
    }
}

impl GamepadDriven for Launcher {
    fn drive_by_gamepad(&mut self, pad: &Gamepad) {
        // Flywheel toggles, shooting edge first.
        if pad.button_edge(ButtonId::Start) {
            if self.flywheel_state() == FlywheelState::Off {
                self.set_flywheel_state(FlywheelState::Shooting);
            } else {
                self.set_flywheel_state(FlywheelState::Off);
            }
        } else if pad.button_edge(ButtonId::Back) {
            if self.flywheel_state() == FlywheelState::Off {
                self.set_flywheel_state(FlywheelState::Intaking);
            } else {
                self.set_flywheel_state(FlywheelState::Off);
            }
        }

        // Winch: raise wins over lower, otherwise ramp to a stop.
        if pad.button(ButtonId::Y) {
            self.winch.raise_full();
        } else if pad.button(ButtonId::A) {
            self.winch.lower(LOWER_MULTIPLIER);
        } else {
            self.winch.stop();
        }

        // Pusher is level-triggered, no edges.
        if pad.button(ButtonId::X) {
            self.pusher.extend();
        } else {
            self.pusher.retract();
        }
    }
}

impl Periodic for Launcher {
    fn update(&mut self) {
        self.winch.update();
    }
}

impl Stop for Launcher {
    /// Ramped stop of the winch. Flywheels hold their state; switch them
    /// off through [`Launcher::set_flywheel_state`].
    fn stop(&mut self) {
        self.winch.stop();
    }
}

impl HardStop for Launcher {
    fn immediate_stop(&mut self) {
        self.winch.immediate_stop();
    }
}
