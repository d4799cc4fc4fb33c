//! Per-tick dispatch of behaviors.

use std::cell::RefCell;
use std::rc::Rc;

use td_control::Periodic;
use td_input::{Gamepad, GamepadDriven};
use tracing::trace;

/// Ordered dispatch lists for one robot.
///
/// A rig holds every behavior twice over: once in the input-dispatch list
/// and once in the update list (most behaviors are both
/// [`GamepadDriven`] and [`Periodic`], so one shared handle lands in both
/// lists). [`Rig::tick`] then enforces the load-bearing per-tick order:
///
/// 1. dispatch: behaviors read levels and edges and set ramp targets;
/// 2. update: every ramp steps toward the targets set moments ago;
/// 3. snapshot: the gamepad records this tick's levels for next tick's
///    edges.
///
/// Running updates before dispatch would step ramps toward stale targets;
/// refreshing the snapshot before dispatch would erase every edge before
/// its consumer saw it.
#[derive(Default)]
pub struct Rig {
    driven: Vec<Rc<RefCell<dyn GamepadDriven>>>,
    periodic: Vec<Rc<RefCell<dyn Periodic>>>,
    ticks: u64,
}

impl Rig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a behavior that both consumes input and updates per tick.
    /// One shared handle goes into both dispatch lists.
    pub fn register<T>(&mut self, behavior: Rc<RefCell<T>>)
    where
        T: GamepadDriven + Periodic + 'static,
    {
        self.driven.push(behavior.clone());
        self.periodic.push(behavior);
    }

    /// Register an update-only component (no input consumption).
    pub fn register_periodic<T>(&mut self, component: Rc<RefCell<T>>)
    where
        T: Periodic + 'static,
    {
        self.periodic.push(component);
    }

    /// Register an input-only behavior (no per-tick state).
    pub fn register_driven<T>(&mut self, behavior: Rc<RefCell<T>>)
    where
        T: GamepadDriven + 'static,
    {
        self.driven.push(behavior);
    }

    /// Ticks executed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run one interactive tick: dispatch, update, snapshot.
    pub fn tick(&mut self, pad: &mut Gamepad) {
        for behavior in &self.driven {
            behavior.borrow_mut().drive_by_gamepad(pad);
        }
        self.tick_update_only(pad);
    }

    /// Run one non-interactive tick: update and snapshot without input
    /// dispatch. Autonomous routines command behaviors directly and still
    /// need ramps stepped and the snapshot kept fresh.
    pub fn tick_update_only(&mut self, pad: &mut Gamepad) {
        for component in &self.periodic {
            component.borrow_mut().update();
        }
        pad.update();
        self.ticks += 1;
        trace!(tick = self.ticks, "rig tick complete");
    }
}
