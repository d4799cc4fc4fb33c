//! Desk-side simulator for the tickdrive behavior stack.
//!
//! Wires a complete rig against simulated hardware and runs either a
//! scripted teleop session or the autonomous routine, logging commanded
//! outputs so tuning changes can be eyeballed without a robot.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use clap::{Parser, Subcommand};
use tracing::info;

use td_behaviors::{
    BehaviorError, DriveTrain, Launcher, Pusher, Rig, RigConfig, Winch,
};
use td_control::Stop;
use td_core::{TdError, TickRate};
use td_hal::{AxisId, ButtonId, ScriptedGamepad, SimActuator, SimSwitch};
use td_input::{Gamepad, InputError};

#[derive(Parser)]
#[command(name = "td-sim")]
#[command(about = "tickdrive simulator - runs the behavior stack on simulated hardware", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a rig config file and print the resolved tuning
    Validate {
        /// Path to the rig YAML file
        config_path: PathBuf,
    },
    /// Run a scripted teleop session
    Teleop {
        /// Path to the rig YAML file (defaults to built-in tuning)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Number of ticks to simulate
        #[arg(long, default_value_t = 250)]
        ticks: u64,
    },
    /// Run the autonomous routine: seek the winch down, then drive
    Auton {
        /// Path to the rig YAML file (defaults to built-in tuning)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Seconds of straight driving after the winch is positioned
        #[arg(long, default_value_t = 5.0)]
        drive_seconds: f64,
    },
}

#[derive(Debug, thiserror::Error)]
enum SimError {
    #[error("config: {0}")]
    Io(#[from] std::io::Error),
    #[error("config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Core(#[from] TdError),
    #[error(transparent)]
    Behavior(#[from] BehaviorError),
    #[error(transparent)]
    Input(#[from] InputError),
}

type SimResult<T> = Result<T, SimError>;

fn main() -> SimResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::Teleop { config, ticks } => cmd_teleop(config.as_deref(), ticks),
        Commands::Auton {
            config,
            drive_seconds,
        } => cmd_auton(config.as_deref(), drive_seconds),
    }
}

fn load_config(path: Option<&Path>) -> SimResult<RigConfig> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Ok(serde_yaml::from_str(&text)?)
        }
        None => Ok(RigConfig::default()),
    }
}

fn cmd_validate(path: &Path) -> SimResult<()> {
    let cfg = load_config(Some(path))?;
    TickRate::new(cfg.tick_hz)?;
    println!("rig config OK: {}", path.display());
    println!("  tick rate            {} Hz", cfg.tick_hz);
    println!("  drive accel          {} units/s", cfg.drive.max_accel_per_sec);
    println!("  drive exponent       {}", cfg.drive.input_exponent);
    println!("  winch speed          {}", cfg.winch.nominal_speed);
    println!("  flywheel shoot       {}", cfg.launcher.shoot_speed);
    println!("  flywheel intake      {}", cfg.launcher.intake_speed);
    Ok(())
}

/// A fully wired simulated robot plus the probes watching its outputs.
struct SimRobot {
    rig: Rig,
    pad: Gamepad,
    script: ScriptedGamepad,
    drive: Rc<RefCell<DriveTrain>>,
    launcher: Rc<RefCell<Launcher>>,
    front_left: Rc<Cell<f64>>,
    front_right: Rc<Cell<f64>>,
    winch_motor: Rc<Cell<f64>>,
    left_fly: Rc<Cell<f64>>,
    lower_limit: SimSwitch,
}

fn build_robot(cfg: &RigConfig) -> SimResult<SimRobot> {
    let rate = TickRate::new(cfg.tick_hz)?;

    let (fl, fr, bl, br) = (
        SimActuator::new(),
        SimActuator::new(),
        SimActuator::new(),
        SimActuator::new(),
    );
    let front_left = fl.probe();
    let front_right = fr.probe();
    let drive = Rc::new(RefCell::new(DriveTrain::from_config(
        fl, fr, bl, br, &cfg.drive, rate,
    )?));

    let winch_motor = SimActuator::new();
    let winch_probe = winch_motor.probe();
    let lower_limit = SimSwitch::new();
    let winch = Winch::from_config(
        winch_motor,
        lower_limit.clone(),
        SimSwitch::new(),
        &cfg.winch,
        rate,
    )?;
    let pusher = Pusher::new(
        SimActuator::new(),
        cfg.launcher.pusher_retracted,
        cfg.launcher.pusher_extended,
    )?;
    let left_fly_motor = SimActuator::new();
    let left_fly = left_fly_motor.probe();
    let launcher = Rc::new(RefCell::new(Launcher::new(
        winch,
        pusher,
        left_fly_motor,
        SimActuator::new(),
        cfg.launcher.shoot_speed,
        cfg.launcher.intake_speed,
    )?));

    let mut rig = Rig::new();
    rig.register(drive.clone());
    rig.register(launcher.clone());

    let script = ScriptedGamepad::new();
    let pad = Gamepad::new(script.clone())?;

    Ok(SimRobot {
        rig,
        pad,
        script,
        drive,
        launcher,
        front_left,
        front_right,
        winch_motor: winch_probe,
        left_fly,
        lower_limit,
    })
}

fn cmd_teleop(config: Option<&Path>, ticks: u64) -> SimResult<()> {
    let cfg = load_config(config)?;
    let mut robot = build_robot(&cfg)?;
    info!(ticks, hz = cfg.tick_hz, "starting scripted teleop");

    for tick in 0..ticks {
        // A canned operator: accelerate, spin up the shooter, fire, coast.
        match tick {
            0 => robot.script.set_axis(AxisId::RightTrigger, 1.0),
            60 => robot.script.press(ButtonId::Start),
            61 => robot.script.release(ButtonId::Start),
            100 => robot.script.press(ButtonId::X),
            130 => {
                robot.script.release(ButtonId::X);
                robot.script.set_axis(AxisId::RightTrigger, 0.0);
            }
            _ => {}
        }

        robot.rig.tick(&mut robot.pad);

        if tick % 25 == 0 || tick == ticks - 1 {
            info!(
                tick,
                front_left = robot.front_left.get(),
                front_right = robot.front_right.get(),
                left_fly = robot.left_fly.get(),
                flywheel = ?robot.launcher.borrow().flywheel_state(),
                "teleop state"
            );
        }
    }

    println!(
        "teleop finished after {} ticks; drive output {:.3}",
        robot.rig.ticks(),
        robot.front_left.get()
    );
    Ok(())
}

fn cmd_auton(config: Option<&Path>, drive_seconds: f64) -> SimResult<()> {
    let cfg = load_config(config)?;
    let rate = TickRate::new(cfg.tick_hz)?;
    let mut robot = build_robot(&cfg)?;

    let drive_ticks = rate.ticks_in(drive_seconds);
    // The simulated winch reaches its lower stop after half a second.
    let switch_closes_at = rate.ticks_in(0.5);
    let total = drive_ticks + switch_closes_at + rate.ticks_in(2.0);
    info!(total, drive_ticks, "starting autonomous routine");

    let mut positioned = false;
    let mut drive_counter = 0u64;
    for tick in 0..total {
        if tick == switch_closes_at {
            robot.lower_limit.press();
        }

        if !positioned {
            if robot.launcher.borrow().is_fully_down() {
                positioned = true;
                robot.launcher.borrow_mut().stop();
                info!(tick, "winch positioned");
            } else {
                robot.launcher.borrow_mut().winch_mut().lower_full();
            }
        } else if drive_counter <= drive_ticks {
            robot.drive.borrow_mut().drive_straight(0.5);
            drive_counter += 1;
        } else {
            robot.drive.borrow_mut().stop();
        }

        robot.rig.tick_update_only(&mut robot.pad);

        if tick % 50 == 0 {
            info!(
                tick,
                winch = robot.winch_motor.get(),
                front_left = robot.front_left.get(),
                "auton state"
            );
        }
    }

    println!(
        "auton finished: positioned={}, drive output {:.3}, winch output {:.3}",
        positioned,
        robot.front_left.get(),
        robot.winch_motor.get()
    );
    Ok(())
}
