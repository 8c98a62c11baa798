// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use std::path::{Path, PathBuf};

use ansi_term::Colour::{Green, Purple, Red, Yellow};
use clap::Parser;
use manipulator_core::{
    geometry::angle_between, nalgebra, session::Session, JointAngles, JointPositions, LinkLengths,
    Manipulator, ManipulatorConfig, Target,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

use log::{debug, info, warn};

mod replay;

/// Angle unit on the command line.
#[derive(Clone, Copy)]
struct Unit {
    degrees: bool,
}

impl Unit {
    /// Convert an angle from the command line to radians.
    fn input(&self, angle: f64) -> f64 {
        if self.degrees {
            angle.to_radians()
        } else {
            angle
        }
    }

    fn format(&self, angle: f64) -> String {
        if self.degrees {
            format!("{:.2}°", angle.to_degrees())
        } else {
            format!("{:.4}rad", angle)
        }
    }

    fn format_angles(&self, angles: &JointAngles) -> String {
        format!(
            "{} {} {} {} {} {}",
            Yellow.paint("Shoulder:"),
            self.format(angles.shoulder),
            Yellow.paint("Elbow:"),
            self.format(angles.elbow),
            Yellow.paint("Wrist:"),
            self.format(angles.wrist)
        )
    }
}

fn format_positions(positions: &JointPositions) -> String {
    format!(
        "{} ({:.2}, {:.2}) {} ({:.2}, {:.2}) {} ({:.2}, {:.2})",
        Purple.paint("Elbow:"),
        positions.elbow.x,
        positions.elbow.y,
        Purple.paint("Wrist:"),
        positions.wrist.x,
        positions.wrist.y,
        Purple.paint("Effector:"),
        positions.effector.x,
        positions.effector.y
    )
}

/// Load the configuration, or fall back to defaults if there is none.
fn load_config(path: &Path) -> anyhow::Result<ManipulatorConfig> {
    if !path.exists() {
        debug!("No configuration at {}, using defaults", path.display());
        return Ok(ManipulatorConfig::default());
    }

    let config: ManipulatorConfig = manipulator_core::from_file(path)?;
    config.validate()?;

    Ok(config)
}

/// Solve targets placed by forward kinematics and compare the effector.
fn verify(
    manipulator: &Manipulator,
    samples: usize,
    seed: Option<u64>,
    tolerance: f64,
) -> anyhow::Result<()> {
    use std::f64::consts::PI;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut max_error = 0.0_f64;
    let mut unsolved = 0;

    for _ in 0..samples {
        let angles = JointAngles::new(
            rng.gen_range(-PI..PI),
            rng.gen_range(0.0..2.0 * PI),
            rng.gen_range(-PI..PI),
        );

        let effector = manipulator.forward(&angles).effector;
        let target = Target::new(effector.x, effector.y, -angles.effector_heading());

        match manipulator.inverse(&target) {
            Ok(solved) => {
                let actual = manipulator.forward(&solved).effector;
                max_error = max_error.max(nalgebra::distance(&actual, &effector));
            }
            Err(e) => {
                debug!("Target {} not solved: {}", target, e);
                unsolved += 1;
            }
        }
    }

    info!(
        "Verified {} samples, {} unsolved, maximum effector error {:.3e}",
        samples, unsolved, max_error
    );

    if max_error > tolerance {
        anyhow::bail!(
            "effector error {:.3e} exceeds tolerance {:.3e}",
            max_error,
            tolerance
        );
    }
    if unsolved > 0 {
        warn!("{} reachable targets were not solved", unsolved);
    }

    Ok(())
}

#[derive(Parser)]
#[command(author = "Copyright (C) 2024 Laixer Equipment B.V.")]
#[command(version, propagate_version = true)]
#[command(about = "Planar manipulator kinematics utility", long_about = None)]
struct Args {
    /// Configuration file.
    #[arg(
        short = 'c',
        long = "config",
        alias = "conf",
        default_value = manipulator_core::consts::DEFAULT_CONFIG_PATH,
        value_name = "FILE"
    )]
    config: PathBuf,

    /// Read and print angles in degrees.
    #[arg(long)]
    degrees: bool,

    /// Quiet output (no logging).
    #[arg(long)]
    quiet: bool,

    /// Level of verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Kinematic commands.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Joint positions for the given joint angles.
    #[command(allow_negative_numbers = true)]
    Fk {
        /// Shoulder angle.
        shoulder: f64,
        /// Elbow angle.
        elbow: f64,
        /// Wrist angle.
        wrist: f64,
    },
    /// Joint angles that put the effector on the target.
    #[command(allow_negative_numbers = true)]
    Ik {
        /// Target X.
        x: f64,
        /// Target Y.
        y: f64,
        /// Angle between the palm and the horizontal.
        alpha: f64,
    },
    /// Angle between sides a and b of a triangle.
    #[command(allow_negative_numbers = true)]
    Triangle {
        /// First adjacent side.
        a: f64,
        /// Second adjacent side.
        b: f64,
        /// Opposite side.
        c: f64,
    },
    /// Show the link lengths and reach of the arm.
    Reach,
    /// Verify inverse against forward kinematics on random poses.
    Verify {
        /// Number of random poses.
        #[arg(long, default_value_t = 10_000)]
        samples: usize,
        /// Random seed.
        #[arg(long)]
        seed: Option<u64>,
        /// Maximum effector error.
        #[arg(long, default_value_t = 1e-9)]
        tolerance: f64,
    },
    /// Replay recorded input events against an interactive session.
    Replay {
        /// Event script (JSON).
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    use log::LevelFilter;

    let args = Args::parse();

    let log_config = simplelog::ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .build();

    let log_level = if args.quiet {
        LevelFilter::Off
    } else {
        match args.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    simplelog::TermLogger::init(
        log_level,
        log_config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let config = load_config(&args.config)?;
    log::trace!("{:#?}", config);

    let unit = Unit {
        degrees: args.degrees,
    };
    let manipulator = Manipulator::new(config.arm)?;

    match args.command {
        Command::Fk {
            shoulder,
            elbow,
            wrist,
        } => {
            let angles = JointAngles::new(
                unit.input(shoulder),
                unit.input(elbow),
                unit.input(wrist),
            );
            debug!("{}", angles);

            println!("{}", format_positions(&manipulator.forward(&angles)));
        }
        Command::Ik { x, y, alpha } => {
            let target = Target::new(x, y, unit.input(alpha));
            debug!("Target: {}", target);

            match manipulator.inverse(&target) {
                Ok(angles) => println!("{}", unit.format_angles(&angles)),
                Err(e) => {
                    println!("{} {}", Red.bold().paint("Unreachable"), target);
                    return Err(e.into());
                }
            }
        }
        Command::Triangle { a, b, c } => {
            let angle = angle_between(a, b, c)?;
            println!("{}", unit.format(angle));
        }
        Command::Reach => {
            let lengths: &LinkLengths = manipulator.lengths();
            let (inner, outer) = manipulator.wrist_annulus();

            println!("{}", lengths);
            println!("{} {:.2}", Green.paint("Reach:"), manipulator.reach());
            println!(
                "{} {:.2} .. {:.2}",
                Green.paint("Wrist annulus:"),
                inner,
                outer
            );
        }
        Command::Verify {
            samples,
            seed,
            tolerance,
        } => {
            verify(&manipulator, samples, seed, tolerance)?;
        }
        Command::Replay { file } => {
            let script = replay::Script::load(&file)?;
            let viewport = script.viewport();

            let mut session = Session::new(manipulator, &config.session);
            if let Err(e) = session.update() {
                debug!("Initial target not solved: {}", e);
            }

            for event in script.iter() {
                let status = match replay::apply(&mut session, &viewport, event) {
                    Ok(_) => Green.paint("ok"),
                    Err(_) => Red.paint("kept"),
                };

                println!(
                    "{} [{}] {}",
                    event,
                    status,
                    unit.format_angles(session.angles())
                );
                println!("  {}", format_positions(&session.positions()));
            }
        }
    }

    Ok(())
}
