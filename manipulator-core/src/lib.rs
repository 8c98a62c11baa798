// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

//! Kinematics for a planar manipulator with three revolute joints.
//!
//! The arm is rooted at the shoulder joint, which is the origin of the world
//! frame. The shoulder carries the upper arm, the elbow carries the forearm
//! and the wrist carries the palm. The tip of the palm is the effector.
//!
//! The [`algorithm`] module holds the forward and inverse solvers. Both are
//! pure and stateless; the [`Manipulator`] bundles them for a fixed set of
//! [`LinkLengths`]. The [`session`] module keeps the pose of an interactively
//! steered arm between input events.

pub mod algorithm;
pub mod config;
pub mod geometry;
pub mod session;

mod error;
mod manipulator;
mod pose;

#[macro_use]
extern crate log;

pub use self::config::{from_file, ManipulatorConfig, SessionConfig};
pub use self::error::{Error, Result};
pub use self::manipulator::{LinkLengths, Manipulator};
pub use self::pose::{JointAngles, JointPositions, Target};

pub use nalgebra;

/// Manipulator constants.
pub mod consts {
    /// Default configuration file.
    pub const DEFAULT_CONFIG_PATH: &str = "/etc/manipulator.toml";

    /// Default upper arm length (shoulder to elbow).
    pub const DEFAULT_UPPER_ARM_LENGTH: f64 = 150.0;

    /// Default forearm length (elbow to wrist).
    pub const DEFAULT_FOREARM_LENGTH: f64 = 120.0;

    /// Default palm length (wrist to effector).
    pub const DEFAULT_PALM_LENGTH: f64 = 90.0;

    /// Default joint rotation per jog step in radians.
    pub const DEFAULT_JOG_STEP: f64 = std::f64::consts::PI / 250.0;

    /// Default effector rotation per scroll notch in radians.
    pub const DEFAULT_ALPHA_STEP: f64 = std::f64::consts::PI / 250.0;

    /// Largest excursion of a law of cosines argument outside `[-1, 1]`
    /// that is accepted as floating point rounding.
    pub const TRIANGLE_COSINE_TOLERANCE: f64 = 1e-12;
}
