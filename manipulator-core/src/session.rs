//! Interactive manipulator steering.
//!
//! A [`Session`] owns the current effector target and joint angles of an arm
//! that is driven by input events: jogging a joint, pointing at a target and
//! scrolling the effector orientation. Each event updates the pose in place.
//! The [`Viewport`] maps window coordinates onto the world frame.

use nalgebra::Point2;
use serde_derive::Deserialize;

use crate::{JointAngles, JointPositions, Manipulator, Result, SessionConfig, Target};

/// Joint that can be jogged directly.
///
/// The wrist is always derived from the effector orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Joint {
    /// Shoulder joint.
    Shoulder,
    /// Elbow joint.
    Elbow,
}

impl std::fmt::Display for Joint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Joint::Shoulder => write!(f, "shoulder"),
            Joint::Elbow => write!(f, "elbow"),
        }
    }
}

pub struct Session {
    manipulator: Manipulator,
    target: Target,
    angles: JointAngles,
    jog_step: f64,
    alpha_step: f64,
}

impl Session {
    /// Construct a new session.
    ///
    /// The initial pose is taken from the configuration as is; the target is
    /// not solved until the first update.
    pub fn new(manipulator: Manipulator, config: &SessionConfig) -> Self {
        Self {
            manipulator,
            target: config.target(),
            angles: config.angles(),
            jog_step: config.jog_step,
            alpha_step: config.alpha_step,
        }
    }

    #[inline]
    pub fn manipulator(&self) -> &Manipulator {
        &self.manipulator
    }

    /// Current effector target.
    #[inline]
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Current joint angles.
    #[inline]
    pub fn angles(&self) -> &JointAngles {
        &self.angles
    }

    /// Current joint positions.
    pub fn positions(&self) -> JointPositions {
        self.manipulator.forward(&self.angles)
    }

    /// Rotate a joint by a number of jog steps.
    ///
    /// Positive steps rotate counter clockwise. The wrist follows so that
    /// the effector keeps its orientation.
    pub fn jog(&mut self, joint: Joint, steps: i32) {
        let delta = self.jog_step * steps as f64;

        match joint {
            Joint::Shoulder => self.angles.shoulder += delta,
            Joint::Elbow => self.angles.elbow += delta,
        }

        self.angles.wrist = -(self.target.alpha + self.angles.shoulder + self.angles.elbow);

        debug!("Jog {} by {:+.3}rad: {}", joint, delta, self.angles);
    }

    /// Move the effector target and solve the pose.
    pub fn point_to(&mut self, x: f64, y: f64) -> Result<()> {
        self.target.point = Point2::new(x, y);
        self.update()
    }

    /// Tilt the effector by one step in the direction of the scroll delta.
    pub fn scroll(&mut self, delta: f64) -> Result<()> {
        let sign = if delta > 0.0 {
            1.0
        } else if delta < 0.0 {
            -1.0
        } else {
            0.0
        };

        self.target.alpha += self.alpha_step * sign;
        self.update()
    }

    /// Solve the pose for the current target.
    ///
    /// If the target cannot be reached the previous pose is kept.
    pub fn update(&mut self) -> Result<()> {
        match self.manipulator.inverse(&self.target) {
            Ok(angles) => {
                self.angles = angles;
                Ok(())
            }
            Err(e) => {
                warn!("Keeping pose, target {} is ignored: {}", self.target, e);
                Err(e)
            }
        }
    }
}

/// Mapping between window and world coordinates.
///
/// Window coordinates grow downwards from the top left corner, world
/// coordinates grow upwards from the shoulder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    shoulder: Point2<f64>,
}

impl Viewport {
    /// Viewport with the shoulder in the center of the window.
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_shoulder(Point2::new(width / 2.0, height / 2.0))
    }

    /// Viewport with the shoulder at the given window position.
    pub fn with_shoulder(shoulder: Point2<f64>) -> Self {
        Self { shoulder }
    }

    /// Window position of the shoulder.
    #[inline]
    pub fn shoulder(&self) -> &Point2<f64> {
        &self.shoulder
    }

    pub fn to_window(&self, point: &Point2<f64>) -> Point2<f64> {
        Point2::new(point.x + self.shoulder.x, self.shoulder.y - point.y)
    }

    pub fn to_world(&self, point: &Point2<f64>) -> Point2<f64> {
        Point2::new(point.x - self.shoulder.x, self.shoulder.y - point.y)
    }
}
