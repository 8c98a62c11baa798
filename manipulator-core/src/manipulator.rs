use nalgebra::Point2;
use serde_derive::Deserialize;

use crate::{
    algorithm::{ForwardKinematics, InverseKinematics},
    consts, Error, JointAngles, JointPositions, Result, Target,
};

/// Link lengths of the manipulator.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct LinkLengths {
    /// Shoulder to elbow.
    pub upper_arm: f64,
    /// Elbow to wrist.
    pub forearm: f64,
    /// Wrist to effector.
    pub palm: f64,
}

impl Default for LinkLengths {
    fn default() -> Self {
        Self {
            upper_arm: consts::DEFAULT_UPPER_ARM_LENGTH,
            forearm: consts::DEFAULT_FOREARM_LENGTH,
            palm: consts::DEFAULT_PALM_LENGTH,
        }
    }
}

impl LinkLengths {
    /// Construct new link lengths.
    ///
    /// Returns an error if any of the lengths is not strictly positive.
    pub fn new(upper_arm: f64, forearm: f64, palm: f64) -> Result<Self> {
        let lengths = Self {
            upper_arm,
            forearm,
            palm,
        };
        lengths.validate()?;

        Ok(lengths)
    }

    /// Check that every link has a strictly positive finite length.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("upper arm", self.upper_arm),
            ("forearm", self.forearm),
            ("palm", self.palm),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidLinkLength { name, value });
            }
        }

        Ok(())
    }

    /// Total length of the stretched arm.
    #[inline]
    pub fn reach(&self) -> f64 {
        self.upper_arm + self.forearm + self.palm
    }
}

impl std::fmt::Display for LinkLengths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Upper arm: {:.2} Forearm: {:.2} Palm: {:.2}",
            self.upper_arm, self.forearm, self.palm
        )
    }
}

/// Planar three link manipulator.
pub struct Manipulator {
    lengths: LinkLengths,
    fk: ForwardKinematics,
    ik: InverseKinematics,
}

impl Default for Manipulator {
    fn default() -> Self {
        Self::with_lengths(LinkLengths::default())
    }
}

impl Manipulator {
    /// Construct a new manipulator.
    ///
    /// Returns an error if any of the link lengths is not strictly positive.
    pub fn new(lengths: LinkLengths) -> Result<Self> {
        lengths.validate()?;

        Ok(Self::with_lengths(lengths))
    }

    fn with_lengths(lengths: LinkLengths) -> Self {
        Self {
            lengths,
            fk: ForwardKinematics::new(lengths.upper_arm, lengths.forearm, lengths.palm),
            ik: InverseKinematics::new(lengths.upper_arm, lengths.forearm, lengths.palm),
        }
    }

    /// Retrieve the link lengths.
    #[inline]
    pub fn lengths(&self) -> &LinkLengths {
        &self.lengths
    }

    /// Positions of the joints for the given angles.
    #[inline]
    pub fn forward(&self, angles: &JointAngles) -> JointPositions {
        self.fk.solve(angles)
    }

    /// Joint angles that put the effector on the target.
    #[inline]
    pub fn inverse(&self, target: &Target) -> Result<JointAngles> {
        self.ik.solve(target)
    }

    /// Maximum distance from the shoulder to the effector.
    #[inline]
    pub fn reach(&self) -> f64 {
        self.ik.reach()
    }

    /// Returns true if the point lies within the reachable disc.
    ///
    /// This does not guarantee a solution for every effector orientation.
    pub fn is_reachable(&self, point: &Point2<f64>) -> bool {
        nalgebra::distance(&Point2::origin(), point) <= self.reach()
    }

    /// Inner and outer radius of the annulus the wrist can reach.
    pub fn wrist_annulus(&self) -> (f64, f64) {
        (
            (self.lengths.upper_arm - self.lengths.forearm).abs(),
            self.lengths.upper_arm + self.lengths.forearm,
        )
    }
}
