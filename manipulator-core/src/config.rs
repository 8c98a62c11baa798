use std::path::Path;

use serde_derive::Deserialize;

use crate::{consts, JointAngles, LinkLengths, Result, Target};

/// Interactive session configuration.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Joint rotation per jog step in radians.
    pub jog_step: f64,
    /// Effector rotation per scroll notch in radians.
    pub alpha_step: f64,
    /// Initial target X.
    pub x: f64,
    /// Initial target Y.
    pub y: f64,
    /// Initial effector orientation.
    pub alpha: f64,
    /// Initial shoulder angle.
    pub shoulder: f64,
    /// Initial elbow angle.
    pub elbow: f64,
    /// Initial wrist angle.
    pub wrist: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        use std::f64::consts::PI;

        Self {
            jog_step: consts::DEFAULT_JOG_STEP,
            alpha_step: consts::DEFAULT_ALPHA_STEP,
            x: 220.0,
            y: -100.0,
            alpha: 0.05,
            shoulder: PI / 2.0,
            elbow: 3.0 * PI / 4.0,
            wrist: 2.0 * PI / 3.0,
        }
    }
}

impl SessionConfig {
    /// Initial effector target.
    pub fn target(&self) -> Target {
        Target::new(self.x, self.y, self.alpha)
    }

    /// Initial joint angles.
    pub fn angles(&self) -> JointAngles {
        JointAngles::new(self.shoulder, self.elbow, self.wrist)
    }
}

/// Manipulator configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ManipulatorConfig {
    /// Link lengths.
    pub arm: LinkLengths,
    /// Session configuration.
    pub session: SessionConfig,
}

impl ManipulatorConfig {
    /// Check the configuration for values the solvers cannot work with.
    pub fn validate(&self) -> Result<()> {
        self.arm.validate()
    }
}

impl std::str::FromStr for ManipulatorConfig {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;

        Ok(config)
    }
}

/// Load a TOML configuration from disk.
pub fn from_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let str = std::fs::read_to_string(path)?;

    Ok(toml::from_str(&str)?)
}
