use nalgebra::Point2;

/// Joint angles of the manipulator in radians.
///
/// Each angle is the bend of its joint relative to the preceding link. The
/// shoulder angle is measured from the horizontal, the elbow angle from the
/// reversed direction of the upper arm and the wrist angle from the reversed
/// direction of the forearm. Angles are not normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointAngles {
    /// Shoulder joint angle.
    pub shoulder: f64,
    /// Elbow joint angle.
    pub elbow: f64,
    /// Wrist joint angle.
    pub wrist: f64,
}

impl JointAngles {
    /// Construct new joint angles.
    pub fn new(shoulder: f64, elbow: f64, wrist: f64) -> Self {
        Self {
            shoulder,
            elbow,
            wrist,
        }
    }

    /// Joint angles with every joint undefined.
    ///
    /// For consumers that need a single value for both solved and unsolved
    /// poses. Prefer matching on the solver result.
    pub fn undefined() -> Self {
        Self::new(f64::NAN, f64::NAN, f64::NAN)
    }

    /// Returns true if any of the joint angles is undefined.
    pub fn is_undefined(&self) -> bool {
        self.shoulder.is_nan() || self.elbow.is_nan() || self.wrist.is_nan()
    }

    /// Heading of the palm relative to the horizontal.
    pub fn effector_heading(&self) -> f64 {
        self.shoulder + self.elbow + self.wrist - 2.0 * std::f64::consts::PI
    }
}

impl From<(f64, f64, f64)> for JointAngles {
    fn from((shoulder, elbow, wrist): (f64, f64, f64)) -> Self {
        Self::new(shoulder, elbow, wrist)
    }
}

impl From<[f64; 3]> for JointAngles {
    fn from([shoulder, elbow, wrist]: [f64; 3]) -> Self {
        Self::new(shoulder, elbow, wrist)
    }
}

impl std::fmt::Display for JointAngles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Shoulder: {:.2}rad {:.2}° Elbow: {:.2}rad {:.2}° Wrist: {:.2}rad {:.2}°",
            self.shoulder,
            self.shoulder.to_degrees(),
            self.elbow,
            self.elbow.to_degrees(),
            self.wrist,
            self.wrist.to_degrees()
        )
    }
}

/// Positions of the joints in the world frame.
///
/// The shoulder is implicitly at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointPositions {
    /// Elbow joint position.
    pub elbow: Point2<f64>,
    /// Wrist joint position.
    pub wrist: Point2<f64>,
    /// Effector (palm end) position.
    pub effector: Point2<f64>,
}

impl JointPositions {
    /// Construct new joint positions.
    pub fn new(elbow: Point2<f64>, wrist: Point2<f64>, effector: Point2<f64>) -> Self {
        Self {
            elbow,
            wrist,
            effector,
        }
    }

    /// Iterate over the joints from the shoulder to the effector.
    pub fn iter(&self) -> impl Iterator<Item = Point2<f64>> {
        [Point2::origin(), self.elbow, self.wrist, self.effector].into_iter()
    }

    /// Lengths of the upper arm, forearm and palm as placed.
    pub fn segment_lengths(&self) -> (f64, f64, f64) {
        (
            nalgebra::distance(&Point2::origin(), &self.elbow),
            nalgebra::distance(&self.elbow, &self.wrist),
            nalgebra::distance(&self.wrist, &self.effector),
        )
    }
}

impl std::fmt::Display for JointPositions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Elbow: ({:.2}, {:.2}) Wrist: ({:.2}, {:.2}) Effector: ({:.2}, {:.2})",
            self.elbow.x,
            self.elbow.y,
            self.wrist.x,
            self.wrist.y,
            self.effector.x,
            self.effector.y
        )
    }
}

/// Effector target in the world frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    /// The point in space.
    pub point: Point2<f64>,
    /// Angle between the palm and the horizontal.
    ///
    /// Positive angles tilt the palm downwards.
    pub alpha: f64,
}

impl Default for Target {
    fn default() -> Self {
        Self {
            point: Point2::origin(),
            alpha: 0.0,
        }
    }
}

impl Target {
    /// Construct a new target
    pub fn new(x: f64, y: f64, alpha: f64) -> Self {
        Self {
            point: Point2::new(x, y),
            alpha,
        }
    }
}

impl From<(f64, f64, f64)> for Target {
    fn from((x, y, alpha): (f64, f64, f64)) -> Self {
        Self::new(x, y, alpha)
    }
}

impl From<[f64; 3]> for Target {
    fn from([x, y, alpha]: [f64; 3]) -> Self {
        Self::new(x, y, alpha)
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({:.2}, {:.2}) [{:.2}rad {:.2}°]",
            self.point.x,
            self.point.y,
            self.alpha,
            self.alpha.to_degrees()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_angles() {
        assert!(JointAngles::undefined().is_undefined());
        assert!(JointAngles::new(0.0, f64::NAN, 0.0).is_undefined());
        assert!(!JointAngles::new(0.0, 0.0, 0.0).is_undefined());
    }

    #[test]
    fn test_angles_from_tuple() {
        let angles = JointAngles::from((0.1, 0.2, 0.3));
        assert_eq!(angles, JointAngles::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_segment_lengths() {
        let positions = JointPositions::new(
            Point2::new(3.0, 4.0),
            Point2::new(3.0, 6.0),
            Point2::new(4.0, 6.0),
        );

        let (upper_arm, forearm, palm) = positions.segment_lengths();
        assert!((upper_arm - 5.0).abs() < f64::EPSILON);
        assert!((forearm - 2.0).abs() < f64::EPSILON);
        assert!((palm - 1.0).abs() < f64::EPSILON);

        let chain: Vec<_> = positions.iter().collect();
        assert_eq!(chain.len(), 4);
        assert_eq!(chain[0], Point2::origin());
        assert_eq!(chain[3], Point2::new(4.0, 6.0));
    }

    #[test]
    fn test_target_display() {
        let target = Target::new(220.0, -100.0, 0.0);
        assert_eq!(target.to_string(), "(220.00, -100.00) [0.00rad 0.00°]");
    }
}
