use nalgebra::Point2;

use crate::{geometry::angle_between, Error, JointAngles, Result, Target};

/// Planar inverse kinematics.
///
/// The palm is backed out of the target along the requested orientation,
/// which leaves a two link chain (upper arm and forearm) that must reach the
/// wrist. That chain is solved with the law of cosines. Of the two possible
/// elbow configurations only the one with the upper arm swung counter
/// clockwise from the wrist direction is returned.
pub struct InverseKinematics {
    l1: f64,
    l2: f64,
    l3: f64,
}

impl InverseKinematics {
    pub fn new(l1: f64, l2: f64, l3: f64) -> Self {
        Self { l1, l2, l3 }
    }

    /// Maximum distance from the shoulder to the effector.
    #[inline]
    pub fn reach(&self) -> f64 {
        self.l1 + self.l2 + self.l3
    }

    pub fn solve(&self, target: &Target) -> Result<JointAngles> {
        let distance = nalgebra::distance(&Point2::origin(), &target.point);
        debug!("IK target distance:  {:.2}", distance);

        if distance > self.reach() {
            return Err(Error::Unreachable {
                distance,
                reach: self.reach(),
            });
        }

        let wrist_point = Point2::new(
            target.point.x - self.l3 * target.alpha.cos(),
            target.point.y + self.l3 * target.alpha.sin(),
        );
        debug!(
            "IK wrist point:      ({:.2}, {:.2})",
            wrist_point.x, wrist_point.y
        );

        // L4 is the leg between the origin and the wrist.
        let l4 = nalgebra::distance(&Point2::origin(), &wrist_point);
        debug!("IK vector length L4: {:.2}", l4);

        // The wrist can be out of reach of the upper arm and forearm even if
        // the effector target is not.
        let wrist_unreachable = |_: Error| Error::Unreachable {
            distance: l4,
            reach: self.l1 + self.l2,
        };

        let elbow = angle_between(self.l1, self.l2, l4).map_err(wrist_unreachable)?;
        debug!(
            "IK elbow:            {:5.2}rad {:5.2}°",
            elbow,
            elbow.to_degrees()
        );

        let theta_1p1 = wrist_point.y.atan2(wrist_point.x);
        let theta_1p2 = angle_between(self.l1, l4, self.l2).map_err(wrist_unreachable)?;

        let shoulder = theta_1p1 + theta_1p2;
        debug!(
            "IK shoulder:         {:5.2}rad {:5.2}°",
            shoulder,
            shoulder.to_degrees()
        );

        let wrist = -(target.alpha + elbow + shoulder);
        debug!(
            "IK wrist:            {:5.2}rad {:5.2}°",
            wrist,
            wrist.to_degrees()
        );

        Ok(JointAngles::new(shoulder, elbow, wrist))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use rand::{rngs::StdRng, Rng, SeedableRng};

    use crate::algorithm::ForwardKinematics;

    const L1: f64 = crate::consts::DEFAULT_UPPER_ARM_LENGTH;
    const L2: f64 = crate::consts::DEFAULT_FOREARM_LENGTH;
    const L3: f64 = crate::consts::DEFAULT_PALM_LENGTH;

    fn ik() -> InverseKinematics {
        InverseKinematics::new(L1, L2, L3)
    }

    fn fk() -> ForwardKinematics {
        ForwardKinematics::new(L1, L2, L3)
    }

    /// Elbow angle away from a stretched or folded arm.
    fn sample_elbow(rng: &mut StdRng) -> f64 {
        let elbow = rng.gen_range(0.3..PI - 0.3);
        if rng.gen_bool(0.5) {
            elbow
        } else {
            2.0 * PI - elbow
        }
    }

    #[test]
    fn test_solve_known_pose() {
        let angles = ik().solve(&Target::new(L2 + L3, L1, 0.0)).unwrap();

        let tolerance = 1e-9;
        assert!((angles.shoulder - PI / 2.0).abs() < tolerance);
        assert!((angles.elbow - PI / 2.0).abs() < tolerance);
        assert!((angles.wrist + PI).abs() < tolerance);
    }

    #[test]
    fn test_solve_stretched_arm() {
        let angles = ik().solve(&Target::new(L1 + L2 + L3, 0.0, 0.0)).unwrap();

        let tolerance = 1e-6;
        assert!(angles.shoulder.abs() < tolerance);
        assert!((angles.elbow - PI).abs() < tolerance);
        assert!((angles.wrist + PI).abs() < tolerance);
    }

    #[test]
    fn test_round_trip() {
        let mut rng = StdRng::seed_from_u64(0x6C);

        for _ in 0..10_000 {
            let angles = JointAngles::new(
                rng.gen_range(-PI..PI),
                sample_elbow(&mut rng),
                rng.gen_range(-PI..PI),
            );
            let effector = fk().solve(&angles).effector;
            let alpha = -angles.effector_heading();

            let solved = ik()
                .solve(&Target::new(effector.x, effector.y, alpha))
                .unwrap();
            let actual = fk().solve(&solved).effector;

            let tolerance = 1e-9;
            assert!((actual.x - effector.x).abs() < tolerance, "x for {:?}", angles);
            assert!((actual.y - effector.y).abs() < tolerance, "y for {:?}", angles);
        }
    }

    #[test]
    fn test_round_trip_orientation() {
        let mut rng = StdRng::seed_from_u64(0x6D);

        for _ in 0..1_000 {
            let angles = JointAngles::new(
                rng.gen_range(-PI..PI),
                sample_elbow(&mut rng),
                rng.gen_range(-PI..PI),
            );
            let effector = fk().solve(&angles).effector;
            let alpha = -angles.effector_heading();

            let solved = ik()
                .solve(&Target::new(effector.x, effector.y, alpha))
                .unwrap();

            let heading_error = (solved.effector_heading() + alpha).sin();
            assert!(heading_error.abs() < 1e-9);
        }
    }

    #[test]
    fn test_unreachable() {
        let mut rng = StdRng::seed_from_u64(0x6E);

        for _ in 0..1_000 {
            let heading = rng.gen_range(-PI..PI);
            let distance = rng.gen_range(ik().reach() + 1e-6..4.0 * ik().reach());
            let alpha = rng.gen_range(-2.0 * PI..2.0 * PI);

            let target = Target::new(
                distance * heading.cos(),
                distance * heading.sin(),
                alpha,
            );

            match ik().solve(&target) {
                Err(Error::Unreachable { reach, .. }) => {
                    assert!((reach - (L1 + L2 + L3)).abs() < f64::EPSILON)
                }
                other => panic!("expected unreachable, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_wrist_beyond_reach() {
        // The effector is in reach, but the palm points away from the shoulder.
        let result = ik().solve(&Target::new(L1 + L2, 0.0, PI));
        assert_eq!(
            result,
            Err(Error::Unreachable {
                distance: L1 + L2 + L3,
                reach: L1 + L2,
            })
        );
    }

    #[test]
    fn test_wrist_inside_dead_zone() {
        // The wrist ends up closer to the shoulder than |L1 - L2|.
        let result = ik().solve(&Target::new(L3 + 10.0, 0.0, 0.0));
        assert!(matches!(result, Err(Error::Unreachable { .. })));
    }
}
