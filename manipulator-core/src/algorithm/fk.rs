use std::f64::consts::PI;

use nalgebra::Point2;

use crate::{geometry::polar, JointAngles, JointPositions};

/// Planar forward kinematics.
///
/// Places each link at its bend angle relative to the reversed direction of
/// the preceding link. Any real angle is accepted.
pub struct ForwardKinematics {
    l1: f64,
    l2: f64,
    l3: f64,
}

impl ForwardKinematics {
    pub fn new(l1: f64, l2: f64, l3: f64) -> Self {
        Self { l1, l2, l3 }
    }

    pub fn solve(&self, angles: &JointAngles) -> JointPositions {
        let forearm_heading = angles.shoulder + angles.elbow - PI;
        let palm_heading = angles.effector_heading();

        let elbow = Point2::origin() + polar(self.l1, angles.shoulder);
        let wrist = elbow + polar(self.l2, forearm_heading);
        let effector = wrist + polar(self.l3, palm_heading);

        trace!(
            "FK effector: ({:.2}, {:.2}) heading {:5.2}rad",
            effector.x,
            effector.y,
            palm_heading
        );

        JointPositions::new(elbow, wrist, effector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{rngs::StdRng, Rng, SeedableRng};

    const L1: f64 = crate::consts::DEFAULT_UPPER_ARM_LENGTH;
    const L2: f64 = crate::consts::DEFAULT_FOREARM_LENGTH;
    const L3: f64 = crate::consts::DEFAULT_PALM_LENGTH;

    fn fk() -> ForwardKinematics {
        ForwardKinematics::new(L1, L2, L3)
    }

    fn assert_segments(positions: &JointPositions) {
        let (upper_arm, forearm, palm) = positions.segment_lengths();

        let tolerance = 1e-5;
        assert!((upper_arm - L1).abs() < tolerance, "upper arm {}", upper_arm);
        assert!((forearm - L2).abs() < tolerance, "forearm {}", forearm);
        assert!((palm - L3).abs() < tolerance, "palm {}", palm);
    }

    #[test]
    fn test_effector_fixtures() {
        let fixtures = [
            ((PI / 2.0, PI / 2.0, PI), (L2 + L3, L1)),
            ((0.0, PI, PI), (L2 + L1 + L3, 0.0)),
            ((0.0, 0.0, 0.0), (-L2 + L1 + L3, 0.0)),
            ((PI / 2.0, PI, PI), (0.0, L2 + L1 + L3)),
            ((-PI / 2.0, 0.0, PI), (0.0, L2 - L1 + L3)),
            ((PI / 2.0, PI / 2.0, PI / 2.0), (L2, L1 - L3)),
            ((PI / 2.0, 3.0 * PI / 2.0, 3.0 * PI / 2.0), (-L2, L1 - L3)),
            ((PI / 2.0, PI, 3.0 * PI), (0.0, L2 + L1 + L3)),
        ];

        let tolerance = 1e-9;
        for (angles, (x, y)) in fixtures {
            let positions = fk().solve(&angles.into());

            assert!(
                (positions.effector.x - x).abs() < tolerance,
                "effector x {} for {:?}",
                positions.effector.x,
                angles
            );
            assert!(
                (positions.effector.y - y).abs() < tolerance,
                "effector y {} for {:?}",
                positions.effector.y,
                angles
            );
            assert_segments(&positions);
        }
    }

    #[test]
    fn test_elbow_on_shoulder_heading() {
        let positions = fk().solve(&JointAngles::new(PI / 2.0, PI / 2.0, PI));

        assert!(positions.elbow.x.abs() < 1e-9);
        assert!((positions.elbow.y - L1).abs() < 1e-9);
        assert!((positions.wrist.x - L2).abs() < 1e-9);
        assert!((positions.wrist.y - L1).abs() < 1e-9);
    }

    #[test]
    fn test_segment_lengths_random() {
        let mut rng = StdRng::seed_from_u64(0x6A);

        for _ in 0..1_000 {
            let angles = JointAngles::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            );

            assert_segments(&fk().solve(&angles));
        }
    }

    #[test]
    fn test_wrist_periodicity() {
        let mut rng = StdRng::seed_from_u64(0x6B);

        for _ in 0..1_000 {
            let shoulder = rng.gen_range(-2.0 * PI..2.0 * PI);
            let elbow = rng.gen_range(-2.0 * PI..2.0 * PI);
            let wrist = rng.gen_range(-2.0 * PI..2.0 * PI);

            let positions = fk().solve(&JointAngles::new(shoulder, elbow, wrist));
            let wrapped = fk().solve(&JointAngles::new(shoulder, elbow, wrist + 2.0 * PI));

            assert!(nalgebra::distance(&positions.effector, &wrapped.effector) < 1e-9);
            assert_eq!(positions.wrist, wrapped.wrist);
        }
    }
}
