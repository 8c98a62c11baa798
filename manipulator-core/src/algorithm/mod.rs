pub mod fk;
pub mod ik;

pub use self::fk::ForwardKinematics;
pub use self::ik::InverseKinematics;
