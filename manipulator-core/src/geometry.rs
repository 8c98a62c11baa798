use nalgebra::Vector2;

use crate::{consts::TRIANGLE_COSINE_TOLERANCE, Error, Result};

/// Calculate the angle of a triangle using the law of cosines.
///
/// Returns the angle in radians between the sides `a` and `b`, where `c` is
/// the side opposite of that angle. Degenerate triangles are accepted: two
/// equal sides with `c = 0` yield an angle of zero and collinear sides with
/// `c = a + b` yield an angle of `π`.
///
/// Returns [`Error::InvalidTriangle`] if `a` or `b` is not strictly positive,
/// if `c` is negative, or if the lengths violate the triangle inequality.
pub fn angle_between(a: f64, b: f64, c: f64) -> Result<f64> {
    let invalid = Error::InvalidTriangle { a, b, c };

    if a.is_nan() || b.is_nan() || c.is_nan() || a <= 0.0 || b <= 0.0 || c < 0.0 {
        return Err(invalid);
    }

    // Scale the sides to the longest one so the squares stay representable.
    let scale = a.max(b).max(c);
    let (a, b, c) = (a / scale, b / scale, c / scale);

    let numerator = a.powi(2) + b.powi(2) - c.powi(2);
    let denominator = 2.0 * a * b;

    let cosine = numerator / denominator;
    if cosine.is_nan() || cosine.abs() > 1.0 + TRIANGLE_COSINE_TOLERANCE {
        return Err(invalid);
    }

    Ok(cosine.clamp(-1.0, 1.0).acos())
}

/// Vector of the given length along the heading.
#[inline]
pub fn polar(length: f64, heading: f64) -> Vector2<f64> {
    Vector2::new(length * heading.cos(), length * heading.sin())
}
