use std::{error, fmt};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// The side lengths do not form a triangle.
    ///
    /// Either an adjacent side is not strictly positive, the opposite side
    /// is negative, or the lengths violate the triangle inequality.
    InvalidTriangle { a: f64, b: f64, c: f64 },

    /// The target lies outside the reach of the kinematic chain.
    ///
    /// The distance is measured from the shoulder to whatever point the
    /// chain failed to reach; the reach is the length of that chain.
    Unreachable { distance: f64, reach: f64 },

    /// A link length is not a strictly positive finite number.
    InvalidLinkLength { name: &'static str, value: f64 },

    /// The configuration could not be parsed.
    Config(String),

    /// An I/O error occured.
    ///
    /// The type of I/O error is determined by the inner `io::ErrorKind`.
    Io(std::io::ErrorKind),
}

impl Error {
    /// Returns true if the error signals a target out of reach.
    #[inline]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Error::Unreachable { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTriangle { a, b, c } => {
                write!(f, "sides ({}, {}, {}) do not form a triangle", a, b, c)
            }
            Error::Unreachable { distance, reach } => write!(
                f,
                "target out of reach: distance {:.2} exceeds reach {:.2}",
                distance, reach
            ),
            Error::InvalidLinkLength { name, value } => {
                write!(f, "{} length must be strictly positive, got {}", name, value)
            }
            Error::Config(e) => write!(f, "invalid configuration: {}", e),
            Error::Io(e) => write!(f, "io error: {:?}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Io(value.kind())
    }
}

impl From<toml::de::Error> for Error {
    fn from(value: toml::de::Error) -> Self {
        Error::Config(value.message().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_unreachable() {
        let error = Error::Unreachable {
            distance: 400.0,
            reach: 360.0,
        };
        assert!(error.is_unreachable());

        let error = Error::InvalidTriangle {
            a: 1.0,
            b: 1.0,
            c: 3.0,
        };
        assert!(!error.is_unreachable());
    }

    #[test]
    fn test_display() {
        let error = Error::Unreachable {
            distance: 400.0,
            reach: 360.0,
        };
        assert_eq!(
            error.to_string(),
            "target out of reach: distance 400.00 exceeds reach 360.00"
        );

        let error = Error::InvalidLinkLength {
            name: "forearm",
            value: -1.0,
        };
        assert_eq!(
            error.to_string(),
            "forearm length must be strictly positive, got -1"
        );
    }

    #[test]
    fn test_from_io() {
        let error: Error = std::io::Error::from(std::io::ErrorKind::NotFound).into();
        assert_eq!(error, Error::Io(std::io::ErrorKind::NotFound));
    }
}
