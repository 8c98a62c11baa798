use std::path::Path;

use manipulator_core::{
    nalgebra::Point2,
    session::{Joint, Session, Viewport},
};
use serde_derive::Deserialize;

/// Recorded input event.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Event {
    /// Rotate a joint by a number of jog steps.
    Jog { joint: Joint, steps: i32 },
    /// Pointer moved to a window position.
    Pointer { x: f64, y: f64 },
    /// Effector target in world coordinates.
    Target { x: f64, y: f64 },
    /// Scroll wheel moved.
    Scroll { delta: f64 },
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::Jog { joint, steps } => write!(f, "Jog {} {:+}", joint, steps),
            Event::Pointer { x, y } => write!(f, "Pointer ({:.0}, {:.0})", x, y),
            Event::Target { x, y } => write!(f, "Target ({:.2}, {:.2})", x, y),
            Event::Scroll { delta } => write!(f, "Scroll {:+}", delta),
        }
    }
}

fn default_window() -> (f64, f64) {
    (800.0, 600.0)
}

/// Sequence of input events replayed against a session.
#[derive(Debug, Deserialize)]
pub struct Script {
    /// Window size the pointer events were recorded in.
    #[serde(default = "default_window")]
    window: (f64, f64),
    /// Recorded events.
    events: Vec<Event>,
}

impl std::str::FromStr for Script {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl Script {
    pub fn load<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let str = std::fs::read_to_string(path)?;

        Ok(str.parse::<Self>()?)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.window.0, self.window.1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }
}

/// Apply a single event to the session.
pub fn apply(
    session: &mut Session,
    viewport: &Viewport,
    event: &Event,
) -> manipulator_core::Result<()> {
    match *event {
        Event::Jog { joint, steps } => {
            session.jog(joint, steps);
            Ok(())
        }
        Event::Pointer { x, y } => {
            let point = viewport.to_world(&Point2::new(x, y));
            session.point_to(point.x, point.y)
        }
        Event::Target { x, y } => session.point_to(x, y),
        Event::Scroll { delta } => session.scroll(delta),
    }
}
