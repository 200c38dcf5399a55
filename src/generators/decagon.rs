use std::{fmt, str::FromStr};

use super::{
    Method,
    layout::{Layout, Selection},
    zonogon,
};
use crate::error::{ConfigError, MazeError};

/// Generator headings of the regular decagon, one per rhombus strip.
const HEADINGS: [f64; 5] = [0.0, 36.0, 72.0, 108.0, 144.0];

/// Ways to split a decagon into its ten rhombi (five at 36°, five at 72°).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecagonMethod {
    /// Strips added along the far side of the decagon.
    Stacked,
    /// Strips peeled off from the entry side inwards.
    Peeled,
}

impl Method for DecagonMethod {
    const ALL: &'static [Self] = &[DecagonMethod::Stacked, DecagonMethod::Peeled];
}

impl fmt::Display for DecagonMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecagonMethod::Stacked => write!(f, "stacked"),
            DecagonMethod::Peeled => write!(f, "peeled"),
        }
    }
}

impl FromStr for DecagonMethod {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stacked" => Ok(DecagonMethod::Stacked),
            "peeled" => Ok(DecagonMethod::Peeled),
            _ => Err(ConfigError::Unknown {
                kind: "decagon method",
                value: s.to_string(),
            }
            .into()),
        }
    }
}

pub fn layout(n: u32, method: DecagonMethod) -> Layout {
    let tiles = match method {
        DecagonMethod::Stacked => zonogon::stacked(&HEADINGS, n),
        DecagonMethod::Peeled => zonogon::peeled(&HEADINGS, n),
    };
    Layout::new(tiles, Selection::SpanningTree)
}
