use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::Point;
use crate::error::{ConfigError, MazeError};

/// An opaque RGB pen color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let named = match s.to_ascii_lowercase().as_str() {
            "black" => Some(Color::BLACK),
            "white" => Some(Color::WHITE),
            "red" => Some(Color::RED),
            "green" => Some(Color::GREEN),
            "blue" => Some(Color::BLUE),
            "gray" | "grey" => Some(Color::GRAY),
            _ => None,
        };
        if let Some(color) = named {
            return Ok(color);
        }

        let invalid = || MazeError::from(ConfigError::Color(s.to_string()));
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Color {
    type Error = MazeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// One drawn line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub from: Point,
    pub to: Point,
    pub color: Color,
}

impl Stroke {
    pub fn length(&self) -> f64 {
        self.from.distance(self.to)
    }
}

/// Receives every segment the cursor draws.
pub trait Surface {
    fn stroke(&mut self, from: Point, to: Point, color: Color);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn stroke(&mut self, from: Point, to: Point, color: Color) {
        (**self).stroke(from, to, color);
    }
}

/// Keeps every stroke in memory, in drawing order.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    strokes: Vec<Stroke>,
}

impl Recorder {
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn into_strokes(self) -> Vec<Stroke> {
        self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

impl Surface for Recorder {
    fn stroke(&mut self, from: Point, to: Point, color: Color) {
        self.strokes.push(Stroke { from, to, color });
    }
}
