use serde::{Deserialize, Serialize};

use crate::{
    cursor::Color,
    error::{ConfigError, MazeError},
};

/// Tunables shared by every level of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Largest depth accepted at the top level. Recursion depth equals maze depth,
    /// so this also bounds the call stack.
    pub max_depth: f64,
    /// Width of a hole as a fraction of one unit length.
    pub hole_ratio: f64,
    /// Draws internal holes in this color instead of leaving them blank.
    pub hole_color: Option<Color>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_depth: 8.0,
            hole_ratio: 0.5,
            hole_color: None,
        }
    }
}

impl GeneratorConfig {
    /// Deepest level whose side count, `2^depth` units, still fits a `u32`.
    pub const DEPTH_CEILING: f64 = 31.0;

    pub fn validate(&self) -> Result<(), MazeError> {
        if !(self.max_depth >= 0.0 && self.max_depth <= Self::DEPTH_CEILING) {
            return Err(ConfigError::MaxDepth {
                max_depth: self.max_depth,
                limit: Self::DEPTH_CEILING,
            }
            .into());
        }
        if !(self.hole_ratio > 0.0 && self.hole_ratio <= 1.0) {
            return Err(ConfigError::HoleRatio(self.hole_ratio).into());
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GeneratorConfig::from_json(r#"{ "max_depth": 4 }"#).unwrap();
        assert_eq!(config.max_depth, 4.0);
        assert_eq!(config.hole_ratio, 0.5);
        assert_eq!(config.hole_color, None);
    }

    #[test]
    fn test_hole_color_from_json() {
        let config = GeneratorConfig::from_json(r##"{ "hole_color": "#ff0000" }"##).unwrap();
        assert_eq!(config.hole_color, Some(Color::RED));
    }

    #[test]
    fn test_rejects_bad_hole_ratio() {
        let config = GeneratorConfig {
            hole_ratio: 1.5,
            ..GeneratorConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(MazeError::Config(ConfigError::HoleRatio(1.5)))
        );
    }

    #[test]
    fn test_max_depth_stays_within_side_count() {
        for max_depth in [-1.0, 32.0, 40.0, f64::NAN, f64::INFINITY] {
            let config = GeneratorConfig {
                max_depth,
                ..GeneratorConfig::default()
            };
            assert!(
                matches!(
                    config.validate(),
                    Err(MazeError::Config(ConfigError::MaxDepth { .. }))
                ),
                "max depth {max_depth} accepted"
            );
        }
        for max_depth in [0.0, 8.0, GeneratorConfig::DEPTH_CEILING] {
            let config = GeneratorConfig {
                max_depth,
                ..GeneratorConfig::default()
            };
            assert_eq!(config.validate(), Ok(()));
        }
    }
}
