use thiserror::Error;

/// Errors raised by maze generation. Every variant is reported before the
/// cursor draws anything.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MazeError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// The request names something that does not exist or cannot be built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("unknown {kind} `{value}`")]
    Unknown { kind: &'static str, value: String },
    #[error("boundary {field} has {actual} flags but the polygon has {expected} sides")]
    FlagCount {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("depth {depth} is not admissible for a {shape}: {reason}")]
    Depth {
        shape: &'static str,
        depth: f64,
        reason: &'static str,
    },
    #[error("depth {depth} exceeds the configured maximum of {max}")]
    DepthLimit { depth: f64, max: f64 },
    #[error("unit length must be a positive finite number, got {0}")]
    UnitLength(f64),
    #[error("rhombus angle must lie strictly between 0 and 180 degrees, got {0}")]
    Angle(f64),
    #[error("hole ratio must lie in (0, 1], got {0}")]
    HoleRatio(f64),
    #[error("max depth must lie in [0, {limit}], got {max_depth}")]
    MaxDepth { max_depth: f64, limit: f64 },
    #[error("invalid color `{0}`, expected #rrggbb or a color name")]
    Color(String),
}

/// The request is well formed but points outside the polygon.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("boundary {field} index {index} is outside 1..={sides}")]
    SideIndex {
        field: &'static str,
        index: usize,
        sides: usize,
    },
    #[error("end side {end_side} is outside 1..={sides}")]
    EndSide { end_side: usize, sides: usize },
    #[error("cannot open {requested} boundary holes on a polygon with {sides} sides")]
    HoleCount { requested: usize, sides: usize },
    #[error("unknown start position `{0}`, expected `corner` or `midpoint`")]
    StartFrom(String),
}
