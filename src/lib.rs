pub mod boundary;
pub mod config;
pub mod cursor;
pub mod error;
pub mod export;
pub mod generators;

pub use config::GeneratorConfig;
pub use cursor::{Color, Cursor, Point, Pose, Recorder, Stroke, Surface};
pub use error::{ConfigError, MazeError, ValidationError};
pub use generators::{
    DecagonMethod, HexagonMethod, MazeGenerator, MazeOptions, MethodChoice, Shape, StartFrom,
};
