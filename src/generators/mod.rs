use std::{fmt, str::FromStr};

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

mod decagon;
mod hexagon;
pub mod layout;
mod parallelogram;
pub mod span_tree;
mod trapezoid;
mod triangle;
mod zonogon;

pub use decagon::DecagonMethod;
pub use hexagon::HexagonMethod;
use layout::{LevelPlan, Piece, plan_level};

use crate::{
    boundary::{HoleStyle, PathEdge, SideSelection, draw_path, resolve_holes, resolve_lines},
    config::GeneratorConfig,
    cursor::{Color, Cursor, Pose, Surface},
    error::{ConfigError, MazeError, ValidationError},
};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// A closed set of named tilings for one shape.
pub trait Method: Copy + fmt::Display + FromStr<Err = MazeError> + 'static {
    const ALL: &'static [Self];

    /// Whether the tiling can be built at this depth.
    fn admits(self, _depth: f64) -> bool {
        true
    }
}

/// A tiling method, or a request to pick one at random.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MethodChoice<M> {
    #[default]
    Random,
    Fixed(M),
}

impl<M: Method> MethodChoice<M> {
    /// Settles the choice once, before any recursion. A random pick only
    /// considers methods that admit `depth`.
    fn resolve<R: Rng + ?Sized>(
        self,
        shape: &'static str,
        depth: f64,
        rng: &mut R,
    ) -> Result<M, MazeError> {
        let inadmissible = || ConfigError::Depth {
            shape,
            depth,
            reason: "the tiling needs a whole depth",
        };
        match self {
            MethodChoice::Fixed(method) if method.admits(depth) => Ok(method),
            MethodChoice::Fixed(_) => Err(inadmissible().into()),
            MethodChoice::Random => {
                let admitted: Vec<M> = M::ALL.iter().copied().filter(|m| m.admits(depth)).collect();
                admitted
                    .choose(rng)
                    .copied()
                    .ok_or_else(|| inadmissible().into())
            }
        }
    }
}

impl<M: Method> FromStr for MethodChoice<M> {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(MethodChoice::Random),
            _ => s.parse().map(MethodChoice::Fixed),
        }
    }
}

impl<M: Method> fmt::Display for MethodChoice<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodChoice::Random => write!(f, "random"),
            MethodChoice::Fixed(method) => write!(f, "{method}"),
        }
    }
}

/// The polygons a maze can be drawn on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Decagon(MethodChoice<DecagonMethod>),
    Hexagon(MethodChoice<HexagonMethod>),
    Triangle,
    Trapezoid,
    /// `angle` is the interior angle at the starting corner, in degrees.
    Rhombus { angle: f64 },
}

impl Shape {
    /// Builds a shape from its name and a method name (`random` for any).
    /// Shapes with a single tiling accept `random` or their own name.
    pub fn parse(name: &str, method: &str, angle: f64) -> Result<Self, MazeError> {
        let single = |shape: Shape| match method {
            "random" => Ok(shape),
            _ if method == name => Ok(shape),
            _ => Err(MazeError::from(ConfigError::Unknown {
                kind: "method",
                value: method.to_string(),
            })),
        };
        match name {
            "decagon" => Ok(Shape::Decagon(method.parse()?)),
            "hexagon" => Ok(Shape::Hexagon(method.parse()?)),
            "triangle" => single(Shape::Triangle),
            "trapezoid" => single(Shape::Trapezoid),
            "rhombus" => single(Shape::Rhombus { angle }),
            _ => Err(ConfigError::Unknown {
                kind: "shape",
                value: name.to_string(),
            }
            .into()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Decagon(_) => "decagon",
            Shape::Hexagon(_) => "hexagon",
            Shape::Triangle => "triangle",
            Shape::Trapezoid => "trapezoid",
            Shape::Rhombus { .. } => "rhombus",
        }
    }

    pub fn sides(&self) -> usize {
        match self {
            Shape::Decagon(_) => 10,
            Shape::Hexagon(_) => 6,
            Shape::Triangle => 3,
            Shape::Trapezoid | Shape::Rhombus { .. } => 4,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Decagon(method) => write!(f, "decagon ({method})"),
            Shape::Hexagon(method) => write!(f, "hexagon ({method})"),
            Shape::Rhombus { angle } => write!(f, "rhombus ({angle}°)"),
            other => write!(f, "{}", other.name()),
        }
    }
}

/// Where the cursor sits relative to the first side when a generator starts,
/// and relative to `end_side` when it returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartFrom {
    /// At the side's first corner.
    #[default]
    Corner,
    /// Halfway along the side.
    Midpoint,
}

impl FromStr for StartFrom {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "corner" => Ok(StartFrom::Corner),
            "midpoint" => Ok(StartFrom::Midpoint),
            _ => Err(ValidationError::StartFrom(s.to_string()).into()),
        }
    }
}

/// Per-call parameters of the shape-generator contract.
#[derive(Debug, Clone, PartialEq)]
pub struct MazeOptions {
    /// Side length is `round(2^depth)` units.
    pub depth: f64,
    pub unit_len: f64,
    pub clockwise: bool,
    pub start_from: StartFrom,
    pub draw_boundary: bool,
    /// Random boundary holes, used when `boundary_holes` is not given.
    pub num_boundary_holes: usize,
    pub boundary_lines: Option<SideSelection>,
    pub boundary_holes: Option<SideSelection>,
    pub boundary_hole_color: Option<Color>,
    /// 1-based side the cursor is left on.
    pub end_side: usize,
}

impl Default for MazeOptions {
    fn default() -> Self {
        Self {
            depth: 3.0,
            unit_len: 10.0,
            clockwise: true,
            start_from: StartFrom::Corner,
            draw_boundary: true,
            num_boundary_holes: 2,
            boundary_lines: None,
            boundary_holes: None,
            boundary_hole_color: None,
            end_side: 1,
        }
    }
}

/// Resolved outer boundary of one polygon.
struct Boundary {
    lines: Vec<bool>,
    holes: Vec<bool>,
    color: Option<Color>,
}

/// Draws perfect mazes on polygons, owning the random source for a run.
pub struct MazeGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl MazeGenerator {
    pub fn new(config: GeneratorConfig, seed: Option<u64>) -> Self {
        Self::with_rng(config, get_rng(seed))
    }

    pub fn with_rng(config: GeneratorConfig, rng: StdRng) -> Self {
        MazeGenerator { config, rng }
    }

    /// Draws `shape` as a perfect maze, starting from the cursor's current pose.
    ///
    /// Every input is checked before the first segment is drawn. On return
    /// the cursor sits on `end_side` following the `start_from` convention.
    pub fn generate<S: Surface>(
        &mut self,
        cursor: &mut Cursor<S>,
        shape: &Shape,
        options: &MazeOptions,
    ) -> Result<(), MazeError> {
        let piece = self.resolve(shape, options.depth)?;
        if !(options.unit_len.is_finite() && options.unit_len > 0.0) {
            return Err(ConfigError::UnitLength(options.unit_len).into());
        }
        let sides = piece.sides();
        if options.end_side == 0 || options.end_side > sides {
            return Err(ValidationError::EndSide {
                end_side: options.end_side,
                sides,
            }
            .into());
        }
        let boundary = Boundary {
            lines: resolve_lines(options.boundary_lines.as_ref(), sides)?,
            holes: resolve_holes(
                options.boundary_holes.as_ref(),
                options.num_boundary_holes,
                sides,
                &mut self.rng,
            )?,
            color: options.boundary_hole_color,
        };

        tracing::debug!(
            "[generate] {} depth {} ({:?}), unit {}, {}",
            shape,
            options.depth,
            piece,
            options.unit_len,
            if options.clockwise { "clockwise" } else { "counter-clockwise" }
        );

        let mut pass = Pass {
            cursor,
            rng: &mut self.rng,
            unit: options.unit_len,
            sign: if options.clockwise { 1.0 } else { -1.0 },
            hole_ratio: self.config.hole_ratio,
            hole_color: self.config.hole_color,
        };
        pass.draw(
            &piece,
            options.draw_boundary.then_some(&boundary),
            options.start_from,
            options.end_side,
        );
        Ok(())
    }

    /// Plans the top level of a maze without drawing it: the tiling and its
    /// open walls. `None` when the shape is a single cell at this depth.
    pub fn plan(&mut self, shape: &Shape, depth: f64) -> Result<Option<LevelPlan>, MazeError> {
        let piece = self.resolve(shape, depth)?;
        Ok(plan_level(&piece, &mut self.rng))
    }

    /// Checks the config and depth, then settles the tiling method.
    fn resolve(&mut self, shape: &Shape, depth: f64) -> Result<Piece, MazeError> {
        self.config.validate()?;
        let name = shape.name();
        if !(depth.is_finite() && depth >= 0.0) {
            return Err(ConfigError::Depth {
                shape: name,
                depth,
                reason: "depth must be a non-negative number",
            }
            .into());
        }
        if depth > self.config.max_depth {
            return Err(ConfigError::DepthLimit {
                depth,
                max: self.config.max_depth,
            }
            .into());
        }
        let whole_depth = || {
            if depth.fract() == 0.0 {
                Ok(())
            } else {
                Err(MazeError::from(ConfigError::Depth {
                    shape: name,
                    depth,
                    reason: "the tiling needs a whole depth",
                }))
            }
        };

        let n = 2f64.powf(depth).round() as u32;
        let piece = match *shape {
            Shape::Decagon(choice) => Piece::Decagon {
                n,
                method: choice.resolve(name, depth, &mut self.rng)?,
            },
            Shape::Hexagon(choice) => Piece::Hexagon {
                n,
                method: choice.resolve(name, depth, &mut self.rng)?,
            },
            Shape::Triangle => {
                whole_depth()?;
                Piece::Triangle { n }
            }
            Shape::Trapezoid => {
                whole_depth()?;
                Piece::Trapezoid { n }
            }
            Shape::Rhombus { angle } => {
                if !(angle > 0.0 && angle < 180.0) {
                    return Err(ConfigError::Angle(angle).into());
                }
                Piece::Parallelogram { a: n, b: n, angle }
            }
        };
        Ok(piece)
    }
}

/// One drawing run: the shared cursor plus everything every level needs.
struct Pass<'a, S, R: ?Sized> {
    cursor: &'a mut Cursor<S>,
    rng: &'a mut R,
    unit: f64,
    /// +1 to draw clockwise, -1 for the mirror image.
    sign: f64,
    hole_ratio: f64,
    hole_color: Option<Color>,
}

impl<S: Surface, R: Rng + ?Sized> Pass<'_, S, R> {
    /// Runs one generator: recurse into the tiling, draw the boundary, then
    /// walk the cursor to the requested exit side.
    fn draw(&mut self, piece: &Piece, boundary: Option<&Boundary>, start_from: StartFrom, end_side: usize) {
        let edges: Vec<PathEdge> = piece
            .edges()
            .iter()
            .map(|edge| PathEdge::new(edge.length * self.unit, edge.turn * self.sign))
            .collect();

        if start_from == StartFrom::Midpoint {
            self.cursor.travel(-edges[0].length / 2.0);
        }

        if let Some(plan) = plan_level(piece, self.rng) {
            self.recurse(&plan);
        }

        if let Some(boundary) = boundary {
            let style = HoleStyle {
                unit: self.unit,
                ratio: self.hole_ratio,
                color: boundary.color,
            };
            draw_path(self.cursor, &edges, &boundary.lines, &boundary.holes, &style);
        }

        for edge in &edges[..end_side - 1] {
            self.cursor.travel(edge.length);
            self.cursor.turn_right(edge.turn);
        }

        if start_from == StartFrom::Midpoint {
            self.cursor.travel(edges[end_side - 1].length / 2.0);
        }
    }

    /// Draws every tile of the plan, then returns the cursor to the first corner.
    fn recurse(&mut self, plan: &LevelPlan) {
        let mut at = Pose::default();
        for (index, tile) in plan.layout.tiles.iter().enumerate() {
            self.steer(&mut at, tile.pose);
            let (lines, holes) = plan.side_flags(index);
            let boundary = Boundary {
                lines,
                holes,
                color: self.hole_color,
            };
            self.draw(&tile.piece, Some(&boundary), StartFrom::Corner, 1);
        }
        self.steer(&mut at, Pose::default());
    }

    /// Moves the cursor between two poses of the parent's local frame
    /// without drawing: face the target, travel, then face its heading.
    fn steer(&mut self, at: &mut Pose, to: Pose) {
        let delta = to.position - at.position;
        let distance = delta.length();
        if distance > 1e-9 {
            let bearing = delta.bearing();
            self.cursor.turn_right(self.sign * (bearing - at.heading));
            self.cursor.travel(distance * self.unit);
            self.cursor.turn_right(self.sign * (to.heading - bearing));
        } else {
            self.cursor.turn_right(self.sign * (to.heading - at.heading));
        }
        *at = to;
    }
}
