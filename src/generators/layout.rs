//! Pure planning: how a polygon splits into tiles and which shared walls open.
//!
//! Everything here works in a canonical local frame measured in unit lengths:
//! the polygon's first corner sits at the origin, its first side runs along
//! heading 0 and it is traversed clockwise. Mirroring for counter-clockwise
//! drawing happens when the plan is emitted, never here.

use rand::Rng;

use super::{
    decagon::{self, DecagonMethod},
    hexagon::{self, HexagonMethod},
    parallelogram,
    span_tree::{AdjacencyGraph, break_ring, random_spanning_tree},
    trapezoid, triangle,
};
use crate::{
    boundary::PathEdge,
    cursor::{Point, Pose},
};

const TOLERANCE: f64 = 1e-6;

/// A concrete polygon, sized in whole unit lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Piece {
    Decagon { n: u32, method: DecagonMethod },
    Hexagon { n: u32, method: HexagonMethod },
    Triangle { n: u32 },
    /// Sides `2n, n, n, n`: half of a hexagon.
    Trapezoid { n: u32 },
    /// Sides `a, b, a, b`, with `angle` degrees between the first two.
    Parallelogram { a: u32, b: u32, angle: f64 },
}

impl Piece {
    pub fn name(&self) -> &'static str {
        match self {
            Piece::Decagon { .. } => "decagon",
            Piece::Hexagon { .. } => "hexagon",
            Piece::Triangle { .. } => "triangle",
            Piece::Trapezoid { .. } => "trapezoid",
            Piece::Parallelogram { .. } => "parallelogram",
        }
    }

    pub fn sides(&self) -> usize {
        match self {
            Piece::Decagon { .. } => 10,
            Piece::Hexagon { .. } => 6,
            Piece::Triangle { .. } => 3,
            Piece::Trapezoid { .. } | Piece::Parallelogram { .. } => 4,
        }
    }

    /// Sides in drawing order, in unit lengths, each followed by its right turn.
    pub fn edges(&self) -> Vec<PathEdge> {
        match *self {
            Piece::Decagon { n, .. } => vec![PathEdge::new(n as f64, 36.0); 10],
            Piece::Hexagon { n, .. } => vec![PathEdge::new(n as f64, 60.0); 6],
            Piece::Triangle { n } => vec![PathEdge::new(n as f64, 120.0); 3],
            Piece::Trapezoid { n } => {
                let n = n as f64;
                vec![
                    PathEdge::new(2.0 * n, 120.0),
                    PathEdge::new(n, 60.0),
                    PathEdge::new(n, 60.0),
                    PathEdge::new(n, 120.0),
                ]
            }
            Piece::Parallelogram { a, b, angle } => {
                let (a, b) = (a as f64, b as f64);
                vec![
                    PathEdge::new(a, angle),
                    PathEdge::new(b, 180.0 - angle),
                    PathEdge::new(a, angle),
                    PathEdge::new(b, 180.0 - angle),
                ]
            }
        }
    }

    /// A single maze cell: nothing left to subdivide.
    pub fn is_cell(&self) -> bool {
        match *self {
            Piece::Decagon { n, .. }
            | Piece::Hexagon { n, .. }
            | Piece::Triangle { n }
            | Piece::Trapezoid { n } => n <= 1,
            Piece::Parallelogram { a, b, .. } => a <= 1 && b <= 1,
        }
    }

    /// The tiling one level down, or `None` for a cell.
    pub fn layout(&self) -> Option<Layout> {
        if self.is_cell() {
            return None;
        }
        Some(match *self {
            Piece::Decagon { n, method } => decagon::layout(n, method),
            Piece::Hexagon { n, method } => hexagon::layout(n, method),
            Piece::Triangle { n } => triangle::layout(n),
            Piece::Trapezoid { n } => trapezoid::layout(n),
            Piece::Parallelogram { a, b, angle } => parallelogram::layout(a, b, angle),
        })
    }

    /// Corners visited when the piece is drawn from `pose`, starting with `pose.position`.
    pub fn corners(&self, pose: Pose) -> Vec<Point> {
        let mut at = pose.position;
        let mut heading = pose.heading;
        self.edges()
            .iter()
            .map(|edge| {
                let corner = at;
                at = at + Point::polar(edge.length, heading);
                heading += edge.turn;
                corner
            })
            .collect()
    }
}

/// A sub-polygon placed in its parent's frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub piece: Piece,
    pub pose: Pose,
}

impl Tile {
    pub fn new(piece: Piece, position: Point, heading: f64) -> Self {
        Tile {
            piece,
            pose: Pose::new(position, heading),
        }
    }

    /// Sides as `(start, end)` corner pairs, in drawing order.
    pub fn sides(&self) -> Vec<(Point, Point)> {
        let corners = self.piece.corners(self.pose);
        (0..corners.len())
            .map(|i| (corners[i], corners[(i + 1) % corners.len()]))
            .collect()
    }
}

/// How the open walls of a layout are picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    SpanningTree,
    /// The tiles form a single cycle, so closing one wall is enough.
    Ring,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub tiles: Vec<Tile>,
    pub selection: Selection,
}

impl Layout {
    pub fn new(tiles: Vec<Tile>, selection: Selection) -> Self {
        Layout { tiles, selection }
    }

    /// Every side shared by two tiles, found from the geometry.
    pub fn walls(&self) -> Vec<Wall> {
        let sides: Vec<_> = self.tiles.iter().map(Tile::sides).collect();
        let mut walls = Vec::new();
        for i in 0..sides.len() {
            for j in i + 1..sides.len() {
                for (si, &(a0, a1)) in sides[i].iter().enumerate() {
                    for (sj, &(b0, b1)) in sides[j].iter().enumerate() {
                        let reversed = a0.approx_eq(b1, TOLERANCE) && a1.approx_eq(b0, TOLERANCE);
                        let same = a0.approx_eq(b0, TOLERANCE) && a1.approx_eq(b1, TOLERANCE);
                        if reversed || same {
                            walls.push(Wall {
                                tiles: (i, j),
                                sides: (si, sj),
                            });
                        }
                    }
                }
            }
        }
        walls
    }
}

/// A side shared by two tiles. `tiles.0 < tiles.1`; `sides` are the matching
/// 0-based side numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wall {
    pub tiles: (usize, usize),
    pub sides: (usize, usize),
}

/// One level of a maze: its tiling and which walls carry a hole.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelPlan {
    pub layout: Layout,
    pub walls: Vec<Wall>,
    pub open: Vec<bool>,
}

impl LevelPlan {
    pub fn graph(&self) -> AdjacencyGraph {
        AdjacencyGraph::new(
            self.layout.tiles.len(),
            self.walls.iter().map(|wall| wall.tiles).collect(),
        )
    }

    pub fn open_walls(&self) -> usize {
        self.open.iter().filter(|&&open| open).count()
    }

    /// Line and hole flags for one tile's own boundary.
    ///
    /// Each wall is drawn by its lower-numbered tile; sides on the parent's
    /// boundary are left for the parent.
    pub fn side_flags(&self, tile: usize) -> (Vec<bool>, Vec<bool>) {
        let sides = self.layout.tiles[tile].piece.sides();
        let mut lines = vec![false; sides];
        let mut holes = vec![false; sides];
        for (wall, &open) in self.walls.iter().zip(&self.open) {
            if wall.tiles.0 == tile {
                lines[wall.sides.0] = true;
                holes[wall.sides.0] = open;
            }
        }
        (lines, holes)
    }
}

/// Tiles `piece` and opens a random spanning tree of its internal walls.
pub fn plan_level<R: Rng + ?Sized>(piece: &Piece, rng: &mut R) -> Option<LevelPlan> {
    let layout = piece.layout()?;
    let walls = layout.walls();
    let graph = AdjacencyGraph::new(
        layout.tiles.len(),
        walls.iter().map(|wall| wall.tiles).collect(),
    );
    let accepted = match layout.selection {
        Selection::SpanningTree => random_spanning_tree(&graph, rng),
        Selection::Ring => break_ring(&graph, rng),
    };
    let mut open = vec![false; walls.len()];
    for index in accepted {
        open[index] = true;
    }
    tracing::trace!(
        "[tiling] {} split into {} tiles, {} of {} walls open",
        piece.name(),
        layout.tiles.len(),
        layout.tiles.len().saturating_sub(1),
        walls.len()
    );
    Some(LevelPlan {
        layout,
        walls,
        open,
    })
}
