use std::{fmt, str::FromStr};

use super::{
    Method,
    layout::{Layout, Piece, Selection, Tile},
    zonogon,
};
use crate::{
    cursor::Point,
    error::{ConfigError, MazeError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HexagonMethod {
    /// Six triangles around the center. They form a ring.
    Triangles,
    /// Two trapezoids split along a long diagonal.
    Trapezoids,
    /// Three 60° rhombi.
    Rhombi,
}

impl Method for HexagonMethod {
    const ALL: &'static [Self] = &[
        HexagonMethod::Triangles,
        HexagonMethod::Trapezoids,
        HexagonMethod::Rhombi,
    ];

    fn admits(self, depth: f64) -> bool {
        match self {
            // triangles only halve evenly
            HexagonMethod::Triangles | HexagonMethod::Trapezoids => depth.fract() == 0.0,
            HexagonMethod::Rhombi => true,
        }
    }
}

impl fmt::Display for HexagonMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexagonMethod::Triangles => write!(f, "triangles"),
            HexagonMethod::Trapezoids => write!(f, "trapezoids"),
            HexagonMethod::Rhombi => write!(f, "rhombi"),
        }
    }
}

impl FromStr for HexagonMethod {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "triangles" => Ok(HexagonMethod::Triangles),
            "trapezoids" => Ok(HexagonMethod::Trapezoids),
            "rhombi" => Ok(HexagonMethod::Rhombi),
            _ => Err(ConfigError::Unknown {
                kind: "hexagon method",
                value: s.to_string(),
            }
            .into()),
        }
    }
}

pub fn layout(n: u32, method: HexagonMethod) -> Layout {
    match method {
        HexagonMethod::Triangles => {
            let mut corner = Point::ORIGIN;
            let tiles = (0..6)
                .map(|k| {
                    let heading = 60.0 * k as f64;
                    let tile = Tile::new(Piece::Triangle { n }, corner, heading);
                    corner = corner + Point::polar(n as f64, heading);
                    tile
                })
                .collect();
            Layout::new(tiles, Selection::Ring)
        }
        HexagonMethod::Trapezoids => {
            // the long diagonal runs from the first corner to the fourth
            let far = Point::polar(2.0 * n as f64, 60.0);
            let tiles = vec![
                Tile::new(Piece::Trapezoid { n }, far, 240.0),
                Tile::new(Piece::Trapezoid { n }, Point::ORIGIN, 60.0),
            ];
            Layout::new(tiles, Selection::SpanningTree)
        }
        HexagonMethod::Rhombi => {
            Layout::new(zonogon::stacked(&[0.0, 60.0, 120.0], n), Selection::SpanningTree)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;
    use crate::generators::layout::{plan_level, tests::assert_exact_tiling};

    #[test]
    fn test_every_method_tiles_the_hexagon() {
        let expected = [
            (HexagonMethod::Triangles, 6, 6),
            (HexagonMethod::Trapezoids, 2, 1),
            (HexagonMethod::Rhombi, 3, 3),
        ];
        for (method, tiles, walls) in expected {
            for n in [2, 4] {
                let layout = assert_exact_tiling(&Piece::Hexagon { n, method });
                assert_eq!(layout.tiles.len(), tiles);
                assert_eq!(layout.walls().len(), walls);
            }
        }
    }

    #[test]
    fn test_triangle_ring_closes_exactly_one_wall() {
        for n in [2, 4, 8] {
            let piece = Piece::Hexagon {
                n,
                method: HexagonMethod::Triangles,
            };
            for seed in 0..100 {
                let plan = plan_level(&piece, &mut get_rng(Some(seed))).unwrap();
                assert!(plan.graph().is_ring());
                assert_eq!(plan.walls.len(), 6);
                assert_eq!(plan.open_walls(), 5);
            }
        }
    }

    #[test]
    fn test_fractional_depth_needs_rhombi() {
        assert!(HexagonMethod::Rhombi.admits(2.5));
        assert!(!HexagonMethod::Triangles.admits(2.5));
        assert!(!HexagonMethod::Trapezoids.admits(0.3));
        assert!(HexagonMethod::Trapezoids.admits(3.0));
    }
}
