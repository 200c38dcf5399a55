use super::layout::{Layout, Piece, Selection, Tile};
use crate::cursor::Point;

/// Four half-size triangles: three in the corners, one upside down in the middle.
pub fn layout(n: u32) -> Layout {
    debug_assert!(n % 2 == 0, "triangles halve only at even sizes");
    let half = n / 2;
    let piece = Piece::Triangle { n: half };
    let h = half as f64;
    let tiles = vec![
        Tile::new(piece, Point::ORIGIN, 0.0),
        Tile::new(piece, Point::new(h, 0.0), 0.0),
        Tile::new(piece, Point::polar(h, 60.0), 0.0),
        Tile::new(piece, Point::new(h, 0.0), 60.0),
    ];
    // the middle triangle touches the other three: already a tree
    Layout::new(tiles, Selection::SpanningTree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;
    use crate::generators::layout::{plan_level, tests::assert_exact_tiling};

    #[test]
    fn test_quarters_tile_the_triangle() {
        for n in [2, 4, 16] {
            let layout = assert_exact_tiling(&Piece::Triangle { n });
            assert_eq!(layout.tiles.len(), 4);
            assert_eq!(layout.walls().len(), 3);
        }
    }

    #[test]
    fn test_all_three_walls_open() {
        let plan = plan_level(&Piece::Triangle { n: 4 }, &mut get_rng(Some(11))).unwrap();
        assert_eq!(plan.open, vec![true; 3]);
        assert!(plan.walls.iter().all(|wall| wall.tiles.1 == 3));
    }
}
