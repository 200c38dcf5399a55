use super::layout::{Layout, Piece, Selection, Tile};
use crate::cursor::Point;

/// Three triangles of the trapezoid's own short side: up, down, up.
pub fn layout(n: u32) -> Layout {
    let piece = Piece::Triangle { n };
    let middle = Point::new(n as f64, 0.0);
    let tiles = vec![
        Tile::new(piece, Point::ORIGIN, 0.0),
        Tile::new(piece, middle, 60.0),
        Tile::new(piece, middle, 0.0),
    ];
    Layout::new(tiles, Selection::SpanningTree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::layout::tests::assert_exact_tiling;

    #[test]
    fn test_three_triangles_in_a_row() {
        let layout = assert_exact_tiling(&Piece::Trapezoid { n: 4 });
        let pairs: Vec<_> = layout.walls().iter().map(|wall| wall.tiles).collect();
        assert_eq!(pairs, vec![(0, 1), (1, 2)]);
    }
}
