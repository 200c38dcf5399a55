use super::layout::{Layout, Piece, Selection, Tile};
use crate::cursor::Point;

/// Splits a side of `units` into at most two whole parts.
fn halves(units: u32) -> Vec<u32> {
    if units > 1 {
        vec![units / 2, units - units / 2]
    } else {
        vec![units]
    }
}

/// A grid of up to 2 x 2 smaller parallelograms with the same angle.
///
/// Works for any side lengths, so parallelograms accept fractional depths.
pub fn layout(a: u32, b: u32, angle: f64) -> Layout {
    let mut tiles = Vec::with_capacity(4);
    let mut along_b = 0;
    for rows in halves(b) {
        let mut along_a = 0;
        for columns in halves(a) {
            let corner = Point::polar(along_a as f64, 0.0) + Point::polar(along_b as f64, angle);
            let piece = Piece::Parallelogram {
                a: columns,
                b: rows,
                angle,
            };
            tiles.push(Tile::new(piece, corner, 0.0));
            along_a += columns;
        }
        along_b += rows;
    }
    let selection = if tiles.len() == 4 {
        Selection::Ring
    } else {
        Selection::SpanningTree
    };
    Layout::new(tiles, selection)
}
