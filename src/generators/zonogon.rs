//! Rhombic tilings of zonogons.
//!
//! A regular 2m-gon with side n is the zonogon of m generators of length n
//! whose headings step evenly through half a turn. Its rhombic tilings hold
//! one rhombus per pair of generators: the hexagon gets 3, the decagon 10.

use super::layout::{Piece, Tile};
use crate::cursor::Point;

fn rhombus(base: Point, first: f64, second: f64, n: u32) -> Tile {
    Tile::new(
        Piece::Parallelogram {
            a: n,
            b: n,
            angle: second - first,
        },
        base,
        first,
    )
}

fn span(headings: &[f64], n: u32) -> Point {
    headings
        .iter()
        .fold(Point::ORIGIN, |sum, &heading| sum + Point::polar(n as f64, heading))
}

/// Tiles the first `m - 1` generators, then lays the strip of the last one
/// along the far side.
pub fn stacked(headings: &[f64], n: u32) -> Vec<Tile> {
    fn build(headings: &[f64], n: u32, tiles: &mut Vec<Tile>) {
        let m = headings.len();
        if m < 2 {
            return;
        }
        build(&headings[..m - 1], n, tiles);
        let last = headings[m - 1];
        for k in 0..m - 1 {
            let base = span(&headings[k + 1..m - 1], n);
            tiles.push(rhombus(base, headings[k], last, n));
        }
    }

    let mut tiles = Vec::with_capacity(headings.len() * headings.len().saturating_sub(1) / 2);
    build(headings, n, &mut tiles);
    tiles
}

/// Lays the strip of the first generator along the near side, then tiles
/// the remaining generators one step further in.
pub fn peeled(headings: &[f64], n: u32) -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(headings.len() * headings.len().saturating_sub(1) / 2);
    let mut offset = Point::ORIGIN;
    for start in 0..headings.len() {
        let rest = &headings[start..];
        for k in 1..rest.len() {
            let base = offset + span(&rest[k + 1..], n);
            tiles.push(rhombus(base, rest[0], rest[k], n));
        }
        offset = offset + Point::polar(n as f64, rest[0]);
    }
    tiles
}
