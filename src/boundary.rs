//! Per-side boundary flags and the renderer that honors them.
//!
//! A polygon's outer boundary is described sparsely by callers (a few side
//! numbers, or nothing at all) and densely by the renderer (one flag per side).

use rand::Rng;

use crate::{
    cursor::{Color, Cursor, Surface},
    error::{ConfigError, MazeError, ValidationError},
};

/// An explicit choice of sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideSelection {
    /// 1-based side numbers. Repeats are harmless.
    Indices(Vec<usize>),
    /// One flag per side, in drawing order.
    Flags(Vec<bool>),
}

impl SideSelection {
    fn resolve(&self, sides: usize, field: &'static str) -> Result<Vec<bool>, MazeError> {
        match self {
            SideSelection::Flags(flags) => {
                if flags.len() != sides {
                    return Err(ConfigError::FlagCount {
                        field,
                        expected: sides,
                        actual: flags.len(),
                    }
                    .into());
                }
                Ok(flags.clone())
            }
            SideSelection::Indices(indices) => {
                let mut flags = vec![false; sides];
                for &index in indices {
                    if index == 0 || index > sides {
                        return Err(ValidationError::SideIndex {
                            field,
                            index,
                            sides,
                        }
                        .into());
                    }
                    flags[index - 1] = true;
                }
                Ok(flags)
            }
        }
    }
}

/// Which sides get a hole. An explicit selection wins; otherwise `requested`
/// distinct sides are drawn uniformly without replacement.
pub fn resolve_holes<R: Rng + ?Sized>(
    explicit: Option<&SideSelection>,
    requested: usize,
    sides: usize,
    rng: &mut R,
) -> Result<Vec<bool>, MazeError> {
    if let Some(selection) = explicit {
        return selection.resolve(sides, "holes");
    }
    if requested > sides {
        return Err(ValidationError::HoleCount { requested, sides }.into());
    }
    let mut flags = vec![false; sides];
    for index in rand::seq::index::sample(rng, sides, requested) {
        flags[index] = true;
    }
    Ok(flags)
}

/// Which sides get drawn. Defaults to every side.
pub fn resolve_lines(explicit: Option<&SideSelection>, sides: usize) -> Result<Vec<bool>, MazeError> {
    match explicit {
        Some(selection) => selection.resolve(sides, "lines"),
        None => Ok(vec![true; sides]),
    }
}

/// One side of a path: its length, then the right turn taken at its end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathEdge {
    pub length: f64,
    pub turn: f64,
}

impl PathEdge {
    pub fn new(length: f64, turn: f64) -> Self {
        Self { length, turn }
    }
}

/// How a hole looks.
///
/// Walls are whole multiples of `unit`. A hole opens the middle unit of its
/// wall (the one after the midpoint on even walls), so it always connects
/// exactly one cell on either side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoleStyle {
    pub unit: f64,
    pub ratio: f64,
    pub color: Option<Color>,
}

impl HoleStyle {
    /// Start and end of the gap, measured from the start of an edge.
    pub fn gap(&self, length: f64) -> (f64, f64) {
        let units = (length / self.unit).round().max(1.0);
        let center = ((units / 2.0).floor() + 0.5) * self.unit;
        let half = self.unit * self.ratio / 2.0;
        (center - half, center + half)
    }
}

/// Draws `edges` in order, honoring the per-edge line and hole flags.
///
/// The cursor ends at the vertex after the last edge. For a closed polygon
/// the turns add up to a full circle and the heading is restored.
pub fn draw_path<S: Surface>(
    cursor: &mut Cursor<S>,
    edges: &[PathEdge],
    lines: &[bool],
    holes: &[bool],
    style: &HoleStyle,
) {
    debug_assert_eq!(edges.len(), lines.len());
    debug_assert_eq!(edges.len(), holes.len());

    for ((edge, &line), &hole) in edges.iter().zip(lines).zip(holes) {
        if !line {
            cursor.travel(edge.length);
        } else if hole {
            let (start, end) = style.gap(edge.length);
            cursor.forward(start);
            match style.color {
                Some(color) => {
                    let wall = cursor.color();
                    cursor.set_color(color);
                    cursor.forward(end - start);
                    cursor.set_color(wall);
                }
                None => cursor.travel(end - start),
            }
            cursor.forward(edge.length - end);
        } else {
            cursor.forward(edge.length);
        }
        cursor.turn_right(edge.turn);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{Point, Recorder};
    use crate::generators::get_rng;
    use assert_approx_eq::assert_approx_eq;

    const STYLE: HoleStyle = HoleStyle {
        unit: 10.0,
        ratio: 0.5,
        color: None,
    };

    fn square(length: f64) -> Vec<PathEdge> {
        vec![PathEdge::new(length, 90.0); 4]
    }

    #[test]
    fn test_explicit_indices_ignore_count() {
        let mut rng = get_rng(Some(1));
        let selection = SideSelection::Indices(vec![2, 5]);
        for requested in [0, 1, 4] {
            let flags = resolve_holes(Some(&selection), requested, 6, &mut rng).unwrap();
            assert_eq!(flags, vec![false, true, false, false, true, false]);
        }
    }

    #[test]
    fn test_explicit_flags_used_verbatim() {
        let mut rng = get_rng(Some(1));
        let flags = vec![true, false, true];
        let selection = SideSelection::Flags(flags.clone());
        assert_eq!(resolve_holes(Some(&selection), 2, 3, &mut rng).unwrap(), flags);
        assert_eq!(resolve_lines(Some(&selection), 3).unwrap(), flags);
    }

    #[test]
    fn test_index_out_of_range() {
        let mut rng = get_rng(Some(1));
        for index in [0, 7] {
            let selection = SideSelection::Indices(vec![1, index]);
            assert_eq!(
                resolve_holes(Some(&selection), 0, 6, &mut rng),
                Err(MazeError::Validation(ValidationError::SideIndex {
                    field: "holes",
                    index,
                    sides: 6
                }))
            );
        }
        let selection = SideSelection::Indices(vec![4]);
        assert!(matches!(
            resolve_lines(Some(&selection), 3),
            Err(MazeError::Validation(ValidationError::SideIndex { field: "lines", .. }))
        ));
    }

    #[test]
    fn test_wrong_flag_count() {
        let selection = SideSelection::Flags(vec![true; 5]);
        assert_eq!(
            resolve_lines(Some(&selection), 6),
            Err(MazeError::Config(ConfigError::FlagCount {
                field: "lines",
                expected: 6,
                actual: 5
            }))
        );
    }

    #[test]
    fn test_lines_default_to_all() {
        assert_eq!(resolve_lines(None, 4).unwrap(), vec![true; 4]);
    }

    #[test]
    fn test_random_holes_are_distinct_and_uniform() {
        let mut rng = get_rng(Some(2024));
        let mut counts = [0usize; 6];
        for _ in 0..1000 {
            let flags = resolve_holes(None, 2, 6, &mut rng).unwrap();
            assert_eq!(flags.len(), 6);
            assert_eq!(flags.iter().filter(|&&f| f).count(), 2);
            flags
                .iter()
                .enumerate()
                .filter(|(_, f)| **f)
                .for_each(|(i, _)| counts[i] += 1);
        }
        // 2000 picks over 6 sides, expected 333 each
        for count in counts {
            assert!((250..=420).contains(&count), "skewed counts {counts:?}");
        }
    }

    #[test]
    fn test_too_many_holes() {
        let mut rng = get_rng(Some(3));
        assert_eq!(
            resolve_holes(None, 7, 6, &mut rng),
            Err(MazeError::Validation(ValidationError::HoleCount {
                requested: 7,
                sides: 6
            }))
        );
        assert_eq!(resolve_holes(None, 6, 6, &mut rng).unwrap(), vec![true; 6]);
    }

    #[test]
    fn test_gap_sits_in_middle_unit() {
        let (start, end) = STYLE.gap(10.0);
        assert_approx_eq!(start, 2.5);
        assert_approx_eq!(end, 7.5);
        // odd walls are exactly centered
        let (start, end) = STYLE.gap(30.0);
        assert_approx_eq!(start, 12.5);
        assert_approx_eq!(end, 17.5);
        // even walls open the unit after the midpoint
        let (start, end) = STYLE.gap(40.0);
        assert_approx_eq!(start, 22.5);
        assert_approx_eq!(end, 27.5);
    }

    #[test]
    fn test_draw_closed_path_returns_home() {
        let mut cursor = Cursor::new(Recorder::default());
        draw_path(&mut cursor, &square(10.0), &[true; 4], &[false; 4], &STYLE);
        assert_eq!(cursor.surface().len(), 4);
        assert!(cursor.position().approx_eq(Point::ORIGIN, 1e-9));
        assert_approx_eq!(cursor.heading(), 0.0);
    }

    #[test]
    fn test_hidden_edges_still_move() {
        let mut cursor = Cursor::new(Recorder::default());
        draw_path(
            &mut cursor,
            &square(10.0),
            &[true, false, true, false],
            &[false; 4],
            &STYLE,
        );
        assert_eq!(cursor.surface().len(), 2);
        assert!(cursor.is_pen_down());
        assert!(cursor.position().approx_eq(Point::ORIGIN, 1e-9));
    }

    #[test]
    fn test_hole_leaves_gap() {
        let mut cursor = Cursor::new(Recorder::default());
        let edges = [PathEdge::new(10.0, 0.0)];
        draw_path(&mut cursor, &edges, &[true], &[true], &STYLE);
        let strokes = cursor.surface().strokes();
        assert_eq!(strokes.len(), 2);
        assert_approx_eq!(strokes[0].length(), 2.5);
        assert_approx_eq!(strokes[1].length(), 2.5);
        assert!(strokes[1].to.approx_eq(Point::new(10.0, 0.0), 1e-9));
    }

    #[test]
    fn test_hole_color_marks_gap() {
        let mut cursor = Cursor::new(Recorder::default());
        let style = HoleStyle {
            color: Some(Color::RED),
            ..STYLE
        };
        draw_path(&mut cursor, &[PathEdge::new(10.0, 0.0)], &[true], &[true], &style);
        let colors: Vec<_> = cursor.surface().strokes().iter().map(|s| s.color).collect();
        assert_eq!(colors, vec![Color::BLACK, Color::RED, Color::BLACK]);
        assert_eq!(cursor.color(), Color::BLACK);
    }
}
