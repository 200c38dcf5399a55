//! Writers for recorded strokes.

use crate::cursor::{Point, Stroke};

/// Output format for a finished maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Svg,
    Json,
}

/// Axis-aligned box around every stroke, `None` when there are no strokes.
pub fn bounds(strokes: &[Stroke]) -> Option<(Point, Point)> {
    let mut points = strokes.iter().flat_map(|s| [s.from, s.to]);
    let first = points.next()?;
    Some(points.fold((first, first), |(min, max), p| {
        (
            Point::new(min.x.min(p.x), min.y.min(p.y)),
            Point::new(max.x.max(p.x), max.y.max(p.y)),
        )
    }))
}

/// Convert strokes to SVG output (individual <line> elements), framed with
/// `margin` on every side.
pub fn to_svg(strokes: &[Stroke], margin: f64) -> String {
    let (min, max) = bounds(strokes).unwrap_or((Point::ORIGIN, Point::ORIGIN));
    let viewbox = format!(
        "{:.2} {:.2} {:.2} {:.2}",
        min.x - margin,
        min.y - margin,
        max.x - min.x + 2.0 * margin,
        max.y - min.y + 2.0 * margin
    );

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}">
<g stroke-width="1" stroke-linecap="round" fill="none">
"#,
        viewbox
    ));

    for stroke in strokes {
        svg.push_str(&format!(
            "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\"/>\n",
            stroke.from.x, stroke.from.y, stroke.to.x, stroke.to.y, stroke.color
        ));
    }

    svg.push_str("</g>\n</svg>\n");
    svg
}

pub fn to_json(strokes: &[Stroke]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(strokes)
}
