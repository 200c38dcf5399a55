pub mod surface;

use serde::{Deserialize, Serialize};

pub use surface::{Color, Recorder, Stroke, Surface};

/// A point on the unbounded drawing plane. The y axis points down, so a
/// growing heading turns clockwise on screen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The vector of the given length pointing along `heading` degrees.
    pub fn polar(length: f64, heading: f64) -> Self {
        let (sin, cos) = heading.to_radians().sin_cos();
        Self::new(length * cos, length * sin)
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(self, other: Point) -> f64 {
        (self - other).length()
    }

    /// Heading of this vector in degrees, in `[0, 360)`.
    pub fn bearing(self) -> f64 {
        normalize_heading(self.y.atan2(self.x).to_degrees())
    }

    pub fn approx_eq(self, other: Point, tolerance: f64) -> bool {
        self.distance(other) <= tolerance
    }

    pub fn mirrored(self) -> Self {
        Self::new(self.x, -self.y)
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Folds any angle into `[0, 360)`.
pub fn normalize_heading(heading: f64) -> f64 {
    let heading = heading.rem_euclid(360.0);
    // rem_euclid rounds tiny negative angles up to exactly 360.0
    if heading >= 360.0 { 0.0 } else { heading }
}

/// Where the cursor is and which way it faces.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Point,
    pub heading: f64,
}

impl Pose {
    pub fn new(position: Point, heading: f64) -> Self {
        Self { position, heading }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Pen {
    Up,
    #[default]
    Down,
}

/// A turtle-style drawing head. Every drawn segment goes to the owned surface.
pub struct Cursor<S> {
    position: Point,
    heading: f64,
    pen: Pen,
    color: Color,
    surface: S,
}

impl<S: Surface> Cursor<S> {
    /// Creates a cursor at the origin, facing heading 0 with the pen down.
    pub fn new(surface: S) -> Self {
        Self::with_pose(surface, Pose::default())
    }

    pub fn with_pose(surface: S, pose: Pose) -> Self {
        Cursor {
            position: pose.position,
            heading: normalize_heading(pose.heading),
            pen: Pen::Down,
            color: Color::BLACK,
            surface,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.heading)
    }

    pub fn pen(&self) -> Pen {
        self.pen
    }

    pub fn is_pen_down(&self) -> bool {
        self.pen == Pen::Down
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Moves `distance` along the heading, drawing a segment if the pen is down.
    /// Negative distances move backwards.
    pub fn forward(&mut self, distance: f64) {
        if distance == 0.0 {
            return;
        }
        let from = self.position;
        let to = from + Point::polar(distance, self.heading);
        self.position = to;
        if self.pen == Pen::Down {
            self.surface.stroke(from, to, self.color);
        }
    }

    pub fn backward(&mut self, distance: f64) {
        self.forward(-distance);
    }

    /// Rotates clockwise on screen by `angle` degrees.
    pub fn turn_right(&mut self, angle: f64) {
        self.heading = normalize_heading(self.heading + angle);
    }

    pub fn turn_left(&mut self, angle: f64) {
        self.turn_right(-angle);
    }

    pub fn pen_up(&mut self) {
        self.pen = Pen::Up;
    }

    pub fn pen_down(&mut self) {
        self.pen = Pen::Down;
    }

    /// Moves without drawing, then restores whatever pen state was active.
    pub fn travel(&mut self, distance: f64) {
        let pen = self.pen;
        self.pen_up();
        self.forward(distance);
        self.pen = pen;
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_forward_draws_when_pen_down() {
        let mut cursor = Cursor::new(Recorder::default());
        cursor.forward(10.0);
        let strokes = cursor.surface().strokes();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].from, Point::ORIGIN);
        assert!(strokes[0].to.approx_eq(Point::new(10.0, 0.0), 1e-9));
    }

    #[test]
    fn test_turn_right_is_clockwise_on_screen() {
        let mut cursor = Cursor::new(Recorder::default());
        cursor.turn_right(90.0);
        cursor.forward(5.0);
        // y grows downwards, so a right turn from east faces south
        assert!(cursor.position().approx_eq(Point::new(0.0, 5.0), 1e-9));
        cursor.turn_left(180.0);
        assert_approx_eq!(cursor.heading(), 270.0);
    }

    #[test]
    fn test_heading_is_normalized() {
        let mut cursor = Cursor::new(Recorder::default());
        cursor.turn_left(30.0);
        assert_approx_eq!(cursor.heading(), 330.0);
        cursor.turn_right(750.0);
        assert_approx_eq!(cursor.heading(), 0.0);
    }

    #[test]
    fn test_backward_and_negative_distance() {
        let mut cursor = Cursor::new(Recorder::default());
        cursor.backward(3.0);
        assert!(cursor.position().approx_eq(Point::new(-3.0, 0.0), 1e-9));
        cursor.forward(-2.0);
        assert!(cursor.position().approx_eq(Point::new(-5.0, 0.0), 1e-9));
        assert_eq!(cursor.surface().len(), 2);
    }

    #[test]
    fn test_pen_up_moves_silently() {
        let mut cursor = Cursor::new(Recorder::default());
        cursor.pen_up();
        cursor.forward(4.0);
        assert!(cursor.surface().is_empty());
        cursor.pen_down();
        cursor.forward(1.0);
        assert_eq!(cursor.surface().len(), 1);
    }

    #[test]
    fn test_travel_restores_pen() {
        let mut cursor = Cursor::new(Recorder::default());
        cursor.travel(4.0);
        assert!(cursor.surface().is_empty());
        assert!(cursor.is_pen_down());

        cursor.pen_up();
        cursor.travel(1.0);
        assert_eq!(cursor.pen(), Pen::Up);
    }

    #[test]
    fn test_closed_square_returns_home() {
        let mut cursor = Cursor::with_pose(Recorder::default(), Pose::new(Point::new(2.0, 3.0), 45.0));
        for _ in 0..4 {
            cursor.forward(7.5);
            cursor.turn_right(90.0);
        }
        assert!(cursor.position().approx_eq(Point::new(2.0, 3.0), 1e-9));
        assert_approx_eq!(cursor.heading(), 45.0);
    }

    #[test]
    fn test_bearing() {
        assert_approx_eq!(Point::new(0.0, 1.0).bearing(), 90.0);
        assert_approx_eq!(Point::new(-1.0, 0.0).bearing(), 180.0);
        assert_approx_eq!(Point::new(1.0, -1.0).bearing(), 315.0);
    }
}
