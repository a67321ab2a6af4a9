/// Unit tag for render-space coordinates: pixels, origin top-left, Y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSpace;

pub type Point = euclid::Point2D<f64, RenderSpace>;
pub type Vector = euclid::Vector2D<f64, RenderSpace>;
pub type Size = euclid::Size2D<f64, RenderSpace>;
pub type Rect = euclid::Rect<f64, RenderSpace>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}
