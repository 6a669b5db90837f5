//! Rendering: the drawing-surface abstraction and everything that paints
//! through it.
//!
//! | Module | Role |
//! |--------|------|
//! | [`canvas`] | [`Surface`] over a `CanvasRenderingContext2d` |
//! | [`compositor`] | Per-frame draw order under the camera transform |
//! | [`spinner`] | Loading animation and the failure screen |

pub mod canvas;
pub mod compositor;
#[cfg(test)]
pub(crate) mod recording;
pub mod spinner;

pub use canvas::CanvasSurface;
pub use compositor::Compositor;

use crate::model::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn css(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Concentric radial gradient between two radii around `center`.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: Point,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// `(offset in 0..=1, css color)` pairs.
    pub stops: Vec<(f32, String)>,
}

/// The 2D drawing operations the compositor needs. Mirrors the canvas 2D
/// API closely; fallible calls return the backend's error type.
pub trait Surface {
    type Image;
    type Error;

    fn save(&mut self);
    fn restore(&mut self);

    fn reset_transform(&mut self) -> Result<(), Self::Error>;
    fn translate(&mut self, x: f64, y: f64) -> Result<(), Self::Error>;
    fn scale(&mut self, factor: f64) -> Result<(), Self::Error>;

    /// Clears `width x height` from the origin of the current transform.
    fn clear(&mut self, width: f64, height: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    fn close_path(&mut self);
    /// Angles in radians, clockwise from +x.
    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64) -> Result<(), Self::Error>;

    fn set_fill_color(&mut self, css: &str);
    fn set_fill_gradient(&mut self, gradient: &RadialGradient) -> Result<(), Self::Error>;
    fn set_stroke_color(&mut self, css: &str);
    fn set_line_width(&mut self, width: f64);
    fn fill(&mut self);
    fn stroke(&mut self);

    /// Blits at native resolution with the top-left corner at `at`.
    fn draw_image(&mut self, image: &Self::Image, at: Point) -> Result<(), Self::Error>;

    fn set_font(&mut self, font: &str);
    /// Also sets a middle baseline, the only one the viewer uses.
    fn set_text_align(&mut self, align: TextAlign);
    fn fill_text(&mut self, text: &str, at: Point, max_width: f64) -> Result<(), Self::Error>;
}
