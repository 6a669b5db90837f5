// In-memory Surface that records every call, for compositor tests.

use std::convert::Infallible;

use super::{RadialGradient, Surface, TextAlign};
use crate::model::Point;

#[derive(Clone, Debug, PartialEq)]
pub struct TestImage {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Save,
    Restore,
    ResetTransform,
    Translate(f64, f64),
    Scale(f64),
    Clear(f64, f64),
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    ClosePath,
    Arc { center: Point, radius: f64, start: f64, end: f64 },
    FillColor(String),
    FillGradient(RadialGradient),
    StrokeColor(String),
    LineWidth(f64),
    Fill,
    Stroke,
    DrawImage(TestImage, Point),
    Font(String),
    TextAlign(TextAlign),
    FillText { text: String, at: Point, max_width: f64 },
}

#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    pub fn position(&self, pred: impl Fn(&Op) -> bool) -> Option<usize> {
        self.ops.iter().position(pred)
    }
}

impl Surface for RecordingSurface {
    type Image = TestImage;
    type Error = Infallible;

    fn save(&mut self) {
        self.ops.push(Op::Save);
    }

    fn restore(&mut self) {
        self.ops.push(Op::Restore);
    }

    fn reset_transform(&mut self) -> Result<(), Infallible> {
        self.ops.push(Op::ResetTransform);
        Ok(())
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), Infallible> {
        self.ops.push(Op::Translate(x, y));
        Ok(())
    }

    fn scale(&mut self, factor: f64) -> Result<(), Infallible> {
        self.ops.push(Op::Scale(factor));
        Ok(())
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ops.push(Op::Clear(width, height));
    }

    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }

    fn move_to(&mut self, p: Point) {
        self.ops.push(Op::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.ops.push(Op::LineTo(p));
    }

    fn close_path(&mut self) {
        self.ops.push(Op::ClosePath);
    }

    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64) -> Result<(), Infallible> {
        self.ops.push(Op::Arc { center, radius, start, end });
        Ok(())
    }

    fn set_fill_color(&mut self, css: &str) {
        self.ops.push(Op::FillColor(css.to_string()));
    }

    fn set_fill_gradient(&mut self, gradient: &RadialGradient) -> Result<(), Infallible> {
        self.ops.push(Op::FillGradient(gradient.clone()));
        Ok(())
    }

    fn set_stroke_color(&mut self, css: &str) {
        self.ops.push(Op::StrokeColor(css.to_string()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(Op::LineWidth(width));
    }

    fn fill(&mut self) {
        self.ops.push(Op::Fill);
    }

    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
    }

    fn draw_image(&mut self, image: &TestImage, at: Point) -> Result<(), Infallible> {
        self.ops.push(Op::DrawImage(image.clone(), at));
        Ok(())
    }

    fn set_font(&mut self, font: &str) {
        self.ops.push(Op::Font(font.to_string()));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.ops.push(Op::TextAlign(align));
    }

    fn fill_text(&mut self, text: &str, at: Point, max_width: f64) -> Result<(), Infallible> {
        self.ops.push(Op::FillText { text: text.to_string(), at, max_width });
        Ok(())
    }
}
