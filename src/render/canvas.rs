// Surface implementation backed by the browser's 2D canvas context.

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, ImageBitmap};

use super::{RadialGradient, Surface, TextAlign};
use crate::model::Point;

pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface<'_> {
    type Image = ImageBitmap;
    type Error = JsValue;

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn reset_transform(&mut self) -> Result<(), JsValue> {
        self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        self.ctx.translate(x, y)
    }

    fn scale(&mut self, factor: f64) -> Result<(), JsValue> {
        self.ctx.scale(factor, factor)
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: Point) {
        self.ctx.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: Point) {
        self.ctx.line_to(p.x, p.y);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64) -> Result<(), JsValue> {
        self.ctx.arc(center.x, center.y, radius, start, end)
    }

    fn set_fill_color(&mut self, css: &str) {
        self.ctx.set_fill_style_str(css);
    }

    fn set_fill_gradient(&mut self, gradient: &RadialGradient) -> Result<(), JsValue> {
        let c = gradient.center;
        let paint = self.ctx.create_radial_gradient(
            c.x,
            c.y,
            gradient.inner_radius,
            c.x,
            c.y,
            gradient.outer_radius,
        )?;
        for (offset, color) in &gradient.stops {
            paint.add_color_stop(*offset, color)?;
        }
        self.ctx.set_fill_style_canvas_gradient(&paint);
        Ok(())
    }

    fn set_stroke_color(&mut self, css: &str) {
        self.ctx.set_stroke_style_str(css);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn draw_image(&mut self, image: &ImageBitmap, at: Point) -> Result<(), JsValue> {
        self.ctx.draw_image_with_image_bitmap(image, at.x, at.y)
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.ctx.set_text_align(align.css());
        self.ctx.set_text_baseline("middle");
    }

    fn fill_text(&mut self, text: &str, at: Point, max_width: f64) -> Result<(), JsValue> {
        self.ctx.fill_text_with_max_width(text, at.x, at.y, max_width)
    }
}
