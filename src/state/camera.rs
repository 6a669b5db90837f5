//! Pan/zoom camera over the overview map.
//!
//! Screen and world are related by `screen = world * scale + translate`.
//! Scale is never stored independently: it is derived from an integer zoom
//! accumulator as `zoom_base ^ zoom_step`, so any number of wheel notches in
//! one direction followed by the same number back lands on exactly the same
//! scale.
//!
//! After every mutation `translate` is clamped into
//! `[-(viewport * scale - viewport), 0]` on each axis, which keeps the map
//! covering the whole viewport.

use crate::config::ViewerConfig;
use crate::model::{Point, Size};

/// What a single wheel notch did to the camera.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomOutcome {
    /// Scale changed and translate was adjusted around the focal point.
    Zoomed,
    /// Would have dropped below 1; pinned to 1 and the accumulator reset.
    ClampedMin,
    /// Would have exceeded the maximum; pinned there, accumulator still moved.
    ClampedMax,
    /// Zero delta, nothing happened.
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomCurve {
    pub base: f64,
    pub step: i32,
    pub max_scale: f64,
}

impl ZoomCurve {
    fn scale_at(&self, zoom_step: i32) -> f64 {
        self.base.powi(zoom_step)
    }
}

#[derive(Clone, Debug)]
pub struct Camera {
    zoom_step: i32,
    scale: f64,
    translate: Point,
    viewport: Size,
    curve: ZoomCurve,
}

impl Camera {
    pub fn new(viewport: Size, curve: ZoomCurve) -> Self {
        Self {
            zoom_step: 0,
            scale: 1.0,
            translate: Point::ORIGIN,
            viewport,
            curve,
        }
    }

    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(
            config.viewport(),
            ZoomCurve {
                base: config.zoom_base,
                step: config.wheel_step,
                max_scale: config.max_scale,
            },
        )
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn translate(&self) -> Point {
        self.translate
    }

    pub fn zoom_step(&self) -> i32 {
        self.zoom_step
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// One wheel notch at `focal` (screen space). Only the sign of
    /// `wheel_delta` matters: positive scrolls away from the user and zooms
    /// out, negative zooms in.
    pub fn apply_zoom(&mut self, focal: Point, wheel_delta: f64) -> ZoomOutcome {
        let direction = if wheel_delta > 0.0 {
            -1
        } else if wheel_delta < 0.0 {
            1
        } else {
            return ZoomOutcome::Ignored;
        };
        self.zoom_step = self.zoom_step.saturating_add(direction * self.curve.step);
        let new_scale = self.curve.scale_at(self.zoom_step);

        if new_scale < 1.0 {
            self.zoom_step = 0;
            self.scale = 1.0;
            self.clamp();
            return ZoomOutcome::ClampedMin;
        }
        if new_scale > self.curve.max_scale {
            self.scale = self.curve.max_scale;
            self.clamp();
            return ZoomOutcome::ClampedMax;
        }

        // Shift by the world point under the cursor times the change in
        // scale; at rest this is the same as `focal * scale_delta`.
        let anchor = self.to_world(focal);
        let scale_delta = new_scale - self.scale;
        self.scale = new_scale;
        self.translate.x -= anchor.x * scale_delta;
        self.translate.y -= anchor.y * scale_delta;
        self.clamp();
        ZoomOutcome::Zoomed
    }

    pub fn apply_pan(&mut self, delta: Point) {
        self.translate.x += delta.x;
        self.translate.y += delta.y;
        self.clamp();
    }

    pub fn to_world(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.translate.x) / self.scale,
            (screen.y - self.translate.y) / self.scale,
        )
    }

    pub fn to_screen(&self, world: Point) -> Point {
        Point::new(
            world.x * self.scale + self.translate.x,
            world.y * self.scale + self.translate.y,
        )
    }

    /// Lowest allowed translate on each axis; the upper bound is always 0.
    pub fn min_translate(&self) -> Point {
        let overflow = |extent: f64| -((extent * self.scale - extent).max(0.0));
        Point::new(overflow(self.viewport.width), overflow(self.viewport.height))
    }

    /// Idempotent. A zero-size viewport collapses both bounds to 0.
    pub fn clamp(&mut self) {
        let min = self.min_translate();
        self.translate.x = self.translate.x.min(0.0).max(min.x);
        self.translate.y = self.translate.y.min(0.0).max(min.y);
    }

    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.clamp();
    }
}
