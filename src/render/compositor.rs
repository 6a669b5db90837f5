//! Per-frame composition of the overview map.
//!
//! Draw order is fixed: clear, camera transform, background (or the loading
//! / failure placeholder in screen space), entities, reference grid. Entities
//! and the grid are drawn whatever state the background is in.

use std::f64::consts::{PI, TAU};

use super::{RadialGradient, Surface, spinner};
use crate::config::ViewerConfig;
use crate::model::{BackgroundResource, Point, Size};
use crate::state::{Entity, Scene};

/// Radius of the soft cone showing where an entity is facing.
const VIEW_RADIUS: f64 = 20.0;
/// Half the opening angle of the view cone.
const VIEW_HALF_ANGLE: f64 = 0.2 * PI;
const MARKER_STROKE: &str = "black";
const GRID_STROKE: &str = "rgba(10, 10, 10, 0.3)";

pub struct Compositor {
    viewport: Size,
    /// Native extent of the map, in world units.
    world: Size,
    grid_divisions: u32,
    started_at_ms: f64,
}

impl Compositor {
    pub fn new(config: &ViewerConfig, started_at_ms: f64) -> Self {
        Self {
            viewport: config.viewport(),
            world: config.viewport(),
            grid_divisions: config.grid_divisions,
            started_at_ms,
        }
    }

    /// Draws one frame. `now_ms` only drives the loading animation.
    ///
    /// # Errors
    ///
    /// Returns the first failing surface call.
    pub fn redraw<S: Surface>(
        &self,
        surface: &mut S,
        scene: Scene<'_, S::Image>,
        now_ms: f64,
    ) -> Result<(), S::Error> {
        surface.reset_transform()?;
        surface.clear(self.viewport.width, self.viewport.height);

        // screen = world * scale + translate
        let translate = scene.camera.translate();
        surface.translate(translate.x, translate.y)?;
        surface.scale(scene.camera.scale())?;

        match scene.background {
            BackgroundResource::Ready(image) => surface.draw_image(image, Point::ORIGIN)?,
            BackgroundResource::Pending => {
                let elapsed = now_ms - self.started_at_ms;
                self.in_screen_space(surface, |s| {
                    spinner::draw_loading(s, self.viewport, elapsed);
                    Ok(())
                })?;
            }
            BackgroundResource::Failed(err) => {
                self.in_screen_space(surface, |s| spinner::draw_failure(s, self.viewport, err))?;
            }
        }

        for entity in scene.entities.iter() {
            draw_entity(surface, entity)?;
        }
        self.draw_grid(surface);
        Ok(())
    }

    fn in_screen_space<S: Surface>(
        &self,
        surface: &mut S,
        draw: impl FnOnce(&mut S) -> Result<(), S::Error>,
    ) -> Result<(), S::Error> {
        surface.save();
        let result = surface.reset_transform().and_then(|()| draw(surface));
        surface.restore();
        result
    }

    fn draw_grid<S: Surface>(&self, surface: &mut S) {
        surface.save();
        surface.set_stroke_color(GRID_STROKE);
        let cell_w = self.world.width / f64::from(self.grid_divisions);
        let cell_h = self.world.height / f64::from(self.grid_divisions);
        // Half-unit offset keeps 1px lines on pixel centres at scale 1.
        for i in 1..self.grid_divisions {
            let y = cell_h * f64::from(i) + 0.5;
            surface.begin_path();
            surface.move_to(Point::new(0.0, y));
            surface.line_to(Point::new(self.world.width, y));
            surface.stroke();
        }
        for i in 1..self.grid_divisions {
            let x = cell_w * f64::from(i) + 0.5;
            surface.begin_path();
            surface.move_to(Point::new(x, 0.0));
            surface.line_to(Point::new(x, self.world.height));
            surface.stroke();
        }
        surface.restore();
    }
}

fn draw_entity<S: Surface>(surface: &mut S, entity: &Entity) -> Result<(), S::Error> {
    let pos = entity.position;
    surface.save();

    let cone = RadialGradient {
        center: pos,
        inner_radius: 0.0,
        outer_radius: VIEW_RADIUS,
        stops: vec![
            (0.0, "rgba(255, 255, 255, 0.7)".to_string()),
            (1.0, "rgba(255, 255, 255, 0)".to_string()),
        ],
    };
    surface.set_fill_gradient(&cone)?;
    let heading = entity.heading.to_radians();
    surface.begin_path();
    surface.move_to(pos);
    surface.arc(pos, VIEW_RADIUS, heading - VIEW_HALF_ANGLE, heading + VIEW_HALF_ANGLE)?;
    surface.fill();

    surface.begin_path();
    surface.arc(pos, entity.radius, 0.0, TAU)?;
    surface.set_fill_color(entity.color.css());
    surface.set_stroke_color(MARKER_STROKE);
    surface.fill();
    surface.stroke();

    surface.restore();
    Ok(())
}
