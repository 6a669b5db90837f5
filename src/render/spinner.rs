// Screen-space placeholders shown instead of the map: a hopping isometric
// cube while the image loads, and a message when it failed.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use super::{Surface, TextAlign};
use crate::model::{Point, ResourceFetchError, Size};

const CUBE_SIZE: f64 = 50.0;
/// One quarter turn plus one hop.
const CYCLE_MS: f64 = 700.0;
const SIDE_HEIGHT: f64 = CUBE_SIZE * 1.15;
const SHADOW_DROP: f64 = CUBE_SIZE * 1.7;
const TOP_COLOR: &str = "hsl(240, 100%, 70%)";
const SHADOW_COLOR: &str = "gray";

pub const FAILURE_HEADLINE: &str = "Failed to load preview";

fn rotate(p: Point, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    Point::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos)
}

fn side_color(lightness_t: f64) -> String {
    let tone = (lightness_t * 50.0).round() as i64 + 20;
    format!("hsl(240, 100%, {tone}%)")
}

fn fill_polygon<S: Surface>(surface: &mut S, corners: &[Point], color: &str) {
    let Some((first, rest)) = corners.split_first() else {
        return;
    };
    surface.begin_path();
    surface.move_to(*first);
    for p in rest {
        surface.line_to(*p);
    }
    surface.close_path();
    surface.set_fill_color(color);
    surface.fill();
}

/// Fraction of the current animation cycle, in `[0, 1)`.
pub fn cycle_phase(elapsed_ms: f64) -> f64 {
    (elapsed_ms / CYCLE_MS).rem_euclid(1.0)
}

/// Draws one frame of the loading cube centred in `viewport`. Expects an
/// identity transform.
pub fn draw_loading<S: Surface>(surface: &mut S, viewport: Size, elapsed_ms: f64) {
    let phase = cycle_phase(elapsed_ms);
    let angle = phase * FRAC_PI_2;
    let jump = ((phase - 0.5) * 2.0).powi(2) * CUBE_SIZE;
    let center = Point::new(
        viewport.width / 2.0,
        viewport.height / 2.0 - CUBE_SIZE * 1.5 + jump,
    );

    let p1 = rotate(Point::new(CUBE_SIZE, 0.0), -angle + FRAC_PI_4);
    let corners = [p1, rotate(p1, FRAC_PI_2), rotate(p1, PI), rotate(p1, PI * 1.5)];
    // Flatten the square into an isometric diamond.
    let top = corners.map(|p| center.offset(p.x, p.y / 2.0));
    let [c1, c2, c3, _] = top;
    let down = |p: Point| p.offset(0.0, SIDE_HEIGHT);

    let shadow = top.map(|p| p.offset(0.0, SHADOW_DROP - jump));
    fill_polygon(surface, &shadow, SHADOW_COLOR);
    fill_polygon(surface, &top, TOP_COLOR);
    fill_polygon(surface, &[c2, c1, down(c1), down(c2)], &side_color(1.0 - phase));
    fill_polygon(surface, &[c2, c3, down(c3), down(c2)], &side_color(phase));
}

/// Draws the failure headline and the error description. Expects an
/// identity transform.
pub fn draw_failure<S: Surface>(
    surface: &mut S,
    viewport: Size,
    err: &ResourceFetchError,
) -> Result<(), S::Error> {
    let center = viewport.center();
    surface.set_text_align(TextAlign::Center);
    surface.set_fill_color("black");
    surface.set_font("20px sans");
    surface.fill_text(FAILURE_HEADLINE, center, viewport.width)?;
    surface.set_font("12px sans");
    surface.fill_text(&err.to_string(), center.offset(0.0, 40.0), viewport.width)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::{Op, RecordingSurface};

    #[test]
    fn phase_wraps_every_cycle() {
        assert_eq!(cycle_phase(0.0), 0.0);
        assert!((cycle_phase(350.0) - 0.5).abs() < 1e-12);
        assert!((cycle_phase(1050.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn loading_frame_fills_shadow_top_and_two_sides() {
        let mut surface = RecordingSurface::default();
        draw_loading(&mut surface, Size::square(512.0), 350.0);
        assert_eq!(surface.count(|op| *op == Op::Fill), 4);
        assert_eq!(surface.count(|op| *op == Op::FillColor(SHADOW_COLOR.into())), 1);
        assert_eq!(surface.count(|op| *op == Op::FillColor(TOP_COLOR.into())), 1);
        // Half way through the cycle both sides share the same shade.
        assert_eq!(surface.count(|op| *op == Op::FillColor("hsl(240, 100%, 45%)".into())), 2);
    }

    #[test]
    fn side_shading_spans_twenty_to_seventy_percent() {
        assert_eq!(side_color(0.0), "hsl(240, 100%, 20%)");
        assert_eq!(side_color(1.0), "hsl(240, 100%, 70%)");
    }

    #[test]
    fn cube_is_horizontally_centred() {
        let mut surface = RecordingSurface::default();
        draw_loading(&mut surface, Size::square(512.0), 175.0);
        let xs: Vec<f64> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::MoveTo(p) | Op::LineTo(p) => Some(p.x),
                _ => None,
            })
            .collect();
        let min = xs.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!(min > 256.0 - CUBE_SIZE - 1e-9 && max < 256.0 + CUBE_SIZE + 1e-9);
    }

    #[test]
    fn failure_shows_headline_and_description() {
        let mut surface = RecordingSurface::default();
        let err = ResourceFetchError::Network("network error".into());
        draw_failure(&mut surface, Size::square(512.0), &err).unwrap();
        assert_eq!(surface.texts(), vec![FAILURE_HEADLINE, "network error"]);
        assert!(surface.ops.contains(&Op::FillText {
            text: "network error".into(),
            at: Point::new(256.0, 296.0),
            max_width: 512.0,
        }));
        assert!(surface.ops.contains(&Op::TextAlign(TextAlign::Center)));
    }
}
