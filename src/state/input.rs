// Pointer/wheel handling for the overview canvas. The controller owns the
// drag state and mutates the camera; it never draws. Callers redraw when
// `handle` returns `Redraw::Now`.

use crate::model::Point;
use crate::state::camera::{Camera, ZoomOutcome};

/// Input already converted to canvas-local logical coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Down(Point),
    Move(Point),
    Up,
    Leave,
    Wheel { at: Point, delta_y: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Redraw {
    Skip,
    Now,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { last: Point },
}

#[derive(Clone, Debug, Default)]
pub struct InputController {
    drag: DragState,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    pub fn handle(&mut self, camera: &mut Camera, input: PointerInput) -> Redraw {
        match (self.drag, input) {
            (_, PointerInput::Down(at)) => {
                self.drag = DragState::Dragging { last: at };
                Redraw::Skip
            }
            (DragState::Dragging { last }, PointerInput::Move(at)) => {
                camera.apply_pan(at.delta_from(last));
                self.drag = DragState::Dragging { last: at };
                Redraw::Now
            }
            (DragState::Idle, PointerInput::Move(_)) => Redraw::Skip,
            (DragState::Dragging { .. }, PointerInput::Up | PointerInput::Leave) => {
                self.drag = DragState::Idle;
                Redraw::Now
            }
            (DragState::Idle, PointerInput::Up | PointerInput::Leave) => Redraw::Skip,
            (_, PointerInput::Wheel { at, delta_y }) => match camera.apply_zoom(at, delta_y) {
                ZoomOutcome::Ignored => Redraw::Skip,
                ZoomOutcome::ClampedMax => {
                    log::debug!("zoom pinned at max scale {}", camera.scale());
                    Redraw::Now
                }
                ZoomOutcome::ClampedMin | ZoomOutcome::Zoomed => Redraw::Now,
            },
        }
    }
}
