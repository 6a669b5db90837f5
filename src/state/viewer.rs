//! The viewer object: everything one overview canvas needs, owned in one
//! place and handed to the DOM callbacks by reference.

use rand::Rng;

use crate::config::ViewerConfig;
use crate::model::{BackgroundResource, ResourceFetchError};
use crate::state::camera::Camera;
use crate::state::entities::EntityLayer;
use crate::state::input::{InputController, PointerInput, Redraw};
use crate::state::loading::LoadingIndicator;

/// Read-only view handed to the compositor for one frame.
pub struct Scene<'a, I> {
    pub camera: &'a Camera,
    pub background: &'a BackgroundResource<I>,
    pub entities: &'a EntityLayer,
}

pub struct Viewer<I> {
    camera: Camera,
    input: InputController,
    entities: EntityLayer,
    background: BackgroundResource<I>,
}

impl<I> Viewer<I> {
    pub fn new<R: Rng + ?Sized>(config: &ViewerConfig, rng: &mut R) -> Self {
        Self {
            camera: Camera::from_config(config),
            input: InputController::new(),
            entities: EntityLayer::spawn(config.entity_count, config.viewport(), rng),
            background: BackgroundResource::Pending,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn background(&self) -> &BackgroundResource<I> {
        &self.background
    }

    pub fn entities(&self) -> &EntityLayer {
        &self.entities
    }

    pub fn scene(&self) -> Scene<'_, I> {
        Scene {
            camera: &self.camera,
            background: &self.background,
            entities: &self.entities,
        }
    }

    pub fn handle_input(&mut self, input: PointerInput) -> Redraw {
        self.input.handle(&mut self.camera, input)
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Redraw {
        self.entities.tick(rng);
        Redraw::Now
    }

    /// Whether a loading-indicator timer tick should paint. A tick that was
    /// already queued when the fetch settled lands here after settlement and
    /// is dropped.
    pub fn indicator_frame(&self) -> Redraw {
        if self.background.is_pending() {
            Redraw::Now
        } else {
            Redraw::Skip
        }
    }

    /// Applies the fetch result. The indicator is stopped before the
    /// background leaves `Pending`, so no ready/failed frame can be painted
    /// while its timer is still alive. Only the first settlement counts.
    pub fn settle(
        &mut self,
        indicator: &mut LoadingIndicator,
        result: Result<I, ResourceFetchError>,
    ) -> bool {
        if !self.background.is_pending() {
            log::warn!("ignoring second settlement of overview image");
            return false;
        }
        indicator.stop();
        self.background = result.into();
        log::info!("overview image {}", self.background.label());
        true
    }
}
