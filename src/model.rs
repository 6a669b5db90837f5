//! Core data shared by the camera, the compositor and the loader.
//! Nothing in here touches the DOM, so all of it is testable natively.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A point in either screen or world space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn delta_from(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn square(side: f64) -> Self {
        Self { width: side, height: side }
    }

    pub fn center(self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Failure while fetching or decoding the overview image.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ResourceFetchError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("{0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    /// A response arrived but could not be turned into a bitmap.
    #[error("{0}")]
    Decode(String),
}

/// State of the asynchronously loaded background image.
#[derive(Clone, Debug, PartialEq)]
pub enum BackgroundResource<I> {
    Pending,
    Ready(I),
    Failed(ResourceFetchError),
}

impl<I> BackgroundResource<I> {
    pub fn is_pending(&self) -> bool {
        matches!(self, BackgroundResource::Pending)
    }

    pub fn image(&self) -> Option<&I> {
        match self {
            BackgroundResource::Ready(image) => Some(image),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ResourceFetchError> {
        match self {
            BackgroundResource::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BackgroundResource::Pending => "pending",
            BackgroundResource::Ready(_) => "ready",
            BackgroundResource::Failed(_) => "failed",
        }
    }
}

impl<I> From<Result<I, ResourceFetchError>> for BackgroundResource<I> {
    fn from(result: Result<I, ResourceFetchError>) -> Self {
        match result {
            Ok(image) => BackgroundResource::Ready(image),
            Err(err) => BackgroundResource::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_error_displays_only_its_description() {
        let err = ResourceFetchError::Network("network error".into());
        assert_eq!(err.to_string(), "network error");
    }

    #[test]
    fn status_error_names_the_code() {
        assert_eq!(
            ResourceFetchError::Status(404).to_string(),
            "server responded with status 404"
        );
    }

    #[test]
    fn result_converts_into_background_state() {
        let ready: BackgroundResource<u8> = Ok(7).into();
        assert_eq!(ready.image(), Some(&7));
        assert!(!ready.is_pending());

        let failed: BackgroundResource<u8> =
            Err(ResourceFetchError::Decode("bad png".into())).into();
        assert_eq!(failed.label(), "failed");
        assert_eq!(failed.error().map(ToString::to_string).as_deref(), Some("bad png"));
    }

    #[test]
    fn size_center_is_half_extent() {
        assert_eq!(Size::square(512.0).center(), Point::new(256.0, 256.0));
    }
}
