pub mod camera;
pub mod entities;
pub mod input;
pub mod loading;
pub mod viewer;

pub use entities::Entity;
pub use input::{PointerInput, Redraw};
pub use loading::{Interval, LoadingIndicator};
pub use viewer::{Scene, Viewer};
