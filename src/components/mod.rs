pub mod app;
pub mod dom;
pub mod overview_map;

pub use app::App;
