mod components;
mod config;
mod fetch;
mod model;
mod render;
mod state;
mod util;

use components::App;

fn main() {
    util::init_logging();
    log::info!("starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    yew::Renderer::<App>::new().render();
}
