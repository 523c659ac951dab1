mod components;
mod config;
mod logging;
mod model;
mod rng;
mod state;
mod storage;

use components::app::App;

fn main() {
    logging::init(logging::default_level());
    tracing::info!("mounting color monster");
    yew::Renderer::<App>::new().render();
}
