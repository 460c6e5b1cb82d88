mod api;
mod breeds;
mod browse;
mod config;
mod ui;

use dioxus::prelude::*;
use tracing::{info, Level};

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");

    info!("dogdex v{} starting", env!("CARGO_PKG_VERSION"));

    launch(ui::App);
}
