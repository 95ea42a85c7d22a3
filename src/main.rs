//! Gold market dashboard
//!
//! Premium, investment strategy, active futures contract and composite
//! analysis cards, each polling the analysis backend on its own schedule.

pub mod app;
pub mod config;
pub mod data;
pub mod poll;
pub mod request;
pub mod third_party;
pub mod ui;

use crate::app::{App, logging};
use crate::config::Settings;
use clap::Parser;
use color_eyre::Result;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let settings = Settings::parse();
    logging::init(&settings.log_file)?;

    let app = App::new(settings);
    app.run().await
}
