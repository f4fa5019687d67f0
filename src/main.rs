//! task - 個人用作業時間記録ツール

mod cli;
mod config;
mod error;
mod highlight;
mod journal;
mod logging;
mod render;
mod store;
mod sync;
mod task;

use anyhow::Result;

fn main() -> Result<()> {
    logging::init();
    cli::run()
}
