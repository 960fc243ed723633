//! Pager theme test tool entry point.
//!
//! Loads a theme directory, prints each composed frame as a textual
//! draw listing, and walks the menu graph from the keyboard.

mod cli;
mod term;
mod trace;

use anyhow::Result;
use clap::Parser;
use pager_core::session::Session;
use pager_store::DiskStore;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.log_filter()),
    )
    .init();

    log::info!("loading theme from {}", cli.theme);
    let mut session = Session::load(DiskStore::new(), &cli.theme, cli.screen.as_deref())?;
    log::info!(
        "{} screens loaded, starting on '{}'",
        session.graph().screen_count(),
        session.nav().current_key()
    );

    term::run(&mut session)?;
    log::info!("pager-theme-test shut down cleanly");
    Ok(())
}
