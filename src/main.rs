//! ctorgen - Constructor synthesis for partial types

use clap::Parser;
use ctorgen::cli::{App, Command};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let app = App::parse();

    // Initialize logging
    let filter = if app.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &app.command {
        Command::Generate { manifest, out_dir } => {
            app.run_generate(manifest, out_dir.as_deref())
        }
        Command::Check { manifest } => app.run_check(manifest),
    }
}
