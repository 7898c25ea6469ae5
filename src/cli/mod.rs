//! CLI driver for ctorgen.
//!
//! The generation core has no I/O surface of its own; this driver stands in
//! for the host build pipeline. Subcommands:
//! - `generate`: read a type manifest, run one generation pass, write one
//!   `.g.cs` unit per eligible type
//! - `check`: dry run; report what would be generated and every skip

mod check;
mod generate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// ctorgen - Constructor synthesis for partial types
#[derive(Parser)]
#[command(name = "ctorgen")]
#[command(about = "Constructor synthesis for partial types with marker-driven dependency fields")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run one generation pass and write the generated units
    Generate {
        /// JSON manifest of type declarations
        manifest: PathBuf,

        /// Output directory (overrides configuration)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Dry run: report generated units and skips without writing files
    Check {
        /// JSON manifest of type declarations
        manifest: PathBuf,
    },
}
