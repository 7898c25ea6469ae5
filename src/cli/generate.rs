//! Generate command handler.

use std::fs;
use std::path::Path;

use color_eyre::Result;

use crate::config::Config;
use crate::graph::TypeGraph;
use crate::node;
use crate::RunOutcome;

use super::App;

impl App {
    /// Run one generation pass and write the generated units to disk.
    pub fn run_generate(&self, manifest: &Path, out_dir: Option<&Path>) -> Result<()> {
        let config = Config::load()?;

        let nodes = node::load_manifest(manifest)?;
        tracing::info!(
            "Loaded {} type declarations from {}",
            nodes.len(),
            manifest.display()
        );

        let graph = TypeGraph::build(&nodes, &config.naming);
        let outcome = crate::generate_all(&graph);

        for skip in &outcome.skipped {
            tracing::warn!("Skipped {}: {}", skip.type_name, skip.reason);
        }

        let dir = out_dir.unwrap_or(&config.output.dir);
        write_units(&outcome, dir)?;
        tracing::info!(
            "Wrote {} generated unit(s) to {}",
            outcome.units.len(),
            dir.display()
        );

        Ok(())
    }
}

/// Writes each unit as `<fully-qualified-name>.g.cs` under `dir`.
pub fn write_units(outcome: &RunOutcome, dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    for unit in &outcome.units {
        fs::write(dir.join(format!("{}.g.cs", unit.key)), &unit.text)?;
    }
    Ok(())
}
