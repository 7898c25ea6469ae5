//! Check command handler.

use std::path::Path;

use color_eyre::Result;

use crate::config::Config;
use crate::graph::TypeGraph;
use crate::node;

use super::App;

impl App {
    /// Dry run: resolve and synthesize every type, report the outcome, and
    /// fail when any type was skipped.
    pub fn run_check(&self, manifest: &Path) -> Result<()> {
        let config = Config::load()?;

        let nodes = node::load_manifest(manifest)?;
        let graph = TypeGraph::build(&nodes, &config.naming);
        let outcome = crate::generate_all(&graph);

        for unit in &outcome.units {
            tracing::info!("Would generate {}", unit.key);
        }
        for skip in &outcome.skipped {
            tracing::warn!("Skipped {}: {}", skip.type_name, skip.reason);
        }

        if !outcome.skipped.is_empty() {
            return Err(color_eyre::eyre::eyre!(
                "{} type(s) skipped during generation",
                outcome.skipped.len()
            ));
        }

        tracing::info!(
            "{} unit(s) would be generated from {} type(s)",
            outcome.units.len(),
            graph.len()
        );
        Ok(())
    }
}
