//! ctorgen - Constructor synthesis for partial types
//!
//! A build-time source generator core: given the structural description of
//! partial types whose fields carry the injectable-dependency marker, it
//! synthesizes a constructor per eligible type, with null validation for
//! reference-typed parameters and `PreConstruct`/`PostConstruct` hook points,
//! preserving visibility, sealing/abstractness, generic parameters, and the
//! enclosing namespace.
//!
//! Data flows strictly downstream:
//! [`extract`] → [`resolve`] → [`synth`] → [`emit`]. A generation run is a
//! pure, synchronous, single-pass function over a read-only [`graph::TypeGraph`];
//! each type's plan depends only on its own descriptor and ancestor chain, so
//! runs are deterministic and idempotent. The host collaborator (here, the
//! CLI driver in [`cli`]) owns parsing and output-file handling.

pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod extract;
pub mod graph;
pub mod model;
pub mod node;
pub mod resolve;
pub mod synth;

pub use error::GenError;
pub use model::GeneratedUnit;

use graph::TypeGraph;
use model::TypeDescriptor;

/// A type skipped during a run, with the per-type failure that caused it.
#[derive(Debug)]
pub struct Skip {
    pub type_name: String,
    pub reason: GenError,
}

/// Result of one generation run: zero or one unit per eligible type, plus the
/// per-type skips. Skips never abort the run.
#[derive(Debug, Default)]
pub struct RunOutcome {
    pub units: Vec<GeneratedUnit>,
    pub skipped: Vec<Skip>,
}

/// Runs one generation pass over the full type graph.
pub fn generate_all(graph: &TypeGraph) -> RunOutcome {
    let mut outcome = RunOutcome::default();
    for descriptor in graph.iter() {
        match generate_type(descriptor, graph) {
            Ok(Some(unit)) => {
                tracing::debug!("generated unit for {}", unit.key);
                outcome.units.push(unit);
            }
            // Ineligible type: absence is the expected outcome.
            Ok(None) => {}
            Err(reason) => {
                outcome.skipped.push(Skip {
                    type_name: descriptor.name.clone(),
                    reason,
                });
            }
        }
    }
    outcome
}

/// Generates the unit for one type, or `None` when the type has no injectable
/// members and no base requiring forwarding.
pub fn generate_type(
    descriptor: &TypeDescriptor,
    graph: &TypeGraph,
) -> Result<Option<GeneratedUnit>, GenError> {
    let chain = resolve::resolve_chain(descriptor, graph)?;
    if descriptor.own_dependencies.is_empty() && chain.ancestor_parameters.is_empty() {
        return Ok(None);
    }
    let plan = synth::synthesize(descriptor, chain)?;
    Ok(Some(emit::emit(descriptor, &plan)))
}
