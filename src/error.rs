//! Generation error taxonomy.
//!
//! All generation-time failures are per-type and non-fatal to the overall
//! run: a type that fails to resolve or synthesize is skipped, surfaced as a
//! diagnostic, and simply absent from the run's output. Emission is
//! all-or-nothing per type.

use thiserror::Error;

/// Per-type generation errors.
#[derive(Error, Debug)]
pub enum GenError {
    // Base chain resolution
    #[error("base type '{base}' of '{type_name}' not found in type graph")]
    UnresolvedBase { type_name: String, base: String },

    #[error("base chain of '{type_name}' contains a cycle at '{via}'")]
    BaseChainCycle { type_name: String, via: String },

    // Constructor synthesis
    #[error("duplicate constructor parameter '{parameter}' while generating '{type_name}'")]
    ParameterCollision {
        type_name: String,
        parameter: String,
    },

    // Driver-level manifest handling
    #[error("manifest I/O error: {0}")]
    ManifestIo(#[from] std::io::Error),

    #[error("manifest parse error: {0}")]
    ManifestParse(#[from] serde_json::Error),

    // Config errors
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}
