//! Host-side input nodes.
//!
//! The host collaborator owns parsing; what it hands the generator is a
//! structural description of each declared type. [`TypeNode`] and
//! [`FieldNode`] are that description, serde-deserializable so the CLI driver
//! can read them from a JSON manifest:
//!
//! ```json
//! [
//!   {
//!     "name": "ExampleService",
//!     "namespace": "ConsoleApp",
//!     "is_partial": true,
//!     "fields": [
//!       {
//!         "name": "anotherService",
//!         "type": { "name": "IAnotherService", "namespace": "ConsoleApp" },
//!         "has_dependency_marker": true
//!       }
//!     ]
//!   }
//! ]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GenError;
use crate::model::{TypeRef, Visibility};

/// Structural description of one declared type, as supplied by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeNode {
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub is_sealed: bool,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub generic_parameters: Vec<String>,
    #[serde(default)]
    pub base_type: Option<String>,
    /// Whether the type can be reopened by an additive declaration unit.
    /// Types without this capability are not processed.
    #[serde(default)]
    pub is_partial: bool,
    #[serde(default)]
    pub fields: Vec<FieldNode>,
    /// Constructor the type declares itself, if any.
    #[serde(default)]
    pub constructor: Option<ConstructorNode>,
}

/// One declared field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldNode {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// Whether the field carries the injectable-dependency marker.
    #[serde(default)]
    pub has_dependency_marker: bool,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub has_initializer: bool,
    /// Overrides the null-guard inference. When absent, built-in value-type
    /// keywords are exempt and everything else is guarded. Hosts set `false`
    /// here for value types and constrained generics the built-in table
    /// cannot know about.
    #[serde(default)]
    pub is_reference_like: Option<bool>,
}

/// An explicitly declared constructor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstructorNode {
    #[serde(default)]
    pub parameters: Vec<ParameterNode>,
}

/// One parameter of an explicitly declared constructor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterNode {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

/// Reads a JSON manifest of type nodes from disk.
pub fn load_manifest(path: &Path) -> Result<Vec<TypeNode>, GenError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
