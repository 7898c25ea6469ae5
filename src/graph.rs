//! Read-only type graph.
//!
//! One graph is built per generation run from the host's type nodes and is
//! treated as immutable input for the duration of the run. Only partial types
//! enter the graph: a type without that capability is invisible to generation,
//! both as a candidate and as a base-chain ancestor. Insertion order is
//! preserved so a run's output ordering is deterministic for a given
//! manifest.

use indexmap::IndexMap;

use crate::config::NamingConvention;
use crate::extract;
use crate::model::TypeDescriptor;
use crate::node::TypeNode;

/// Mapping from type name to descriptor, in manifest order.
#[derive(Debug, Default)]
pub struct TypeGraph {
    types: IndexMap<String, TypeDescriptor>,
}

impl TypeGraph {
    /// Builds the graph for one generation run. Non-partial nodes are
    /// dropped; a duplicate name replaces the earlier entry.
    pub fn build(nodes: &[TypeNode], naming: &NamingConvention) -> Self {
        let mut types = IndexMap::new();
        for node in nodes.iter().filter(|node| node.is_partial) {
            let descriptor = extract::extract(node, naming);
            types.insert(descriptor.name.clone(), descriptor);
        }
        Self { types }
    }

    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    /// Descriptors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
