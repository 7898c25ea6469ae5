//! Base chain resolution.
//!
//! Walks a descriptor's base-type reference and produces the ordered list of
//! ancestor-forwarded parameters. Per ancestor, exactly one of two sources
//! applies:
//!
//! - an explicit constructor: its parameters are forwarded verbatim and the
//!   ancestor is treated as opaque (its own dependency fields, if any, are not
//!   separately exposed and the walk stops there);
//! - otherwise the ancestor's own dependency members, followed by a
//!   depth-first recursion into its base, ancestor-most parameters appended
//!   last.
//!
//! The walk carries a visited set so a malformed graph with a cycle fails as
//! an unresolvable chain instead of looping.

use std::collections::HashSet;

use crate::error::GenError;
use crate::graph::TypeGraph;
use crate::model::{Parameter, TypeDescriptor};

/// Result of resolving a descriptor's ancestor chain.
#[derive(Debug, Default)]
pub struct BaseChain {
    /// Ancestor-forwarded parameters, nearest ancestor first.
    pub ancestor_parameters: Vec<Parameter>,
    /// Whether the generated constructor must chain to the base with an
    /// explicit initializer call. True whenever ancestor parameters exist, or
    /// the base declares an explicit zero-parameter constructor. A base with
    /// only an implicit parameterless constructor needs no explicit call.
    pub needs_base_call: bool,
}

/// Resolves the ancestor parameter list for `descriptor`.
pub fn resolve_chain(
    descriptor: &TypeDescriptor,
    graph: &TypeGraph,
) -> Result<BaseChain, GenError> {
    let Some(base_name) = &descriptor.base_type else {
        return Ok(BaseChain::default());
    };

    let mut visited = HashSet::new();
    visited.insert(descriptor.name.clone());

    let mut parameters = Vec::new();
    let explicit_chain = collect(
        base_name,
        &descriptor.name,
        graph,
        &mut visited,
        &mut parameters,
    )?;

    let needs_base_call = explicit_chain || !parameters.is_empty();
    Ok(BaseChain {
        ancestor_parameters: parameters,
        needs_base_call,
    })
}

/// Appends the parameters contributed by `base_name` and its ancestors.
/// Returns true when some ancestor declares an explicit constructor, which
/// forces a base call even with zero arguments.
fn collect(
    base_name: &str,
    type_name: &str,
    graph: &TypeGraph,
    visited: &mut HashSet<String>,
    out: &mut Vec<Parameter>,
) -> Result<bool, GenError> {
    let base = graph.get(base_name).ok_or_else(|| GenError::UnresolvedBase {
        type_name: type_name.to_string(),
        base: base_name.to_string(),
    })?;

    if !visited.insert(base.name.clone()) {
        return Err(GenError::BaseChainCycle {
            type_name: type_name.to_string(),
            via: base.name.clone(),
        });
    }

    if let Some(ctor) = &base.explicit_constructor {
        // Opaque ancestor: forward its declared parameters and stop.
        out.extend(ctor.parameters.iter().cloned());
        return Ok(true);
    }

    out.extend(base.own_dependencies.iter().map(|dep| Parameter {
        name: dep.parameter_name.clone(),
        ty: dep.ty.clone(),
        // Validated by the ancestor's own generated constructor.
        is_reference_like: false,
    }));

    match &base.base_type {
        Some(next) => collect(next, type_name, graph, visited, out),
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NamingConvention;
    use crate::graph::TypeGraph;
    use crate::node::TypeNode;

    fn build_graph(json: &str) -> TypeGraph {
        let nodes: Vec<TypeNode> = serde_json::from_str(json).unwrap();
        TypeGraph::build(&nodes, &NamingConvention::default())
    }

    fn params(chain: &BaseChain) -> Vec<&str> {
        chain
            .ancestor_parameters
            .iter()
            .map(|p| p.name.as_str())
            .collect()
    }

    #[test]
    fn test_no_base_type_yields_empty_chain() {
        let graph = build_graph(r#"[{ "name": "ExampleService", "is_partial": true }]"#);
        let chain = resolve_chain(graph.get("ExampleService").unwrap(), &graph).unwrap();
        assert!(chain.ancestor_parameters.is_empty());
        assert!(!chain.needs_base_call);
    }

    #[test]
    fn test_explicit_base_constructor_is_forwarded_verbatim() {
        let graph = build_graph(
            r#"[
                { "name": "ExampleService", "is_partial": true, "base_type": "BaseService" },
                {
                    "name": "BaseService", "is_partial": true,
                    "fields": [
                        { "name": "_hidden", "type": { "name": "IHidden" }, "has_dependency_marker": true }
                    ],
                    "constructor": {
                        "parameters": [
                            { "name": "someString", "type": { "name": "string" } },
                            { "name": "count", "type": { "name": "int" } }
                        ]
                    }
                }
            ]"#,
        );
        let chain = resolve_chain(graph.get("ExampleService").unwrap(), &graph).unwrap();
        // Opaque base: its own dependency fields are not separately exposed.
        assert_eq!(params(&chain), vec!["someString", "count"]);
        assert!(chain.needs_base_call);
    }

    #[test]
    fn test_base_dependency_members_are_forwarded_when_no_constructor() {
        let graph = build_graph(
            r#"[
                { "name": "ExampleService", "is_partial": true, "base_type": "BaseService" },
                {
                    "name": "BaseService", "is_partial": true,
                    "fields": [
                        { "name": "_someString", "type": { "name": "string" }, "has_dependency_marker": true }
                    ]
                }
            ]"#,
        );
        let chain = resolve_chain(graph.get("ExampleService").unwrap(), &graph).unwrap();
        assert_eq!(params(&chain), vec!["someString"]);
        assert!(chain.needs_base_call);
    }

    #[test]
    fn test_recursion_appends_ancestor_most_parameters_last() {
        let graph = build_graph(
            r#"[
                { "name": "Leaf", "is_partial": true, "base_type": "Mid" },
                {
                    "name": "Mid", "is_partial": true, "base_type": "Root",
                    "fields": [
                        { "name": "_mid", "type": { "name": "IMid" }, "has_dependency_marker": true }
                    ]
                },
                {
                    "name": "Root", "is_partial": true,
                    "fields": [
                        { "name": "_root", "type": { "name": "IRoot" }, "has_dependency_marker": true }
                    ]
                }
            ]"#,
        );
        let chain = resolve_chain(graph.get("Leaf").unwrap(), &graph).unwrap();
        assert_eq!(params(&chain), vec!["mid", "root"]);
    }

    #[test]
    fn test_explicit_zero_parameter_constructor_still_needs_base_call() {
        let graph = build_graph(
            r#"[
                { "name": "ExampleService", "is_partial": true, "base_type": "BaseService" },
                { "name": "BaseService", "is_partial": true, "constructor": { "parameters": [] } }
            ]"#,
        );
        let chain = resolve_chain(graph.get("ExampleService").unwrap(), &graph).unwrap();
        assert!(chain.ancestor_parameters.is_empty());
        assert!(chain.needs_base_call);
    }

    #[test]
    fn test_missing_base_is_an_unresolved_reference() {
        let graph = build_graph(
            r#"[{ "name": "ExampleService", "is_partial": true, "base_type": "Missing" }]"#,
        );
        let err = resolve_chain(graph.get("ExampleService").unwrap(), &graph).unwrap_err();
        assert!(matches!(err, GenError::UnresolvedBase { .. }));
    }

    #[test]
    fn test_cycle_is_detected() {
        let graph = build_graph(
            r#"[
                { "name": "A", "is_partial": true, "base_type": "B" },
                { "name": "B", "is_partial": true, "base_type": "A" }
            ]"#,
        );
        let err = resolve_chain(graph.get("A").unwrap(), &graph).unwrap_err();
        assert!(matches!(err, GenError::BaseChainCycle { .. }));
    }

    #[test]
    fn test_self_referential_base_is_a_cycle() {
        let graph =
            build_graph(r#"[{ "name": "A", "is_partial": true, "base_type": "A" }]"#);
        let err = resolve_chain(graph.get("A").unwrap(), &graph).unwrap_err();
        assert!(matches!(err, GenError::BaseChainCycle { .. }));
    }
}
