//! Constructor synthesis.
//!
//! Merges a type's own dependency members with its resolved ancestor
//! parameters into one [`ResolvedConstructorPlan`]. The plan is a pure
//! function of the descriptor and its chain, recomputed from scratch on every
//! generation pass. Own parameters always precede ancestor-forwarded ones,
//! and a name collision across the merge is an error: parameters are never
//! silently dropped or renamed.

use std::collections::HashSet;

use crate::error::GenError;
use crate::model::{Parameter, TypeDescriptor};
use crate::resolve::BaseChain;

/// One backing-field assignment performed by the generated constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub field: String,
    pub parameter: String,
}

/// The single artifact produced per type: the merged parameter list and how
/// each parameter is consumed.
#[derive(Debug, Clone)]
pub struct ResolvedConstructorPlan {
    /// Own-dependency parameters first, then ancestor-forwarded ones.
    pub parameters: Vec<Parameter>,
    /// Names forwarded to the base-initializer call, in parameter order.
    pub base_call_arguments: Vec<String>,
    /// Assignments to this type's own backing fields, in declaration order.
    pub own_assignments: Vec<Assignment>,
    pub needs_base_call: bool,
}

/// Builds the constructor plan for `descriptor`.
pub fn synthesize(
    descriptor: &TypeDescriptor,
    chain: BaseChain,
) -> Result<ResolvedConstructorPlan, GenError> {
    let own: Vec<Parameter> = descriptor
        .own_dependencies
        .iter()
        .map(|dep| Parameter {
            name: dep.parameter_name.clone(),
            ty: dep.ty.clone(),
            is_reference_like: dep.is_reference_like,
        })
        .collect();

    let mut seen = HashSet::new();
    for parameter in own.iter().chain(chain.ancestor_parameters.iter()) {
        if !seen.insert(parameter.name.as_str()) {
            return Err(GenError::ParameterCollision {
                type_name: descriptor.name.clone(),
                parameter: parameter.name.clone(),
            });
        }
    }

    let own_assignments = descriptor
        .own_dependencies
        .iter()
        .map(|dep| Assignment {
            field: dep.field_name.clone(),
            parameter: dep.parameter_name.clone(),
        })
        .collect();

    let base_call_arguments = chain
        .ancestor_parameters
        .iter()
        .map(|p| p.name.clone())
        .collect();

    let mut parameters = own;
    parameters.extend(chain.ancestor_parameters);

    Ok(ResolvedConstructorPlan {
        parameters,
        base_call_arguments,
        own_assignments,
        needs_base_call: chain.needs_base_call,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DependencyMember, Modifiers, TypeRef, Visibility};

    fn descriptor_with_deps(deps: Vec<DependencyMember>) -> TypeDescriptor {
        TypeDescriptor {
            name: "ExampleService".to_string(),
            namespace: String::new(),
            visibility: Visibility::Public,
            modifiers: Modifiers::default(),
            generic_parameters: vec![],
            base_type: None,
            own_dependencies: deps,
            explicit_constructor: None,
        }
    }

    fn dep(field: &str, param: &str, ty: &str) -> DependencyMember {
        DependencyMember {
            field_name: field.to_string(),
            parameter_name: param.to_string(),
            ty: TypeRef::new(ty, ""),
            is_reference_like: true,
        }
    }

    fn forwarded(name: &str, ty: &str) -> Parameter {
        Parameter {
            name: name.to_string(),
            ty: TypeRef::new(ty, ""),
            is_reference_like: false,
        }
    }

    #[test]
    fn test_own_parameters_precede_ancestor_parameters() {
        let descriptor = descriptor_with_deps(vec![dep(
            "anotherService",
            "anotherService",
            "IAnotherService",
        )]);
        let chain = BaseChain {
            ancestor_parameters: vec![forwarded("someString", "string")],
            needs_base_call: true,
        };
        let plan = synthesize(&descriptor, chain).unwrap();
        let names: Vec<_> = plan.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["anotherService", "someString"]);
        assert_eq!(plan.base_call_arguments, vec!["someString"]);
        assert_eq!(
            plan.own_assignments,
            vec![Assignment {
                field: "anotherService".to_string(),
                parameter: "anotherService".to_string(),
            }]
        );
        assert!(plan.needs_base_call);
    }

    #[test]
    fn test_assignment_uses_backing_field_name() {
        let descriptor = descriptor_with_deps(vec![dep("_someString", "someString", "string")]);
        let plan = synthesize(&descriptor, BaseChain::default()).unwrap();
        assert_eq!(
            plan.own_assignments,
            vec![Assignment {
                field: "_someString".to_string(),
                parameter: "someString".to_string(),
            }]
        );
    }

    #[test]
    fn test_collision_between_own_and_forwarded_fails() {
        let descriptor =
            descriptor_with_deps(vec![dep("service", "service", "IService")]);
        let chain = BaseChain {
            ancestor_parameters: vec![forwarded("service", "IOtherService")],
            needs_base_call: true,
        };
        let err = synthesize(&descriptor, chain).unwrap_err();
        assert!(matches!(
            err,
            GenError::ParameterCollision { ref parameter, .. } if parameter == "service"
        ));
    }

    #[test]
    fn test_collision_among_forwarded_parameters_fails() {
        let descriptor = descriptor_with_deps(vec![]);
        let chain = BaseChain {
            ancestor_parameters: vec![forwarded("x", "IA"), forwarded("x", "IB")],
            needs_base_call: true,
        };
        assert!(synthesize(&descriptor, chain).is_err());
    }

    #[test]
    fn test_reference_like_flag_survives_for_own_parameters() {
        let mut value_dep = dep("_count", "count", "int");
        value_dep.is_reference_like = false;
        let descriptor = descriptor_with_deps(vec![
            dep("anotherService", "anotherService", "IAnotherService"),
            value_dep,
        ]);
        let plan = synthesize(&descriptor, BaseChain::default()).unwrap();
        assert!(plan.parameters[0].is_reference_like);
        assert!(!plan.parameters[1].is_reference_like);
    }
}
