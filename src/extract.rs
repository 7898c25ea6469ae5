//! Type descriptor extraction.
//!
//! Turns one host-supplied [`TypeNode`] into a [`TypeDescriptor`]: structural
//! details are copied verbatim, marked fields become dependency members in
//! declaration order, and parameter names are derived once, here, with the
//! configured [`NamingConvention`]. Extraction is total: every node maps to a
//! descriptor, with no error conditions. Whether the node is eligible at all
//! (the partial capability) is decided by the graph builder, not here.

use crate::config::NamingConvention;
use crate::model::{
    is_value_type_keyword, DependencyMember, ExplicitConstructor, Modifiers, Parameter,
    TypeDescriptor,
};
use crate::node::{FieldNode, TypeNode};

/// Extracts the generator's descriptor for one declared type.
pub fn extract(node: &TypeNode, naming: &NamingConvention) -> TypeDescriptor {
    let own_dependencies = node
        .fields
        .iter()
        .filter(|field| is_injectable(field))
        .map(|field| DependencyMember {
            field_name: field.name.clone(),
            parameter_name: naming.parameter_name(&field.name),
            ty: field.ty.clone(),
            is_reference_like: reference_like(field),
        })
        .collect();

    let explicit_constructor = node.constructor.as_ref().map(|ctor| ExplicitConstructor {
        parameters: ctor
            .parameters
            .iter()
            .map(|param| Parameter {
                name: param.name.clone(),
                ty: param.ty.clone(),
                // Forwarded verbatim; the declaring constructor owns any
                // validation of its own parameters.
                is_reference_like: false,
            })
            .collect(),
    });

    TypeDescriptor {
        name: node.name.clone(),
        namespace: node.namespace.clone(),
        visibility: node.visibility,
        modifiers: Modifiers {
            sealed: node.is_sealed,
            is_abstract: node.is_abstract,
        },
        generic_parameters: node.generic_parameters.clone(),
        base_type: node.base_type.clone(),
        own_dependencies,
        explicit_constructor,
    }
}

/// Only non-static instance fields carrying the marker are injectable;
/// already-initialized fields are excluded.
fn is_injectable(field: &FieldNode) -> bool {
    field.has_dependency_marker && !field.is_static && !field.has_initializer
}

fn reference_like(field: &FieldNode) -> bool {
    field
        .is_reference_like
        .unwrap_or_else(|| !is_value_type_keyword(&field.ty.name))
}
