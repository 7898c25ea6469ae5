//! Core data model for constructor synthesis.
//!
//! A [`TypeDescriptor`] is the generator's view of one partial type: its
//! structural details (visibility, modifiers, generics, namespace), the fields
//! that carry the dependency marker, and the parameter list of an explicit
//! constructor if the type declares one. Descriptors are built once per
//! generation run and never mutated afterwards.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Declared visibility of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Internal,
}

impl Visibility {
    /// Source keyword for this visibility.
    pub fn keyword(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Internal => "internal",
        }
    }
}

/// Sealing/abstractness modifiers of a type. Mutually exclusive in practice,
/// both optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub sealed: bool,
    pub is_abstract: bool,
}

impl Modifiers {
    /// Renders the modifier keywords with a trailing space, or an empty
    /// string when no modifier is set.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if self.sealed {
            out.push_str("sealed ");
        }
        if self.is_abstract {
            out.push_str("abstract ");
        }
        out
    }
}

/// A possibly-qualified reference to a type.
///
/// `namespace` is empty for built-in type keywords and for types declared
/// outside any namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    pub name: String,
    #[serde(default)]
    pub namespace: String,
}

impl TypeRef {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }

    /// Renders this reference as seen from `current_namespace`: references
    /// from a different, non-empty namespace are fully qualified; everything
    /// else is emitted unqualified.
    pub fn render_from(&self, current_namespace: &str) -> String {
        if self.namespace.is_empty() || self.namespace == current_namespace {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }
}

/// A field that must be supplied at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyMember {
    /// Backing field identifier, as declared.
    pub field_name: String,
    /// Derived identifier used in the generated constructor signature.
    pub parameter_name: String,
    pub ty: TypeRef,
    /// Whether a runtime null check must be emitted for this parameter.
    /// Value types and constrained generics are exempt.
    pub is_reference_like: bool,
}

/// One parameter of a synthesized or explicit constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeRef,
    pub is_reference_like: bool,
}

/// Parameter list of a constructor the type declares itself. A type with an
/// explicit constructor is treated as opaque during base-chain resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplicitConstructor {
    pub parameters: Vec<Parameter>,
}

/// The generator's view of one declared partial type.
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    pub name: String,
    /// Possibly empty qualified path.
    pub namespace: String,
    pub visibility: Visibility,
    pub modifiers: Modifiers,
    /// Type-parameter names in declaration order; never reordered or renamed.
    pub generic_parameters: Vec<String>,
    /// Weak reference to the base type by name; resolved by lookup in the
    /// type graph, not stored.
    pub base_type: Option<String>,
    /// Marked fields in declaration order. Order is significant and is
    /// preserved in generated output.
    pub own_dependencies: Vec<DependencyMember>,
    pub explicit_constructor: Option<ExplicitConstructor>,
}

impl TypeDescriptor {
    /// `Namespace.Name`, or just `Name` when no namespace is declared.
    pub fn fully_qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }
}

/// One generated output unit, keyed by the fully-qualified name of the type
/// it extends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub key: String,
    pub text: String,
}

/// Built-in type keywords that are value types and therefore never receive a
/// null guard.
static VALUE_TYPE_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "bool", "byte", "sbyte", "char", "decimal", "double", "float", "int", "uint", "long",
        "ulong", "short", "ushort", "nint", "nuint",
    ]
    .into_iter()
    .collect()
});

/// Whether `name` is a built-in value-type keyword.
pub fn is_value_type_keyword(name: &str) -> bool {
    VALUE_TYPE_KEYWORDS.contains(name)
}
