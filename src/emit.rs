//! Generated unit rendering.
//!
//! Renders one [`ResolvedConstructorPlan`] into the additive declaration unit
//! the host merges back into the compilation: fixed preamble, optional
//! namespace wrapper, the type re-declared with its original structure, the
//! synthesized constructor, and the two extensibility hooks. Output is pure
//! text, byte-stable for identical input, so incremental regeneration of an
//! unchanged graph is a no-op.
//!
//! Preprocessor lines (`#if` / `#endif`) are emitted at column zero
//! regardless of the surrounding nesting depth.

use crate::model::{GeneratedUnit, TypeDescriptor};
use crate::synth::ResolvedConstructorPlan;

/// Renders the generated unit for one type.
pub fn emit(descriptor: &TypeDescriptor, plan: &ResolvedConstructorPlan) -> GeneratedUnit {
    let namespace = descriptor.namespace.as_str();
    let has_namespace = !namespace.is_empty();
    let ind = if has_namespace { "    " } else { "" };

    let mut out = String::new();
    out.push_str("// <auto-generated/>\n");
    out.push_str("#pragma warning disable\n");
    out.push_str("#nullable enable\n");

    if has_namespace {
        out.push_str(&format!("namespace {namespace}\n{{\n"));
    }

    out.push_str(&format!("{ind}/// <inheritdoc/>\n"));
    out.push_str(&format!(
        "{ind}{} {}partial class {}{}\n",
        descriptor.visibility.keyword(),
        descriptor.modifiers.render(),
        descriptor.name,
        render_generics(&descriptor.generic_parameters),
    ));
    out.push_str(&format!("{ind}{{\n"));

    // Constructor signature, always public; generic parameters do not repeat
    // on the constructor name.
    let parameters = plan
        .parameters
        .iter()
        .map(|p| format!("{} {}", p.ty.render_from(namespace), p.name))
        .collect::<Vec<_>>()
        .join(", ");
    let base_call = if plan.needs_base_call {
        format!(" : base({})", plan.base_call_arguments.join(", "))
    } else {
        String::new()
    };
    out.push_str(&format!(
        "{ind}    public {}({parameters}){base_call}\n",
        descriptor.name
    ));
    out.push_str(&format!("{ind}    {{\n"));
    out.push('\n');

    let guarded: Vec<&str> = plan
        .parameters
        .iter()
        .filter(|p| p.is_reference_like)
        .map(|p| p.name.as_str())
        .collect();
    if !guarded.is_empty() {
        out.push_str("#if NET6_0_OR_GREATER\n");
        for name in &guarded {
            out.push_str(&format!(
                "{ind}        ArgumentNullException.ThrowIfNull({name});\n"
            ));
        }
        out.push_str("#endif\n");
    }

    out.push_str(&format!("{ind}        PreConstruct();\n"));
    out.push('\n');
    if !plan.own_assignments.is_empty() {
        for assignment in &plan.own_assignments {
            out.push_str(&format!(
                "{ind}        this.{} = {};\n",
                assignment.field, assignment.parameter
            ));
        }
        out.push('\n');
    }
    out.push_str(&format!("{ind}        PostConstruct();\n"));
    out.push_str(&format!("{ind}    }}\n"));
    out.push('\n');
    out.push_str(&format!("{ind}    partial void PreConstruct();\n"));
    out.push_str(&format!("{ind}    partial void PostConstruct();\n"));
    out.push_str(&format!("{ind}}}\n"));

    if has_namespace {
        out.push_str("}\n");
    }

    GeneratedUnit {
        key: descriptor.fully_qualified_name(),
        text: out,
    }
}

fn render_generics(parameters: &[String]) -> String {
    if parameters.is_empty() {
        String::new()
    } else {
        format!("<{}>", parameters.join(","))
    }
}
