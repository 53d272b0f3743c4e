// src/analysis/checks/naming.rs
//! Checks based on variable names: blacklisted, too short, and private
//! names, plus module metadata assignments.

use tree_sitter::Node;

use crate::constants::{BAD_MODULE_METADATA_VARIABLES, BAD_VARIABLE_NAMES};
use crate::types::Violation;

use super::CheckContext;

/// Checks names wherever they are bound: assignment targets, attribute
/// stores, function names and parameters, `except ... as` aliases, and
/// import aliases.
pub fn check_naming(ctx: &CheckContext, out: &mut Vec<Violation>) {
    walk(ctx.root, ctx, out);
}

fn walk(node: Node, ctx: &CheckContext, out: &mut Vec<Violation>) {
    match node.kind() {
        "assignment" | "augmented_assignment" => {
            if let Some(left) = node.child_by_field_name("left") {
                check_target(left, ctx, out);
                check_module_metadata(node, left, ctx, out);
            }
        }
        "for_statement" => {
            if let Some(left) = node.child_by_field_name("left") {
                check_target(left, ctx, out);
            }
        }
        "function_definition" => check_function(node, ctx, out),
        "except_clause" => check_except_alias(node, ctx, out),
        "aliased_import" => {
            if let Some(alias) = node.child_by_field_name("alias") {
                check_name(alias, ctx, out);
            }
        }
        _ => {}
    }

    for child in node.children(&mut node.walk()) {
        walk(child, ctx, out);
    }
}

/// Identifiers bound by an assignment target, including tuple unpacking and
/// attribute stores. Subscript targets bind nothing new.
fn check_target(target: Node, ctx: &CheckContext, out: &mut Vec<Violation>) {
    match target.kind() {
        "identifier" => check_name(target, ctx, out),
        "attribute" => {
            if let Some(attr) = target.child_by_field_name("attribute") {
                check_name(attr, ctx, out);
            }
        }
        "pattern_list" | "tuple_pattern" | "list_pattern" => {
            for child in target.named_children(&mut target.walk()) {
                check_target(child, ctx, out);
            }
        }
        _ => {}
    }
}

fn check_function(node: Node, ctx: &CheckContext, out: &mut Vec<Violation>) {
    if let Some(name) = node.child_by_field_name("name") {
        check_name(name, ctx, out);
    }
    let Some(parameters) = node.child_by_field_name("parameters") else {
        return;
    };
    for param in parameters.named_children(&mut parameters.walk()) {
        if let Some(identifier) = parameter_identifier(param) {
            check_name(identifier, ctx, out);
        }
    }
}

/// The identifier a parameter node binds, if any.
fn parameter_identifier(param: Node) -> Option<Node> {
    match param.kind() {
        "identifier" => Some(param),
        "default_parameter" | "typed_default_parameter" => param.child_by_field_name("name"),
        "typed_parameter" | "list_splat_pattern" | "dictionary_splat_pattern" => param
            .named_children(&mut param.walk())
            .find(|child| child.kind() == "identifier"),
        _ => None,
    }
}

/// `except Something as name:` binds the name after `as`.
fn check_except_alias(node: Node, ctx: &CheckContext, out: &mut Vec<Violation>) {
    let mut saw_as = false;
    for child in node.children(&mut node.walk()) {
        if saw_as && child.kind() == "identifier" {
            check_name(child, ctx, out);
            return;
        }
        if child.kind() == "as" {
            saw_as = true;
        }
    }
}

fn check_module_metadata(
    assignment: Node,
    left: Node,
    ctx: &CheckContext,
    out: &mut Vec<Violation>,
) {
    if left.kind() != "identifier" || !is_module_level(assignment) {
        return;
    }
    let name = ctx.node_text(left);
    if BAD_MODULE_METADATA_VARIABLES.contains(&name) {
        ctx.report(
            out,
            "SW120",
            left,
            format!("Found wrong metadata variable '{name}'"),
        );
    }
}

fn is_module_level(assignment: Node) -> bool {
    assignment.parent().is_some_and(|stmt| {
        stmt.kind() == "expression_statement"
            && stmt.parent().is_some_and(|top| top.kind() == "module")
    })
}

fn check_name(node: Node, ctx: &CheckContext, out: &mut Vec<Violation>) {
    let name = ctx.node_text(node);
    if name.is_empty() {
        return;
    }

    if BAD_VARIABLE_NAMES.contains(&name) {
        ctx.report(
            out,
            "SW110",
            node,
            format!("Found wrong variable name '{name}'"),
        );
    }
    if is_too_short(name, ctx.config.min_name_length) {
        ctx.report(out, "SW111", node, format!("Found too short name '{name}'"));
    }
    if is_private(name) {
        ctx.report(out, "SW112", node, format!("Found private name '{name}'"));
    }
}

fn is_too_short(name: &str, min_length: usize) -> bool {
    name != "_" && name.chars().count() < min_length
}

fn is_private(name: &str) -> bool {
    name.starts_with("__") && !name.ends_with("__")
}
