// src/analysis/checks/complexity.rs
//! Complexity checks: nesting of definitions, argument counts, return
//! counts, and block nesting depth.

use tree_sitter::Node;

use crate::constants::{NESTED_CLASSES_WHITELIST, NESTED_FUNCTIONS_WHITELIST};
use crate::types::Violation;

use super::CheckContext;

pub fn check_complexity(ctx: &CheckContext, out: &mut Vec<Violation>) {
    walk(ctx.root, ctx, out);
}

fn walk(node: Node, ctx: &CheckContext, out: &mut Vec<Violation>) {
    match node.kind() {
        "function_definition" => check_function(node, ctx, out),
        "class_definition" => check_nested_class(node, ctx, out),
        _ => {}
    }
    for child in node.children(&mut node.walk()) {
        walk(child, ctx, out);
    }
}

fn check_function(node: Node, ctx: &CheckContext, out: &mut Vec<Violation>) {
    let name = node
        .child_by_field_name("name")
        .map_or("<anonymous>", |n| ctx.node_text(n));

    check_nested_function(node, name, ctx, out);
    check_arity(node, name, ctx, out);
    check_returns(node, name, ctx, out);
    check_nesting(node, name, ctx, out);
}

/// Flat functions only; a few conventional names are allowed to nest.
fn check_nested_function(node: Node, name: &str, ctx: &CheckContext, out: &mut Vec<Violation>) {
    if NESTED_FUNCTIONS_WHITELIST.contains(&name) {
        return;
    }
    if has_ancestor(node, "function_definition") {
        ctx.report(out, "SW200", node, format!("Found nested function '{name}'"));
    }
}

fn check_nested_class(node: Node, ctx: &CheckContext, out: &mut Vec<Violation>) {
    let name = node
        .child_by_field_name("name")
        .map_or("<anonymous>", |n| ctx.node_text(n));
    if NESTED_CLASSES_WHITELIST.contains(&name) {
        return;
    }
    if has_ancestor(node, "class_definition") || has_ancestor(node, "function_definition") {
        ctx.report(out, "SW201", node, format!("Found nested class '{name}'"));
    }
}

fn check_arity(node: Node, name: &str, ctx: &CheckContext, out: &mut Vec<Violation>) {
    let count = count_arguments(node, ctx);
    if count > ctx.config.max_arguments {
        ctx.report(
            out,
            "SW203",
            node,
            format!("Found too many arguments in '{name}' ({count})"),
        );
    }
}

/// Counts parameters that bind a value. `self` and `cls` in first position
/// are not counted; bare `*` and `/` separators bind nothing.
fn count_arguments(node: Node, ctx: &CheckContext) -> usize {
    let Some(parameters) = node.child_by_field_name("parameters") else {
        return 0;
    };
    let mut count = 0;
    for (index, param) in parameters
        .named_children(&mut parameters.walk())
        .enumerate()
    {
        if matches!(param.kind(), "keyword_separator" | "positional_separator") {
            continue;
        }
        if index == 0 && matches!(ctx.node_text(param), "self" | "cls") {
            continue;
        }
        count += 1;
    }
    count
}

fn check_returns(node: Node, name: &str, ctx: &CheckContext, out: &mut Vec<Violation>) {
    let count = count_returns(node);
    if count > ctx.config.max_returns {
        ctx.report(
            out,
            "SW205",
            node,
            format!("Found too many return statements in '{name}' ({count})"),
        );
    }
}

/// Return statements belonging to this function only; nested definitions
/// keep their own counts.
fn count_returns(node: Node) -> usize {
    let mut count = 0;
    for child in node.children(&mut node.walk()) {
        match child.kind() {
            "return_statement" => count += 1,
            "function_definition" | "lambda" | "class_definition" => {}
            _ => count += count_returns(child),
        }
    }
    count
}

fn check_nesting(node: Node, name: &str, ctx: &CheckContext, out: &mut Vec<Violation>) {
    let depth = measure_nesting(node, 0);
    if depth > ctx.config.max_nesting_depth {
        ctx.report(
            out,
            "SW207",
            node,
            format!("Found too deep nesting in '{name}' ({depth})"),
        );
    }
}

fn measure_nesting(node: Node, current: usize) -> usize {
    let mut max_depth = current;
    for child in node.children(&mut node.walk()) {
        // Nested definitions are measured on their own.
        if matches!(child.kind(), "function_definition" | "class_definition") {
            continue;
        }
        let child_depth = if is_nesting_node(child.kind()) {
            current + 1
        } else {
            current
        };
        let sub_depth = measure_nesting(child, child_depth);
        if sub_depth > max_depth {
            max_depth = sub_depth;
        }
    }
    max_depth
}

fn is_nesting_node(kind: &str) -> bool {
    matches!(
        kind,
        "if_statement"
            | "for_statement"
            | "while_statement"
            | "with_statement"
            | "try_statement"
            | "match_statement"
    )
}

fn has_ancestor(node: Node, kind: &str) -> bool {
    let mut current = node.parent();
    while let Some(ancestor) = current {
        if ancestor.kind() == kind {
            return true;
        }
        current = ancestor.parent();
    }
    false
}
