// src/analysis/checks/conditions.rs
//! Boolean condition checks: the same operand appearing twice in one
//! `and`/`or` chain is always a bug or dead logic.

use tree_sitter::Node;

use crate::types::Violation;

use super::CheckContext;

pub fn check_conditions(ctx: &CheckContext, out: &mut Vec<Violation>) {
    walk(ctx.root, ctx, out);
}

fn walk(node: Node, ctx: &CheckContext, out: &mut Vec<Violation>) {
    // Only the top of a chain is inspected; nested boolean operators are
    // flattened into it, including across parentheses.
    if node.kind() == "boolean_operator" && !has_boolean_parent(node) {
        check_chain(node, ctx, out);
    }
    for child in node.children(&mut node.walk()) {
        walk(child, ctx, out);
    }
}

fn has_boolean_parent(node: Node) -> bool {
    let mut current = node.parent();
    while let Some(parent) = current {
        match parent.kind() {
            "boolean_operator" => return true,
            "parenthesized_expression" => current = parent.parent(),
            _ => return false,
        }
    }
    false
}

fn check_chain(node: Node, ctx: &CheckContext, out: &mut Vec<Violation>) {
    let mut operands = Vec::new();
    flatten(node, ctx, &mut operands);

    for (index, operand) in operands.iter().enumerate() {
        if operands[..index].contains(operand) {
            ctx.report(
                out,
                "SW301",
                node,
                format!("Found duplicate element '{operand}' in condition"),
            );
            return;
        }
    }
}

fn flatten(node: Node, ctx: &CheckContext, operands: &mut Vec<String>) {
    match node.kind() {
        "boolean_operator" => {
            if let Some(left) = node.child_by_field_name("left") {
                flatten(left, ctx, operands);
            }
            if let Some(right) = node.child_by_field_name("right") {
                flatten(right, ctx, operands);
            }
        }
        "parenthesized_expression" => {
            if let Some(inner) = node.named_child(0) {
                flatten(inner, ctx, operands);
            }
        }
        _ => operands.push(ctx.node_text(node).trim().to_string()),
    }
}
