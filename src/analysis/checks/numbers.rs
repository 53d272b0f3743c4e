// src/analysis/checks/numbers.rs
//! Numeric literal formatting: base prefixes, exponents, and the imaginary
//! marker must be lowercase. Uppercase hex digits are fine.

use tree_sitter::Node;

use crate::types::Violation;

use super::CheckContext;

pub fn check_numbers(ctx: &CheckContext, out: &mut Vec<Violation>) {
    walk(ctx.root, ctx, out);
}

fn walk(node: Node, ctx: &CheckContext, out: &mut Vec<Violation>) {
    if matches!(node.kind(), "integer" | "float") {
        let text = ctx.node_text(node);
        if has_bad_suffix(text) {
            ctx.report(out, "SW310", node, format!("Found bad number suffix '{text}'"));
        }
    }
    for child in node.children(&mut node.walk()) {
        walk(child, ctx, out);
    }
}

fn has_bad_suffix(text: &str) -> bool {
    if let Some(rest) = text.strip_prefix('0') {
        match rest.chars().next() {
            Some('X' | 'O' | 'B') => return true,
            // Hex digits may legitimately be uppercase (0xFF, 0xE).
            Some('x') => return false,
            Some('o' | 'b') => return false,
            _ => {}
        }
    }
    text.contains('E') || text.contains('J')
}

#[cfg(test)]
mod tests {
    use super::has_bad_suffix;

    #[test]
    fn test_uppercase_prefixes_and_exponents_are_bad() {
        for number in ["0X1", "0X1A", "0XFF", "0XE", "1.5E10", "0O11", "0B1001", "10J"] {
            assert!(has_bad_suffix(number), "{number} should be flagged");
        }
    }

    #[test]
    fn test_lowercase_and_plain_numbers_are_fine() {
        for number in [
            "1", "29", "0xFF", "1.5e10", "0o11", "0b1001", "0xE", "0xB", "0xEE", "0xEEE", "0x1E",
            "0xE1", "10j",
        ] {
            assert!(!has_bad_suffix(number), "{number} should pass");
        }
    }
}
