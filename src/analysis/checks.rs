// src/analysis/checks.rs
//! Tree walks that detect individual style violations.
//!
//! Each check is a simple predicate over the parse tree; they share the
//! [`CheckContext`] and push [`Violation`] records that the baseline layer
//! later reconciles.

mod complexity;
mod conditions;
mod naming;
mod numbers;

use tree_sitter::Node;

use crate::config::RuleConfig;
use crate::types::Violation;

pub use complexity::check_complexity;
pub use conditions::check_conditions;
pub use naming::check_naming;
pub use numbers::check_numbers;

/// Context for running checks on a single file.
pub struct CheckContext<'a> {
    pub root: Node<'a>,
    pub source: &'a str,
    pub lines: &'a [&'a str],
    pub config: &'a RuleConfig,
}

impl<'a> CheckContext<'a> {
    /// Returns the source text of a node.
    #[must_use]
    pub fn node_text(&self, node: Node) -> &'a str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }

    /// Returns the verbatim source line for a 0-based row.
    #[must_use]
    pub fn physical_line(&self, row: usize) -> String {
        self.lines.get(row).copied().unwrap_or("").to_string()
    }

    /// Records a violation at the start of `node`.
    pub fn report(&self, out: &mut Vec<Violation>, code: &str, node: Node, message: String) {
        let pos = node.start_position();
        out.push(Violation::new(
            code,
            pos.row + 1,
            pos.column + 1,
            message,
            self.physical_line(pos.row),
        ));
    }
}
