//! Preprocessor conditional groups.
//!
//! `#include`, `#define` and `#pragma` are plain [`Node`] variants; this
//! module holds the multi-line `#ifdef`/`#ifndef` construct.

use crate::generable::Generable;

use super::Node;

/// An `#ifdef`/`#ifndef` ... `#else` ... `#endif` group.
///
/// Branch contents render at the left margin; the preprocessor ignores
/// indentation, matching how the directives are written by hand.
#[derive(Debug, Clone, PartialEq)]
pub struct PpConditional {
    condition: String,
    negated: bool,
    if_lines: Vec<Node>,
    else_lines: Vec<Node>,
}

impl PpConditional {
    /// An `#ifdef` group.
    pub fn ifdef(condition: impl Into<String>, if_lines: Vec<Node>) -> Self {
        Self {
            condition: condition.into(),
            negated: false,
            if_lines,
            else_lines: Vec::new(),
        }
    }

    /// An `#ifndef` group.
    pub fn ifndef(condition: impl Into<String>, if_lines: Vec<Node>) -> Self {
        Self {
            condition: condition.into(),
            negated: true,
            if_lines,
            else_lines: Vec::new(),
        }
    }

    pub fn with_else(mut self, else_lines: Vec<Node>) -> Self {
        self.else_lines = else_lines;
        self
    }
}

impl Generable for PpConditional {
    fn generate(&self) -> Vec<String> {
        let directive = if self.negated { "#ifndef" } else { "#ifdef" };
        let mut lines = vec![format!("{directive} {}", self.condition)];
        for node in &self.if_lines {
            lines.extend(node.generate());
        }
        if !self.else_lines.is_empty() {
            lines.push("#else".to_string());
            for node in &self.else_lines {
                lines.extend(node.generate());
            }
        }
        lines.push("#endif".to_string());
        lines
    }
}
