//! The line-generation contract shared by every node.

use crate::ast::Node;
use crate::indent::Indent;

/// Trait for constructs that can be rendered to source lines.
///
/// `generate` must be pure: calling it repeatedly on the same node yields the
/// same lines, so a tree can be rendered once for fingerprinting and again
/// for output. Lines carry no trailing newline; [`Generable::to_code`] is the
/// single place where lines are joined.
pub trait Generable {
    /// Produce the lines making up this code construct.
    fn generate(&self) -> Vec<String>;

    /// Render the whole construct as one newline-joined string.
    fn to_code(&self) -> String {
        self.generate().join("\n")
    }
}

impl<T: Generable + ?Sized> Generable for &T {
    fn generate(&self) -> Vec<String> {
        (*self).generate()
    }
}

impl<T: Generable + ?Sized> Generable for Box<T> {
    fn generate(&self) -> Vec<String> {
        self.as_ref().generate()
    }
}

/// Prefix each non-empty line with one indentation unit.
///
/// Empty lines stay empty so blank separators never carry trailing
/// whitespace.
pub fn indent_lines(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| {
            if line.is_empty() {
                line
            } else {
                format!("{}{}", Indent::C.as_str(), line)
            }
        })
        .collect()
}

/// Flatten an ordered child sequence into one indented line sequence.
///
/// Every block-like node defers to this instead of re-implementing the
/// indentation contract.
pub fn generate_children(children: &[Node]) -> Vec<String> {
    let mut lines = Vec::new();
    for child in children {
        lines.extend(child.generate());
    }
    indent_lines(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_skips_empty_lines() {
        let lines = indent_lines(vec!["int x;".to_string(), String::new()]);
        assert_eq!(lines, vec!["  int x;", ""]);
    }

    #[test]
    fn test_generate_children_flattens() {
        let children = vec![Node::statement("a = 1"), Node::statement("b = 2")];
        assert_eq!(generate_children(&children), vec!["  a = 1;", "  b = 2;"]);
    }
}
