//! Brace-delimited blocks, top-level modules, and function bodies.

use std::fmt;

use crate::generable::{Generable, generate_children};

use super::Node;
use super::decl::Declarator;

/// An ordered sequence of child nodes wrapped in braces.
///
/// Children may be appended until rendering; rendering itself never mutates
/// the block. An empty block still renders both delimiter lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    contents: Vec<Node>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: Vec<Node>) -> Self {
        Self { contents }
    }

    pub fn append(&mut self, node: impl Into<Node>) {
        self.contents.push(node.into());
    }

    pub fn extend(&mut self, nodes: impl IntoIterator<Item = Node>) {
        self.contents.extend(nodes);
    }

    pub fn insert(&mut self, index: usize, node: impl Into<Node>) {
        self.contents.insert(index, node.into());
    }

    pub fn contents(&self) -> &[Node] {
        &self.contents
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

impl Generable for Block {
    fn generate(&self) -> Vec<String> {
        let mut lines = vec!["{".to_string()];
        lines.extend(generate_children(&self.contents));
        lines.push("}".to_string());
        lines
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_code())
    }
}

/// A translation-unit-level sequence of declarations.
///
/// Children render at the left margin separated by blank lines; there are no
/// enclosing delimiters and an empty module renders nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Module {
    contents: Vec<Node>,
}

impl Module {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: Vec<Node>) -> Self {
        Self { contents }
    }

    pub fn append(&mut self, node: impl Into<Node>) {
        self.contents.push(node.into());
    }

    pub fn extend(&mut self, nodes: impl IntoIterator<Item = Node>) {
        self.contents.extend(nodes);
    }

    pub fn contents(&self) -> &[Node] {
        &self.contents
    }
}

impl Generable for Module {
    fn generate(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (i, child) in self.contents.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            lines.extend(child.generate());
        }
        lines
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_code())
    }
}

/// A function definition: signature declarator plus body block.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionBody {
    fdecl: Declarator,
    body: Block,
}

impl FunctionBody {
    /// `fdecl` is expected to be a `Function`-shaped declarator; it renders
    /// without a trailing semicolon, followed by the body block.
    pub fn new(fdecl: Declarator, body: Block) -> Self {
        Self { fdecl, body }
    }
}

impl Generable for FunctionBody {
    fn generate(&self) -> Vec<String> {
        let mut lines = self.fdecl.generate_decl(false);
        lines.extend(self.body.generate());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_block() {
        assert_eq!(Block::new().generate(), vec!["{", "}"]);
    }

    #[test]
    fn test_block_indents_children() {
        let mut block = Block::new();
        block.append(Node::statement("int x = 0"));
        block.append(Node::statement("return x"));
        assert_eq!(
            block.generate(),
            vec!["{", "  int x = 0;", "  return x;", "}"]
        );
    }

    #[test]
    fn test_nested_blocks_indent_once_per_level() {
        let mut inner = Block::new();
        inner.append(Node::statement("x += 1"));
        let mut outer = Block::new();
        outer.append(inner);
        assert_eq!(outer.generate(), vec!["{", "  {", "    x += 1;", "  }", "}"]);
    }

    #[test]
    fn test_empty_module_renders_nothing() {
        assert_eq!(Module::new().generate(), Vec::<String>::new());
        assert_eq!(Module::new().to_code(), "");
    }

    #[test]
    fn test_module_separates_with_blank_lines() {
        let mut module = Module::new();
        module.append(Node::include_system("stdio.h"));
        module.append(Node::statement("int x"));
        assert_eq!(
            module.generate(),
            vec!["#include <stdio.h>", "", "int x;"]
        );
    }

    #[test]
    fn test_function_body() {
        let fdecl = Declarator::value("int", "main").function(vec![]);
        let mut body = Block::new();
        body.append(Node::statement("return 0"));
        let func = FunctionBody::new(fdecl, body);
        assert_eq!(
            func.generate(),
            vec!["int main()", "{", "  return 0;", "}"]
        );
    }

    #[test]
    fn test_rendering_twice_is_identical() {
        let mut block = Block::new();
        block.append(Node::statement("a = b"));
        assert_eq!(block.generate(), block.generate());
    }
}
