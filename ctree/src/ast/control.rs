//! Control-flow constructs.
//!
//! A body that is a [`Block`] renders with its braces; any other node
//! renders brace-less, indented one level under the header. A block holding
//! a single child still keeps its braces.

use crate::generable::{Generable, indent_lines};

use super::Node;
use super::block::Block;

fn body_lines(body: &Node) -> Vec<String> {
    match body {
        Node::Block(_) => body.generate(),
        _ => indent_lines(body.generate()),
    }
}

/// An `if` statement with an optional `else` branch.
#[derive(Debug, Clone, PartialEq)]
pub struct If {
    condition: String,
    then_: Box<Node>,
    else_: Option<Box<Node>>,
}

impl If {
    pub fn new(condition: impl Into<String>, then_: impl Into<Node>) -> Self {
        Self {
            condition: condition.into(),
            then_: Box::new(then_.into()),
            else_: None,
        }
    }

    pub fn with_else(mut self, else_: impl Into<Node>) -> Self {
        self.else_ = Some(Box::new(else_.into()));
        self
    }
}

impl Generable for If {
    fn generate(&self) -> Vec<String> {
        let mut lines = vec![format!("if ({})", self.condition)];
        lines.extend(body_lines(&self.then_));
        if let Some(else_) = &self.else_ {
            lines.push("else".to_string());
            lines.extend(body_lines(else_));
        }
        lines
    }
}

/// A `while` loop.
#[derive(Debug, Clone, PartialEq)]
pub struct While {
    condition: String,
    body: Box<Node>,
}

impl While {
    pub fn new(condition: impl Into<String>, body: impl Into<Node>) -> Self {
        Self {
            condition: condition.into(),
            body: Box::new(body.into()),
        }
    }
}

impl Generable for While {
    fn generate(&self) -> Vec<String> {
        let mut lines = vec![format!("while ({})", self.condition)];
        lines.extend(body_lines(&self.body));
        lines
    }
}

/// A `do { ... } while (...);` loop.
#[derive(Debug, Clone, PartialEq)]
pub struct DoWhile {
    condition: String,
    body: Box<Node>,
}

impl DoWhile {
    pub fn new(condition: impl Into<String>, body: impl Into<Node>) -> Self {
        Self {
            condition: condition.into(),
            body: Box::new(body.into()),
        }
    }
}

impl Generable for DoWhile {
    fn generate(&self) -> Vec<String> {
        let mut lines = vec!["do".to_string()];
        lines.extend(body_lines(&self.body));
        lines.push(format!("while ({});", self.condition));
        lines
    }
}

/// A `for` loop with caller-supplied header expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct For {
    start: String,
    condition: String,
    update: String,
    body: Box<Node>,
}

impl For {
    pub fn new(
        start: impl Into<String>,
        condition: impl Into<String>,
        update: impl Into<String>,
        body: impl Into<Node>,
    ) -> Self {
        Self {
            start: start.into(),
            condition: condition.into(),
            update: update.into(),
            body: Box::new(body.into()),
        }
    }
}

impl Generable for For {
    fn generate(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "for ({}; {}; {})",
            self.start, self.condition, self.update
        )];
        lines.extend(body_lines(&self.body));
        lines
    }
}

/// Chain (condition, body) pairs into an if/else-if ladder.
///
/// `base` becomes the final `else` branch. Returns `base` unchanged when no
/// pairs are given.
pub fn make_multiple_ifs(
    conditions_and_bodies: Vec<(String, Node)>,
    base: Option<Node>,
) -> Option<Node> {
    let mut base = base;
    for (condition, body) in conditions_and_bodies.into_iter().rev() {
        let if_ = match base.take() {
            Some(else_) => If::new(condition, body).with_else(else_),
            None => If::new(condition, body),
        };
        base = Some(Node::If(if_));
    }
    base
}

/// Wrap several nodes in a [`Block`]; a single node passes through as-is.
pub fn block_if_necessary(mut contents: Vec<Node>) -> Option<Node> {
    match contents.len() {
        0 => None,
        1 => contents.pop(),
        _ => Some(Node::Block(Block::with_contents(contents))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_statement_if_has_no_braces() {
        let if_ = If::new("x > 0", Node::statement("x -= 1"));
        assert_eq!(if_.generate(), vec!["if (x > 0)", "  x -= 1;"]);
    }

    #[test]
    fn test_block_body_keeps_braces() {
        let mut body = Block::new();
        body.append(Node::statement("x -= 1"));
        let if_ = If::new("x > 0", body);
        assert_eq!(
            if_.generate(),
            vec!["if (x > 0)", "{", "  x -= 1;", "}"]
        );
    }

    #[test]
    fn test_if_else() {
        let if_ = If::new("flag", Node::statement("on()")).with_else(Node::statement("off()"));
        assert_eq!(
            if_.generate(),
            vec!["if (flag)", "  on();", "else", "  off();"]
        );
    }

    #[test]
    fn test_while_loop() {
        let loop_ = While::new("i < n", Node::statement("i += 1"));
        assert_eq!(loop_.generate(), vec!["while (i < n)", "  i += 1;"]);
    }

    #[test]
    fn test_do_while_loop() {
        let loop_ = DoWhile::new("again", Node::statement("step()"));
        assert_eq!(
            loop_.generate(),
            vec!["do", "  step();", "while (again);"]
        );
    }

    #[test]
    fn test_for_loop() {
        let mut body = Block::new();
        body.append(Node::statement("sum += i"));
        let loop_ = For::new("int i = 0", "i < n", "++i", body);
        assert_eq!(
            loop_.generate(),
            vec!["for (int i = 0; i < n; ++i)", "{", "  sum += i;", "}"]
        );
    }

    #[test]
    fn test_make_multiple_ifs() {
        let ladder = make_multiple_ifs(
            vec![
                ("a".to_string(), Node::statement("one()")),
                ("b".to_string(), Node::statement("two()")),
            ],
            Some(Node::statement("other()")),
        )
        .unwrap();
        assert_eq!(
            ladder.generate(),
            vec![
                "if (a)",
                "  one();",
                "else",
                "  if (b)",
                "    two();",
                "  else",
                "    other();",
            ]
        );
    }

    #[test]
    fn test_make_multiple_ifs_without_pairs() {
        assert_eq!(make_multiple_ifs(vec![], None), None);
    }

    #[test]
    fn test_block_if_necessary() {
        let single = block_if_necessary(vec![Node::statement("x = 1")]).unwrap();
        assert!(matches!(single, Node::Statement(_)));

        let wrapped =
            block_if_necessary(vec![Node::statement("x = 1"), Node::statement("y = 2")]).unwrap();
        assert!(matches!(wrapped, Node::Block(_)));
    }
}
