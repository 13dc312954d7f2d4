//! Simple leaf nodes: comments and initializers.

use crate::generable::{Generable, indent_lines};

use super::decl::Declarator;

/// A `/* ... */` comment on a single line.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    text: String,
    skip_space: bool,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            skip_space: false,
        }
    }

    /// Render without padding spaces, `/*text*/`.
    pub fn skip_space(mut self) -> Self {
        self.skip_space = true;
        self
    }
}

impl Generable for Comment {
    fn generate(&self) -> Vec<String> {
        if self.skip_space {
            vec![format!("/*{}*/", self.text)]
        } else {
            vec![format!("/* {} */", self.text)]
        }
    }
}

/// A `/** ... */` comment spanning multiple lines.
#[derive(Debug, Clone, PartialEq)]
pub struct MultilineComment {
    text: String,
    skip_space: bool,
}

impl MultilineComment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            skip_space: false,
        }
    }

    pub fn skip_space(mut self) -> Self {
        self.skip_space = true;
        self
    }
}

impl Generable for MultilineComment {
    fn generate(&self) -> Vec<String> {
        let (line_begin, comment_end) = if self.skip_space {
            ("*", "*/")
        } else {
            (" * ", " */")
        };
        let mut lines = vec!["/**".to_string()];
        for line in self.text.lines() {
            lines.push(format!("{line_begin}{line}"));
        }
        lines.push(comment_end.to_string());
        lines
    }
}

/// A declarator initialized to a value, `int x = 0;`.
///
/// Multi-line values continue on indented lines after a trailing `=`.
#[derive(Debug, Clone, PartialEq)]
pub struct Initializer {
    decl: Declarator,
    value: String,
}

impl Initializer {
    pub fn new(decl: Declarator, value: impl Into<String>) -> Self {
        Self {
            decl,
            value: value.into(),
        }
    }

    /// The initializer with a `const`-qualified declarator.
    pub fn constant(decl: Declarator, value: impl Into<String>) -> Self {
        Self::new(decl.const_(), value)
    }
}

impl Generable for Initializer {
    fn generate(&self) -> Vec<String> {
        let (mut type_lines, decl) = self.decl.decl_pair();
        let last = type_lines.pop().unwrap_or_default();
        let mut lines = type_lines;
        let lhs = match decl {
            Some(decl) => format!("{last} {decl}"),
            None => last,
        };
        if self.value.contains('\n') {
            lines.push(format!("{lhs} ="));
            let value_lines: Vec<&str> = self.value.split('\n').collect();
            for (i, value_line) in value_lines.iter().enumerate() {
                let terminator = if i == value_lines.len() - 1 { ";" } else { "" };
                lines.extend(indent_lines(vec![format!("{value_line}{terminator}")]));
            }
        } else {
            lines.push(format!("{lhs} = {};", self.value));
        }
        lines
    }
}

/// A declarator initialized with a brace-enclosed element list.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayInitializer {
    decl: Declarator,
    values: Vec<String>,
}

impl ArrayInitializer {
    pub fn new(decl: Declarator, values: Vec<String>) -> Self {
        Self { decl, values }
    }
}

impl Generable for ArrayInitializer {
    fn generate(&self) -> Vec<String> {
        let mut lines = self.decl.generate_decl(false);
        lines.push(format!("  = {{ {} }};", self.values.join(", ")));
        lines
    }
}
