//! The node catalog: every construct a source tree can contain.
//!
//! [`Node`] is a closed sum over the catalog, so rendering is an exhaustive
//! match rather than dynamic dispatch. Composite nodes own their children
//! exclusively; trees are built once and then rendered read-only.

mod block;
mod control;
mod decl;
mod preprocessor;
mod stmt;
mod strct;

pub use block::{Block, FunctionBody, Module};
pub use control::{DoWhile, For, If, While, block_if_necessary, make_multiple_ifs};
pub use decl::Declarator;
pub use preprocessor::PpConditional;
pub use stmt::{ArrayInitializer, Comment, Initializer, MultilineComment};
pub use strct::{GenerableStruct, StructDecl};

use std::fmt;

use crate::generable::Generable;

/// Any construct generatable to source lines.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Literal pass-through text.
    Line(String),
    Comment(Comment),
    /// A `// text` comment.
    LineComment(String),
    MultilineComment(MultilineComment),
    /// Text terminated with a semicolon.
    Statement(String),
    Assign {
        lvalue: String,
        rvalue: String,
    },
    Define {
        symbol: String,
        value: String,
    },
    Include {
        filename: String,
        system: bool,
    },
    Pragma(String),
    PpConditional(PpConditional),
    /// A declarator rendered as a declaration.
    Declaration(Declarator),
    Initializer(Initializer),
    ArrayInitializer(ArrayInitializer),
    Block(Block),
    Module(Module),
    FunctionBody(FunctionBody),
    If(If),
    While(While),
    DoWhile(DoWhile),
    For(For),
}

impl Node {
    /// A literal line, emitted as-is.
    pub fn line(text: impl Into<String>) -> Self {
        Self::Line(text.into())
    }

    /// An empty line.
    pub fn blank() -> Self {
        Self::Line(String::new())
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment(Comment::new(text))
    }

    pub fn line_comment(text: impl Into<String>) -> Self {
        Self::LineComment(text.into())
    }

    /// A statement, rendered with a trailing semicolon.
    pub fn statement(text: impl Into<String>) -> Self {
        Self::Statement(text.into())
    }

    pub fn assign(lvalue: impl Into<String>, rvalue: impl Into<String>) -> Self {
        Self::Assign {
            lvalue: lvalue.into(),
            rvalue: rvalue.into(),
        }
    }

    pub fn define(symbol: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Define {
            symbol: symbol.into(),
            value: value.into(),
        }
    }

    /// `#include <filename>`.
    pub fn include_system(filename: impl Into<String>) -> Self {
        Self::Include {
            filename: filename.into(),
            system: true,
        }
    }

    /// `#include "filename"`.
    pub fn include_local(filename: impl Into<String>) -> Self {
        Self::Include {
            filename: filename.into(),
            system: false,
        }
    }

    pub fn pragma(value: impl Into<String>) -> Self {
        Self::Pragma(value.into())
    }
}

impl Generable for Node {
    fn generate(&self) -> Vec<String> {
        match self {
            Self::Line(text) => vec![text.clone()],
            Self::Comment(comment) => comment.generate(),
            Self::LineComment(text) => vec![format!("// {text}")],
            Self::MultilineComment(comment) => comment.generate(),
            Self::Statement(text) => vec![format!("{text};")],
            Self::Assign { lvalue, rvalue } => vec![format!("{lvalue} = {rvalue};")],
            Self::Define { symbol, value } => vec![format!("#define {symbol} {value}")],
            Self::Include { filename, system } => {
                if *system {
                    vec![format!("#include <{filename}>")]
                } else {
                    vec![format!("#include \"{filename}\"")]
                }
            }
            Self::Pragma(value) => vec![format!("#pragma {value}")],
            Self::PpConditional(group) => group.generate(),
            Self::Declaration(decl) => decl.generate(),
            Self::Initializer(init) => init.generate(),
            Self::ArrayInitializer(init) => init.generate(),
            Self::Block(block) => block.generate(),
            Self::Module(module) => module.generate(),
            Self::FunctionBody(func) => func.generate(),
            Self::If(if_) => if_.generate(),
            Self::While(while_) => while_.generate(),
            Self::DoWhile(do_while) => do_while.generate(),
            Self::For(for_) => for_.generate(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_code())
    }
}

macro_rules! impl_from_node {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

impl_from_node!(
    Comment(Comment),
    MultilineComment(MultilineComment),
    PpConditional(PpConditional),
    Declaration(Declarator),
    Initializer(Initializer),
    ArrayInitializer(ArrayInitializer),
    Block(Block),
    Module(Module),
    FunctionBody(FunctionBody),
    If(If),
    While(While),
    DoWhile(DoWhile),
    For(For),
);

impl From<StructDecl> for Node {
    fn from(value: StructDecl) -> Self {
        Self::Declaration(value.into_declarator())
    }
}

impl From<&GenerableStruct> for Node {
    fn from(value: &GenerableStruct) -> Self {
        Self::Declaration(value.as_declarator())
    }
}
