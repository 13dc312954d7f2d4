//! Composable node trees for generating C/C++/CUDA/OpenCL source text.
//!
//! A host program assembles a tree of nodes such as blocks, statements and
//! declarators, then renders it to properly indented source with no manual
//! string concatenation. Rendering is pure and deterministic: the same tree
//! always yields the same text, so callers may fingerprint output for build
//! caching.
//!
//! # Example
//!
//! ```
//! use ctree::{Block, Declarator, FunctionBody, Generable, Node};
//!
//! let fdecl = Declarator::value("int", "add").function(vec![
//!     Declarator::value("int", "a"),
//!     Declarator::value("int", "b"),
//! ]);
//! let mut body = Block::new();
//! body.append(Node::statement("return a + b"));
//!
//! let func = FunctionBody::new(fdecl, body);
//! assert_eq!(
//!     func.to_code(),
//!     "int add(int a, int b)\n{\n  return a + b;\n}"
//! );
//! ```
//!
//! # Module Organization
//!
//! - [`ast`] - The node catalog and the declarator engine
//! - [`dtype`] - Numeric element types and their C/OpenCL spellings
//! - [`generable`] - The line-generation contract and indentation utilities
//! - [`layout`] - Binary-layout derivation for struct field lists
//!
//! CUDA and OpenCL decorators live in the companion `ctree-cuda` and
//! `ctree-opencl` crates.

pub mod ast;
pub mod dtype;
pub mod error;
pub mod generable;
pub mod indent;
pub mod layout;

pub use ast::{
    ArrayInitializer, Block, Comment, Declarator, DoWhile, For, FunctionBody, GenerableStruct, If,
    Initializer, Module, MultilineComment, Node, PpConditional, StructDecl, While,
    block_if_necessary, make_multiple_ifs,
};
pub use dtype::Dtype;
pub use error::{Error, Result};
pub use generable::Generable;
pub use indent::Indent;
pub use layout::FieldValue;
