//! Declarators and the suffix-chaining algorithm.
//!
//! A [`Declarator`] is either a core (type + name) or a wrapper owning
//! exactly one inner declarator. Wrappers form a right-growing chain; the
//! outermost wrapper is the outermost type constructor, so
//! `Pointer(ArrayOf(x))` is a pointer to an array and renders `(*x)[n]`.

use std::fmt;

use crate::dtype::Dtype;
use crate::error::Result;
use crate::generable::Generable;

use super::strct::StructDecl;

/// A C declaration of a named or anonymous entity.
#[derive(Debug, Clone, PartialEq)]
pub enum Declarator {
    /// A value whose type is given as a plain string.
    Value { typename: String, name: String },
    /// A plain-old-data value typed by a [`Dtype`].
    Pod { dtype: Dtype, name: String },
    /// An OpenCL vector value, e.g. `float4 pos`.
    VectorPod {
        dtype: Dtype,
        count: u32,
        name: String,
    },
    /// A struct-typed declarator carrying its field list.
    Struct(Box<StructDecl>),
    /// Pointer to the inner declarator.
    Pointer(Box<Declarator>),
    /// `__restrict__`-qualified pointer.
    RestrictPointer(Box<Declarator>),
    /// C++ reference to the inner declarator.
    Reference(Box<Declarator>),
    /// Array of the inner declarator; `None` renders an incomplete `[]`.
    ArrayOf {
        inner: Box<Declarator>,
        count: Option<u64>,
    },
    /// Function returning the inner declarator.
    Function {
        inner: Box<Declarator>,
        args: Vec<Declarator>,
    },
    /// `const`-qualified type.
    Const(Box<Declarator>),
    /// `volatile`-qualified type.
    Volatile(Box<Declarator>),
    /// A declaration specifier ahead of the type, e.g. `static` or
    /// `typedef`; platform storage classes reuse this.
    Specifier {
        inner: Box<Declarator>,
        spec: String,
        sep: &'static str,
    },
    /// Template argument list appended to the type, e.g. `Vec<int>`.
    TemplateSpecializer {
        inner: Box<Declarator>,
        specializer: String,
    },
    /// `template <...>` emitted as a preceding line.
    Template {
        inner: Box<Declarator>,
        params: String,
    },
    /// GCC-style attribute text ahead of the declarator name.
    Attribute {
        inner: Box<Declarator>,
        attribute: String,
    },
    /// Marks the declared entity as possibly unused.
    MaybeUnused(Box<Declarator>),
    /// `__attribute__ ((aligned (n)))` on the declared entity.
    Aligned { inner: Box<Declarator>, bytes: u32 },
}

impl Declarator {
    /// A declarator with a caller-spelled type, e.g. `Value("int", "x")`.
    pub fn value(typename: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Value {
            typename: typename.into(),
            name: name.into(),
        }
    }

    /// A declarator typed by a [`Dtype`].
    pub fn pod(dtype: Dtype, name: impl Into<String>) -> Self {
        Self::Pod {
            dtype,
            name: name.into(),
        }
    }

    /// An OpenCL vector declarator, validated against the supported vector
    /// widths.
    pub fn vector_pod(dtype: Dtype, count: u32, name: impl Into<String>) -> Result<Self> {
        dtype.cl_vector_type(count)?;
        Ok(Self::VectorPod {
            dtype,
            count,
            name: name.into(),
        })
    }

    pub fn pointer(self) -> Self {
        Self::Pointer(Box::new(self))
    }

    pub fn restrict_pointer(self) -> Self {
        Self::RestrictPointer(Box::new(self))
    }

    pub fn reference(self) -> Self {
        Self::Reference(Box::new(self))
    }

    pub fn array_of(self, count: u64) -> Self {
        Self::ArrayOf {
            inner: Box::new(self),
            count: Some(count),
        }
    }

    /// An array with unspecified extent, rendered `[]`.
    pub fn unsized_array(self) -> Self {
        Self::ArrayOf {
            inner: Box::new(self),
            count: None,
        }
    }

    pub fn function(self, args: Vec<Declarator>) -> Self {
        Self::Function {
            inner: Box::new(self),
            args,
        }
    }

    pub fn const_(self) -> Self {
        Self::Const(Box::new(self))
    }

    pub fn volatile(self) -> Self {
        Self::Volatile(Box::new(self))
    }

    /// Prefix a declaration specifier keyword, separated by a space.
    pub fn specifier(self, spec: impl Into<String>) -> Self {
        Self::Specifier {
            inner: Box::new(self),
            spec: spec.into(),
            sep: " ",
        }
    }

    /// Qualify the type with a namespace, e.g. `std::size_t`.
    pub fn namespace_qualified(self, namespace: impl Into<String>) -> Self {
        Self::Specifier {
            inner: Box::new(self),
            spec: namespace.into(),
            sep: "::",
        }
    }

    pub fn typedef(self) -> Self {
        self.specifier("typedef")
    }

    pub fn static_(self) -> Self {
        self.specifier("static")
    }

    pub fn extern_lang(self, language: &str) -> Self {
        self.specifier(format!("extern \"{language}\""))
    }

    pub fn template(self, params: impl Into<String>) -> Self {
        Self::Template {
            inner: Box::new(self),
            params: params.into(),
        }
    }

    pub fn specialized(self, specializer: impl Into<String>) -> Self {
        Self::TemplateSpecializer {
            inner: Box::new(self),
            specializer: specializer.into(),
        }
    }

    /// Prefix a GCC-style attribute to the declarator name.
    pub fn attribute(self, attribute: impl Into<String>) -> Self {
        Self::Attribute {
            inner: Box::new(self),
            attribute: attribute.into(),
        }
    }

    pub fn maybe_unused(self) -> Self {
        Self::MaybeUnused(Box::new(self))
    }

    pub fn aligned(self, bytes: u32) -> Self {
        Self::Aligned {
            inner: Box::new(self),
            bytes,
        }
    }

    /// The declared name, if the core declarator has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Value { name, .. } | Self::Pod { name, .. } | Self::VectorPod { name, .. } => {
                Some(name)
            }
            Self::Struct(decl) => decl.declname.as_deref(),
            Self::Pointer(inner)
            | Self::RestrictPointer(inner)
            | Self::Reference(inner)
            | Self::Const(inner)
            | Self::Volatile(inner)
            | Self::MaybeUnused(inner) => inner.name(),
            Self::ArrayOf { inner, .. }
            | Self::Function { inner, .. }
            | Self::Specifier { inner, .. }
            | Self::TemplateSpecializer { inner, .. }
            | Self::Template { inner, .. }
            | Self::Attribute { inner, .. }
            | Self::Aligned { inner, .. } => inner.name(),
        }
    }

    fn inner(&self) -> Option<&Declarator> {
        match self {
            Self::Pointer(inner)
            | Self::RestrictPointer(inner)
            | Self::Reference(inner)
            | Self::Const(inner)
            | Self::Volatile(inner)
            | Self::MaybeUnused(inner) => Some(inner),
            Self::ArrayOf { inner, .. }
            | Self::Function { inner, .. }
            | Self::Specifier { inner, .. }
            | Self::TemplateSpecializer { inner, .. }
            | Self::Template { inner, .. }
            | Self::Attribute { inner, .. }
            | Self::Aligned { inner, .. } => Some(inner),
            Self::Value { .. } | Self::Pod { .. } | Self::VectorPod { .. } | Self::Struct(_) => {
                None
            }
        }
    }

    /// Resolve the chain into type lines and the declarator text.
    ///
    /// Type lines are non-empty; the declarator text is `None` for anonymous
    /// cores with no name-side syntax (abstract declarators stay valid C).
    pub(crate) fn decl_pair(&self) -> (Vec<String>, Option<String>) {
        let mut chain = Vec::new();
        let mut cur = self;
        while let Some(inner) = cur.inner() {
            chain.push(cur);
            cur = inner;
        }

        let (mut type_lines, core_name) = cur.core_parts();

        // Type-side wrappers apply innermost-first, so an outer specifier
        // lands ahead of an inner one.
        for wrapper in chain.iter().rev() {
            match wrapper {
                Self::Const(_) => {
                    if let Some(last) = type_lines.last_mut() {
                        last.push_str(" const");
                    }
                }
                Self::Volatile(_) => {
                    if let Some(last) = type_lines.last_mut() {
                        last.push_str(" volatile");
                    }
                }
                Self::Specifier { spec, sep, .. } => {
                    if let Some(first) = type_lines.first_mut() {
                        *first = format!("{spec}{sep}{first}");
                    }
                }
                Self::TemplateSpecializer { specializer, .. } => {
                    if let Some(last) = type_lines.last_mut() {
                        last.push_str(&format!("<{specializer}>"));
                    }
                }
                Self::Template { params, .. } => {
                    type_lines.insert(0, format!("template <{params}>"));
                }
                _ => {}
            }
        }

        // Name-side wrappers apply outermost-first; a suffix landing after a
        // binding prefix parenthesizes the declarator built so far.
        let mut decl = core_name.unwrap_or_default();
        let mut bound_by_prefix = false;
        for wrapper in &chain {
            match wrapper {
                Self::Pointer(_) => {
                    decl = format!("*{decl}");
                    bound_by_prefix = true;
                }
                Self::RestrictPointer(_) => {
                    decl = format!("*__restrict__ {decl}");
                    bound_by_prefix = true;
                }
                Self::Reference(_) => {
                    decl = format!("&{decl}");
                    bound_by_prefix = true;
                }
                Self::ArrayOf { count, .. } => {
                    if bound_by_prefix {
                        decl = format!("({decl})");
                        bound_by_prefix = false;
                    }
                    match count {
                        Some(n) => decl.push_str(&format!("[{n}]")),
                        None => decl.push_str("[]"),
                    }
                }
                Self::Function { args, .. } => {
                    if bound_by_prefix {
                        decl = format!("({decl})");
                        bound_by_prefix = false;
                    }
                    let args = args
                        .iter()
                        .map(Declarator::inline)
                        .collect::<Vec<_>>()
                        .join(", ");
                    decl.push_str(&format!("({args})"));
                }
                Self::MaybeUnused(_) => {
                    decl.push_str(" __attribute__ ((unused))");
                    bound_by_prefix = false;
                }
                Self::Aligned { bytes, .. } => {
                    decl.push_str(&format!(" __attribute__ ((aligned ({bytes})))"));
                    bound_by_prefix = false;
                }
                Self::Attribute { attribute, .. } => {
                    decl = format!("{attribute} {decl}");
                }
                _ => {}
            }
        }

        let decl = if decl.is_empty() { None } else { Some(decl) };
        (type_lines, decl)
    }

    fn core_parts(&self) -> (Vec<String>, Option<String>) {
        match self {
            Self::Value { typename, name } => (vec![typename.clone()], Some(name.clone())),
            Self::Pod { dtype, name } => (vec![dtype.c_type().to_string()], Some(name.clone())),
            Self::VectorPod { dtype, count, name } => {
                // Width is validated at construction; the fallback spelling
                // is never reached for a constructed declarator.
                let typename = dtype
                    .cl_vector_type(*count)
                    .unwrap_or_else(|_| format!("{dtype}{count}"));
                (vec![typename], Some(name.clone()))
            }
            Self::Struct(decl) => (decl.type_lines(), decl.declname.clone()),
            _ => (vec![String::new()], None),
        }
    }

    /// Render the declaration, optionally with the trailing semicolon.
    pub fn generate_decl(&self, with_semicolon: bool) -> Vec<String> {
        let (mut type_lines, decl) = self.decl_pair();
        let sc = if with_semicolon { ";" } else { "" };
        let last = type_lines.pop().unwrap_or_default();
        let mut lines = type_lines;
        match decl {
            Some(decl) => lines.push(format!("{last} {decl}{sc}")),
            None => lines.push(format!("{last}{sc}")),
        }
        lines
    }

    /// Render the declarator as a single line without a semicolon, the form
    /// used for function arguments.
    pub fn inline(&self) -> String {
        let (type_lines, decl) = self.decl_pair();
        let typename = type_lines.join(" ");
        match decl {
            Some(decl) => format!("{typename} {decl}"),
            None => typename,
        }
    }
}

impl Generable for Declarator {
    fn generate(&self) -> Vec<String> {
        match self {
            // The template header precedes an unterminated declaration.
            Self::Template { .. } => self.generate_decl(false),
            _ => self.generate_decl(true),
        }
    }
}

impl fmt::Display for Declarator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_code())
    }
}
