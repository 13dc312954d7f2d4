//! Struct declarators and the packable [`GenerableStruct`].

use std::fmt;

use crate::error::{Error, Result};
use crate::generable::{Generable, indent_lines};
use crate::layout::{self, FieldValue};

use super::decl::Declarator;

/// A struct-typed declarator: tag name, ordered fields, and the name being
/// declared (if any).
#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    pub tpname: Option<String>,
    pub fields: Vec<Declarator>,
    pub declname: Option<String>,
    pub pad_bytes: usize,
}

impl StructDecl {
    pub fn new(tpname: impl Into<String>, fields: Vec<Declarator>) -> Self {
        Self {
            tpname: Some(tpname.into()),
            fields,
            declname: None,
            pad_bytes: 0,
        }
    }

    pub fn anonymous(fields: Vec<Declarator>) -> Self {
        Self {
            tpname: None,
            fields,
            declname: None,
            pad_bytes: 0,
        }
    }

    /// Name the declared entity, `struct foo bar;`.
    pub fn with_decl_name(mut self, declname: impl Into<String>) -> Self {
        self.declname = Some(declname.into());
        self
    }

    /// Append explicit trailing padding bytes to the emitted definition.
    pub fn with_pad_bytes(mut self, pad_bytes: usize) -> Self {
        self.pad_bytes = pad_bytes;
        self
    }

    /// Wrap into a [`Declarator`] for further chaining (typedef, pointer,
    /// function argument).
    pub fn into_declarator(self) -> Declarator {
        Declarator::Struct(Box::new(self))
    }

    /// The multi-line type text of the struct, field declarations included.
    pub(crate) fn type_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        match &self.tpname {
            Some(tpname) => lines.push(format!("struct {tpname}")),
            None => lines.push("struct".to_string()),
        }
        lines.push("{".to_string());
        for field in &self.fields {
            lines.extend(indent_lines(field.generate()));
        }
        if self.pad_bytes > 0 {
            lines.extend(indent_lines(vec![format!(
                "unsigned char _pad[{}];",
                self.pad_bytes
            )]));
        }
        lines.push("}".to_string());
        lines
    }
}

impl Generable for StructDecl {
    fn generate(&self) -> Vec<String> {
        Declarator::Struct(Box::new(self.clone())).generate()
    }
}

impl fmt::Display for StructDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_code())
    }
}

/// A struct whose field list doubles as a binary-layout description.
///
/// The layout descriptor, byte size and end padding are derived once at
/// construction; the emitted struct text carries the same padding, so packed
/// buffers match the compiled struct on the generating platform.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerableStruct {
    decl: StructDecl,
    align_bytes: usize,
    format: String,
    bytes: usize,
}

impl GenerableStruct {
    /// Build a struct padded to its natural alignment.
    pub fn new(tpname: impl Into<String>, fields: Vec<Declarator>) -> Result<Self> {
        Self::with_align(tpname, fields, None)
    }

    /// Build a struct padded to a multiple of `align_bytes` (natural
    /// alignment when `None`).
    pub fn with_align(
        tpname: impl Into<String>,
        fields: Vec<Declarator>,
        align_bytes: Option<usize>,
    ) -> Result<Self> {
        let tpname = tpname.into();
        if fields.is_empty() {
            return Err(Error::EmptyStruct { tpname });
        }

        let natural = layout::natural_alignment(&fields)?;
        let align_bytes = align_bytes.unwrap_or(natural).max(1);
        let bytes = layout::packed_size(&fields)?;
        let padded = bytes.div_ceil(align_bytes) * align_bytes;
        let pad_bytes = padded - bytes;

        let mut format = layout::struct_format(&fields)?;
        if pad_bytes > 0 {
            format.push_str(&format!("{pad_bytes}x"));
        }

        Ok(Self {
            decl: StructDecl::new(tpname, fields).with_pad_bytes(pad_bytes),
            align_bytes,
            format,
            bytes: padded,
        })
    }

    /// The layout descriptor: one format fragment per field in field order,
    /// plus the end-padding marker when padding exists.
    pub fn struct_format(&self) -> &str {
        &self.format
    }

    /// Total packed size in bytes, end padding included.
    pub fn byte_size(&self) -> usize {
        self.bytes
    }

    pub fn alignment_requirement(&self) -> usize {
        self.align_bytes
    }

    pub fn fields(&self) -> &[Declarator] {
        &self.decl.fields
    }

    /// The struct as a declarator, for typedefs and nested use.
    pub fn as_declarator(&self) -> Declarator {
        self.decl.clone().into_declarator()
    }

    /// Pack positional field values into a buffer matching the emitted
    /// struct's layout.
    pub fn make(&self, values: &[FieldValue]) -> Result<Vec<u8>> {
        layout::pack(&self.decl.fields, values, self.bytes)
    }

    /// Pack with zero defaults synthesized for every field.
    pub fn make_with_defaults(&self) -> Result<Vec<u8>> {
        let values = self.default_values()?;
        self.make(&values)
    }

    /// Zero values for every field, in field order.
    pub fn default_values(&self) -> Result<Vec<FieldValue>> {
        layout::default_values(&self.decl.fields)
    }

    /// Recover field values from a packed buffer.
    pub fn unpack(&self, bytes: &[u8]) -> Result<Vec<FieldValue>> {
        layout::unpack(&self.decl.fields, bytes, self.bytes)
    }
}

impl Generable for GenerableStruct {
    fn generate(&self) -> Vec<String> {
        self.decl.generate()
    }
}

impl fmt::Display for GenerableStruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_code())
    }
}
