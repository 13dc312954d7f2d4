//! Binary-layout derivation for struct field lists.
//!
//! The field order of a [`GenerableStruct`](crate::ast::GenerableStruct) is
//! the single source of truth for both the emitted struct text and the packed
//! layout; everything here is a pure function over that field list. Members
//! are aligned to their natural alignment and values are packed in native
//! byte order, matching what a C compiler does with the emitted struct on the
//! same platform.

use crate::ast::Declarator;
use crate::dtype::Dtype;
use crate::error::{Error, Result};

/// A runtime value for one struct field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Uint(u64),
    Float(f64),
    /// Element values of an array or vector field, in order.
    Vector(Vec<FieldValue>),
}

/// The layout-relevant shape of one field, resolved from its declarator.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Scalar(Dtype),
    Vector { dtype: Dtype, count: usize },
    Array { element: Box<FieldKind>, count: usize },
    Pointer,
}

/// Resolve a field declarator to its layout shape.
///
/// Qualifiers and attributes are transparent; named-type values, functions
/// and nested structs have no derivable layout.
pub fn field_kind(decl: &Declarator) -> Result<FieldKind> {
    match decl {
        Declarator::Pod { dtype, .. } => Ok(FieldKind::Scalar(*dtype)),
        Declarator::VectorPod { dtype, count, .. } => Ok(FieldKind::Vector {
            dtype: *dtype,
            count: *count as usize,
        }),
        Declarator::Pointer(_) | Declarator::RestrictPointer(_) | Declarator::Reference(_) => {
            Ok(FieldKind::Pointer)
        }
        Declarator::ArrayOf { inner, count } => match count {
            Some(count) => Ok(FieldKind::Array {
                element: Box::new(field_kind(inner)?),
                count: *count as usize,
            }),
            // An incomplete array decays to a pointer.
            None => Ok(FieldKind::Pointer),
        },
        Declarator::Const(inner)
        | Declarator::Volatile(inner)
        | Declarator::MaybeUnused(inner) => field_kind(inner),
        Declarator::Specifier { inner, .. }
        | Declarator::TemplateSpecializer { inner, .. }
        | Declarator::Template { inner, .. }
        | Declarator::Attribute { inner, .. }
        | Declarator::Aligned { inner, .. } => field_kind(inner),
        Declarator::Value { typename, .. } => Err(Error::NoStructFormat {
            what: typename.clone(),
        }),
        Declarator::Function { .. } => Err(Error::NoStructFormat {
            what: decl.name().unwrap_or("function").to_string(),
        }),
        Declarator::Struct(_) => Err(Error::NoStructFormat {
            what: decl.name().unwrap_or("struct").to_string(),
        }),
    }
}

impl FieldKind {
    /// The format fragment describing this field.
    pub fn format(&self) -> Result<String> {
        match self {
            Self::Scalar(dtype) => Ok(dtype.format_char()?.to_string()),
            Self::Vector { dtype, count } => Ok(format!("{count}{}", dtype.format_char()?)),
            Self::Array { element, count } => match element.as_ref() {
                Self::Scalar(dtype) => Ok(format!("{count}{}", dtype.format_char()?)),
                _ => Err(Error::NoStructFormat {
                    what: "nested array".to_string(),
                }),
            },
            Self::Pointer => Ok("P".to_string()),
        }
    }

    /// Packed size of this field in bytes.
    pub fn size(&self) -> Result<usize> {
        match self {
            Self::Scalar(dtype) => dtype.size(),
            Self::Vector { dtype, count } => Ok(dtype.size()? * count),
            Self::Array { element, count } => Ok(element.size()? * count),
            Self::Pointer => Ok(std::mem::size_of::<usize>()),
        }
    }

    /// Alignment of this field in bytes.
    ///
    /// Vectors align to their full size, matching OpenCL vector types.
    pub fn alignment(&self) -> Result<usize> {
        match self {
            Self::Scalar(dtype) => dtype.alignment(),
            Self::Vector { dtype, count } => Ok(dtype.size()? * count),
            Self::Array { element, .. } => element.alignment(),
            Self::Pointer => Ok(std::mem::size_of::<usize>()),
        }
    }

    /// The zero value of this field.
    pub fn default_value(&self) -> Result<FieldValue> {
        match self {
            Self::Scalar(dtype) => dtype.default_value(),
            Self::Vector { dtype, count } => {
                let element = dtype.default_value()?;
                Ok(FieldValue::Vector(vec![element; *count]))
            }
            Self::Array { element, count } => {
                let element = element.default_value()?;
                Ok(FieldValue::Vector(vec![element; *count]))
            }
            Self::Pointer => Ok(FieldValue::Uint(0)),
        }
    }
}

/// The format descriptor for a field list: one (possibly count-prefixed)
/// format fragment per field, in field order.
pub fn struct_format(fields: &[Declarator]) -> Result<String> {
    let mut format = String::new();
    for field in fields {
        format.push_str(&field_kind(field)?.format()?);
    }
    Ok(format)
}

/// The largest member alignment of a field list.
pub fn natural_alignment(fields: &[Declarator]) -> Result<usize> {
    let mut alignment = 1;
    for field in fields {
        alignment = alignment.max(field_kind(field)?.alignment()?);
    }
    Ok(alignment)
}

/// Packed size of a field list with member alignment, without end padding.
pub fn packed_size(fields: &[Declarator]) -> Result<usize> {
    let mut offset = 0;
    for field in fields {
        let kind = field_kind(field)?;
        offset = align_up(offset, kind.alignment()?);
        offset += kind.size()?;
    }
    Ok(offset)
}

/// Zero values for every field, in field order.
pub fn default_values(fields: &[Declarator]) -> Result<Vec<FieldValue>> {
    fields
        .iter()
        .map(|field| field_kind(field)?.default_value())
        .collect()
}

/// Pack positional field values into a buffer of `total_size` bytes.
///
/// Values are checked for arity and type against the field list; member gaps
/// and end padding are zero-filled.
pub fn pack(fields: &[Declarator], values: &[FieldValue], total_size: usize) -> Result<Vec<u8>> {
    if values.len() != fields.len() {
        return Err(Error::FieldArityMismatch {
            expected: fields.len(),
            actual: values.len(),
        });
    }

    let mut buffer = Vec::with_capacity(total_size);
    for (field, value) in fields.iter().zip(values) {
        let kind = field_kind(field)?;
        let aligned = align_up(buffer.len(), kind.alignment()?);
        buffer.resize(aligned, 0);
        encode(&kind, value, field_name(field), &mut buffer)?;
    }
    buffer.resize(total_size, 0);
    Ok(buffer)
}

/// Recover field values from a packed buffer produced by [`pack`].
pub fn unpack(fields: &[Declarator], bytes: &[u8], total_size: usize) -> Result<Vec<FieldValue>> {
    if bytes.len() != total_size || packed_size(fields)? > total_size {
        return Err(Error::BufferSizeMismatch {
            expected: total_size,
            actual: bytes.len(),
        });
    }

    let mut values = Vec::with_capacity(fields.len());
    let mut offset = 0;
    for field in fields {
        let kind = field_kind(field)?;
        offset = align_up(offset, kind.alignment()?);
        values.push(decode(&kind, bytes, offset)?);
        offset += kind.size()?;
    }
    Ok(values)
}

fn align_up(offset: usize, alignment: usize) -> usize {
    offset.div_ceil(alignment) * alignment
}

fn field_name(decl: &Declarator) -> &str {
    decl.name().unwrap_or("<anonymous>")
}

fn encode(kind: &FieldKind, value: &FieldValue, field: &str, buffer: &mut Vec<u8>) -> Result<()> {
    let mismatch = || Error::FieldTypeMismatch {
        field: field.to_string(),
    };
    match kind {
        FieldKind::Scalar(dtype) => encode_scalar(*dtype, value, field, buffer),
        FieldKind::Vector { dtype, count } => match value {
            FieldValue::Vector(elements) if elements.len() == *count => {
                for element in elements {
                    encode_scalar(*dtype, element, field, buffer)?;
                }
                Ok(())
            }
            _ => Err(mismatch()),
        },
        FieldKind::Array { element, count } => match value {
            FieldValue::Vector(elements) if elements.len() == *count => {
                for value in elements {
                    encode(element, value, field, buffer)?;
                }
                Ok(())
            }
            _ => Err(mismatch()),
        },
        FieldKind::Pointer => match value {
            FieldValue::Uint(address) => {
                let address = usize::try_from(*address).map_err(|_| mismatch())?;
                buffer.extend_from_slice(&address.to_ne_bytes());
                Ok(())
            }
            _ => Err(mismatch()),
        },
    }
}

fn encode_scalar(
    dtype: Dtype,
    value: &FieldValue,
    field: &str,
    buffer: &mut Vec<u8>,
) -> Result<()> {
    let mismatch = || Error::FieldTypeMismatch {
        field: field.to_string(),
    };
    match (dtype, value) {
        (Dtype::Int8, FieldValue::Int(v)) => {
            buffer.extend_from_slice(&i8::try_from(*v).map_err(|_| mismatch())?.to_ne_bytes());
        }
        (Dtype::Int16, FieldValue::Int(v)) => {
            buffer.extend_from_slice(&i16::try_from(*v).map_err(|_| mismatch())?.to_ne_bytes());
        }
        (Dtype::Int32, FieldValue::Int(v)) => {
            buffer.extend_from_slice(&i32::try_from(*v).map_err(|_| mismatch())?.to_ne_bytes());
        }
        (Dtype::Int64, FieldValue::Int(v)) => buffer.extend_from_slice(&v.to_ne_bytes()),
        (Dtype::Uint8, FieldValue::Uint(v)) => {
            buffer.extend_from_slice(&u8::try_from(*v).map_err(|_| mismatch())?.to_ne_bytes());
        }
        (Dtype::Uint16, FieldValue::Uint(v)) => {
            buffer.extend_from_slice(&u16::try_from(*v).map_err(|_| mismatch())?.to_ne_bytes());
        }
        (Dtype::Uint32, FieldValue::Uint(v)) => {
            buffer.extend_from_slice(&u32::try_from(*v).map_err(|_| mismatch())?.to_ne_bytes());
        }
        (Dtype::Uint64, FieldValue::Uint(v)) => buffer.extend_from_slice(&v.to_ne_bytes()),
        (Dtype::Float32, FieldValue::Float(v)) => {
            buffer.extend_from_slice(&(*v as f32).to_ne_bytes());
        }
        (Dtype::Float64, FieldValue::Float(v)) => buffer.extend_from_slice(&v.to_ne_bytes()),
        _ => return Err(mismatch()),
    }
    Ok(())
}

fn decode(kind: &FieldKind, bytes: &[u8], offset: usize) -> Result<FieldValue> {
    match kind {
        FieldKind::Scalar(dtype) => decode_scalar(*dtype, bytes, offset),
        FieldKind::Vector { dtype, count } => {
            let size = dtype.size()?;
            let elements = (0..*count)
                .map(|i| decode_scalar(*dtype, bytes, offset + i * size))
                .collect::<Result<Vec<_>>>()?;
            Ok(FieldValue::Vector(elements))
        }
        FieldKind::Array { element, count } => {
            let size = element.size()?;
            let elements = (0..*count)
                .map(|i| decode(element, bytes, offset + i * size))
                .collect::<Result<Vec<_>>>()?;
            Ok(FieldValue::Vector(elements))
        }
        FieldKind::Pointer => {
            let mut raw = [0u8; std::mem::size_of::<usize>()];
            let len = raw.len();
            raw.copy_from_slice(&bytes[offset..offset + len]);
            Ok(FieldValue::Uint(usize::from_ne_bytes(raw) as u64))
        }
    }
}

fn decode_scalar(dtype: Dtype, bytes: &[u8], offset: usize) -> Result<FieldValue> {
    let size = dtype.size()?;
    let raw = &bytes[offset..offset + size];
    let value = match dtype {
        Dtype::Int8 => FieldValue::Int(raw[0] as i8 as i64),
        Dtype::Int16 => FieldValue::Int(i16::from_ne_bytes([raw[0], raw[1]]) as i64),
        Dtype::Int32 => {
            FieldValue::Int(i32::from_ne_bytes([raw[0], raw[1], raw[2], raw[3]]) as i64)
        }
        Dtype::Int64 => {
            let mut b = [0u8; 8];
            b.copy_from_slice(raw);
            FieldValue::Int(i64::from_ne_bytes(b))
        }
        Dtype::Uint8 => FieldValue::Uint(raw[0] as u64),
        Dtype::Uint16 => FieldValue::Uint(u16::from_ne_bytes([raw[0], raw[1]]) as u64),
        Dtype::Uint32 => {
            FieldValue::Uint(u32::from_ne_bytes([raw[0], raw[1], raw[2], raw[3]]) as u64)
        }
        Dtype::Uint64 => {
            let mut b = [0u8; 8];
            b.copy_from_slice(raw);
            FieldValue::Uint(u64::from_ne_bytes(b))
        }
        Dtype::Float32 => {
            FieldValue::Float(f32::from_ne_bytes([raw[0], raw[1], raw[2], raw[3]]) as f64)
        }
        Dtype::Float64 => {
            let mut b = [0u8; 8];
            b.copy_from_slice(raw);
            FieldValue::Float(f64::from_ne_bytes(b))
        }
        Dtype::Complex64 | Dtype::Complex128 | Dtype::Void => {
            return Err(Error::NoStructFormat {
                what: dtype.to_string(),
            });
        }
    };
    Ok(value)
}
