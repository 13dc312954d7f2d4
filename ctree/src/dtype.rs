//! Numeric element types and their C/OpenCL spellings.

use std::fmt;

use crate::error::{Error, Result};
use crate::layout::FieldValue;

/// Whether the platform `long` is 8 bytes wide.
///
/// Decides whether 64-bit integers are spelled `long` or `long long`.
fn long_is_64_bit() -> bool {
    std::mem::size_of::<std::ffi::c_long>() == 8
}

/// A numeric element type, used by POD declarators and the binary-layout
/// facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dtype {
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float32,
    Float64,
    Complex64,
    Complex128,
    Void,
}

impl Dtype {
    /// The C/C++ spelling of this type.
    pub fn c_type(&self) -> &'static str {
        match self {
            Self::Int8 => "signed char",
            Self::Uint8 => "unsigned char",
            Self::Int16 => "short int",
            Self::Uint16 => "short unsigned int",
            Self::Int32 => "int",
            Self::Uint32 => "unsigned int",
            Self::Int64 => {
                if long_is_64_bit() {
                    "long"
                } else {
                    "long long"
                }
            }
            Self::Uint64 => {
                if long_is_64_bit() {
                    "unsigned long"
                } else {
                    "unsigned long long"
                }
            }
            Self::Float32 => "float",
            Self::Float64 => "double",
            Self::Complex64 => "std::complex<float>",
            Self::Complex128 => "std::complex<double>",
            Self::Void => "void",
        }
    }

    /// The OpenCL spelling of this type.
    pub fn cl_type(&self) -> Result<&'static str> {
        match self {
            Self::Int8 => Ok("char"),
            Self::Uint8 => Ok("uchar"),
            Self::Int16 => Ok("short"),
            Self::Uint16 => Ok("ushort"),
            Self::Int32 => Ok("int"),
            Self::Uint32 => Ok("uint"),
            Self::Int64 => Ok("long"),
            Self::Uint64 => Ok("ulong"),
            Self::Float32 => Ok("float"),
            Self::Float64 => Ok("double"),
            Self::Complex64 | Self::Complex128 | Self::Void => Err(Error::UnsupportedDtype {
                dtype: *self,
                target: "OpenCL",
            }),
        }
    }

    /// The width-suffixed OpenCL vector spelling, e.g. `float4`.
    ///
    /// OpenCL defines vector widths 2, 3, 4, 8 and 16; dtypes with no scalar
    /// OpenCL spelling have no vector spelling either.
    pub fn cl_vector_type(&self, count: u32) -> Result<String> {
        if !matches!(count, 2 | 3 | 4 | 8 | 16) {
            return Err(Error::UnsupportedVectorType {
                dtype: *self,
                count,
            });
        }
        Ok(format!("{}{}", self.cl_type()?, count))
    }

    /// The format character identifying this type in a struct layout
    /// descriptor.
    pub fn format_char(&self) -> Result<char> {
        match self {
            Self::Int8 => Ok('b'),
            Self::Uint8 => Ok('B'),
            Self::Int16 => Ok('h'),
            Self::Uint16 => Ok('H'),
            Self::Int32 => Ok('i'),
            Self::Uint32 => Ok('I'),
            Self::Int64 => Ok('q'),
            Self::Uint64 => Ok('Q'),
            Self::Float32 => Ok('f'),
            Self::Float64 => Ok('d'),
            Self::Complex64 | Self::Complex128 | Self::Void => Err(Error::NoStructFormat {
                what: self.to_string(),
            }),
        }
    }

    /// Size of this type in bytes.
    pub fn size(&self) -> Result<usize> {
        match self {
            Self::Int8 | Self::Uint8 => Ok(1),
            Self::Int16 | Self::Uint16 => Ok(2),
            Self::Int32 | Self::Uint32 | Self::Float32 => Ok(4),
            Self::Int64 | Self::Uint64 | Self::Float64 => Ok(8),
            Self::Complex64 | Self::Complex128 | Self::Void => Err(Error::NoStructFormat {
                what: self.to_string(),
            }),
        }
    }

    /// Natural alignment of this type in bytes.
    pub fn alignment(&self) -> Result<usize> {
        self.size()
    }

    /// The zero value of this type, used when packing with defaults.
    pub fn default_value(&self) -> Result<FieldValue> {
        match self {
            Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64 => Ok(FieldValue::Int(0)),
            Self::Uint8 | Self::Uint16 | Self::Uint32 | Self::Uint64 => Ok(FieldValue::Uint(0)),
            Self::Float32 | Self::Float64 => Ok(FieldValue::Float(0.0)),
            Self::Complex64 | Self::Complex128 | Self::Void => Err(Error::NoStructFormat {
                what: self.to_string(),
            }),
        }
    }
}

impl fmt::Display for Dtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int8 => "int8",
            Self::Uint8 => "uint8",
            Self::Int16 => "int16",
            Self::Uint16 => "uint16",
            Self::Int32 => "int32",
            Self::Uint32 => "uint32",
            Self::Int64 => "int64",
            Self::Uint64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
            Self::Void => "void",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_type_spellings() {
        assert_eq!(Dtype::Int32.c_type(), "int");
        assert_eq!(Dtype::Uint8.c_type(), "unsigned char");
        assert_eq!(Dtype::Float64.c_type(), "double");
        assert_eq!(Dtype::Complex64.c_type(), "std::complex<float>");
    }

    #[test]
    fn test_int64_spelling_matches_platform_long() {
        let expected = if std::mem::size_of::<std::ffi::c_long>() == 8 {
            "long"
        } else {
            "long long"
        };
        assert_eq!(Dtype::Int64.c_type(), expected);
    }

    #[test]
    fn test_cl_type_spellings() {
        assert_eq!(Dtype::Uint8.cl_type().unwrap(), "uchar");
        assert_eq!(Dtype::Uint64.cl_type().unwrap(), "ulong");
        assert!(Dtype::Complex64.cl_type().is_err());
    }

    #[test]
    fn test_cl_vector_type() {
        assert_eq!(Dtype::Float32.cl_vector_type(4).unwrap(), "float4");
        assert_eq!(Dtype::Int16.cl_vector_type(8).unwrap(), "short8");
        assert!(Dtype::Float32.cl_vector_type(5).is_err());
        assert!(Dtype::Void.cl_vector_type(4).is_err());
    }

    #[test]
    fn test_format_chars() {
        assert_eq!(Dtype::Int32.format_char().unwrap(), 'i');
        assert_eq!(Dtype::Float32.format_char().unwrap(), 'f');
        assert_eq!(Dtype::Uint64.format_char().unwrap(), 'Q');
        assert!(Dtype::Void.format_char().is_err());
    }

    #[test]
    fn test_sizes_and_alignment() {
        assert_eq!(Dtype::Int8.size().unwrap(), 1);
        assert_eq!(Dtype::Float64.size().unwrap(), 8);
        assert_eq!(Dtype::Int32.alignment().unwrap(), 4);
    }
}
