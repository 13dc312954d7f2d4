//! OpenCL kernel, address-space and attribute decorators for `ctree`.
//!
//! ```
//! use ctree::Declarator;
//! use ctree_opencl::{cl_global, cl_kernel};
//!
//! let kernel = cl_kernel(Declarator::value("void", "axpy").function(vec![
//!     cl_global(Declarator::value("float", "y").pointer()),
//!     Declarator::value("float", "alpha"),
//! ]));
//! assert_eq!(
//!     kernel.inline(),
//!     "__kernel void axpy(__global float *y, float alpha)"
//! );
//! ```

use ctree::{Declarator, Dtype, Result};

/// Access mode of an image kernel argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMode {
    Read,
    Write,
}

impl ImageMode {
    fn qualifier(self) -> &'static str {
        match self {
            Self::Read => "__read_only",
            Self::Write => "__write_only",
        }
    }
}

/// Mark a kernel entry point, `__kernel`.
pub fn cl_kernel(inner: Declarator) -> Declarator {
    inner.specifier("__kernel")
}

/// Place a pointer argument in global memory, `__global`.
pub fn cl_global(inner: Declarator) -> Declarator {
    inner.specifier("__global")
}

/// Place a pointer argument in work-group local memory, `__local`.
pub fn cl_local(inner: Declarator) -> Declarator {
    inner.specifier("__local")
}

/// Place an argument in constant memory, `__constant`.
pub fn cl_constant(inner: Declarator) -> Declarator {
    inner.specifier("__constant")
}

/// An image kernel argument, e.g. `__read_only image2d_t src`.
pub fn cl_image(dims: u32, mode: ImageMode, name: impl Into<String>) -> Declarator {
    Declarator::value(format!("{} image{dims}d_t", mode.qualifier()), name)
}

/// An OpenCL vector value, e.g. `float4 pos`.
///
/// Fails for dtypes with no OpenCL spelling or unsupported vector widths.
pub fn cl_vector_pod(dtype: Dtype, count: u32, name: impl Into<String>) -> Result<Declarator> {
    Declarator::vector_pod(dtype, count, name)
}

/// Hint the kernel's dominant vector type to the compiler.
///
/// Renders `__attribute__ ((vec_type_hint(float4)))` ahead of the kernel
/// declarator; fails for dtypes with no vector spelling of that width.
pub fn cl_vec_type_hint(dtype: Dtype, count: u32, inner: Declarator) -> Result<Declarator> {
    let type_str = dtype.cl_vector_type(count)?;
    Ok(cl_vec_type_hint_str(&type_str, inner))
}

/// [`cl_vec_type_hint`] with an explicit type spelling.
pub fn cl_vec_type_hint_str(type_str: &str, inner: Declarator) -> Declarator {
    inner.attribute(format!("__attribute__ ((vec_type_hint({type_str})))"))
}

/// Hint the expected work-group size; dimensions are padded to 3 with 1s.
pub fn cl_work_group_size_hint(dims: &[u64], inner: Declarator) -> Declarator {
    inner.attribute(format!(
        "__attribute__ ((work_group_size_hint({})))",
        pad_dims(dims)
    ))
}

/// Require an exact work-group size; dimensions are padded to 3 with 1s.
pub fn cl_required_work_group_size(dims: &[u64], inner: Declarator) -> Declarator {
    inner.attribute(format!(
        "__attribute__ ((reqd_work_group_size({})))",
        pad_dims(dims)
    ))
}

fn pad_dims(dims: &[u64]) -> String {
    let mut dims = dims.to_vec();
    while dims.len() < 3 {
        dims.push(1);
    }
    dims.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctree::Generable;

    #[test]
    fn test_kernel_with_address_spaces() {
        let decl = cl_kernel(Declarator::value("void", "scale").function(vec![
            cl_global(Declarator::value("float", "data").pointer()),
            cl_local(Declarator::value("float", "tile").pointer()),
            cl_constant(Declarator::value("float", "lut").pointer()),
        ]));
        assert_eq!(
            decl.inline(),
            "__kernel void scale(__global float *data, __local float *tile, \
             __constant float *lut)"
        );
    }

    #[test]
    fn test_image_arguments() {
        let src = cl_image(2, ImageMode::Read, "src");
        assert_eq!(src.inline(), "__read_only image2d_t src");

        let dst = cl_image(3, ImageMode::Write, "dst");
        assert_eq!(dst.inline(), "__write_only image3d_t dst");
    }

    #[test]
    fn test_vector_pod() {
        let decl = cl_vector_pod(Dtype::Float32, 4, "pos").unwrap();
        assert_eq!(decl.generate(), vec!["float4 pos;"]);
        assert!(cl_vector_pod(Dtype::Float32, 5, "bad").is_err());
        assert!(cl_vector_pod(Dtype::Complex64, 4, "bad").is_err());
    }

    #[test]
    fn test_vec_type_hint() {
        let decl = cl_vec_type_hint(
            Dtype::Float32,
            4,
            Declarator::value("void", "run").function(vec![]),
        )
        .unwrap();
        assert_eq!(
            decl.inline(),
            "void __attribute__ ((vec_type_hint(float4))) run()"
        );
    }

    #[test]
    fn test_work_group_size_dims_padded() {
        let decl = cl_required_work_group_size(
            &[16],
            Declarator::value("void", "run").function(vec![]),
        );
        assert_eq!(
            decl.inline(),
            "void __attribute__ ((reqd_work_group_size(16, 1, 1))) run()"
        );

        let decl = cl_work_group_size_hint(
            &[8, 8],
            Declarator::value("void", "run").function(vec![]),
        );
        assert_eq!(
            decl.inline(),
            "void __attribute__ ((work_group_size_hint(8, 8, 1))) run()"
        );
    }
}
