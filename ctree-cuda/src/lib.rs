//! CUDA storage-class and attribute decorators for `ctree`.
//!
//! Each decorator wraps a [`Declarator`] with the matching CUDA keyword; no
//! new rendering rules are introduced beyond the core chaining contract.
//!
//! ```
//! use ctree::Declarator;
//! use ctree_cuda::cuda_global;
//!
//! let kernel = cuda_global(
//!     Declarator::value("void", "scale").function(vec![
//!         Declarator::value("float", "data").pointer(),
//!         Declarator::value("float", "alpha"),
//!     ]),
//! );
//! assert_eq!(
//!     kernel.inline(),
//!     "__global__ void scale(float *data, float alpha)"
//! );
//! ```

use ctree::Declarator;

/// Mark a kernel entry point, `__global__`.
pub fn cuda_global(inner: Declarator) -> Declarator {
    inner.specifier("__global__")
}

/// Mark a device-side function or variable, `__device__`.
pub fn cuda_device(inner: Declarator) -> Declarator {
    inner.specifier("__device__")
}

/// Place a variable in shared memory, `__shared__`.
pub fn cuda_shared(inner: Declarator) -> Declarator {
    inner.specifier("__shared__")
}

/// Place a variable in constant memory, `__constant__`.
pub fn cuda_constant(inner: Declarator) -> Declarator {
    inner.specifier("__constant__")
}

/// Bound the launch configuration of a kernel.
///
/// Renders `__launch_bounds__(max_threads)` or
/// `__launch_bounds__(max_threads, min_blocks)` ahead of the declarator.
pub fn cuda_launch_bounds(
    max_threads_per_block: u32,
    min_blocks_per_mp: Option<u32>,
    inner: Declarator,
) -> Declarator {
    let bounds = match min_blocks_per_mp {
        Some(min_blocks) => format!("{max_threads_per_block}, {min_blocks}"),
        None => max_threads_per_block.to_string(),
    };
    inner.attribute(format!("__launch_bounds__({bounds})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ctree::{Dtype, Generable};

    #[test]
    fn test_storage_classes() {
        let decl = cuda_shared(Declarator::pod(Dtype::Float32, "tile").array_of(256));
        assert_eq!(decl.generate(), vec!["__shared__ float tile[256];"]);

        let decl = cuda_constant(Declarator::pod(Dtype::Float32, "weights").array_of(64));
        assert_eq!(decl.inline(), "__constant__ float weights[64]");
    }

    #[test]
    fn test_global_kernel_signature() {
        let decl = cuda_global(Declarator::value("void", "copy").function(vec![
            Declarator::value("float", "dst").restrict_pointer(),
            Declarator::value("float", "src").const_().restrict_pointer(),
        ]));
        assert_eq!(
            decl.inline(),
            "__global__ void copy(float *__restrict__ dst, float const *__restrict__ src)"
        );
    }

    #[test]
    fn test_device_function() {
        let decl = cuda_device(Declarator::value("float", "square")
            .function(vec![Declarator::value("float", "x")]));
        assert_eq!(decl.inline(), "__device__ float square(float x)");
    }

    #[test]
    fn test_launch_bounds() {
        let decl = cuda_launch_bounds(
            256,
            None,
            Declarator::value("void", "step").function(vec![]),
        );
        assert_eq!(decl.inline(), "void __launch_bounds__(256) step()");

        let decl = cuda_launch_bounds(
            256,
            Some(4),
            Declarator::value("void", "step").function(vec![]),
        );
        assert_eq!(decl.inline(), "void __launch_bounds__(256, 4) step()");
    }
}
