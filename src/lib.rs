//! Classic triple-loop matrix multiplication, parallelized by rows.
//!
//! This is a teaching benchmark, not a BLAS: no SIMD, no cache blocking,
//! just the textbook i-j-k loop with the outer loop split across a fixed
//! set of worker threads. Each worker owns a contiguous block of result
//! rows, so the threads share nothing but the read-only inputs and never
//! need to synchronize.
//!
//! ## Usage
//!
//! ```
//! use parmul::multiply;
//!
//! let a = vec![1usize; 16 * 16];
//! let b = vec![1usize; 16 * 16];
//! let mut c = vec![0usize; 16 * 16];
//!
//! multiply(&a, &b, &mut c, 16);
//! assert!(c.iter().all(|&cell| cell == 16));
//! ```
//!
//! For the parallel version, add a thread count:
//!
//! ```
//! use parmul::multiply_parallel;
//!
//! let a = vec![1usize; 64 * 64];
//! let b = vec![1usize; 64 * 64];
//! let mut c = vec![0usize; 64 * 64];
//!
//! multiply_parallel(&a, &b, &mut c, 64, 4);
//! ```
//!
//! Arithmetic is unsigned and wraps on overflow. Every result cell is
//! computed entirely by one thread, so the product is identical whatever
//! the thread count.

pub mod error;
pub mod matrix;
pub mod threaded;
pub mod timer;

pub use matrix::naive::matmul_naive;
pub use threaded::rows_mt::matmul_rows_mt;

/// Matrix multiply: C = A * B for square row-major matrices of dimension `d`.
///
/// Single-threaded reference implementation.
///
/// # Panics
///
/// Panics if any slice length doesn't match `d * d`.
pub fn multiply(a: &[usize], b: &[usize], c: &mut [usize], d: usize) {
    assert_eq!(a.len(), d * d, "A: expected {}x{}={} elements", d, d, d * d);
    assert_eq!(b.len(), d * d, "B: expected {}x{}={} elements", d, d, d * d);
    assert_eq!(c.len(), d * d, "C: expected {}x{}={} elements", d, d, d * d);

    matmul_naive(a, b, c, d);
}

/// Same as [`multiply`] but splits the result rows across `num_threads`
/// worker threads.
///
/// The partition is decided once, up front; every thread computes a
/// contiguous block of rows and all threads are joined before this
/// returns. Thread counts beyond the row count are harmless - the extra
/// workers simply get no rows.
///
/// # Panics
///
/// Panics if any slice length doesn't match `d * d`.
pub fn multiply_parallel(
    a: &[usize],
    b: &[usize],
    c: &mut [usize],
    d: usize,
    num_threads: usize,
) {
    assert_eq!(a.len(), d * d, "A: expected {}x{}={} elements", d, d, d * d);
    assert_eq!(b.len(), d * d, "B: expected {}x{}={} elements", d, d, d * d);
    assert_eq!(c.len(), d * d, "C: expected {}x{}={} elements", d, d, d * d);

    matmul_rows_mt(a, b, c, d, num_threads);
}
