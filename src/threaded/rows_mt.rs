//! Row-partitioned fork-join multiply.

use crate::matrix::naive::matmul_naive;
use std::mem;
use std::thread;

/// Splits `c` into one contiguous block of result rows per worker.
///
/// Worker `t` of `w = min(workers, d)` owns rows `t*d/w .. (t+1)*d/w`,
/// so block sizes differ by at most one row and every row lands in
/// exactly one block. Workers beyond the row count would own an empty
/// range and are dropped. Returns `(first_row, rows)` pairs carved out
/// of `c`, in row order.
pub fn row_blocks<'c>(
    c: &'c mut [usize],
    d: usize,
    workers: usize,
) -> Vec<(usize, &'c mut [usize])> {
    let workers = workers.clamp(1, d.max(1));

    let mut blocks = Vec::with_capacity(workers);
    let mut rest = c;
    for t in 0..workers {
        let start = t * d / workers;
        let end = (t + 1) * d / workers;
        let (block, tail) = mem::take(&mut rest).split_at_mut((end - start) * d);
        rest = tail;
        if end > start {
            blocks.push((start, block));
        }
    }
    blocks
}

/// Multi-threaded matrix multiplication, one contiguous row block per
/// thread.
///
/// The partition comes from [`row_blocks`] and is fixed before the first
/// thread starts; each worker computes the full inner product for every
/// cell it owns, writing only into its own slice of `c`. All workers are
/// joined before this returns, so the caller may read `c` immediately.
///
/// A single thread skips the spawn entirely and runs the sequential
/// loop. The result is the same for any `num_threads`.
pub fn matmul_rows_mt(a: &[usize], b: &[usize], c: &mut [usize], d: usize, num_threads: usize) {
    if num_threads <= 1 {
        matmul_naive(a, b, c, d);
        return;
    }

    thread::scope(|scope| {
        for (first_row, rows) in row_blocks(c, d, num_threads) {
            scope.spawn(move || multiply_rows(a, b, rows, d, first_row));
        }
    });
}

/// Computes the block of result rows starting at `first_row`.
fn multiply_rows(a: &[usize], b: &[usize], rows: &mut [usize], d: usize, first_row: usize) {
    for (offset, row) in rows.chunks_mut(d).enumerate() {
        let i = first_row + offset;
        for (j, cell) in row.iter_mut().enumerate() {
            let mut sum = 0usize;
            for k in 0..d {
                sum = sum.wrapping_add(a[i * d + k].wrapping_mul(b[k * d + j]));
            }
            *cell = sum;
        }
    }
}
