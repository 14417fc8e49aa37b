//! Matrix storage and the sequential baseline.
//!
//! Matrices are dense, square, row-major `usize` buffers of length
//! `d * d`. Allocation goes through [`try_alloc`] so the driver can
//! report an allocation failure instead of aborting.

pub mod init;
pub mod naive;

use crate::error::{DriverError, Result};

/// Allocates a zeroed `d` × `d` buffer.
///
/// Fails (rather than aborting) when `d * d` overflows or the
/// reservation itself fails, so the caller can exit with a message.
pub fn try_alloc(d: usize) -> Result<Vec<usize>> {
    let len = d.checked_mul(d).ok_or(DriverError::AllocationFailed)?;
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| DriverError::AllocationFailed)?;
    buf.resize(len, 0);
    Ok(buf)
}
