//! Driver-level error taxonomy.
//!
//! Every variant is fatal: the binary prints the message and exits with
//! the code from [`DriverError::exit_code`]. The multiply kernels have no
//! error path of their own - they run only after these checks pass.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DriverError {
    #[error("usage: {program} <matrixSize> <numThreads>")]
    Usage { program: String },
    #[error("error: matrix size and thread count must be positive integers")]
    InvalidArgument,
    #[error("error: matrix allocation failed")]
    AllocationFailed,
}

impl DriverError {
    /// Process exit code: 1 for usage and validation problems, 2 for
    /// allocation failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::Usage { .. } | DriverError::InvalidArgument => 1,
            DriverError::AllocationFailed => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, DriverError>;
