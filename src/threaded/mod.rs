//! Multi-threaded multiply implementations.
//!
//! The rows of the result are split into contiguous blocks, one per
//! worker thread, decided once before any thread starts. Blocks are
//! disjoint, so the workers write without any locking; the fork-join
//! scope is the only synchronization point.

pub mod rows_mt;
