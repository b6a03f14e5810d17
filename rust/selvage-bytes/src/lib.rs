//! Byte-buffer allocation for the selvage tool: alignment helpers and
//! zero-initialized buffers placed on fixed power-of-two boundaries for
//! efficient bulk I/O.

pub mod align;
pub mod alloc;
pub mod buffer;

pub use buffer::{AlignedBuf, IO_BUFFER_ALIGNMENT};
