//! Core definitions (error type, result alias, verification macros), relied
//! upon by all selvage-* crates.

pub mod error;
pub mod fatal;
pub mod result;

pub use result::Result;
