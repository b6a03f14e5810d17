//! Text-handling primitives shared by the selvage tools: bounded line
//! reading, strict decimal parsing, and the fixed-width hex format used to
//! persist digests.

pub mod hex;
pub mod line;
pub mod num;
