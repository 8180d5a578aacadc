//! Two-level display threads built from a post's flat comment list

mod assembler;

pub use assembler::{assemble, Thread};
