//! PDF assembly.

pub mod assembler;

pub use assembler::assemble_pdf;
