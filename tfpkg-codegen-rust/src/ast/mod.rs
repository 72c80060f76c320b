//! Rust AST builders for generating structs.
//!
//! These provide a high-level API for constructing Rust syntax,
//! which can then be rendered via CodeBuilder.

mod structs;

pub use structs::{Field, Struct};
