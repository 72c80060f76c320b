//! Core utilities and types for the tfpkg generator.
//!
//! This crate provides the file-writing rules and string helpers shared by
//! the document writer and the code generators.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile};
// String utilities
pub use utils::{to_pascal_case, to_snake_case};

/// Header placed at the top of every generated source file.
pub const GENERATED_HEADER: &str = "// Code generated by tfpkg. DO NOT EDIT.";
