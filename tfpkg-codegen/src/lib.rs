//! Shared code generation utilities for tfpkg.
//!
//! This crate turns a module's declared interface into a language-agnostic
//! [`PackageSpec`] and provides the abstractions language backends implement.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, TypeMapper, naming)
//! - [`types`] - Type descriptor parsing ([`map_type`])
//! - [`package`] - Package specifications built from module descriptions
//! - [`writer`] - Writing rendered packages under the generation directory

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod builder;
mod error;
pub mod language;
pub mod package;
pub mod types;
pub mod writer;

pub use error::{Error, Result};
pub use language::{GO_NAMING, LanguageCodegen, NamingConvention, RUST_NAMING, TypeMapper};
pub use package::{FieldSpec, OutputSpec, PackageSpec, RecordSpec};
pub use types::{FieldType, map_type};
pub use writer::{PackageFile, PackageWriter};
