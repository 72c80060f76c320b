//! Rust code generator for tfpkg.
//!
//! Renders one module per package: `SOURCE`, `VERSION` and `OUTPUTS`
//! constants and a serde-derived struct of the module's input variables.

mod generator;
mod type_mapper;

pub mod ast;

pub use ast::{Field, Struct};
pub use generator::Generator;
pub use tfpkg_codegen::{LanguageCodegen, RUST_NAMING};
pub use type_mapper::RustTypeMapper;
