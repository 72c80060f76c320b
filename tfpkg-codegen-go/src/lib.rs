//! Go code generator for tfpkg.
//!
//! Renders one `package` per module: its source and version constants, a
//! struct of the module's input variables with JSON tags, and a `const`
//! block naming its outputs.

mod generator;
mod type_mapper;

pub mod ast;

pub use ast::{Const, ConstBlock, Field, Struct};
pub use generator::Generator;
pub use tfpkg_codegen::{GO_NAMING, LanguageCodegen};
pub use type_mapper::GoTypeMapper;

/// Quote `s` as a Go interpreted string literal.
pub fn go_quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => quoted.push_str(&format!("\\u{:04x}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
