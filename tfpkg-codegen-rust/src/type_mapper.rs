//! Rust type mapper implementation.

use tfpkg_codegen::TypeMapper;

/// Rust type mapper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustTypeMapper;

impl RustTypeMapper {
    /// Map an optional field type.
    pub fn map_optional(&self, inner: &str) -> String {
        format!("Option<{}>", inner)
    }
}

impl TypeMapper for RustTypeMapper {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn map_bool(&self) -> &'static str {
        "bool"
    }

    fn map_number(&self) -> &'static str {
        "i64"
    }

    fn map_string(&self) -> &'static str {
        "String"
    }

    fn map_list(&self, element: &str) -> String {
        format!("Vec<{}>", element)
    }

    fn map_map(&self, value: &str) -> String {
        format!("std::collections::HashMap<String, {}>", value)
    }
}
