//! Go type mapper implementation.

use tfpkg_codegen::TypeMapper;

/// Go type mapper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoTypeMapper;

impl TypeMapper for GoTypeMapper {
    fn language(&self) -> &'static str {
        "go"
    }

    fn map_bool(&self) -> &'static str {
        "bool"
    }

    fn map_number(&self) -> &'static str {
        "int"
    }

    fn map_string(&self) -> &'static str {
        "string"
    }

    fn map_list(&self, element: &str) -> String {
        format!("[]{}", element)
    }

    fn map_map(&self, value: &str) -> String {
        format!("map[string]{}", value)
    }
}
