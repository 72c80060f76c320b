//! Language-agnostic code generation traits.

use crate::{FieldType, NamingConvention, PackageSpec};

/// Trait for language-specific code generators.
///
/// Implement this trait to generate packages in a new language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "go", "rust")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "go", "rs")
    fn file_extension(&self) -> &'static str;

    /// Naming rules for identifiers in generated code
    fn naming(&self) -> &NamingConvention;

    /// Render the source file for one package, without the generated header
    fn render_package(&self, package: &PackageSpec) -> String;
}

/// Trait for mapping field types to language-specific type strings.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    fn map_bool(&self) -> &'static str;

    fn map_number(&self) -> &'static str;

    fn map_string(&self) -> &'static str;

    /// Sequence of `element`
    fn map_list(&self, element: &str) -> String;

    /// Mapping from string keys to `value`
    fn map_map(&self, value: &str) -> String;

    /// Render a field type, recursing into list elements and map values.
    fn render(&self, ty: &FieldType) -> String {
        match ty {
            FieldType::Bool => self.map_bool().to_string(),
            FieldType::Number => self.map_number().to_string(),
            FieldType::String => self.map_string().to_string(),
            FieldType::List(element) => self.map_list(&self.render(element)),
            FieldType::Map(value) => self.map_map(&self.render(value)),
        }
    }
}
