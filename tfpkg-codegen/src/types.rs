//! Field types parsed from Terraform type constraints.

/// The static type of a generated field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Bool,
    Number,
    String,
    List(Box<FieldType>),
    Map(Box<FieldType>),
}

impl FieldType {
    pub fn list(element: FieldType) -> Self {
        FieldType::List(Box::new(element))
    }

    pub fn map(value: FieldType) -> Self {
        FieldType::Map(Box::new(value))
    }
}

/// Map a type constraint such as `map(list(string))` to a field type.
///
/// `bool` and `number` map to their primitives, `list(T)` and `map(T)` recurse
/// into `T`. Everything else, including `string`, `any`, `object(...)` and
/// malformed constraints, maps to [`FieldType::String`].
///
/// ```
/// use tfpkg_codegen::{FieldType, map_type};
///
/// assert_eq!(
///     map_type("map(list(string))"),
///     FieldType::map(FieldType::list(FieldType::String))
/// );
/// ```
pub fn map_type(descriptor: &str) -> FieldType {
    let descriptor = descriptor.trim();
    match descriptor {
        "bool" => FieldType::Bool,
        "number" => FieldType::Number,
        _ => {
            if let Some(inner) = constructor_arg(descriptor, "list") {
                FieldType::list(map_type(inner))
            } else if let Some(inner) = constructor_arg(descriptor, "map") {
                FieldType::map(map_type(inner))
            } else {
                FieldType::String
            }
        }
    }
}

/// The argument of `<name>(<arg>)`, if `descriptor` has that shape.
fn constructor_arg<'a>(descriptor: &'a str, name: &str) -> Option<&'a str> {
    descriptor
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitives() {
        assert_eq!(map_type("bool"), FieldType::Bool);
        assert_eq!(map_type("number"), FieldType::Number);
        assert_eq!(map_type("string"), FieldType::String);
    }

    #[test]
    fn test_unknown_falls_back_to_string() {
        assert_eq!(map_type("any"), FieldType::String);
        assert_eq!(map_type(""), FieldType::String);
        assert_eq!(map_type("object({ name = string })"), FieldType::String);
        assert_eq!(map_type("set(string)"), FieldType::String);
        assert_eq!(map_type("list(string"), FieldType::String);
        assert_eq!(map_type("listing(string)"), FieldType::String);
    }

    #[test]
    fn test_list_maps_element_wise() {
        assert_eq!(map_type("list(string)"), FieldType::list(FieldType::String));
        assert_eq!(map_type("list(number)"), FieldType::list(FieldType::Number));
        assert_eq!(map_type("list(bool)"), FieldType::list(FieldType::Bool));
    }

    #[test]
    fn test_map() {
        assert_eq!(map_type("map(number)"), FieldType::map(FieldType::Number));
        assert_eq!(map_type("map(any)"), FieldType::map(FieldType::String));
    }

    #[test]
    fn test_nesting() {
        assert_eq!(
            map_type("map(list(string))"),
            FieldType::map(FieldType::list(FieldType::String))
        );
        assert_eq!(
            map_type("list(map(list(number)))"),
            FieldType::list(FieldType::map(FieldType::list(FieldType::Number)))
        );
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(map_type("  bool\n"), FieldType::Bool);
        assert_eq!(map_type("list( number )"), FieldType::list(FieldType::Number));
    }
}
