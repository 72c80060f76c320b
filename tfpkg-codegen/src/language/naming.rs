//! Naming conventions for different programming languages.

use tfpkg_core::{to_pascal_case, to_snake_case};

/// Language-specific naming conventions.
///
/// Defines how to transform package and variable names, and how to handle
/// reserved words.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a package identifier to a type name (e.g., "sql_db" -> "SqlDb")
    pub package_to_type: fn(&str) -> String,
    /// Transform a package identifier to a file name
    pub package_to_file: fn(&str) -> String,
    /// Transform a variable name to a field name
    pub field_to_name: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "type" -> "r#type" in Rust)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a type name.
    pub fn type_name(&self, name: &str) -> String {
        let transformed = (self.package_to_type)(name);
        self.safe_name(&transformed)
    }

    /// Transform for use as a file or directory name.
    pub fn file_name(&self, name: &str) -> String {
        (self.package_to_file)(name)
    }

    /// Transform and make safe for use as a package name, which doubles as
    /// the directory and file name.
    ///
    /// A leading digit gets the `tf_` prefix. Reserved words get a trailing
    /// underscore, since raw identifiers cannot name a directory.
    pub fn package_name(&self, name: &str) -> String {
        let mut transformed = self.file_name(name);
        if transformed.starts_with(|c: char| c.is_ascii_digit()) {
            transformed.insert_str(0, PACKAGE_DIGIT_PREFIX);
        }
        if self.is_reserved(&transformed) {
            transformed.push('_');
        }
        transformed
    }

    /// Transform and make safe for use as a field name.
    pub fn field_name(&self, name: &str) -> String {
        let transformed = (self.field_to_name)(name);
        self.safe_name(&transformed)
    }
}

const PACKAGE_DIGIT_PREFIX: &str = "tf_";

fn escape_rust_reserved(name: &str) -> String {
    match name {
        // Raw identifiers can't be used for these
        "self" | "Self" | "super" | "crate" => format!("{}_", name),
        _ => format!("r#{}", name),
    }
}

fn escape_with_underscore(name: &str) -> String {
    format!("{}_", name)
}

/// Rust naming conventions.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    package_to_type: to_pascal_case,
    package_to_file: to_snake_case,
    field_to_name: to_snake_case,
    reserved_words: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
        "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
        "final", "gen", "macro", "override", "priv", "try", "typeof", "unsized", "virtual",
        "yield",
    ],
    escape_reserved: escape_rust_reserved,
};

/// Go naming conventions.
pub const GO_NAMING: NamingConvention = NamingConvention {
    package_to_type: to_pascal_case,
    package_to_file: to_snake_case,
    field_to_name: to_pascal_case, // Go uses PascalCase for exported fields
    reserved_words: &[
        "break",
        "case",
        "chan",
        "const",
        "continue",
        "default",
        "defer",
        "else",
        "fallthrough",
        "for",
        "func",
        "go",
        "goto",
        "if",
        "import",
        "interface",
        "map",
        "package",
        "range",
        "return",
        "select",
        "struct",
        "switch",
        "type",
        "var",
    ],
    escape_reserved: escape_with_underscore,
};
