use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("'{first}' and '{second}' in '{record}' both become '{field}'")]
    #[diagnostic(
        code(tfpkg::field_collision),
        help("two names differ only in casing or separators; rename one of them in the module")
    )]
    FieldCollision {
        record: String,
        field: String,
        first: String,
        second: String,
    },

    #[error("invalid package identifier '{identifier}'")]
    #[diagnostic(
        code(tfpkg::invalid_identifier),
        help("package identifiers are derived from the module source and must not be empty")
    )]
    InvalidIdentifier { identifier: String },
}
