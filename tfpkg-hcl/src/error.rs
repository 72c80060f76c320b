use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for document rendering and writing.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("unknown value kind '{kind}'")]
    #[diagnostic(
        code(tfpkg::unknown_value_kind),
        help("attribute values must be strings, booleans, integers, lists or maps")
    )]
    UnknownValueKind { kind: String },

    #[error("invalid expression '{expression}': {message}")]
    #[diagnostic(code(tfpkg::invalid_expression))]
    InvalidExpression { expression: String, message: String },

    #[error("failed to render {kind} block '{name}': {message}")]
    #[diagnostic(code(tfpkg::block_render))]
    BlockRender {
        kind: String,
        name: String,
        message: String,
    },

    #[error("failed to render '{path}'")]
    #[diagnostic(code(tfpkg::file_render))]
    FileRender {
        path: String,
        #[source]
        source: Box<Error>,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(tfpkg::file_write))]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a block render error for the given block identity.
    pub fn block_render(
        kind: impl Into<String>,
        name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Error::BlockRender {
            kind: kind.into(),
            name: name.into(),
            message: message.into(),
        }
    }
}
