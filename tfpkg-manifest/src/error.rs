use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(tfpkg::manifest_read),
        help("the manifest is written by 'terraform init'; check that it ran in this directory")
    )]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse module manifest")]
    #[diagnostic(code(tfpkg::manifest_parse))]
    ManifestParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read module at '{path}'")]
    #[diagnostic(code(tfpkg::module_read))]
    ModuleRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{path}'")]
    #[diagnostic(code(tfpkg::module_parse))]
    ModuleParse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    #[error("failed to parse '{path}'")]
    #[diagnostic(
        code(tfpkg::module_json_parse),
        help("files ending in '.tf.json' must use Terraform's JSON configuration syntax")
    )]
    ModuleJsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a parse error from a JSON error with source context
    pub fn manifest_parse(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = byte_offset(src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 0)));
        Box::new(Error::ManifestParse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

/// Byte offset of a 1-based line/column position.
fn byte_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}
