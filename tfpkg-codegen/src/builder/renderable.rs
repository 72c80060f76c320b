//! Renderable trait and CodeFragment for decoupled code generation.

/// A fragment of generated code.
///
/// Fragments sit between declaration types and the final string output, so
/// backends can compose declarations before choosing an indentation style.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
    /// A line comment (`// text`).
    Comment(String),
    /// A Rust doc comment (`/// text`).
    RustDoc(String),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a block fragment closed by `close`.
    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>, close: &str) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: Some(close.to_string()),
        }
    }

    /// Create a line comment fragment per line of `text`.
    pub fn comment(text: &str) -> Self {
        Self::Sequence(text.lines().map(|l| Self::Comment(l.to_string())).collect())
    }

    /// Create a Rust doc comment fragment per line of `text`.
    pub fn rust_doc(text: &str) -> Self {
        Self::Sequence(text.lines().map(|l| Self::RustDoc(l.to_string())).collect())
    }
}

/// Types that can be converted to code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}

impl Renderable for Vec<CodeFragment> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.clone()
    }
}
