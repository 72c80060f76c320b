use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file body, without the header
    fn render(&self) -> String;

    /// Render the file content as it will be written, header included
    fn contents(&self) -> String {
        self.rules().apply(&self.render())
    }

    /// Write the file to disk, replacing any previous content
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = self.path(base);
        write_file(&path, &self.contents())?;
        Ok(path)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// A rendered file that has not been written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Rules that determine how a file is composed
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub header: Option<&'static str>,
}

impl FileRules {
    /// Rules for generated code, which is always overwritten.
    pub fn always_overwrite() -> Self {
        Self::default()
    }

    /// Prepend `header` to the written content.
    pub fn with_header(mut self, header: &'static str) -> Self {
        self.header = Some(header);
        self
    }

    /// Compose the final file content from a rendered body.
    pub fn apply(&self, content: &str) -> String {
        match self.header {
            Some(header) if content.is_empty() => format!("{}\n", header),
            Some(header) => format!("{}\n\n{}", header, content),
            None => content.to_string(),
        }
    }
}
