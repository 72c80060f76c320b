//! Root configuration documents.
//!
//! A [`Document`] groups blocks by destination file. Declared variables and
//! outputs always land in [`VARIABLES_FILE`] and [`OUTPUTS_FILE`], which are
//! written even when empty.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::{Error, HclBlock, Output, RenderBlock, Result, Variable, block::format_block};

/// File receiving every declared variable.
pub const VARIABLES_FILE: &str = "variables.tf";
/// File receiving every declared output.
pub const OUTPUTS_FILE: &str = "outputs.tf";

/// A Terraform root configuration.
#[derive(Debug, Clone, Default)]
pub struct Document {
    files: IndexMap<String, Vec<HclBlock>>,
    variables: Vec<Variable>,
    outputs: Vec<Output>,
}

/// A rendered file, path relative to the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: String,
    pub content: String,
}

/// Files written by [`Document::write`].
#[derive(Debug, Default)]
pub struct WriteSummary {
    pub written: Vec<PathBuf>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `blocks` in `path`, after any blocks already assigned to it.
    pub fn with_file(
        mut self,
        path: impl Into<String>,
        blocks: impl IntoIterator<Item = HclBlock>,
    ) -> Self {
        self.files.entry(path.into()).or_default().extend(blocks);
        self
    }

    pub fn add_block(&mut self, path: impl Into<String>, block: impl Into<HclBlock>) {
        self.files.entry(path.into()).or_default().push(block.into());
    }

    pub fn with_variables(mut self, variables: impl IntoIterator<Item = Variable>) -> Self {
        self.variables.extend(variables);
        self
    }

    pub fn with_outputs(mut self, outputs: impl IntoIterator<Item = Output>) -> Self {
        self.outputs.extend(outputs);
        self
    }

    pub fn add_variable(&mut self, variable: Variable) {
        self.variables.push(variable);
    }

    pub fn add_output(&mut self, output: Output) {
        self.outputs.push(output);
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn outputs(&self) -> &[Output] {
        &self.outputs
    }

    /// Merge caller files with the synthesized variables and outputs files.
    fn assemble(&self) -> Vec<(&str, Vec<&dyn RenderBlock>)> {
        let mut files: Vec<(&str, Vec<&dyn RenderBlock>)> = self
            .files
            .iter()
            .map(|(path, blocks)| {
                let blocks = blocks.iter().map(|b| b as &dyn RenderBlock).collect();
                (path.as_str(), blocks)
            })
            .collect();

        let synthesized: [(&str, Vec<&dyn RenderBlock>); 2] = [
            (
                VARIABLES_FILE,
                self.variables.iter().map(|v| v as &dyn RenderBlock).collect(),
            ),
            (
                OUTPUTS_FILE,
                self.outputs.iter().map(|o| o as &dyn RenderBlock).collect(),
            ),
        ];
        for (path, blocks) in synthesized {
            match files.iter_mut().find(|(p, _)| *p == path) {
                Some((_, existing)) => existing.extend(blocks),
                None => files.push((path, blocks)),
            }
        }

        files
    }

    /// Render every file without touching the filesystem.
    pub fn render(&self) -> Result<Vec<RenderedFile>> {
        self.assemble()
            .into_iter()
            .map(|(path, blocks)| {
                let content = render_file(path, &blocks)?;
                Ok(RenderedFile {
                    path: path.to_string(),
                    content,
                })
            })
            .collect()
    }

    /// Write every file into `dir`, creating it if needed.
    ///
    /// A block that fails to render aborts the write and is returned. A file
    /// that fails to write does not stop the remaining files; the first such
    /// failure is returned once all files have been attempted.
    pub fn write(&self, dir: &Path) -> Result<WriteSummary> {
        std::fs::create_dir_all(dir).map_err(|source| Error::FileWrite {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut summary = WriteSummary::default();
        let mut first_failure = None;

        for (path, blocks) in self.assemble() {
            let content = render_file(path, &blocks)?;
            let write_path = dir.join(path);

            match std::fs::write(&write_path, content) {
                Ok(()) => {
                    tracing::info!(path = %write_path.display(), blocks = blocks.len(), "wrote file");
                    summary.written.push(write_path);
                }
                Err(source) => {
                    tracing::warn!(path = %write_path.display(), error = %source, "failed to write file");
                    first_failure.get_or_insert(Error::FileWrite {
                        path: write_path,
                        source,
                    });
                }
            }
        }

        match first_failure {
            Some(err) => Err(err),
            None => Ok(summary),
        }
    }
}

/// Format blocks into file content, one blank line between blocks.
fn render_file(path: &str, blocks: &[&dyn RenderBlock]) -> Result<String> {
    let file_error = |source: Error| Error::FileRender {
        path: path.to_string(),
        source: Box::new(source),
    };

    let mut rendered = Vec::with_capacity(blocks.len());
    for item in blocks {
        let block = item.render_block().map_err(file_error)?;
        let text = format_block(&block, item.leading_attributes()).map_err(|err| {
            file_error(Error::block_render(
                block.identifier(),
                block
                    .labels()
                    .last()
                    .map(|label| label.as_str())
                    .unwrap_or_default(),
                err.to_string(),
            ))
        })?;
        tracing::debug!(file = path, block = block.identifier(), "rendered block");
        rendered.push(text);
    }

    Ok(rendered.join("\n"))
}
