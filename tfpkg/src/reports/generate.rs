//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from package generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Target language name.
    pub language: &'static str,
    /// Downloaded modules that were not resolved through a registry.
    pub skipped: usize,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of package generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub gen_dir: PathBuf,
    pub packages: Vec<PackageSummary>,
}

/// One written package.
#[derive(Debug)]
pub struct PackageSummary {
    pub identifier: String,
    pub path: PathBuf,
    pub fields: usize,
    pub outputs: usize,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the generation directory.
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.section(&format!(
            "Packages ({}, {})",
            written.packages.len(),
            self.language
        ));
        for package in &written.packages {
            out.added_item(&format!(
                "{}: {} ({} fields, {} outputs)",
                package.identifier,
                package.path.display(),
                package.fields,
                package.outputs
            ));
        }
        out.newline();
        out.key_value("Generated", &written.gen_dir.display().to_string());
        if self.skipped > 0 {
            out.key_value("Skipped non-registry modules", &self.skipped.to_string());
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be generated",
            preview.files.len()
        ));
    }
}
