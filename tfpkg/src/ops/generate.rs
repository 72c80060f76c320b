//! Generate operation - one package per downloaded registry module.

use std::{collections::HashSet, path::Path};

use eyre::{Result, WrapErr};
use tfpkg_codegen::{LanguageCodegen, PackageSpec, PackageWriter};
use tfpkg_manifest::{DownloadedModules, ModuleLoader};

use crate::reports::{
    GenerateReport, GenerationResult, PackageSummary, PreviewFile, PreviewResult, WrittenResult,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory `terraform init` ran in; module directories are relative to it.
    pub working_dir: &'a Path,
    /// Output directory for generated packages.
    pub gen_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Modules not resolved through a registry are skipped. Generation stops at
/// the first module that fails to load or convert.
pub fn generate(
    manifest: &DownloadedModules,
    codegen: &dyn LanguageCodegen,
    loader: &dyn ModuleLoader,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let registry = manifest.registry_modules();
    let skipped = manifest.modules.len() - registry.len();
    let writer = PackageWriter::new(codegen, opts.gen_dir);

    let mut seen = HashSet::new();
    let mut packages = Vec::new();
    let mut previews = Vec::new();

    for module in registry {
        let identifier = module.package_name();
        if !seen.insert(identifier.clone()) {
            tracing::warn!(
                key = %module.key,
                package = %identifier,
                "package already generated from another module, skipping"
            );
            continue;
        }

        let dir = module.resolve_dir(opts.working_dir);
        let description = loader
            .load(&dir)
            .wrap_err_with(|| format!("failed to load module '{}'", module.key))?;
        let package = PackageSpec::build(
            &identifier,
            &module.source,
            module.version(),
            &description,
            codegen.naming(),
        )
        .wrap_err_with(|| format!("failed to build package for module '{}'", module.key))?;

        if opts.dry_run {
            let file = writer.preview(&package);
            previews.push(PreviewFile {
                path: file.path().display().to_string(),
                content: file.content().to_string(),
            });
        } else {
            let path = writer
                .write(&package)
                .wrap_err_with(|| format!("failed to write package '{}'", package.identifier))?;
            packages.push(PackageSummary {
                identifier: package.identifier.clone(),
                path,
                fields: package.record.fields.len(),
                outputs: package.outputs.len(),
            });
        }
    }

    let result = if opts.dry_run {
        GenerationResult::Preview(PreviewResult { files: previews })
    } else {
        GenerationResult::Written(WrittenResult {
            gen_dir: opts.gen_dir.to_path_buf(),
            packages,
        })
    };

    Ok(GenerateReport {
        language: codegen.language(),
        skipped,
        result,
    })
}
