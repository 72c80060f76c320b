//! Download operation - let `terraform init` fetch a module and its children.

use std::{path::Path, process::Command};

use eyre::{Result, WrapErr, bail};
use tfpkg_hcl::{Document, Module};
use tfpkg_manifest::package_name;

/// Root configuration file referencing the requested module.
pub const BOOTSTRAP_FILE: &str = "tmp.tf";
const BOOTSTRAP_PREFIX: &str = "tfpkg_";
const TERRAFORM: &str = "terraform";

/// Options for the download operation.
pub struct DownloadOptions<'a> {
    /// Registry source of the requested module.
    pub source: &'a str,
    pub version: Option<&'a str>,
    /// Directory to run `terraform init` in.
    pub dir: &'a Path,
    /// Reuse whatever a previous run left in `dir`.
    pub skip: bool,
}

/// Outcome of the download operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Download {
    Downloaded,
    Skipped,
}

/// Execute the download operation.
pub fn download(opts: &DownloadOptions) -> Result<Download> {
    if opts.skip {
        tracing::info!(dir = %opts.dir.display(), "skipping module download");
        return Ok(Download::Skipped);
    }

    bootstrap_document(opts.source, opts.version)
        .write(opts.dir)
        .wrap_err_with(|| {
            format!(
                "failed to write bootstrap configuration in '{}'",
                opts.dir.display()
            )
        })?;
    terraform_init(opts.dir)?;
    Ok(Download::Downloaded)
}

/// A root configuration with a single module block calling `source`.
pub fn bootstrap_document(source: &str, version: Option<&str>) -> Document {
    let mut module = Module::new(bootstrap_module_name(source), source);
    if let Some(version) = version {
        module = module.with_version(version);
    }
    Document::new().with_file(BOOTSTRAP_FILE, [module.into()])
}

/// Module call name for the bootstrap configuration, e.g. `tfpkg_network`.
pub fn bootstrap_module_name(source: &str) -> String {
    format!("{}{}", BOOTSTRAP_PREFIX, package_name(source))
}

fn terraform_init(dir: &Path) -> Result<()> {
    tracing::info!(dir = %dir.display(), "running terraform init");
    let status = Command::new(TERRAFORM)
        .args(["init", "-upgrade", "-input=false"])
        .current_dir(dir)
        .stdout(std::io::stderr())
        .status()
        .wrap_err("failed to run terraform, is it installed and on PATH?")?;

    if !status.success() {
        bail!("terraform init failed in '{}' ({})", dir.display(), status);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn squash(s: &str) -> String {
        s.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_bootstrap_module_name() {
        assert_eq!(
            bootstrap_module_name("terraform-google-modules/network/google"),
            "tfpkg_network"
        );
        assert_eq!(
            bootstrap_module_name("GoogleCloudPlatform/sql-db/google//modules/postgresql"),
            "tfpkg_postgresql"
        );
    }

    #[test]
    fn test_bootstrap_document() {
        let files = bootstrap_document("terraform-google-modules/network/google", Some("~> 9.0"))
            .render()
            .unwrap();

        assert_eq!(files[0].path, BOOTSTRAP_FILE);
        assert_eq!(
            squash(&files[0].content),
            r#"module "tfpkg_network" { source = "terraform-google-modules/network/google" version = "~> 9.0" }"#
        );
    }

    #[test]
    fn test_bootstrap_without_version() {
        let files = bootstrap_document("acme/vpc/aws", None).render().unwrap();
        assert!(!files[0].content.contains("version"));
    }

    #[test]
    fn test_skip_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let result = download(&DownloadOptions {
            source: "acme/vpc/aws",
            version: None,
            dir: temp.path(),
            skip: true,
        })
        .unwrap();

        assert_eq!(result, Download::Skipped);
        assert!(!temp.path().join(BOOTSTRAP_FILE).exists());
    }
}
