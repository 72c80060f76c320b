use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{Error, REGISTRY_PREFIX, Result, package_name};

/// Location of the manifest relative to a directory `terraform init` ran in.
pub const MANIFEST_PATH: &str = ".terraform/modules/modules.json";

/// The module manifest written by `terraform init`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DownloadedModules {
    #[serde(default)]
    pub modules: Vec<DownloadedModule>,
}

/// One module Terraform resolved and downloaded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DownloadedModule {
    /// Dotted path of module call names; empty for the root module.
    pub key: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Download directory, relative to the Terraform working directory.
    pub dir: String,
}

impl DownloadedModule {
    /// Whether the module was resolved through a registry address.
    pub fn is_registry(&self) -> bool {
        self.source.starts_with(REGISTRY_PREFIX)
    }

    /// Resolved version, treating an empty string as unset.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref().filter(|v| !v.is_empty())
    }

    /// Package identifier derived from the source address.
    pub fn package_name(&self) -> String {
        package_name(&self.source)
    }

    /// Download directory resolved against the Terraform working directory.
    pub fn resolve_dir(&self, working_dir: &Path) -> PathBuf {
        working_dir.join(&self.dir)
    }
}

impl FromStr for DownloadedModules {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "modules.json")
    }
}

impl DownloadedModules {
    /// Parse a manifest file from the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| {
            Box::new(Error::ManifestRead {
                path: path.to_path_buf(),
                source,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse the manifest inside a directory `terraform init` ran in
    pub fn from_terraform_dir(dir: impl AsRef<Path>) -> Result<Self> {
        Self::open(dir.as_ref().join(MANIFEST_PATH))
    }

    /// Parse a manifest from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let manifest: Self = serde_json::from_str(content)
            .map_err(|e| Error::manifest_parse(e, content, filename))?;
        tracing::debug!(
            file = filename,
            modules = manifest.modules.len(),
            "parsed module manifest"
        );
        Ok(manifest)
    }

    /// Modules resolved through a registry, in manifest order
    pub fn registry_modules(&self) -> Vec<&DownloadedModule> {
        filter_registry_modules(&self.modules)
    }
}

/// Keep modules whose source starts with the registry prefix, preserving order.
pub fn filter_registry_modules(modules: &[DownloadedModule]) -> Vec<&DownloadedModule> {
    modules.iter().filter(|m| m.is_registry()).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const MANIFEST: &str = r#"{
  "Modules": [
    {"Key": "", "Source": "", "Dir": "."},
    {"Key": "net", "Source": "registry.terraform.io/terraform-google-modules/network/google", "Version": "9.1.0", "Dir": ".terraform/modules/net"},
    {"Key": "net.subnets", "Source": "registry.terraform.io/terraform-google-modules/network/google//modules/subnets", "Version": "9.1.0", "Dir": ".terraform/modules/net/modules/subnets"},
    {"Key": "local", "Source": "./modules/local", "Dir": "modules/local"},
    {"Key": "sql", "Source": "registry.terraform.io/GoogleCloudPlatform/sql-db/google//modules/postgresql", "Version": "20.0.0", "Dir": ".terraform/modules/sql/modules/postgresql"}
  ]
}"#;

    #[test]
    fn test_parse_manifest() {
        let manifest: DownloadedModules = MANIFEST.parse().unwrap();

        assert_eq!(manifest.modules.len(), 5);
        let net = &manifest.modules[1];
        assert_eq!(net.key, "net");
        assert_eq!(net.version(), Some("9.1.0"));
        assert_eq!(net.dir, ".terraform/modules/net");
        assert_eq!(manifest.modules[0].version(), None);
    }

    #[test]
    fn test_filter_registry_preserves_order() {
        let manifest: DownloadedModules = MANIFEST.parse().unwrap();
        let keys: Vec<_> = manifest
            .registry_modules()
            .iter()
            .map(|m| m.key.as_str())
            .collect();

        assert_eq!(keys, vec!["net", "net.subnets", "sql"]);
    }

    #[test]
    fn test_filter_empty() {
        assert!(filter_registry_modules(&[]).is_empty());
    }

    #[test]
    fn test_missing_modules_key() {
        let manifest: DownloadedModules = "{}".parse().unwrap();
        assert!(manifest.modules.is_empty());
    }

    #[test]
    fn test_empty_version_is_unset() {
        let manifest: DownloadedModules =
            r#"{"Modules": [{"Key": "a", "Source": "registry/a", "Version": "", "Dir": "a"}]}"#
                .parse()
                .unwrap();
        assert_eq!(manifest.modules[0].version(), None);
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = DownloadedModules::from_str_with_filename("{\n  \"Modules\": [x]\n}", "m.json")
            .unwrap_err();

        match *err {
            Error::ManifestParse { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_resolve_dir() {
        let manifest: DownloadedModules = MANIFEST.parse().unwrap();
        let dir = manifest.modules[1].resolve_dir(Path::new("/tmp/work"));
        assert_eq!(dir, PathBuf::from("/tmp/work/.terraform/modules/net"));
    }
}
