//! Inputs produced by `terraform init`.
//!
//! - [`DownloadedModules`] - the `.terraform/modules/modules.json` manifest
//! - [`package_name`] - derive a package identifier from a registry source
//! - [`ModuleLoader`] - read the variables and outputs a module declares

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod module;
mod source;

pub use error::{Error, Result};
pub use manifest::{DownloadedModule, DownloadedModules, MANIFEST_PATH, filter_registry_modules};
pub use module::{
    HclModuleLoader, ModuleDescription, ModuleLoader, OutputDescription, VariableDescription,
};
pub use source::{KNOWN_PROVIDERS, REGISTRY_PREFIX, package_name};
