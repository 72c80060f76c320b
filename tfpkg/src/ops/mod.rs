//! Core operations.
//!
//! This module contains the business logic for tfpkg commands,
//! separated from CLI argument parsing and output rendering.

pub mod download;
pub mod generate;

pub use download::{DownloadOptions, download};
pub use generate::{GenerateOptions, generate};
