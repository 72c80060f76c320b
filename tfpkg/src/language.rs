//! Unified language dispatch.

use std::fmt;

use serde::Deserialize;
use tfpkg_codegen::LanguageCodegen;
use tfpkg_codegen_go::Generator as GoGenerator;
use tfpkg_codegen_rust::Generator as RustGenerator;

/// Target language for generated packages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Go,
    Rust,
}

impl Language {
    /// Create a generator for this language.
    pub fn generator(self) -> Box<dyn LanguageCodegen> {
        match self {
            Language::Go => Box::new(GoGenerator::new()),
            Language::Rust => Box::new(RustGenerator::new()),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Go => write!(f, "go"),
            Language::Rust => write!(f, "rust"),
        }
    }
}
