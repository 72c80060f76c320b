//! Writing rendered packages to `<gen_dir>/<id>/<id>.<ext>`.

use std::path::{Path, PathBuf};

use eyre::Result;
use tfpkg_core::{File, FileRules, GENERATED_HEADER, GeneratedFile};

use crate::{LanguageCodegen, PackageSpec};

/// A package's source file, rendered on demand.
pub struct PackageFile<'a> {
    codegen: &'a dyn LanguageCodegen,
    package: &'a PackageSpec,
}

impl<'a> PackageFile<'a> {
    pub fn new(codegen: &'a dyn LanguageCodegen, package: &'a PackageSpec) -> Self {
        Self { codegen, package }
    }

    /// Path relative to the generation directory.
    pub fn relative_path(&self) -> PathBuf {
        let name = &self.package.identifier;
        PathBuf::from(name).join(format!("{}.{}", name, self.codegen.file_extension()))
    }
}

impl GeneratedFile for PackageFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite().with_header(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        self.codegen.render_package(self.package)
    }
}

/// Writes packages for one language into a generation directory.
pub struct PackageWriter<'a> {
    codegen: &'a dyn LanguageCodegen,
    gen_dir: PathBuf,
}

impl<'a> PackageWriter<'a> {
    pub fn new(codegen: &'a dyn LanguageCodegen, gen_dir: impl Into<PathBuf>) -> Self {
        Self {
            codegen,
            gen_dir: gen_dir.into(),
        }
    }

    /// Render a package without writing it; the path is relative to the
    /// generation directory.
    pub fn preview(&self, package: &PackageSpec) -> File {
        let file = PackageFile::new(self.codegen, package);
        File::new(file.relative_path(), file.contents())
    }

    /// Write a package, replacing any previous version. Returns the written path.
    pub fn write(&self, package: &PackageSpec) -> Result<PathBuf> {
        let file = PackageFile::new(self.codegen, package);
        let path = file.write(&self.gen_dir)?;
        tracing::info!(
            package = %package.identifier,
            language = self.codegen.language(),
            path = %path.display(),
            "wrote package"
        );
        Ok(path)
    }
}
