use std::path::{Path, PathBuf};

use clap::{Args, builder::FalseyValueParser};
use eyre::Result;
use tfpkg_manifest::{DownloadedModules, HclModuleLoader};

use super::UnwrapOrExit;
use crate::{
    config::{CONFIG_FILE, ConfigFile, Overrides, Settings},
    language::Language,
    ops::{self, DownloadOptions, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Registry source of the module (e.g. terraform-google-modules/network/google)
    pub source: String,

    /// Module version constraint to download (defaults to latest)
    #[arg(long = "version", value_name = "VERSION", env = "TFPKG_MODULE_VERSION")]
    pub module_version: Option<String>,

    /// Directory to generate packages in [default: generated]
    #[arg(long, env = "TFPKG_GEN_DIR")]
    pub gen_dir: Option<PathBuf>,

    /// Directory to download modules in [default: <system temp>/tfpkg]
    #[arg(long, env = "TFPKG_TMP_DIR")]
    pub tmp_dir: Option<PathBuf>,

    /// Target language [default: go]
    #[arg(short, long, env = "TFPKG_LANGUAGE")]
    pub language: Option<Language>,

    /// Reuse modules already downloaded to the temp directory
    #[arg(long, env = "TFPKG_SKIP_TF_DOWNLOAD", value_parser = FalseyValueParser::new())]
    pub skip_download: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Path to a config file [default: tfpkg.toml, if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let settings = self.settings()?;
        tracing::debug!(?settings, "resolved settings");

        ops::download(&DownloadOptions {
            source: &self.source,
            version: settings.version.as_deref(),
            dir: &settings.tmp_dir,
            skip: self.skip_download,
        })?;

        let manifest = DownloadedModules::from_terraform_dir(&settings.tmp_dir).unwrap_or_exit();
        let codegen = settings.language.generator();
        let report = ops::generate(
            &manifest,
            codegen.as_ref(),
            &HclModuleLoader,
            GenerateOptions {
                working_dir: &settings.tmp_dir,
                gen_dir: &settings.gen_dir,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn settings(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => ConfigFile::load(path, true)?,
            None => ConfigFile::load(Path::new(CONFIG_FILE), false)?,
        };
        Ok(Settings::resolve(
            file,
            Overrides {
                gen_dir: self.gen_dir.clone(),
                tmp_dir: self.tmp_dir.clone(),
                language: self.language,
                version: self.module_version.clone(),
            },
        ))
    }
}
