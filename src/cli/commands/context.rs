use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use colored::Colorize;
use glob::Pattern;

use crate::{
    cli::args::CommonArgs,
    config::{Config, ConfigLoadResult, load_config},
};

/// Settings for one check run, after merging CLI flags over the config file.
///
/// Precedence is CLI flag (or its env var) > `.vpcheckrc.json` > built-in
/// default. Relative paths are taken relative to the working directory.
pub struct CheckContext {
    pub config: Config,
    /// Config file in effect, `None` when running on defaults.
    pub config_path: Option<PathBuf>,
    pub content_root: PathBuf,
    pub ignores: Vec<Pattern>,
    pub verbose: bool,
}

impl CheckContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Self::load(&cwd, common)
    }

    /// Like [`CheckContext::new`], searching for the config file from `start_dir`.
    pub fn load(start_dir: &Path, common: &CommonArgs) -> Result<Self> {
        let ConfigLoadResult { config, path } = load_config(start_dir)?;
        let ignores = config.ignore_patterns()?;

        if common.verbose {
            match &path {
                Some(path) => eprintln!("{} using {}", "note:".bold(), path.display()),
                None => eprintln!("{} no config file found, using defaults", "note:".bold()),
            }
        }

        let content_root = pick(common.content_root.as_ref(), &config.content_root);

        Ok(Self {
            config,
            config_path: path,
            content_root,
            ignores,
            verbose: common.verbose,
        })
    }

    pub fn sidebar(&self, flag: Option<&PathBuf>) -> PathBuf {
        pick(flag, &self.config.sidebar)
    }

    pub fn nav(&self, flag: Option<&PathBuf>) -> PathBuf {
        pick(flag, &self.config.nav)
    }

    pub fn public_root(&self, flag: Option<&PathBuf>) -> PathBuf {
        pick(flag, &self.config.public_root)
    }
}

fn pick(flag: Option<&PathBuf>, configured: &str) -> PathBuf {
    flag.cloned().unwrap_or_else(|| PathBuf::from(configured))
}
