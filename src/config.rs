use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::error::{NdftError, Result};

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Fourier transform (nDCT / nDST) of nonuniformly sampled t<TAB>f(t) data"
)]
pub struct Cli {
    /// Input file; a file dialog opens when omitted
    pub input: Option<PathBuf>,

    /// Evaluate at the frequencies listed in this file instead of 1/t reversed
    #[arg(long, value_name = "FILE")]
    pub grid: Option<PathBuf>,

    /// Write the _DCT.pef / _DST.pef files here instead of next to the input
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// JSON run configuration; command line flags take precedence
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Open the spectrum viewer after the run
    #[arg(long)]
    pub view: bool,
}

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// How the frequency grid is obtained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridSource {
    /// `w[i] = 1 / t[i]`, reversed.
    #[default]
    Reciprocal,
    /// One frequency per line.
    File(PathBuf),
}

/// ```json
/// { "grid": { "file": "omega.txt" }, "output_dir": "out", "view": false }
/// ```
/// Every field is optional. Relative paths are resolved against the
/// directory holding the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub grid: GridSource,
    pub output_dir: Option<PathBuf>,
    pub view: bool,
}

impl RunConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| NdftError::io(path, e))?;
        let config = Self::from_json(&text).map_err(|source| NdftError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.relative_to(base))
    }

    pub fn from_json(text: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    fn relative_to(mut self, base: &Path) -> Self {
        if let GridSource::File(p) = &mut self.grid {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        }
        if let Some(dir) = &mut self.output_dir {
            if dir.is_relative() {
                *dir = base.join(&*dir);
            }
        }
        self
    }

    /// Config file (if any) overlaid with the command line flags.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(grid) = &cli.grid {
            config.grid = GridSource::File(grid.clone());
        }
        if let Some(dir) = &cli.output_dir {
            config.output_dir = Some(dir.clone());
        }
        config.view |= cli.view;

        log::debug!(
            "Resolved run config: {}",
            serde_json::to_string(&config).unwrap_or_default()
        );
        Ok(config)
    }
}
