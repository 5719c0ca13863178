use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".fbinitrc.json";

/// Sentinel output path meaning standard output.
pub const STDOUT_SENTINEL: &str = "-";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Generated fluxbox(1) man page.
    #[serde(default = "default_manpage")]
    pub manpage: String,
    /// Root of the C/C++ source tree.
    #[serde(default = "default_src_root")]
    pub src_root: String,
    /// Output path, or `-` for stdout.
    #[serde(default = "default_out")]
    pub out: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Globs matched against paths relative to `src_root`.
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    /// Extra supplemental resources, layered over the built-in table.
    #[serde(default)]
    pub extra_resources: BTreeMap<String, String>,
}

fn default_manpage() -> String {
    "doc/fluxbox.1".to_string()
}

fn default_src_root() -> String {
    "src".to_string()
}

fn default_out() -> String {
    "doc/fluxbox-init-resources.tsv".to_string()
}

fn default_extensions() -> Vec<String> {
    ["c", "cc", "cpp", "h", "hh", "hpp"].map(String::from).to_vec()
}

fn default_ignores() -> Vec<String> {
    ["tests/**", "wayland/protocol/**"]
        .map(String::from)
        .to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manpage: default_manpage(),
            src_root: default_src_root(),
            out: default_out(),
            extensions: default_extensions(),
            ignores: default_ignores(),
            extra_resources: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        for ext in &self.extensions {
            if ext.is_empty() || ext.starts_with('.') {
                anyhow::bail!(
                    "Invalid extension in 'extensions': \"{}\" (use e.g. \"cc\", without the dot)",
                    ext
                );
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was loaded from; `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
