//! Configuration file loading for stockpack.
//!
//! Discovers and loads `stockpack.toml` from a root directory. Every field is optional; a missing
//! file yields the defaults.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use serde::Deserialize;
use stockpack_types::UnitState;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "stockpack.toml";

/// Top-level configuration from stockpack.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StockpackConfig {
    /// Package construction settings.
    pub package: PackageConfig,
}

/// `[package]` section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PackageConfig {
    /// State recorded by `Package::add` when the caller does not pass one.
    pub default_state: UnitState,
}

/// Path of `stockpack.toml` under `root`, if the file exists.
pub fn discover_config(root: &Utf8Path) -> Option<Utf8PathBuf> {
    let candidate = root.join(CONFIG_FILE_NAME);
    let found = candidate.is_file();
    debug!(path = %candidate, found, "looked for stockpack config");
    found.then_some(candidate)
}

/// Read and parse the config file at `path`.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<StockpackConfig> {
    let raw = fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    let config = parse_config(&raw).with_context(|| format!("load stockpack config {}", path))?;
    debug!(
        path = %path,
        default_state = %config.package.default_state,
        "loaded stockpack config"
    );
    Ok(config)
}

/// Parse stockpack config from TOML text.
///
/// Errors name the `[package]` section when its `default_state` is not a known unit state.
pub fn parse_config(contents: &str) -> anyhow::Result<StockpackConfig> {
    toml::from_str::<StockpackConfig>(contents).map_err(|err| {
        let span = err.span();
        let in_package = span.is_some_and(|span| {
            contents
                .get(..span.start)
                .unwrap_or(contents)
                .lines()
                .rev()
                .find(|line| line.trim_start().starts_with('['))
                .is_some_and(|header| header.trim() == "[package]")
        });
        if in_package {
            anyhow::Error::new(err).context(format!(
                "invalid [package] section: default_state must be one of {}",
                UnitState::ALL.map(UnitState::as_str).join(", ")
            ))
        } else {
            anyhow::Error::new(err).context("invalid stockpack.toml")
        }
    })
}

/// Config under `root`, or the defaults when there is no `stockpack.toml`.
pub fn load_or_default(root: &Utf8Path) -> anyhow::Result<StockpackConfig> {
    discover_config(root)
        .map(|path| load_config(&path))
        .unwrap_or_else(|| Ok(StockpackConfig::default()))
}
