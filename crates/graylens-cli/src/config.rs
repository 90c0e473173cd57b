//! Configuration file support for graylens.
//!
//! Supports TOML configuration from:
//! - XDG config: `~/.config/graylens/config.toml` (lowest priority)
//! - Project-local: `.graylens.toml` (searched up directory tree)
//! - CLI flags (highest priority, applied separately)

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

/// Project-local config file name.
const PROJECT_FILE: &str = ".graylens.toml";

/// Top-level configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General options.
    pub general: GeneralConfig,
    /// Export settings.
    pub export: ExportConfig,
    /// Terminal display settings.
    pub display: DisplayConfig,
}

/// General configuration options.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Start in the equalized view.
    pub equalize: Option<bool>,
}

/// Export configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Destination of the `s` key export.
    pub path: Option<PathBuf>,
}

/// Display configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Optional font asset; when set but missing, annotations are disabled.
    pub font: Option<PathBuf>,
    /// Draw mean/stddev annotations.
    pub annotations: Option<bool>,
    /// Delay after each redraw, in milliseconds.
    pub frame_delay_ms: Option<u64>,
    /// Histogram height in text rows.
    pub histogram_rows: Option<usize>,
    /// Image preview width in characters.
    pub preview_columns: Option<u32>,
}

impl AppConfig {
    /// Load configuration from XDG and project-local files.
    ///
    /// Priority (lowest to highest):
    /// 1. XDG config: `~/.config/graylens/config.toml`
    /// 2. Project-local: `.graylens.toml` (searched up from cwd)
    ///
    /// Missing files are silently ignored. Out-of-range values are reported
    /// as warnings and fall back to their defaults.
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(xdg_path) = xdg_config_path() {
            if xdg_path.exists() {
                info!("Loading XDG config: {}", xdg_path.display());
                if let Some(xdg_config) = load_file(&xdg_path) {
                    config = xdg_config;
                }
            } else {
                debug!("XDG config not found: {}", xdg_path.display());
            }
        }

        if let Some(project_path) = find_project_config() {
            info!("Loading project config: {}", project_path.display());
            if let Some(project_config) = load_file(&project_path) {
                config.merge(project_config);
            }
        }

        for problem in config.sanitize() {
            eprintln!("warning: {problem}; using the default");
        }

        config
    }

    /// Reset out-of-range values so their defaults apply.
    ///
    /// Returns one message per discarded value.
    fn sanitize(&mut self) -> Vec<String> {
        let mut problems = Vec::new();

        if let Some(ms) = self.display.frame_delay_ms.filter(|ms| *ms > 1000) {
            problems.push(format!("display.frame_delay_ms must be 0-1000, got {ms}"));
            self.display.frame_delay_ms = None;
        }
        if let Some(rows) = self
            .display
            .histogram_rows
            .filter(|rows| !(1..=64).contains(rows))
        {
            problems.push(format!("display.histogram_rows must be 1-64, got {rows}"));
            self.display.histogram_rows = None;
        }
        if let Some(cols) = self
            .display
            .preview_columns
            .filter(|cols| !(1..=512).contains(cols))
        {
            problems.push(format!("display.preview_columns must be 1-512, got {cols}"));
            self.display.preview_columns = None;
        }
        if self
            .export
            .path
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            problems.push("export.path must not be empty".to_string());
            self.export.path = None;
        }

        problems
    }

    /// Merge another config into this one.
    /// Values from `other` override values in `self` when present.
    fn merge(&mut self, other: Self) {
        // General
        self.general.equalize = other.general.equalize.or(self.general.equalize);

        // Export
        self.export.path = other.export.path.or_else(|| self.export.path.take());

        // Display
        self.display.font = other.display.font.or_else(|| self.display.font.take());
        self.display.annotations = other.display.annotations.or(self.display.annotations);
        self.display.frame_delay_ms = other
            .display
            .frame_delay_ms
            .or(self.display.frame_delay_ms);
        self.display.histogram_rows = other
            .display
            .histogram_rows
            .or(self.display.histogram_rows);
        self.display.preview_columns = other
            .display
            .preview_columns
            .or(self.display.preview_columns);
    }
}

/// Get the XDG config file path.
fn xdg_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("graylens").join("config.toml"))
}

/// Find project-local config by searching up from current directory.
fn find_project_config() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_in_parents(&cwd)
}

/// Search for `.graylens.toml` in the given directory and its parents.
fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);

    while let Some(dir) = current {
        let config_path = dir.join(PROJECT_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        current = dir.parent();
    }

    None
}

/// Load and parse a TOML config file.
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to read config file {}: {}", path.display(), e);
            return None;
        }
    };

    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Failed to parse config file {}: {}", path.display(), e);
            None
        }
    }
}
