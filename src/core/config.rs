//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars.
//!
//! Config lives at `~/.grimoire/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! A broken config is never fatal — the shell falls back to defaults and
//! logs a warning. The defaults reproduce the stock behavior exactly:
//! rules read from `./rules.txt`, one splash line per 100 ms, magenta
//! borders.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GrimoireConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub rules_file: Option<String>,
    pub splash_delay_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Border accent color name ("magenta", "cyan", "#d787ff", ...).
    pub accent: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_RULES_FILE: &str = "rules.txt";
pub const DEFAULT_SPLASH_DELAY_MS: u64 = 100;
pub const DEFAULT_ACCENT: &str = "magenta";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub rules_path: PathBuf,
    pub splash_delay: Duration,
    pub accent: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.grimoire/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".grimoire").join("config.toml"))
}

/// Load config from `~/.grimoire/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `GrimoireConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<GrimoireConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(GrimoireConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(GrimoireConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: GrimoireConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r##"# Grimoire Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars.

# [general]
# rules_file = "rules.txt"     # Path to the rules text, relative to the cwd
# splash_delay_ms = 100        # Delay between revealed splash lines

# [theme]
# accent = "magenta"           # Border color ("cyan", "yellow", "#d787ff", ...)
"##;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Rules text
// ============================================================================

/// Read the rules text shown on the rules page.
///
/// Failure here is fatal at startup: the caller bails out before the
/// terminal is initialized, so the error is printed to a normal screen.
pub fn read_rules(path: &Path) -> std::io::Result<String> {
    fs::read_to_string(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("failed to read rules file {}: {}", path.display(), e),
        )
    })
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars.
pub fn resolve(config: &GrimoireConfig) -> ResolvedConfig {
    // Rules file: env → config → default
    let rules_file = std::env::var("GRIMOIRE_RULES_FILE")
        .ok()
        .or_else(|| config.general.rules_file.clone())
        .unwrap_or_else(|| DEFAULT_RULES_FILE.to_string());

    // Accent color: env → config → default
    let accent = std::env::var("GRIMOIRE_ACCENT")
        .ok()
        .or_else(|| config.theme.accent.clone())
        .unwrap_or_else(|| DEFAULT_ACCENT.to_string());

    let splash_delay_ms = config
        .general
        .splash_delay_ms
        .unwrap_or(DEFAULT_SPLASH_DELAY_MS);

    ResolvedConfig {
        rules_path: PathBuf::from(rules_file),
        splash_delay: Duration::from_millis(splash_delay_ms),
        accent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = GrimoireConfig::default();
        assert!(config.general.rules_file.is_none());
        assert!(config.general.splash_delay_ms.is_none());
        assert!(config.theme.accent.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = GrimoireConfig::default();
        let resolved = resolve(&config);
        assert_eq!(resolved.rules_path, PathBuf::from(DEFAULT_RULES_FILE));
        assert_eq!(resolved.splash_delay, Duration::from_millis(100));
        assert_eq!(resolved.accent, "magenta");
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = GrimoireConfig {
            general: GeneralConfig {
                rules_file: Some("handbook.txt".to_string()),
                splash_delay_ms: Some(40),
            },
            theme: ThemeConfig {
                accent: Some("cyan".to_string()),
            },
        };
        let resolved = resolve(&config);
        assert_eq!(resolved.rules_path, PathBuf::from("handbook.txt"));
        assert_eq!(resolved.splash_delay, Duration::from_millis(40));
        assert_eq!(resolved.accent, "cyan");
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
rules_file = "docs/rules.txt"
splash_delay_ms = 50

[theme]
accent = "yellow"
"#;
        let config: GrimoireConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.rules_file.as_deref(), Some("docs/rules.txt"));
        assert_eq!(config.general.splash_delay_ms, Some(50));
        assert_eq!(config.theme.accent.as_deref(), Some("yellow"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[theme]
accent = "blue"
"#;
        let config: GrimoireConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.theme.accent.as_deref(), Some("blue"));
        assert!(config.general.rules_file.is_none());
        assert!(config.general.splash_delay_ms.is_none());
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let result = toml::from_str::<GrimoireConfig>("[general]\nsplash_delay_ms = \"soon\"");
        assert!(result.is_err());
    }
}
