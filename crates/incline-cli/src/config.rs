//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs, io,
    ops::Range,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use incline::config::AppConfig;

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {message}")]
    Parse {
        path: PathBuf,
        src: String,
        span: Option<Range<usize>>,
        message: String,
    },

    #[error("Missing configuration file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Failed to read configuration file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (incline/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
/// - The configured background color is not a valid CSS color
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ConfigError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("incline/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "incline", "incline") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load and validate configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()));
    }

    let src = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config: AppConfig = match toml::from_str(&src) {
        Ok(config) => config,
        Err(err) => {
            return Err(ConfigError::Parse {
                path: path.to_path_buf(),
                span: err.span(),
                message: err.message().to_string(),
                src,
            });
        }
    };

    config
        .style()
        .background_color()
        .map_err(ConfigError::Validation)?;

    debug!(variant:? = config.layout().variant(); "Configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use incline::config::DiagramVariant;

    use super::*;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_explicit_config() {
        let (_dir, path) = write_config(
            r#"
            [layout]
            variant = "compact"
            collision_avoidance = true

            [style]
            background_color = "white"
            "#,
        );

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.layout().variant(), DiagramVariant::Compact);
        assert!(config.layout().collision_avoidance());
    }

    #[test]
    fn test_missing_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::MissingFile(_))
        ));
    }

    #[test]
    fn test_parse_error_keeps_span() {
        let (_dir, path) = write_config("[layout]\nvariant = \"huge\"\n");

        match load_config(Some(&path)) {
            Err(ConfigError::Parse { span, src, .. }) => {
                let span = span.expect("span reported");
                assert!(src[span].contains("huge"));
            }
            other => panic!("Expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_background_color() {
        let (_dir, path) = write_config("[style]\nbackground_color = \"not-a-color\"\n");

        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::Validation(_))
        ));
    }
}
