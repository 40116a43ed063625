//! Scenario file loading.
//!
//! A scenario is a TOML document describing one [`ParameterSet`]. Omitted
//! keys keep their initial values, and the loaded set is clamped into the
//! domains the interactive controls allow.
//!
//! ```toml
//! angle = 30
//! mass = 10
//! mu = 0.3
//! tension = 20
//! tension_enabled = true
//! show_mass = true
//! motion_direction = "up"
//! ```

use std::{
    fs, io,
    ops::Range,
    path::{Path, PathBuf},
};

use log::{debug, info};
use thiserror::Error;

use incline::params::ParameterSet;

/// Errors raised while loading a scenario file.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Invalid scenario: {message}")]
    Parse {
        path: PathBuf,
        src: String,
        span: Option<Range<usize>>,
        message: String,
    },
}

/// Reads and clamps the scenario at `path`.
///
/// # Errors
///
/// Returns [`ScenarioError::Read`] if the file cannot be read and
/// [`ScenarioError::Parse`] if it is not a valid scenario document.
pub fn load_scenario(path: impl AsRef<Path>) -> Result<ParameterSet, ScenarioError> {
    let path = path.as_ref();
    info!(path = path.display().to_string(); "Loading scenario");

    let src = fs::read_to_string(path).map_err(|source| ScenarioError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_scenario(path, src)
}

fn parse_scenario(path: &Path, src: String) -> Result<ParameterSet, ScenarioError> {
    match toml::from_str::<ParameterSet>(&src) {
        Ok(params) => {
            let params = params.clamped();
            debug!(params:?; "Scenario loaded");
            Ok(params)
        }
        Err(err) => Err(ScenarioError::Parse {
            path: path.to_path_buf(),
            span: err.span(),
            message: err.message().to_string(),
            src,
        }),
    }
}
