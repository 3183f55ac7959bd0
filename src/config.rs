// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

use crate::errors::RestSitesError;
use crate::report::{PositionOrigin, DEFAULT_SEPARATOR};

pub const CONFIG_FILE_NAME: &str = ".restsitesconfig";

// Contents of .restsitesconfig (JSON). Every key is optional, unknown keys are ignored, e.g.
//
// { "position_origin": 1, "case_sensitive": false, "separator": null }
//
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RestSitesConfig {
    pub position_origin: u8,
    pub case_sensitive: bool,
    pub separator: Option<String>,
}

impl Default for RestSitesConfig {
    fn default() -> Self {
        RestSitesConfig {
            position_origin: 0,
            case_sensitive: false,
            separator: Some(String::from(DEFAULT_SEPARATOR)),
        }
    }
}

impl RestSitesConfig {
    pub fn from_json(text: &str) -> Result<Self, RestSitesError> {
        let config: RestSitesConfig =
            serde_json::from_str(text).map_err(|e| RestSitesError::Config(e.to_string()))?;
        config.origin()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, RestSitesError> {
        let text = fs::read_to_string(path).map_err(|e| {
            RestSitesError::Config(format!("Error reading {}: {}", path.display(), e))
        })?;
        Self::from_json(&text).map_err(|e| match e {
            RestSitesError::Config(msg) => {
                RestSitesError::Config(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    pub fn origin(&self) -> Result<PositionOrigin, RestSitesError> {
        match self.position_origin {
            0 => Ok(PositionOrigin::Zero),
            1 => Ok(PositionOrigin::One),
            n => Err(RestSitesError::Config(format!(
                "position_origin must be 0 or 1 (got {})",
                n
            ))),
        }
    }
}

// $HOME first, then the current directory.
pub fn find_config() -> Option<PathBuf> {
    let mut dirs: Vec<PathBuf> = Vec::new();
    if let Ok(home) = std::env::var("HOME") {
        dirs.push(PathBuf::from(home));
    }
    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    find_config_in(&dirs)
}

// First directory that holds a config file wins.
pub fn find_config_in(dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.exists())
}

/// The config file if there is one, else the defaults.
pub fn load_config() -> Result<RestSitesConfig, RestSitesError> {
    match find_config() {
        Some(path) => {
            info!("Reading config from {}", path.display());
            RestSitesConfig::from_file(&path)
        }
        None => Ok(RestSitesConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_empty_object() {
        let cfg = RestSitesConfig::from_json("{}").expect("valid");
        assert_eq!(RestSitesConfig::default(), cfg);
        assert_eq!(PositionOrigin::Zero, cfg.origin().expect("valid origin"));
    }

    #[test]
    fn test_config_all_keys() {
        let cfg = RestSitesConfig::from_json(
            r#"{ "position_origin": 1, "case_sensitive": true, "separator": "====" }"#,
        )
        .expect("valid");
        assert_eq!(PositionOrigin::One, cfg.origin().expect("valid origin"));
        assert!(cfg.case_sensitive);
        assert_eq!(Some(String::from("====")), cfg.separator);
    }

    #[test]
    fn test_config_null_separator() {
        let cfg = RestSitesConfig::from_json(r#"{ "separator": null }"#).expect("valid");
        assert_eq!(None, cfg.separator);
    }

    #[test]
    fn test_config_unknown_keys_ignored() {
        let cfg = RestSitesConfig::from_json(r##"{ "palette": ["#010203"] }"##).expect("valid");
        assert_eq!(RestSitesConfig::default(), cfg);
    }

    #[test]
    fn test_config_bad_origin() {
        let res = RestSitesConfig::from_json(r#"{ "position_origin": 2 }"#);
        assert!(matches!(res, Err(RestSitesError::Config(_))));
    }

    #[test]
    fn test_config_malformed() {
        let res = RestSitesConfig::from_json("{ position_origin: ");
        assert!(matches!(res, Err(RestSitesError::Config(_))));
    }

    #[test]
    fn test_config_from_file() {
        let res = RestSitesConfig::from_file(Path::new("data/restsitesconfig.json"));
        let cfg = res.expect("fixture parses");
        assert_eq!(PositionOrigin::One, cfg.origin().expect("valid origin"));
        assert_eq!(None, cfg.separator);
    }

    #[test]
    fn test_config_missing_file() {
        let res = RestSitesConfig::from_file(Path::new("data/no-such-config"));
        assert!(matches!(res, Err(RestSitesError::Config(_))));
    }

    #[test]
    fn test_find_config_in_first_dir_wins() {
        let home = tempfile::tempdir().expect("temp dir");
        let cwd = tempfile::tempdir().expect("temp dir");
        fs::write(cwd.path().join(CONFIG_FILE_NAME), "{}").expect("write config");
        let dirs = vec![home.path().to_path_buf(), cwd.path().to_path_buf()];
        assert_eq!(Some(cwd.path().join(CONFIG_FILE_NAME)), find_config_in(&dirs));

        fs::write(home.path().join(CONFIG_FILE_NAME), "{}").expect("write config");
        assert_eq!(Some(home.path().join(CONFIG_FILE_NAME)), find_config_in(&dirs));
    }

    #[test]
    fn test_find_config_in_none() {
        let empty = tempfile::tempdir().expect("temp dir");
        assert_eq!(None, find_config_in(&[empty.path().to_path_buf()]));
    }
}
