use std::fs;
use std::path::Path;

use crate::constants::{CONFIG_FILENAME, PYPROJECT_FILENAME};

use super::models::{Config, PyProject};

pub(super) fn load_from_path(path: &Path) -> Config {
    let mut current = path.to_path_buf();
    if current.is_file() {
        current.pop();
    }

    loop {
        let kwlint_toml = current.join(CONFIG_FILENAME);
        if kwlint_toml.exists() {
            if let Ok(content) = fs::read_to_string(&kwlint_toml) {
                if let Ok(mut config) = toml::from_str::<Config>(&content) {
                    config.config_file_path = Some(kwlint_toml);
                    return config;
                }
            }
        }

        let pyproject_toml = current.join(PYPROJECT_FILENAME);
        if pyproject_toml.exists() {
            if let Ok(content) = fs::read_to_string(&pyproject_toml) {
                if let Ok(pyproject) = toml::from_str::<PyProject>(&content) {
                    return Config {
                        kwlint: pyproject.tool.kwlint,
                        config_file_path: Some(pyproject_toml),
                    };
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    Config::default()
}
