use crate::error::{AssessError, Result};
use crate::types::config::AppConfig;
use std::path::{Path, PathBuf};
use toml::{Table, Value};

pub const DEFAULT_CONFIG_FILE: &str = "sustainassess.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".sustainassess/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/sustainassess/config.toml";

/// Loads config for assessments living in `root`; defaults when no layer exists.
pub fn load_config(root: &Path) -> Result<AppConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(root: &Path, global_path: Option<&Path>) -> Result<AppConfig> {
    let mut merged = Table::new();
    for path in layer_paths(root, global_path) {
        if !path.is_file() {
            continue;
        }
        tracing::debug!(path = %path.display(), "applying config layer");
        overlay(&mut merged, parse_layer(&path)?);
    }

    let cfg: AppConfig = Value::Table(merged)
        .try_into()
        .map_err(|e: toml::de::Error| AssessError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Lowest precedence first: global, then the project file, then the local override.
fn layer_paths(root: &Path, global_path: Option<&Path>) -> Vec<PathBuf> {
    global_path
        .map(Path::to_path_buf)
        .into_iter()
        .chain([root.join(DEFAULT_CONFIG_FILE), root.join(DEFAULT_LOCAL_FILE)])
        .collect()
}

fn parse_layer(path: &Path) -> Result<Table> {
    let content = std::fs::read_to_string(path)?;
    content
        .parse::<Table>()
        .map_err(|e| AssessError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Nested tables merge key by key; any other value replaces what was there.
fn overlay(base: &mut Table, layer: Table) {
    for (key, value) in layer {
        match value {
            Value::Table(nested) => match base.get_mut(&key) {
                Some(Value::Table(existing)) => overlay(existing, nested),
                _ => {
                    base.insert(key, Value::Table(nested));
                }
            },
            value => {
                base.insert(key, value);
            }
        }
    }
}
