use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Reference document: the default configuration serialized to YAML.
fn default_document() -> AppResult<Value> {
    serde_yaml::to_value(Config::default()).map_err(|e| AppError::Config(e.to_string()))
}

fn read_document(path: &Path) -> AppResult<Value> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
    serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
}

/// Collect dotted keys present in `reference` but absent from `current`.
fn collect_missing(reference: &Mapping, current: &Mapping, prefix: &str, out: &mut Vec<String>) {
    for (key, ref_val) in reference {
        let Some(name) = key.as_str() else { continue };
        let dotted = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}.{name}")
        };

        match (current.get(key), ref_val) {
            (None, _) => out.push(dotted),
            (Some(Value::Mapping(cur)), Value::Mapping(reff)) => {
                collect_missing(reff, cur, &dotted, out)
            }
            _ => {}
        }
    }
}

/// Copy every missing key of `reference` into `current`. Existing values win.
fn fill_missing(reference: &Mapping, current: &mut Mapping) -> bool {
    let mut changed = false;

    for (key, ref_val) in reference {
        match current.get_mut(key) {
            None => {
                current.insert(key.clone(), ref_val.clone());
                changed = true;
            }
            Some(Value::Mapping(cur)) => {
                if let Value::Mapping(reff) = ref_val {
                    changed |= fill_missing(reff, cur);
                }
            }
            Some(_) => {}
        }
    }

    changed
}

/// List configuration keys missing from the file at `path`.
/// A missing file reports nothing: defaults apply in full.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let reference = default_document()?;
    let current = read_document(path)?;

    let mut missing = Vec::new();
    if let (Value::Mapping(reff), Value::Mapping(cur)) = (&reference, &current) {
        collect_missing(reff, cur, "", &mut missing);
    }
    Ok(missing)
}

/// Add missing keys (with default values) to the configuration file.
///   Returns:
///   Ok(true)  → config updated
///   Ok(false) → no change needed
pub fn migrate_config_file(path: &Path) -> AppResult<bool> {
    if !path.exists() {
        info(format!(
            "No configuration file at {}: nothing to migrate.",
            path.display()
        ));
        return Ok(false);
    }

    let reference = default_document()?;
    let mut current = read_document(path)?;

    let changed = match (&reference, &mut current) {
        (Value::Mapping(reff), Value::Mapping(cur)) => fill_missing(reff, cur),
        _ => {
            return Err(AppError::Config(format!(
                "{} is not a YAML mapping",
                path.display()
            )));
        }
    };

    if changed {
        let yaml =
            serde_yaml::to_string(&current).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
        success(format!("Configuration migrated: {}", path.display()));
    } else {
        info("Configuration already up to date.");
    }

    Ok(changed)
}
