use crate::error::{CliError, Result as CliResult};

use std::path::Path;

use a0_provider::{DesiredState, ResourceType};
use serde_json::Value;

const REDACTED: &str = "(sensitive)";

/// Load a desired-state file. `.json` files are JSON, anything else TOML.
pub(crate) fn load_state(path: &Path) -> CliResult<DesiredState> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| CliError::state_file(path.to_path_buf(), e.to_string()))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&contents)
            .map_err(|e| CliError::state_file(path.to_path_buf(), e.to_string()))
    } else {
        toml::from_str(&contents)
            .map_err(|e| CliError::state_file(path.to_path_buf(), e.to_string()))
    }
}

/// State as printed: sensitive attributes are masked.
pub(crate) fn state_output(state: &DesiredState) -> CliResult<Value> {
    let mut value = serde_json::to_value(state)?;

    if let Value::Object(ref mut attributes) = value {
        for attribute in ResourceType::User.schema().iter().filter(|a| a.sensitive) {
            if let Some(slot) = attributes.get_mut(attribute.name) {
                *slot = Value::String(REDACTED.to_string());
            }
        }
    }

    Ok(value)
}

/// Attribute schema of the resource type named `name`
pub(crate) fn schema_output(name: &str) -> CliResult<Value> {
    let resource_type =
        ResourceType::from_name(name).ok_or_else(|| CliError::unknown_resource_type(name))?;
    Ok(serde_json::to_value(resource_type.schema())?)
}
