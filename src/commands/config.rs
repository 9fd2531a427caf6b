//! `todo-store config` command.

use crate::config::Config;

/// Print the effective configuration as YAML.
///
/// # Errors
///
/// Returns an error string if the configuration cannot be serialized.
pub fn run(config: &Config) -> Result<(), String> {
    let yaml = serde_yaml::to_string(config).map_err(|e| format!("Failed to encode config: {e}"))?;
    print!("{yaml}");
    Ok(())
}
