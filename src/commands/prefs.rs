//! Prefs command - read and change preferences

use crate::{
    TillrError,
    cli::PrefsCommands,
    config::{KEYS, TillrConfig},
};

type Result<T> = std::result::Result<T, TillrError>;

/// Execute a preferences command
///
/// # Errors
/// Returns an error for unknown keys, invalid values, or if the config
/// file cannot be written
pub fn execute(config: TillrConfig, command: &PrefsCommands, quiet: bool) -> Result<()> {
    let mut config = config;
    for line in apply(&mut config, command)? {
        if !quiet || !matches!(command, PrefsCommands::Set { .. } | PrefsCommands::Reset) {
            println!("{line}");
        }
    }

    if !matches!(command, PrefsCommands::Get { .. }) {
        config.save()?;
    }
    Ok(())
}

/// Apply a preferences command to `config`, returning the lines to print
///
/// # Errors
/// Returns `TillrError::InvalidInput` for malformed settings and
/// `TillrError::ConfigError` for unknown keys or bad values
pub fn apply(config: &mut TillrConfig, command: &PrefsCommands) -> Result<Vec<String>> {
    match command {
        PrefsCommands::Get { key: Some(key) } => {
            let value = config.get(key).ok_or_else(|| {
                TillrError::InvalidInput(format!(
                    "Unknown preference: '{key}'. Available keys: {}",
                    KEYS.join(", ")
                ))
            })?;
            Ok(vec![value])
        }
        PrefsCommands::Get { key: None } => Ok(KEYS
            .iter()
            .filter_map(|key| config.get(key).map(|value| format!("{key} = {value:?}")))
            .collect()),
        PrefsCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                TillrError::InvalidInput("Invalid format. Use: tillr prefs set key=value".into())
            })?;
            let key = key.trim();
            config.set(key, value.trim())?;
            let shown = config.get(key).unwrap_or_default();
            Ok(vec![format!("Set {key} = {shown:?}")])
        }
        PrefsCommands::Reset => {
            config.reset_all();
            Ok(vec!["Preferences reset to defaults".to_string()])
        }
    }
}
