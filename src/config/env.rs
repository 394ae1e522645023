//! Environment overrides for UI settings.

use crate::error::ConfigError;

use super::{Config, Toggle};

pub(super) fn apply_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(value) = env_lookup("TERMCUE_UI") {
        config.ui.enabled = parse_switch("TERMCUE_UI", &value)?;
    }
    if let Some(value) = env_lookup("TERMCUE_COLOR") {
        config.ui.color = parse_toggle("TERMCUE_COLOR", &value)?;
    } else if env_lookup("NO_COLOR").is_some_and(|value| !value.is_empty()) {
        // https://no-color.org: any non-empty value disables color.
        config.ui.color = Toggle::Never;
    }
    if let Some(value) = env_lookup("TERMCUE_EMOJI") {
        config.ui.emoji = parse_toggle("TERMCUE_EMOJI", &value)?;
    }
    Ok(())
}

fn parse_switch(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::Invalid(format!(
            "invalid {name} value `{value}`: expected on or off"
        ))),
    }
}

fn parse_toggle(name: &str, value: &str) -> Result<Toggle, ConfigError> {
    value
        .parse::<Toggle>()
        .map_err(|msg| ConfigError::Invalid(format!("invalid {name} value: {msg}")))
}
