//! Config-file source discovery.
//!
//! Source order: explicit path > local file > global file > built-in defaults.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

const CONFIG_FILE_NAME: &str = "termcue.toml";
const CONFIG_DIR_NAME: &str = "termcue";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ConfigSource {
    /// Config loaded from explicit `--config` path.
    Explicit(PathBuf),
    /// Config loaded from `./termcue.toml`.
    Local,
    /// Config loaded from the per-user config directory.
    Global(PathBuf),
    /// No file found; runtime defaults were used.
    BuiltInDefaults,
}

/// Read config text from the highest-precedence available source.
pub(super) fn read_config_text<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<(String, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    // An explicit path must exist; implicit ones are optional.
    if let Some(p) = path_override {
        let path = PathBuf::from(p);
        let text = read_file(&path)?;
        return Ok((text, ConfigSource::Explicit(path)));
    }

    if let Ok(text) = read_file(Path::new(CONFIG_FILE_NAME)) {
        return Ok((text, ConfigSource::Local));
    }
    if let Some(dir) = config_root() {
        let global = dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        if let Ok(text) = read_file(&global) {
            return Ok((text, ConfigSource::Global(global)));
        }
    }

    Ok((String::new(), ConfigSource::BuiltInDefaults))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn not_found(_: &Path) -> Result<String, io::Error> {
        Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
    }

    fn no_root() -> Option<PathBuf> {
        None
    }

    #[test]
    fn falls_back_to_defaults() {
        let (text, source) = read_config_text(None, &not_found, &no_root).unwrap();
        assert!(text.is_empty());
        assert_eq!(source, ConfigSource::BuiltInDefaults);
    }

    #[test]
    fn explicit_path_is_reported() {
        let read = |path: &Path| Ok::<_, io::Error>(format!("# {}", path.display()));
        let (text, source) = read_config_text(Some("custom.toml"), &read, &no_root).unwrap();
        assert_eq!(text, "# custom.toml");
        assert_eq!(source, ConfigSource::Explicit(PathBuf::from("custom.toml")));
    }
}
