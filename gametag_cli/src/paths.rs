//! Configuration path lookup for the gametag CLI

use std::path::PathBuf;

/// The name of the application directory used across all platforms
const APP_DIR: &str = "gametag";

/// The name of the configuration file
const CONFIG_FILE: &str = "config.toml";

/// Returns the path to the configuration directory
///
/// Honors `XDG_CONFIG_HOME` when set, then falls back to the platform
/// configuration directory (`~/.config/gametag`, `%APPDATA%/gametag`), and
/// finally to `.gametag` in the current directory.
pub fn get_config_dir() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg).join(APP_DIR);
    }

    dirs::config_dir()
        .map(|d| d.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(".gametag"))
}

/// Returns the path to the configuration file
pub fn get_config_path() -> PathBuf {
    get_config_dir().join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_is_in_config_dir() {
        let config_path = get_config_path();
        let config_dir = get_config_dir();

        assert!(
            config_path.starts_with(&config_dir),
            "Config path {} should be under config dir {}",
            config_path.display(),
            config_dir.display()
        );
    }

    #[test]
    fn test_config_dir_uses_app_name() {
        let config_dir = get_config_dir();
        assert!(
            config_dir.to_string_lossy().contains("gametag"),
            "Config dir should contain 'gametag': {}",
            config_dir.display()
        );
    }

    #[test]
    fn test_config_file_name() {
        assert_eq!(
            get_config_path().file_name().and_then(|n| n.to_str()),
            Some(CONFIG_FILE)
        );
    }
}
