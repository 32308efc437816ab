// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - the `--config-dir` argument or a test path
//! 2. **Environment variable** (`ICED_FEEDBACK_CONFIG_DIR`, if non-empty)
//! 3. **Platform default** - via `dirs` crate, with the app name appended

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedFeedback";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_FEEDBACK_CONFIG_DIR";

/// Returns the config directory, preferring `override_path` when given.
///
/// Without an override the platform default is used:
///
/// - Linux: `~/.config/IcedFeedback/`
/// - macOS: `~/Library/Application Support/IcedFeedback/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedFeedback\`
///
/// Returns `None` if the config directory cannot be determined.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let custom = PathBuf::from("/tmp/feedback-test-config");
        assert_eq!(
            get_app_config_dir_with_override(Some(custom.clone())),
            Some(custom)
        );
    }

    #[test]
    fn default_dir_ends_with_app_name_when_env_unset() {
        if std::env::var(ENV_CONFIG_DIR).is_ok() {
            return;
        }
        if let Some(path) = get_app_config_dir_with_override(None) {
            assert!(path.ends_with(APP_NAME));
        }
    }
}
