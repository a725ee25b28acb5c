// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Both the config directory (`settings.toml`) and the data directory
//! (`state.cbor`, fallback report location) resolve the same way:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`CKD_LENS_DATA_DIR`, `CKD_LENS_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate, with the application name appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "CKDLens";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "CKD_LENS_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "CKD_LENS_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` and `--config-dir` values.
///
/// Call once at startup, before anything resolves a path. Later calls are
/// ignored.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let data_set = CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_ok();
    let config_set = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok();
    if !(data_set && config_set) {
        tracing::warn!("directory overrides were already initialized; ignoring");
    }
}

/// Returns the application data directory.
///
/// Platform defaults:
/// - Linux: `~/.local/share/CKDLens/`
/// - macOS: `~/Library/Application Support/CKDLens/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\CKDLens\`
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        CLI_DATA_DIR.get().and_then(Clone::clone),
        ENV_DATA_DIR,
        dirs::data_dir,
    )
}

/// Returns the application config directory.
///
/// Platform defaults:
/// - Linux: `~/.config/CKDLens/`
/// - macOS: `~/Library/Application Support/CKDLens/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\CKDLens\`
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        CLI_CONFIG_DIR.get().and_then(Clone::clone),
        ENV_CONFIG_DIR,
        dirs::config_dir,
    )
}

fn resolve(
    override_path: Option<PathBuf>,
    cli: Option<PathBuf>,
    env_var: &str,
    platform: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    override_path
        .or(cli)
        .or_else(|| {
            std::env::var_os(env_var)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        })
        .or_else(|| platform().map(|base| base.join(APP_NAME)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests below mutate process environment variables.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const TEST_ENV: &str = "CKD_LENS_TEST_PATHS_DIR";

    fn platform_base() -> Option<PathBuf> {
        Some(PathBuf::from("/platform"))
    }

    #[test]
    fn override_beats_everything() {
        let resolved = resolve(
            Some(PathBuf::from("/override")),
            Some(PathBuf::from("/cli")),
            TEST_ENV,
            platform_base,
        );
        assert_eq!(resolved, Some(PathBuf::from("/override")));
    }

    #[test]
    fn cli_beats_environment() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(TEST_ENV, "/env");

        let resolved = resolve(None, Some(PathBuf::from("/cli")), TEST_ENV, platform_base);
        assert_eq!(resolved, Some(PathBuf::from("/cli")));

        std::env::remove_var(TEST_ENV);
    }

    #[test]
    fn environment_beats_platform_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(TEST_ENV, "/env");

        assert_eq!(
            resolve(None, None, TEST_ENV, platform_base),
            Some(PathBuf::from("/env"))
        );

        std::env::remove_var(TEST_ENV);
    }

    #[test]
    fn empty_environment_value_uses_platform_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(TEST_ENV, "");

        assert_eq!(
            resolve(None, None, TEST_ENV, platform_base),
            Some(PathBuf::from("/platform").join(APP_NAME))
        );

        std::env::remove_var(TEST_ENV);
    }

    #[test]
    fn env_var_overrides_default_data_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/test/data/dir");

        assert_eq!(get_app_data_dir(), Some(PathBuf::from("/test/data/dir")));

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn config_override_is_returned_verbatim() {
        let override_path = PathBuf::from("/custom/config/path");
        assert_eq!(
            get_app_config_dir_with_override(Some(override_path.clone())),
            Some(override_path)
        );
    }
}
