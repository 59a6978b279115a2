// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--config-dir`, `--library`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`ICED_REEL_CONFIG_DIR`, `ICED_REEL_LIBRARY_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! # Usage
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.config_dir, flags.library_dir);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "IcedReel";

/// Environment variable overriding the configuration directory.
pub const ENV_CONFIG_DIR: &str = "ICED_REEL_CONFIG_DIR";

/// Environment variable overriding the media library root.
pub const ENV_LIBRARY_DIR: &str = "ICED_REEL_LIBRARY_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

static CLI_LIBRARY_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the directories passed on the command line.
///
/// Only the first call has an effect.
pub fn init_cli_overrides(config_dir: Option<String>, library_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err()
        || CLI_LIBRARY_DIR.set(library_dir.map(PathBuf::from)).is_err()
    {
        tracing::warn!("CLI path overrides were already initialized");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn get_cli_library_dir() -> Option<PathBuf> {
    CLI_LIBRARY_DIR.get().and_then(Clone::clone)
}

fn env_dir(name: &str) -> Option<PathBuf> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => None,
    }
}

#[must_use]
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

#[must_use]
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override (for tests)
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: CLI argument
    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    // Priority 3: Environment variable
    if let Some(path) = env_dir(ENV_CONFIG_DIR) {
        return Some(path);
    }

    // Priority 4: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Resolves the media library root.
///
/// `configured` is the `[library] root` setting; it ranks below CLI and
/// environment overrides. The platform video directory is the fallback.
#[must_use]
pub fn get_library_dir(configured: Option<PathBuf>) -> Option<PathBuf> {
    get_cli_library_dir()
        .or_else(|| env_dir(ENV_LIBRARY_DIR))
        .or(configured)
        .or_else(dirs::video_dir)
}
