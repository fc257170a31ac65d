
use std::env;

use tempfile::TempDir;

/// RAII guard that sets an environment variable and restores the prior
/// value (or removes the variable) on drop. Tests touching the process
/// environment must also be marked #[serial].
pub(crate) struct ScopedEnv {
    key: String,
    saved: Option<String>,
}

impl ScopedEnv {
    pub(crate) fn set(key: &str, value: &str) -> Self {
        let saved = env::var(key).ok();
        unsafe {
            env::set_var(key, value);
        }
        Self {
            key: key.to_string(),
            saved,
        }
    }

    pub(crate) fn clear(key: &str) -> Self {
        let saved = env::var(key).ok();
        unsafe {
            env::remove_var(key);
        }
        Self {
            key: key.to_string(),
            saved,
        }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        unsafe {
            match self.saved.take() {
                Some(val) => env::set_var(&self.key, val),
                None => env::remove_var(&self.key),
            }
        }
    }
}

/// Point FSW_CONFIG_DIR at a fresh temp directory so tests never read a
/// developer's real config.toml.
pub(crate) fn temp_config_dir() -> (TempDir, ScopedEnv) {
    let temp = TempDir::new().unwrap();
    let guard = ScopedEnv::set("FSW_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Write a config.toml into the temp config dir.
pub(crate) fn write_config(temp: &TempDir, contents: &str) {
    std::fs::write(temp.path().join("config.toml"), contents).unwrap();
}
