mod logging;

use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Env vars read by `Config::load`, cleared so the host environment can't leak in
const OVERRIDE_VARS: [&str; 8] = [
    "A0_DOMAIN",
    "A0_API_TOKEN",
    "A0_CLIENT_ID",
    "A0_CLIENT_SECRET",
    "A0_TIMEOUT_SECS",
    "A0_LOG_LEVEL",
    "A0_LOG_COLORED",
    "A0_LOG_FILE",
];

/// Create a temp config directory, set A0_CONFIG_DIR and clear overrides
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let mut guards = vec![EnvGuard::set("A0_CONFIG_DIR", temp.path().to_str().unwrap())];
    guards.extend(OVERRIDE_VARS.into_iter().map(EnvGuard::remove));
    (temp, guards)
}
