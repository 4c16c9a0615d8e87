// src/utils/env.rs

use log::{debug, info};

/// Loads variables from a `.env` file in the working directory (or a parent).
/// Variables already present in the process environment win. A missing file
/// is not an error.
pub fn load_env() {
    match dotenv::dotenv() {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env file loaded ({}); using process environment.", e),
    }
}

/// Reads `key`, falling back to `default` when unset or unparseable.
pub fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}
