//! Configuration loader
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If no credential is set there, falls back to loading from file;
//!    any other environment error is returned
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `DOMAINR_CLIENT_ID`: Domainr client ID (direct access)
//! - `DOMAINR_MASHAPE_KEY`: Mashape key (gateway access), used when no
//!   client ID is set
//! - `DOMAINR_BASE_URL`: Optional endpoint override
//! - `DOMAINR_TIMEOUT_SECS`: Optional transport timeout in seconds
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./domainr.json` or `./domainr.toml` (current working directory)
//! 2. `../domainr.json` or `../domainr.toml` (parent directory)
//! 3. Relative to executable location

use std::path::{Path, PathBuf};

use domainr_domain::{AuthMode, ClientConfig, DomainrError, Result};

const ENV_CLIENT_ID: &str = "DOMAINR_CLIENT_ID";
const ENV_MASHAPE_KEY: &str = "DOMAINR_MASHAPE_KEY";
const ENV_BASE_URL: &str = "DOMAINR_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "DOMAINR_TIMEOUT_SECS";

/// Load configuration with automatic fallback strategy
///
/// Uses environment variables when either credential variable is set, and
/// falls back to a config file otherwise. An invalid environment (e.g. a
/// non-numeric timeout) is reported, not skipped.
///
/// # Errors
/// Returns `DomainrError::Config` if the environment is invalid, or if no
/// credential is set there and no valid config file is found.
pub fn load() -> Result<ClientConfig> {
    if env_opt(ENV_CLIENT_ID).is_none() && env_opt(ENV_MASHAPE_KEY).is_none() {
        tracing::debug!("No credential in environment, trying file");
        return load_from_file(None);
    }

    let config = load_from_env()?;
    tracing::info!(auth_mode = ?config.auth_mode, "Configuration loaded from environment variables");
    Ok(config)
}

/// Load configuration from environment variables
///
/// `DOMAINR_CLIENT_ID` takes precedence over `DOMAINR_MASHAPE_KEY`.
///
/// # Errors
/// Returns `DomainrError::Config` if neither credential is set or the
/// timeout is not a number.
pub fn load_from_env() -> Result<ClientConfig> {
    let (auth_mode, credential) = match (env_opt(ENV_CLIENT_ID), env_opt(ENV_MASHAPE_KEY)) {
        (Some(client_id), _) => (AuthMode::ClientId, client_id),
        (None, Some(key)) => (AuthMode::Mashape, key),
        (None, None) => {
            return Err(DomainrError::Config(format!(
                "Missing required environment variable: {ENV_CLIENT_ID} or {ENV_MASHAPE_KEY}"
            )))
        }
    };

    let timeout_secs = env_opt(ENV_TIMEOUT_SECS)
        .map(|s| {
            s.parse::<u64>()
                .map_err(|e| DomainrError::Config(format!("Invalid timeout: {}", e)))
        })
        .transpose()?;

    Ok(ClientConfig { auth_mode, credential, base_url: env_opt(ENV_BASE_URL), timeout_secs })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `DomainrError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(DomainrError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            DomainrError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DomainrError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| DomainrError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| DomainrError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(DomainrError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidate_files(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidate_files(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidate_files(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("domainr.json"),
        dir.join("domainr.toml"),
        dir.join("../domainr.json"),
        dir.join("../domainr.toml"),
    ]
}

/// Non-empty environment variable, if set.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    /// Run `f` with the process working directory set to `dir`. Callers hold
    /// `ENV_LOCK`, which also serializes working-directory changes.
    fn with_current_dir<T>(dir: &Path, f: impl FnOnce() -> T) -> T {
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir).unwrap();
        let result = f();
        std::env::set_current_dir(previous).unwrap();
        result
    }

    fn clear_env() {
        for key in [ENV_CLIENT_ID, ENV_MASHAPE_KEY, ENV_BASE_URL, ENV_TIMEOUT_SECS] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_load_from_env_client_id() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_CLIENT_ID, "client-123");
        std::env::set_var(ENV_BASE_URL, "http://localhost:8080");
        std::env::set_var(ENV_TIMEOUT_SECS, "15");

        let config = load_from_env().expect("config from env");
        assert_eq!(config.auth_mode, AuthMode::ClientId);
        assert_eq!(config.credential, "client-123");
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.timeout_secs, Some(15));

        clear_env();
    }

    #[test]
    fn test_load_from_env_mashape_fallback() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_MASHAPE_KEY, "mashape-456");

        let config = load_from_env().expect("config from env");
        assert_eq!(config.auth_mode, AuthMode::Mashape);
        assert_eq!(config.credential, "mashape-456");
        assert_eq!(config.base_url, None);
        assert_eq!(config.timeout_secs, None);

        clear_env();
    }

    #[test]
    fn test_client_id_wins_over_mashape_key() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_CLIENT_ID, "client");
        std::env::set_var(ENV_MASHAPE_KEY, "mashape");

        let config = load_from_env().expect("config from env");
        assert_eq!(config.auth_mode, AuthMode::ClientId);
        assert_eq!(config.credential, "client");

        clear_env();
    }

    #[test]
    fn test_load_from_env_missing_credential() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, DomainrError::Config(_)), "Should be a Config error");
    }

    #[test]
    fn test_load_from_env_invalid_timeout() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_CLIENT_ID, "client");
        std::env::set_var(ENV_TIMEOUT_SECS, "soon");

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, DomainrError::Config(_)), "Should be a Config error");

        clear_env();
    }

    #[test]
    fn test_load_prefers_environment() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_MASHAPE_KEY, "mashape-789");

        let config = load().expect("config from env");
        assert_eq!(config.auth_mode, AuthMode::Mashape);
        assert_eq!(config.credential, "mashape-789");

        clear_env();
    }

    #[test]
    fn test_load_reports_invalid_env_timeout() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_CLIENT_ID, "client");
        std::env::set_var(ENV_TIMEOUT_SECS, "soon");

        let err = load().unwrap_err();
        assert!(
            matches!(&err, DomainrError::Config(msg) if msg.contains("Invalid timeout")),
            "got {err:?}"
        );

        clear_env();
    }

    #[test]
    fn test_load_falls_back_to_probed_file() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("domainr.toml"), "credential = \"from-file\"\n").unwrap();
        let config = with_current_dir(dir.path(), load);

        let config = config.expect("config from probed file");
        assert_eq!(config.auth_mode, AuthMode::ClientId);
        assert_eq!(config.credential, "from-file");
    }

    #[test]
    fn test_probe_prefers_json_in_current_dir() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("domainr.toml"), "credential = \"t\"\n").unwrap();
        std::fs::write(dir.path().join("domainr.json"), r#"{"credential":"j"}"#).unwrap();
        let found = with_current_dir(dir.path(), probe_config_paths).expect("probed path");

        assert_eq!(found.file_name().and_then(|n| n.to_str()), Some("domainr.json"));
        assert_eq!(
            found.canonicalize().unwrap(),
            dir.path().join("domainr.json").canonicalize().unwrap()
        );
    }

    #[test]
    fn test_probe_finds_file_in_parent_dir() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        let dir = tempfile::tempdir().unwrap();
        let child = dir.path().join("child");
        std::fs::create_dir(&child).unwrap();
        std::fs::write(dir.path().join("domainr.toml"), "credential = \"p\"\n").unwrap();
        let found = with_current_dir(&child, probe_config_paths).expect("probed path");

        assert_eq!(
            found.canonicalize().unwrap(),
            dir.path().join("domainr.toml").canonicalize().unwrap()
        );
    }

    #[test]
    fn test_parse_config_unsupported_extension() {
        let err = parse_config("credential = 'x'", Path::new("domainr.yaml")).unwrap_err();
        assert!(err.to_string().contains("Unsupported config format"));
    }

    #[test]
    fn test_load_from_file_json() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(br#"{"auth_mode":"mashape","credential":"k"}"#).unwrap();
        let path = temp_file.path().with_extension("json");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let config = load_from_file(Some(path.clone())).expect("config from JSON file");
        assert_eq!(config.auth_mode, AuthMode::Mashape);
        assert_eq!(config.credential, "k");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_not_found() {
        let err = load_from_file(Some(PathBuf::from("/nonexistent/domainr.toml"))).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
