//! Configuration management for the host server

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origin of the existing backend that `/api/*` is forwarded to
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Directory holding the built client bundle (`index.html` + assets)
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
}

fn default_port() -> u16 {
    8080
}

fn default_backend_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            backend_url: default_backend_url(),
            public_dir: default_public_dir(),
        }
    }
}

/// Base name of the optional config file (`roll-paradise.toml`, `.json`, ...)
const CONFIG_FILE_STEM: &str = "roll-paradise";

/// Get config directory (RP_CONFIG_DIR, XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("RP_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join("Library/Application Support/roll-paradise");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("roll-paradise");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config/roll-paradise");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("roll-paradise");
        }
    }

    // Fallback to current directory
    PathBuf::from(".")
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        // Start with defaults
        .set_default("port", i64::from(default_port()))?
        .set_default("backend_url", default_backend_url())?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join(CONFIG_FILE_STEM).to_string_lossy())
                .required(false),
        )
        // Override with environment variables (RP_BACKEND_URL, RP_PUBLIC_DIR, ...)
        .add_source(
            ::config::Environment::with_prefix("RP")
                .separator("__")
                .try_parsing(true),
        );

    // Explicit port precedence: RP_PORT > PORT > config > default.
    // Unparsable values are ignored rather than failing startup.
    if let Ok(port) = std::env::var("RP_PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", i64::from(port_num))?;
        }
    } else if let Ok(port) = std::env::var("PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", i64::from(port_num))?;
        }
    }

    let config: Config = builder
        .build()
        .and_then(|c| c.try_deserialize())
        .or_else(|e| recover_from_bad_port(e, &config_dir))?;

    url::Url::parse(&config.backend_url)
        .with_context(|| format!("invalid backend_url: {}", config.backend_url))?;

    Ok(config)
}

/// An unparsable `RP_PORT` also reaches the environment source. Rebuild
/// without it so the default or `PORT` applies instead of failing startup.
fn recover_from_bad_port(
    err: ::config::ConfigError,
    config_dir: &std::path::Path,
) -> Result<Config> {
    let bad_rp_port = std::env::var("RP_PORT").is_ok_and(|p| p.parse::<u16>().is_err());
    if !bad_rp_port {
        return Err(err.into());
    }
    tracing::warn!("Ignoring unparsable RP_PORT");

    let mut builder = ::config::Config::builder()
        .set_default("port", i64::from(default_port()))?
        .set_default("backend_url", default_backend_url())?
        .add_source(
            ::config::File::with_name(&config_dir.join(CONFIG_FILE_STEM).to_string_lossy())
                .required(false),
        );
    if let Ok(url) = std::env::var("RP_BACKEND_URL") {
        builder = builder.set_override("backend_url", url)?;
    }
    if let Ok(dir) = std::env::var("RP_PUBLIC_DIR") {
        builder = builder.set_override("public_dir", dir)?;
    }
    if let Some(port_num) = std::env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
        builder = builder.set_override("port", i64::from(port_num))?;
    }
    Ok(builder.build()?.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        for key in ["RP_PORT", "PORT", "RP_BACKEND_URL", "RP_PUBLIC_DIR", "RP_CONFIG_DIR"] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_file_or_env() {
        clear_env();
        env::set_var("RP_CONFIG_DIR", "/tmp/rp-test-nonexistent");

        let config = load_config().expect("config should load");

        clear_env();

        assert_eq!(config.port, 8080);
        assert_eq!(config.backend_url, "http://127.0.0.1:5000");
        assert_eq!(config.public_dir, PathBuf::from("public"));
    }

    #[test]
    #[serial]
    fn test_port_env_fallback() {
        clear_env();
        env::set_var("RP_CONFIG_DIR", "/tmp/rp-test-nonexistent");
        env::set_var("PORT", "3000");

        let config = load_config().expect("config should load");

        clear_env();

        assert_eq!(config.port, 3000, "PORT env var should set config.port");
    }

    #[test]
    #[serial]
    fn test_rp_port_takes_precedence_over_port() {
        clear_env();
        env::set_var("RP_CONFIG_DIR", "/tmp/rp-test-nonexistent");
        env::set_var("RP_PORT", "5050");
        env::set_var("PORT", "3000");

        let config = load_config().expect("config should load");

        clear_env();

        assert_eq!(config.port, 5050, "RP_PORT should take precedence over PORT");
    }

    #[test]
    #[serial]
    fn test_invalid_port_uses_default() {
        clear_env();
        env::set_var("RP_CONFIG_DIR", "/tmp/rp-test-nonexistent");
        env::set_var("PORT", "not-a-number");

        let config = load_config().expect("config should load");

        clear_env();

        assert_eq!(config.port, 8080, "Invalid PORT should fall back to default");
    }

    #[test]
    #[serial]
    fn test_invalid_rp_port_falls_through_to_port() {
        clear_env();
        env::set_var("RP_CONFIG_DIR", "/tmp/rp-test-nonexistent");
        env::set_var("RP_PORT", "eighty");
        env::set_var("PORT", "3001");

        let config = load_config().expect("config should load");

        clear_env();

        assert_eq!(config.port, 3001);
    }

    #[test]
    #[serial]
    fn test_file_values_with_env_override() {
        clear_env();
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(
            temp_dir.path().join("roll-paradise.toml"),
            "port = 9090\nbackend_url = \"http://10.0.0.5:5000\"\npublic_dir = \"dist\"\n",
        )
        .expect("write config file");
        env::set_var("RP_CONFIG_DIR", temp_dir.path());
        env::set_var("RP_BACKEND_URL", "http://backend.internal:8000");

        let config = load_config().expect("config should load");

        clear_env();

        assert_eq!(config.port, 9090);
        assert_eq!(config.public_dir, PathBuf::from("dist"));
        assert_eq!(
            config.backend_url, "http://backend.internal:8000",
            "env should override the file"
        );
    }

    #[test]
    #[serial]
    fn test_invalid_backend_url_is_an_error() {
        clear_env();
        env::set_var("RP_CONFIG_DIR", "/tmp/rp-test-nonexistent");
        env::set_var("RP_BACKEND_URL", "not a url");

        let result = load_config();

        clear_env();

        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_config_dir_env() {
        clear_env();
        let temp_dir = tempfile::tempdir().expect("create temp dir");
        env::set_var("RP_CONFIG_DIR", temp_dir.path());

        let dir = get_config_dir();

        clear_env();

        assert_eq!(dir, temp_dir.path());
    }
}
