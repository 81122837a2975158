//! Shared configuration for hostly consumers.
//!
//! TOML file + `HOSTLY_*` environment variables (endpoint paths were
//! env-driven in every deployment of the original backend, so the env
//! layer is first-class here), translation to `hostly-api` transport
//! types, and [`FileSlot`] -- the durable session slot backed by a JSON
//! file in the platform data directory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use hostly_api::{EndpointPaths, HostelApi, RestClient, TlsMode, TransportConfig};
use hostly_core::session::SessionSlot;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Api(#[from] hostly_api::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Backend connection settings.
    #[serde(default)]
    pub backend: Backend,

    /// Per-entity collection paths.
    #[serde(default)]
    pub endpoints: Endpoints,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Backend {
    /// Backend base URL (e.g., "http://localhost:3000").
    #[serde(default = "default_url")]
    pub url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Skip TLS verification (self-signed development backends).
    #[serde(default)]
    pub insecure: bool,
}

impl Default for Backend {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout: default_timeout(),
            insecure: false,
        }
    }
}

fn default_url() -> String {
    "http://localhost:3000".into()
}
fn default_timeout() -> u64 {
    30
}

/// Collection path per entity kind, relative to the base URL.
#[derive(Debug, Deserialize, Serialize)]
pub struct Endpoints {
    #[serde(default = "default_hotels")]
    pub hotels: String,
    #[serde(default = "default_rooms")]
    pub rooms: String,
    #[serde(default = "default_reservations")]
    pub reservations: String,
    #[serde(default = "default_subscriptions")]
    pub subscriptions: String,
    #[serde(default = "default_users")]
    pub users: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            hotels: default_hotels(),
            rooms: default_rooms(),
            reservations: default_reservations(),
            subscriptions: default_subscriptions(),
            users: default_users(),
        }
    }
}

fn default_hotels() -> String {
    "hotels".into()
}
fn default_rooms() -> String {
    "rooms".into()
}
fn default_reservations() -> String {
    "reservations".into()
}
fn default_subscriptions() -> String {
    "subscriptions".into()
}
fn default_users() -> String {
    "users".into()
}

impl From<&Endpoints> for EndpointPaths {
    fn from(e: &Endpoints) -> Self {
        Self {
            hotels: e.hotels.clone(),
            rooms: e.rooms.clone(),
            reservations: e.reservations.clone(),
            subscriptions: e.subscriptions.clone(),
            users: e.users.clone(),
        }
    }
}

impl Config {
    /// Build the full REST surface described by this config.
    pub fn to_api(&self) -> Result<HostelApi, ConfigError> {
        let url: url::Url = self
            .backend
            .url
            .parse()
            .map_err(|_| ConfigError::Validation {
                field: "backend.url".into(),
                reason: format!("invalid URL: {}", self.backend.url),
            })?;

        let transport = TransportConfig {
            tls: if self.backend.insecure {
                TlsMode::DangerAcceptInvalid
            } else {
                TlsMode::System
            },
            timeout: Duration::from_secs(self.backend.timeout),
        };

        let client = RestClient::new(url, &transport)?;
        Ok(HostelApi::new(&client, &EndpointPaths::from(&self.endpoints))?)
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("dev", "hostly", "hostly").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

/// Resolve the session slot path in the platform data directory.
pub fn session_path() -> PathBuf {
    ProjectDirs::from("dev", "hostly", "hostly").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("session.json");
            p
        },
        |dirs| dirs.data_dir().join("session.json"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("hostly");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    let path = config_path();

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed("HOSTLY_").split("_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── Durable session slot ────────────────────────────────────────────

/// `SessionSlot` backed by one JSON object file.
///
/// Reads tolerate a missing or corrupt file (treated as empty); writes
/// create parent directories as needed. Write failures are logged and
/// swallowed -- losing the mirror only costs a re-login.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// A slot at an explicit path (tests, portable setups).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A slot at the platform-default session path.
    pub fn at_default_path() -> Self {
        Self::new(session_path())
    }

    fn read_map(&self) -> serde_json::Map<String, serde_json::Value> {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return serde_json::Map::new();
        };
        match serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(&raw) {
            Ok(map) => map,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "discarding unreadable slot file");
                serde_json::Map::new()
            }
        }
    }

    fn write_map(&self, map: &serde_json::Map<String, serde_json::Value>) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(path = %self.path.display(), error = %e, "slot directory creation failed");
                return;
            }
        }
        match serde_json::to_string_pretty(map) {
            Ok(raw) => {
                if let Err(e) = std::fs::write(&self.path, raw) {
                    warn!(path = %self.path.display(), error = %e, "slot write failed");
                }
            }
            Err(e) => warn!(error = %e, "slot serialization failed"),
        }
    }

    /// Where this slot lives on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionSlot for FileSlot {
    fn get(&self, key: &str) -> Option<String> {
        self.read_map()
            .get(key)
            .and_then(|v| v.as_str())
            .map(ToOwned::to_owned)
    }

    fn set(&self, key: &str, value: &str) {
        let mut map = self.read_map();
        map.insert(key.to_owned(), serde_json::Value::String(value.to_owned()));
        self.write_map(&map);
    }

    fn remove(&self, key: &str) {
        let mut map = self.read_map();
        if map.remove(key).is_some() {
            self.write_map(&map);
        }
    }
}
