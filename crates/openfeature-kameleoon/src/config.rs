// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for the Kameleoon client behind the provider.
//!
//! A configuration can be built in code, or loaded from a TOML file:
//!
//! ```toml
//! client_id = "my-client-id"
//! client_secret = "my-client-secret"
//! refresh_interval_minute = 60
//! default_timeout_millisecond = 10000
//! tracking_interval_millisecond = 1000
//! session_duration_minute = 30
//! environment = "production"
//! top_level_domain = "example.com"
//! ```
//!
//! Credentials may be supplied or overridden through `KAMELEOON_CLIENT_ID`
//! and `KAMELEOON_CLIENT_SECRET`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

pub const CLIENT_ID_ENV: &str = "KAMELEOON_CLIENT_ID";
pub const CLIENT_SECRET_ENV: &str = "KAMELEOON_CLIENT_SECRET";

const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(60 * 60);
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_TRACKING_INTERVAL: Duration = Duration::from_millis(1000);
const DEFAULT_SESSION_DURATION: Duration = Duration::from_secs(30 * 60);

const MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(60);
const MIN_TRACKING_INTERVAL: Duration = Duration::from_millis(100);
const MAX_TRACKING_INTERVAL: Duration = Duration::from_millis(1000);

/// Configuration handed to a [`ClientFactory`](crate::ClientFactory).
#[derive(Clone, PartialEq)]
pub struct ClientConfig {
	pub client_id: String,
	pub client_secret: String,
	/// How often the client refreshes its flag configuration.
	pub refresh_interval: Duration,
	/// Timeout for network calls, also used to bound provider initialization.
	pub default_timeout: Duration,
	/// How often tracking data is flushed.
	pub tracking_interval: Duration,
	pub session_duration: Duration,
	pub environment: Option<String>,
	pub top_level_domain: Option<String>,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			client_id: String::new(),
			client_secret: String::new(),
			refresh_interval: DEFAULT_REFRESH_INTERVAL,
			default_timeout: DEFAULT_TIMEOUT,
			tracking_interval: DEFAULT_TRACKING_INTERVAL,
			session_duration: DEFAULT_SESSION_DURATION,
			environment: None,
			top_level_domain: None,
		}
	}
}

impl fmt::Debug for ClientConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ClientConfig")
			.field("client_id", &self.client_id)
			.field("client_secret", &"[REDACTED]")
			.field("refresh_interval", &self.refresh_interval)
			.field("default_timeout", &self.default_timeout)
			.field("tracking_interval", &self.tracking_interval)
			.field("session_duration", &self.session_duration)
			.field("environment", &self.environment)
			.field("top_level_domain", &self.top_level_domain)
			.finish()
	}
}

/// On-disk shape of the configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
	client_id: Option<String>,
	client_secret: Option<String>,
	refresh_interval_minute: Option<u64>,
	default_timeout_millisecond: Option<u64>,
	tracking_interval_millisecond: Option<u64>,
	session_duration_minute: Option<u64>,
	environment: Option<String>,
	top_level_domain: Option<String>,
}

impl From<FileConfig> for ClientConfig {
	fn from(file: FileConfig) -> Self {
		let defaults = ClientConfig::default();
		Self {
			client_id: file.client_id.unwrap_or_default(),
			client_secret: file.client_secret.unwrap_or_default(),
			refresh_interval: file
				.refresh_interval_minute
				.map(|m| Duration::from_secs(m * 60))
				.unwrap_or(defaults.refresh_interval),
			default_timeout: file
				.default_timeout_millisecond
				.map(Duration::from_millis)
				.unwrap_or(defaults.default_timeout),
			tracking_interval: file
				.tracking_interval_millisecond
				.map(Duration::from_millis)
				.unwrap_or(defaults.tracking_interval),
			session_duration: file
				.session_duration_minute
				.map(|m| Duration::from_secs(m * 60))
				.unwrap_or(defaults.session_duration),
			environment: file.environment,
			top_level_domain: file.top_level_domain,
		}
	}
}

impl ClientConfig {
	/// Creates a configuration with the given credentials and default settings.
	pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: client_secret.into(),
			..Self::default()
		}
	}

	pub fn refresh_interval(mut self, interval: Duration) -> Self {
		self.refresh_interval = interval;
		self
	}

	pub fn default_timeout(mut self, timeout: Duration) -> Self {
		self.default_timeout = timeout;
		self
	}

	pub fn tracking_interval(mut self, interval: Duration) -> Self {
		self.tracking_interval = interval;
		self
	}

	pub fn session_duration(mut self, duration: Duration) -> Self {
		self.session_duration = duration;
		self
	}

	pub fn environment(mut self, environment: impl Into<String>) -> Self {
		self.environment = Some(environment.into());
		self
	}

	pub fn top_level_domain(mut self, domain: impl Into<String>) -> Self {
		self.top_level_domain = Some(domain.into());
		self
	}

	/// Parses a configuration from TOML text.
	pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
		Self::parse(content, PathBuf::from("<string>"))
	}

	/// Loads a configuration from a TOML file.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path)?;
		debug!(path = %path.display(), "Loaded Kameleoon configuration file");
		Self::parse(&content, path.to_path_buf())
	}

	fn parse(content: &str, path: PathBuf) -> Result<Self, ConfigError> {
		let file: FileConfig =
			toml::from_str(content).map_err(|source| ConfigError::TomlParse { path, source })?;
		Ok(file.into())
	}

	/// Overrides credentials from `KAMELEOON_CLIENT_ID` and `KAMELEOON_CLIENT_SECRET`.
	pub fn apply_env(self) -> Self {
		self.apply_env_from(|name| std::env::var(name).ok())
	}

	fn apply_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
		if let Some(id) = lookup(CLIENT_ID_ENV).filter(|v| !v.is_empty()) {
			self.client_id = id;
		}
		if let Some(secret) = lookup(CLIENT_SECRET_ENV).filter(|v| !v.is_empty()) {
			self.client_secret = secret;
		}
		self
	}

	/// Checks the configuration for values Kameleoon would reject.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.client_id.is_empty() {
			return Err(ConfigError::missing_field("client_id"));
		}
		if self.client_secret.is_empty() {
			return Err(ConfigError::missing_field("client_secret"));
		}
		if self.refresh_interval < MIN_REFRESH_INTERVAL {
			return Err(ConfigError::invalid_value(
				"refresh_interval",
				"must be at least one minute",
			));
		}
		if !(MIN_TRACKING_INTERVAL..=MAX_TRACKING_INTERVAL).contains(&self.tracking_interval) {
			return Err(ConfigError::invalid_value(
				"tracking_interval",
				"must be between 100 and 1000 milliseconds",
			));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn test_client_config_defaults() {
		let config = ClientConfig::default();
		assert_eq!(config.refresh_interval, Duration::from_secs(3600));
		assert_eq!(config.default_timeout, Duration::from_secs(10));
		assert_eq!(config.tracking_interval, Duration::from_millis(1000));
		assert_eq!(config.session_duration, Duration::from_secs(1800));
		assert!(config.environment.is_none());
	}

	#[test]
	fn debug_redacts_secret() {
		let config = ClientConfig::new("id", "super-secret");
		let rendered = format!("{config:?}");
		assert!(!rendered.contains("super-secret"));
		assert!(rendered.contains("[REDACTED]"));
	}

	#[test]
	fn parses_full_toml() {
		let config = ClientConfig::from_toml_str(
			r#"
			client_id = "id"
			client_secret = "secret"
			refresh_interval_minute = 5
			default_timeout_millisecond = 2500
			tracking_interval_millisecond = 200
			session_duration_minute = 15
			environment = "staging"
			top_level_domain = "example.com"
			"#,
		)
		.unwrap();

		assert_eq!(
			config,
			ClientConfig::new("id", "secret")
				.refresh_interval(Duration::from_secs(300))
				.default_timeout(Duration::from_millis(2500))
				.tracking_interval(Duration::from_millis(200))
				.session_duration(Duration::from_secs(900))
				.environment("staging")
				.top_level_domain("example.com")
		);
		assert!(config.validate().is_ok());
	}

	#[test]
	fn missing_fields_use_defaults() {
		let config = ClientConfig::from_toml_str("client_id = \"id\"").unwrap();
		assert_eq!(config.client_id, "id");
		assert_eq!(config.default_timeout, DEFAULT_TIMEOUT);
		assert!(matches!(
			config.validate(),
			Err(ConfigError::MissingField(field)) if field == "client_secret"
		));
	}

	#[test]
	fn unknown_keys_are_rejected() {
		let result = ClientConfig::from_toml_str("client_idd = \"typo\"");
		assert!(matches!(result, Err(ConfigError::TomlParse { .. })));
	}

	#[test]
	fn loads_from_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "client_id = \"file-id\"").unwrap();
		writeln!(file, "client_secret = \"file-secret\"").unwrap();

		let config = ClientConfig::from_file(file.path()).unwrap();
		assert_eq!(config.client_id, "file-id");
		assert_eq!(config.client_secret, "file-secret");
	}

	#[test]
	fn missing_file_is_io_error() {
		let dir = tempfile::tempdir().unwrap();
		let result = ClientConfig::from_file(dir.path().join("absent.toml"));
		assert!(matches!(result, Err(ConfigError::Io(_))));
	}

	#[test]
	fn env_overrides_credentials() {
		let config = ClientConfig::new("file-id", "file-secret").apply_env_from(|name| match name {
			CLIENT_ID_ENV => Some("env-id".to_string()),
			CLIENT_SECRET_ENV => Some(String::new()),
			_ => None,
		});

		assert_eq!(config.client_id, "env-id");
		assert_eq!(config.client_secret, "file-secret");
	}

	#[test]
	fn validate_rejects_out_of_range_intervals() {
		let too_frequent = ClientConfig::new("id", "secret").refresh_interval(Duration::from_secs(30));
		assert!(matches!(
			too_frequent.validate(),
			Err(ConfigError::InvalidValue { field, .. }) if field == "refresh_interval"
		));

		let tracking = ClientConfig::new("id", "secret").tracking_interval(Duration::from_millis(50));
		assert!(matches!(
			tracking.validate(),
			Err(ConfigError::InvalidValue { field, .. }) if field == "tracking_interval"
		));
	}
}
