//! Client configuration assembled through a validating builder.

// self
use crate::{_prelude::*, auth::Credentials, error::ConfigError};

/// Validated configuration consumed by the API client.
#[derive(Clone, Debug)]
pub struct ApiConfig {
	/// Root URL every request path is resolved against.
	pub base_url: Url,
	/// Authentication mode wired into the client.
	pub credentials: Credentials,
	/// Per-request timeout applied to the bundled transport.
	pub timeout: Duration,
	/// Optional `User-Agent` header value for the bundled transport.
	pub user_agent: Option<String>,
}
impl ApiConfig {
	/// Default per-request timeout.
	pub const DEFAULT_TIMEOUT: Duration = Duration::seconds(30);

	/// Returns a builder for assembling a validated configuration.
	pub fn builder() -> ApiConfigBuilder {
		ApiConfigBuilder::new()
	}

	/// Validates invariants for the configuration.
	fn validate(&self) -> Result<(), ConfigError> {
		if !matches!(self.base_url.scheme(), "http" | "https") {
			return Err(ConfigError::InvalidBaseUrl { url: self.base_url.to_string() });
		}
		if !self.timeout.is_positive() {
			return Err(ConfigError::NonPositiveTimeout);
		}

		Ok(())
	}
}

/// Builder for [`ApiConfig`] values.
#[derive(Clone, Debug, Default)]
pub struct ApiConfigBuilder {
	/// Root URL every request path is resolved against.
	pub base_url: Option<Url>,
	/// Authentication mode wired into the client.
	pub credentials: Option<Credentials>,
	/// Per-request timeout override.
	pub timeout: Option<Duration>,
	/// Optional `User-Agent` header value.
	pub user_agent: Option<String>,
}
impl ApiConfigBuilder {
	fn new() -> Self {
		Self::default()
	}

	/// Sets the API root URL.
	pub fn base_url(mut self, url: Url) -> Self {
		self.base_url = Some(url);

		self
	}

	/// Sets the authentication mode.
	pub fn credentials(mut self, credentials: Credentials) -> Self {
		self.credentials = Some(credentials);

		self
	}

	/// Overrides the per-request timeout (defaults to 30 seconds).
	pub fn timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);

		self
	}

	/// Sets the `User-Agent` header value for the bundled transport.
	pub fn user_agent(mut self, value: impl Into<String>) -> Self {
		self.user_agent = Some(value.into());

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ApiConfig, ConfigError> {
		let base_url = self.base_url.ok_or(ConfigError::MissingBaseUrl)?;
		let credentials = self.credentials.ok_or(ConfigError::MissingCredentials)?;
		let timeout = self.timeout.unwrap_or(ApiConfig::DEFAULT_TIMEOUT);
		let config = ApiConfig { base_url, credentials, timeout, user_agent: self.user_agent };

		config.validate()?;

		Ok(config)
	}
}
