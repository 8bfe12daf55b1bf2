//! Credential models for the two supported authentication modes.

// crates.io
#[cfg(feature = "reqwest")] use base64::{Engine, engine::general_purpose::STANDARD};
#[cfg(feature = "reqwest")] use reqwest::header::HeaderValue;
// self
use crate::_prelude::*;
#[cfg(feature = "reqwest")] use crate::error::ConfigError;

/// Redacted secret wrapper keeping sensitive material out of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);
impl Secret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner secret value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for Secret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("Secret").field(&"<redacted>").finish()
	}
}
impl Display for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Client authentication modes accepted by the token endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClientAuthMethod {
	#[default]
	/// Form POST body parameters for `client_id`/`client_secret`.
	ClientSecretPost,
	/// HTTP Basic with `client_id`/`client_secret`.
	ClientSecretBasic,
}

/// Credentials for the HTTP Basic wiring mode.
#[derive(Clone, Debug)]
pub struct BasicCredentials {
	/// Username presented on every request.
	pub username: String,
	/// Password paired with the username.
	pub password: Secret,
}
impl BasicCredentials {
	/// Creates basic credentials from a username/password pair.
	pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
		Self { username: username.into(), password: Secret::new(password) }
	}
}

/// OAuth 2.0 client registration for the bearer wiring mode.
#[derive(Clone, Debug)]
pub struct ClientCredentials {
	/// OAuth 2.0 client identifier.
	pub client_id: String,
	/// OAuth 2.0 client secret.
	pub client_secret: Secret,
	/// Token endpoint issuing access tokens for the API.
	pub token_endpoint: Url,
	/// How the client proves its identity to the token endpoint.
	pub auth_method: ClientAuthMethod,
	/// Space-delimited scope value requested with each token, when present.
	pub scope: Option<String>,
	/// Preemptive window before expiry in which a cached token is refreshed early.
	pub refresh_window: Duration,
}
impl ClientCredentials {
	const DEFAULT_REFRESH_WINDOW: Duration = Duration::seconds(60);

	/// Creates a registration for the provided client pair and token endpoint.
	pub fn new(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
		token_endpoint: Url,
	) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: Secret::new(client_secret),
			token_endpoint,
			auth_method: ClientAuthMethod::default(),
			scope: None,
			refresh_window: Self::DEFAULT_REFRESH_WINDOW,
		}
	}

	/// Overrides the client authentication method.
	pub fn with_auth_method(mut self, method: ClientAuthMethod) -> Self {
		self.auth_method = method;

		self
	}

	/// Sets the scope value requested with each token.
	pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
		self.scope = Some(scope.into());

		self
	}

	/// Overrides the preemptive refresh window (defaults to 60 seconds).
	pub fn with_refresh_window(mut self, window: Duration) -> Self {
		self.refresh_window = if window.is_negative() { Duration::ZERO } else { window };

		self
	}
}

/// The two mutually exclusive authentication modes supported by the client.
#[derive(Clone, Debug)]
pub enum Credentials {
	/// Precomputed HTTP Basic authentication on every request.
	Basic(BasicCredentials),
	/// Bearer tokens fetched through the OAuth 2.0 client-credentials grant.
	OAuth2(ClientCredentials),
}

/// Builds a sensitive `Basic` authorization header value for the provided pair.
#[cfg(feature = "reqwest")]
pub(crate) fn basic_header(username: &str, password: &Secret) -> Result<HeaderValue, ConfigError> {
	let encoded = STANDARD.encode(format!("{username}:{}", password.expose()));
	let mut value = HeaderValue::from_str(&format!("Basic {encoded}"))
		.map_err(|_| ConfigError::InvalidBasicCredentials)?;

	value.set_sensitive(true);

	Ok(value)
}
