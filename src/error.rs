//! Client-level error types shared across the auth, transport, and API layers.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Token acquisition failed before the request was sent.
	#[error(transparent)]
	Auth(#[from] AuthError),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// API answered with a non-success status other than 404.
	#[error("API returned HTTP {status}.")]
	Http {
		/// HTTP status code returned by the API.
		status: u16,
		/// Response body, when one could be read.
		body: Option<String>,
	},
	/// Requested resource does not exist.
	#[error("Resource at `{path}` was not found.")]
	NotFound {
		/// Request path that produced the 404.
		path: String,
	},
	/// Successful response carried a body that could not be decoded.
	#[error("API returned a response body that could not be decoded.")]
	Decode {
		/// Structured parsing failure carrying the offending JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Creation response did not include a `Location` header to follow.
	#[error("API returned HTTP {status} without a Location header.")]
	MissingLocation {
		/// HTTP status code returned by the creation request.
		status: u16,
	},
}
impl Error {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}

	/// Returns `true` when the error is the not-found variant.
	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::NotFound { .. })
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for Error {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Configuration and validation failures raised while building a client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Base URL is required.
	#[error("Missing base URL.")]
	MissingBaseUrl,
	/// Credentials are required.
	#[error("Missing credentials.")]
	MissingCredentials,
	/// Base URL must be an http(s) URL able to host relative request paths.
	#[error("Base URL `{url}` cannot be used as an API root.")]
	InvalidBaseUrl {
		/// Base URL that failed validation.
		url: String,
	},
	/// Request timeout must be strictly positive.
	#[error("Request timeout must be positive.")]
	NonPositiveTimeout,
	/// Basic-auth credentials contain bytes that cannot appear in an HTTP header.
	#[error("Basic-auth credentials cannot be encoded as an HTTP header.")]
	InvalidBasicCredentials,
}
impl ConfigError {
	/// Wraps a transport builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}

/// Token acquisition failures raised by the OAuth 2.0 token provider.
#[derive(Debug, ThisError)]
pub enum AuthError {
	/// Token endpoint could not be reached.
	#[error("Network error occurred while calling the token endpoint.")]
	Endpoint {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Token endpoint rejected the credentials or the grant.
	#[error("Token endpoint rejected the request with HTTP {status}.")]
	Rejected {
		/// HTTP status code returned by the token endpoint.
		status: u16,
		/// Response body, when one could be read.
		body: Option<String>,
	},
	/// Token endpoint responded with JSON that could not be parsed.
	#[error("Token endpoint returned malformed JSON.")]
	MalformedResponse {
		/// Structured parsing failure carrying the offending JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Token endpoint response omitted `expires_in`.
	#[error("Token endpoint response is missing expires_in.")]
	MissingExpiresIn,
	/// Token endpoint returned a non-positive `expires_in`.
	#[error("The expires_in value must be positive.")]
	NonPositiveExpiresIn,
	/// Token endpoint issued a token value that cannot appear in an HTTP header.
	#[error("Issued access token cannot be encoded as an HTTP header.")]
	UnencodableToken,
}
impl AuthError {
	/// Wraps a transport-specific network error.
	pub fn endpoint(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Endpoint { source: Box::new(src) }
	}
}
