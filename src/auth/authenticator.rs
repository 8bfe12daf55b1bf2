//! Request-authentication layer applied to every outgoing API call.

// crates.io
use reqwest::{
	RequestBuilder,
	header::{AUTHORIZATION, HeaderValue},
};
// self
use crate::{
	_prelude::*,
	auth::{BasicCredentials, Credentials, TokenProvider, credential},
	error::{AuthError, ConfigError},
};

/// Decorates outgoing requests with the credentials mode configured for the client.
#[derive(Clone)]
pub enum Authenticator {
	/// Precomputed HTTP Basic header attached to every request.
	Basic(HeaderValue),
	/// Bearer tokens drawn from a shared [`TokenProvider`].
	Bearer(Arc<TokenProvider>),
}
impl Authenticator {
	/// Builds the authenticator for the provided credentials mode.
	pub fn new(client: ReqwestClient, credentials: Credentials) -> Result<Self, ConfigError> {
		match credentials {
			Credentials::Basic(basic) => Self::basic(&basic),
			Credentials::OAuth2(registration) =>
				Ok(Self::Bearer(Arc::new(TokenProvider::new(client, registration)?))),
		}
	}

	/// Builds a basic authenticator with a precomputed sensitive header.
	pub fn basic(credentials: &BasicCredentials) -> Result<Self, ConfigError> {
		Ok(Self::Basic(credential::basic_header(&credentials.username, &credentials.password)?))
	}

	/// Attaches the `Authorization` header to `request`, fetching a token first when needed.
	///
	/// Token acquisition failures abort the call before anything reaches the API.
	pub async fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder> {
		match self {
			Self::Basic(header) => Ok(request.header(AUTHORIZATION, header.clone())),
			Self::Bearer(provider) => {
				let token = provider.bearer_token().await?;
				let mut header = HeaderValue::from_str(&format!("Bearer {}", token.secret.expose()))
					.map_err(|_| AuthError::UnencodableToken)?;

				header.set_sensitive(true);

				Ok(request.header(AUTHORIZATION, header))
			},
		}
	}
}
impl Debug for Authenticator {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Basic(_) => f.write_str("Authenticator::Basic(<redacted>)"),
			Self::Bearer(provider) =>
				f.debug_tuple("Authenticator::Bearer").field(provider).finish(),
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[tokio::test]
	async fn basic_mode_attaches_the_precomputed_header() {
		let authenticator = Authenticator::basic(&BasicCredentials::new("user", "pass"))
			.expect("Basic authenticator should build for ASCII credentials.");
		let client = ReqwestClient::new();
		let request = authenticator
			.authorize(client.get("http://localhost/api/v1/beer"))
			.await
			.expect("Basic authorization should not touch the network.")
			.build()
			.expect("Request should build.");
		let header = request
			.headers()
			.get(AUTHORIZATION)
			.expect("Authorization header should be present.");

		assert_eq!(header.to_str().expect("Header value should be ASCII."), "Basic dXNlcjpwYXNz");
		assert!(header.is_sensitive());
	}
}
