//! Cached OAuth 2.0 client-credentials token source.
//!
//! [`TokenProvider`] hands out the cached access token while it stays fresh and performs a
//! single `client_credentials` exchange when it does not. Concurrent refreshes are coalesced
//! behind a singleflight guard so cold starts never stampede the token endpoint.

// crates.io
use reqwest::header::{AUTHORIZATION, HeaderValue};
// self
use crate::{
	_prelude::*,
	auth::{
		AccessToken, ClientAuthMethod, ClientCredentials, Secret, credential,
		token::TokenEndpointResponse,
	},
	error::{AuthError, ConfigError},
	obs::{self, OpKind},
};

/// Cached token source for the OAuth 2.0 client-credentials grant.
pub struct TokenProvider {
	client: ReqwestClient,
	credentials: ClientCredentials,
	/// Precomputed header for the `client_secret_basic` authentication method.
	basic: Option<HeaderValue>,
	cached: RwLock<Option<AccessToken>>,
	refresh_guard: AsyncMutex<()>,
}
impl TokenProvider {
	/// Creates a provider that exchanges `credentials` through the provided HTTP client.
	pub fn new(client: ReqwestClient, credentials: ClientCredentials) -> Result<Self, ConfigError> {
		let basic = match credentials.auth_method {
			ClientAuthMethod::ClientSecretPost => None,
			ClientAuthMethod::ClientSecretBasic => Some(credential::basic_header(
				&credentials.client_id,
				&credentials.client_secret,
			)?),
		};

		Ok(Self {
			client,
			credentials,
			basic,
			cached: RwLock::new(None),
			refresh_guard: AsyncMutex::new(()),
		})
	}

	/// Returns an access token valid for the configured API, reusing the cached one while it
	/// stays fresh.
	pub async fn bearer_token(&self) -> Result<AccessToken, AuthError> {
		obs::observed(OpKind::Token, "bearer_token", async move {
			if let Some(token) = self.fresh_cached(OffsetDateTime::now_utc()) {
				return Ok(token);
			}

			let _singleflight = self.refresh_guard.lock().await;

			// Another caller may have refreshed while this one waited on the guard.
			if let Some(token) = self.fresh_cached(OffsetDateTime::now_utc()) {
				return Ok(token);
			}

			let token = self.request_token().await?;

			*self.cached.write() = Some(token.clone());

			Ok(token)
		})
		.await
	}

	/// Drops the cached token so the next call performs a fresh exchange.
	pub fn invalidate(&self) {
		*self.cached.write() = None;
	}

	fn fresh_cached(&self, now: OffsetDateTime) -> Option<AccessToken> {
		self.cached
			.read()
			.as_ref()
			.filter(|token| token.is_fresh_at(now, self.credentials.refresh_window))
			.cloned()
	}

	async fn request_token(&self) -> Result<AccessToken, AuthError> {
		let credentials = &self.credentials;
		let mut form = vec![("grant_type", "client_credentials")];

		if let Some(scope) = credentials.scope.as_deref() {
			form.push(("scope", scope));
		}
		if self.basic.is_none() {
			form.push(("client_id", credentials.client_id.as_str()));
			form.push(("client_secret", credentials.client_secret.expose()));
		}

		let mut request = self.client.post(credentials.token_endpoint.clone()).form(&form);

		if let Some(basic) = &self.basic {
			request = request.header(AUTHORIZATION, basic.clone());
		}

		let response = request.send().await.map_err(AuthError::endpoint)?;
		let status = response.status();
		let body = response.bytes().await.map_err(AuthError::endpoint)?;

		if !status.is_success() {
			return Err(AuthError::Rejected {
				status: status.as_u16(),
				body: String::from_utf8(body.to_vec()).ok().filter(|text| !text.is_empty()),
			});
		}

		let mut deserializer = serde_json::Deserializer::from_slice(&body);
		let payload: TokenEndpointResponse = serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| AuthError::MalformedResponse { source })?;
		let expires_in = payload.expires_in.ok_or(AuthError::MissingExpiresIn)?;

		if expires_in <= 0 {
			return Err(AuthError::NonPositiveExpiresIn);
		}

		let issued_at = OffsetDateTime::now_utc();

		Ok(AccessToken {
			secret: Secret::new(payload.access_token),
			token_type: payload.token_type,
			issued_at,
			expires_at: issued_at + Duration::seconds(expires_in),
		})
	}
}
impl Debug for TokenProvider {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenProvider")
			.field("token_endpoint", &self.credentials.token_endpoint.as_str())
			.field("client_id", &self.credentials.client_id)
			.field("cached", &self.cached.read().is_some())
			.finish()
	}
}
