//! Typed transport over the bundled reqwest client.
//!
//! [`HttpClient`] owns base-URL resolution, request authentication, and the status-to-error
//! mapping shared by every API operation. Verb helpers return the raw [`Response`] so callers
//! can decide between decoding a body and following headers such as `Location`.

// crates.io
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
// self
use crate::{_prelude::*, auth::Authenticator, config::ApiConfig, error::ConfigError};

/// Typed HTTP transport shared by all API operations.
#[derive(Clone, Debug)]
pub struct HttpClient {
	client: ReqwestClient,
	base_url: Url,
	authenticator: Authenticator,
}
impl HttpClient {
	/// Builds the bundled transport for the provided configuration.
	pub fn new(config: ApiConfig) -> Result<Self> {
		let timeout = std::time::Duration::try_from(config.timeout)
			.map_err(|_| ConfigError::NonPositiveTimeout)?;
		let mut builder = ReqwestClient::builder().timeout(timeout);

		if let Some(agent) = &config.user_agent {
			builder = builder.user_agent(agent);
		}

		let client = builder.build().map_err(ConfigError::http_client_build)?;

		Self::with_client(config, client)
	}

	/// Wraps an existing reqwest client, e.g. one shared across services.
	///
	/// The caller-provided client keeps its own timeout and agent settings; only the
	/// authentication wiring comes from `config`.
	pub fn with_client(config: ApiConfig, client: ReqwestClient) -> Result<Self> {
		let authenticator = Authenticator::new(client.clone(), config.credentials)?;

		Ok(Self { client, base_url: config.base_url, authenticator })
	}

	/// Issues an authenticated GET for `path` with the provided query pairs.
	pub async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Response> {
		let url = self.endpoint(path, query);

		self.execute(path, self.client.get(url)).await
	}

	/// Issues an authenticated POST carrying `body` as JSON.
	pub async fn post_json<T>(&self, path: &str, body: &T) -> Result<Response>
	where
		T: ?Sized + Serialize,
	{
		let url = self.endpoint(path, &[]);

		self.execute(path, self.client.post(url).json(body)).await
	}

	/// Issues an authenticated PUT carrying `body` as JSON.
	pub async fn put_json<T>(&self, path: &str, body: &T) -> Result<Response>
	where
		T: ?Sized + Serialize,
	{
		let url = self.endpoint(path, &[]);

		self.execute(path, self.client.put(url).json(body)).await
	}

	/// Issues an authenticated DELETE for `path`.
	pub async fn delete(&self, path: &str) -> Result<Response> {
		let url = self.endpoint(path, &[]);

		self.execute(path, self.client.delete(url)).await
	}

	/// Reads a JSON response body and decodes it, annotating failures with the JSON path.
	pub async fn decode<T>(response: Response) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let body = response.bytes().await.map_err(Error::network)?;
		let mut deserializer = serde_json::Deserializer::from_slice(&body);

		serde_path_to_error::deserialize(&mut deserializer).map_err(|source| Error::Decode { source })
	}

	/// Resolves `path` against the base URL, keeping any base path prefix, and appends the
	/// query pairs only when some are present.
	fn endpoint(&self, path: &str, query: &[(String, String)]) -> Url {
		let mut url = self.base_url.clone();
		let joined = format!(
			"{}/{}",
			self.base_url.path().trim_end_matches('/'),
			path.trim_start_matches('/')
		);

		url.set_path(&joined);

		if !query.is_empty() {
			url.query_pairs_mut().extend_pairs(query);
		}

		url
	}

	async fn execute(&self, path: &str, request: RequestBuilder) -> Result<Response> {
		let request = self.authenticator.authorize(request).await?;
		let response = request.send().await.map_err(Error::network)?;
		let status = response.status();

		if status == StatusCode::NOT_FOUND {
			return Err(Error::NotFound { path: path.into() });
		}
		if !status.is_success() {
			let body = response.text().await.ok().filter(|text| !text.is_empty());

			return Err(Error::Http { status: status.as_u16(), body });
		}

		Ok(response)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::auth::{BasicCredentials, Credentials};

	fn client(base: &str) -> HttpClient {
		let config = ApiConfig::builder()
			.base_url(Url::parse(base).expect("Base URL fixture should parse."))
			.credentials(Credentials::Basic(BasicCredentials::new("user", "pass")))
			.build()
			.expect("Configuration fixture should build.");

		HttpClient::new(config).expect("Transport should build for fixtures.")
	}

	#[test]
	fn endpoint_concatenates_base_and_path() {
		let client = client("http://localhost:8080");

		assert_eq!(
			client.endpoint("/api/v1/beer", &[]).as_str(),
			"http://localhost:8080/api/v1/beer"
		);
	}

	#[test]
	fn endpoint_keeps_base_path_prefixes() {
		let client = client("http://gateway.local/upstream/");

		assert_eq!(
			client.endpoint("/api/v1/beer", &[]).as_str(),
			"http://gateway.local/upstream/api/v1/beer"
		);
	}

	#[test]
	fn endpoint_appends_query_pairs_only_when_present() {
		let client = client("http://localhost:8080");
		let query = vec![("beerName".to_owned(), "ALE".to_owned())];

		assert_eq!(
			client.endpoint("/api/v1/beer", &query).as_str(),
			"http://localhost:8080/api/v1/beer?beerName=ALE"
		);
		assert!(client.endpoint("/api/v1/beer", &[]).query().is_none());
	}
}
