// crates.io
use httpmock::prelude::*;
// self
use taproom_client::{
	api::{ListBeersQuery, TaproomClient},
	auth::{ClientAuthMethod, ClientCredentials, Credentials, TokenProvider},
	config::ApiConfig,
	error::{AuthError, Error},
	reqwest::Client as ReqwestClient,
	url::Url,
};

const CLIENT_ID: &str = "taproom-service";
const CLIENT_SECRET: &str = "taproom-secret";
const EMPTY_PAGE: &str = "{\"content\":[],\"totalElements\":0,\"number\":0,\"size\":25}";

fn build_registration(server: &MockServer) -> ClientCredentials {
	ClientCredentials::new(
		CLIENT_ID,
		CLIENT_SECRET,
		Url::parse(&server.url("/oauth/token")).expect("Mock token endpoint should parse."),
	)
}

fn build_client(server: &MockServer, registration: ClientCredentials) -> TaproomClient {
	let config = ApiConfig::builder()
		.base_url(Url::parse(&server.base_url()).expect("Mock base URL should parse."))
		.credentials(Credentials::OAuth2(registration))
		.build()
		.expect("Client configuration should build.");

	TaproomClient::new(config).expect("Client should build against the mock server.")
}

#[tokio::test]
async fn bearer_token_is_cached_across_requests() {
	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/oauth/token")
				.body_includes("grant_type=client_credentials")
				.body_includes("client_id=taproom-service")
				.body_includes("client_secret=taproom-secret");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"cached-token\",\"token_type\":\"bearer\",\"expires_in\":1800}",
			);
		})
		.await;
	let api_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/beer").header("authorization", "Bearer cached-token");
			then.status(200).header("content-type", "application/json").body(EMPTY_PAGE);
		})
		.await;
	let client = build_client(&server, build_registration(&server));

	client.list_beers(&ListBeersQuery::new()).await.expect("First listing should succeed.");
	client.list_beers(&ListBeersQuery::new()).await.expect("Second listing should succeed.");

	token_mock.assert_calls_async(1).await;
	api_mock.assert_calls_async(2).await;
}

#[tokio::test]
async fn tokens_expiring_within_the_refresh_window_are_replaced() {
	let server = MockServer::start_async().await;
	// expires_in below the 60-second preemptive window, so the cached token never counts as
	// fresh and every call performs a new exchange.
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"short-lived\",\"token_type\":\"bearer\",\"expires_in\":30}",
			);
		})
		.await;
	let api_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/beer").header("authorization", "Bearer short-lived");
			then.status(200).header("content-type", "application/json").body(EMPTY_PAGE);
		})
		.await;
	let client = build_client(&server, build_registration(&server));

	client.list_beers(&ListBeersQuery::new()).await.expect("First listing should succeed.");
	client.list_beers(&ListBeersQuery::new()).await.expect("Second listing should succeed.");

	token_mock.assert_calls_async(2).await;
	api_mock.assert_calls_async(2).await;
}

#[tokio::test]
async fn concurrent_calls_share_one_token_exchange() {
	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"guard-token\",\"token_type\":\"bearer\",\"expires_in\":1800}",
			);
		})
		.await;
	let api_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/beer").header("authorization", "Bearer guard-token");
			then.status(200).header("content-type", "application/json").body(EMPTY_PAGE);
		})
		.await;
	let client = build_client(&server, build_registration(&server));
	let first_query = ListBeersQuery::new();
	let second_query = ListBeersQuery::new();
	let (first, second) =
		tokio::join!(client.list_beers(&first_query), client.list_beers(&second_query),);

	first.expect("First concurrent listing should succeed.");
	second.expect("Second concurrent listing should succeed.");

	token_mock.assert_calls_async(1).await;
	api_mock.assert_calls_async(2).await;
}

#[tokio::test]
async fn rejected_exchanges_surface_before_any_api_call() {
	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(401)
				.header("content-type", "application/json")
				.body("{\"error\":\"invalid_client\"}");
		})
		.await;
	let api_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/beer");
			then.status(200).header("content-type", "application/json").body(EMPTY_PAGE);
		})
		.await;
	let client = build_client(&server, build_registration(&server));
	let err = client
		.list_beers(&ListBeersQuery::new())
		.await
		.expect_err("Rejected token exchanges should fail the call.");

	assert!(matches!(err, Error::Auth(AuthError::Rejected { status: 401, .. })));

	token_mock.assert_async().await;
	api_mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn token_responses_without_expires_in_are_rejected() {
	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"access_token\":\"open-ended\",\"token_type\":\"bearer\"}");
		})
		.await;
	let client = build_client(&server, build_registration(&server));
	let err = client
		.list_beers(&ListBeersQuery::new())
		.await
		.expect_err("Tokens without an expiry should fail the call.");

	assert!(matches!(err, Error::Auth(AuthError::MissingExpiresIn)));

	token_mock.assert_async().await;
}

#[tokio::test]
async fn token_responses_with_a_non_positive_expires_in_are_rejected() {
	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"already-dead\",\"token_type\":\"bearer\",\"expires_in\":0}",
			);
		})
		.await;
	let client = build_client(&server, build_registration(&server));
	let err = client
		.list_beers(&ListBeersQuery::new())
		.await
		.expect_err("Tokens that are already expired on arrival should fail the call.");

	assert!(matches!(err, Error::Auth(AuthError::NonPositiveExpiresIn)));

	token_mock.assert_async().await;
}

#[tokio::test]
async fn non_json_token_responses_surface_the_parse_failure() {
	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(200).header("content-type", "text/html").body("<html>maintenance</html>");
		})
		.await;
	let client = build_client(&server, build_registration(&server));
	let err = client
		.list_beers(&ListBeersQuery::new())
		.await
		.expect_err("Unparseable token responses should fail the call.");

	assert!(matches!(err, Error::Auth(AuthError::MalformedResponse { .. })));

	token_mock.assert_async().await;
}

#[tokio::test]
async fn invalidated_tokens_force_a_fresh_exchange() {
	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"revocable\",\"token_type\":\"bearer\",\"expires_in\":1800}",
			);
		})
		.await;
	let provider = TokenProvider::new(ReqwestClient::new(), build_registration(&server))
		.expect("Provider should build against the mock server.");
	let token = provider.bearer_token().await.expect("First exchange should succeed.");

	assert!(!token.is_expired());

	provider.bearer_token().await.expect("Cached call should succeed.");

	token_mock.assert_calls_async(1).await;

	provider.invalidate();
	provider.bearer_token().await.expect("Post-invalidation exchange should succeed.");

	token_mock.assert_calls_async(2).await;
}

#[tokio::test]
async fn client_secret_basic_authenticates_via_the_authorization_header() {
	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/oauth/token")
				.header("authorization", "Basic dXNlcjpwYXNz")
				.body_includes("grant_type=client_credentials")
				.body_excludes("client_secret");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"basic-token\",\"token_type\":\"bearer\",\"expires_in\":1800}",
			);
		})
		.await;
	let api_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/beer").header("authorization", "Bearer basic-token");
			then.status(200).header("content-type", "application/json").body(EMPTY_PAGE);
		})
		.await;
	let registration = ClientCredentials::new(
		"user",
		"pass",
		Url::parse(&server.url("/oauth/token")).expect("Mock token endpoint should parse."),
	)
	.with_auth_method(ClientAuthMethod::ClientSecretBasic);
	let client = build_client(&server, registration);

	client.list_beers(&ListBeersQuery::new()).await.expect("Listing should succeed.");

	token_mock.assert_async().await;
	api_mock.assert_async().await;
}

#[tokio::test]
async fn configured_scope_is_forwarded_to_the_token_endpoint() {
	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token").body_includes("scope=beer.read");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"scoped-token\",\"token_type\":\"bearer\",\"expires_in\":1800}",
			);
		})
		.await;
	let api_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/beer").header("authorization", "Bearer scoped-token");
			then.status(200).header("content-type", "application/json").body(EMPTY_PAGE);
		})
		.await;
	let registration = build_registration(&server).with_scope("beer.read");
	let client = build_client(&server, registration);

	client.list_beers(&ListBeersQuery::new()).await.expect("Listing should succeed.");

	token_mock.assert_async().await;
	api_mock.assert_async().await;
}
