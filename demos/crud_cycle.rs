//! Walks a create → update → delete cycle against a mock inventory API, ending with the typed
//! not-found error a stale identifier produces.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use url::Url;
use uuid::Uuid;
// self
use taproom_client::{
	api::TaproomClient,
	auth::{ClientCredentials, Credentials},
	config::ApiConfig,
	model::{Beer, BeerStyle, NewBeer},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"demo-access\",\"token_type\":\"bearer\",\"expires_in\":900}",
			);
		})
		.await;
	let id = Uuid::new_v4();
	let payload = NewBeer {
		beer_name: "Pinball Porter".into(),
		beer_style: BeerStyle::Porter,
		upc: "0083783375213".into(),
		quantity_on_hand: None,
		price: "9.56".parse()?,
	};
	let stored = Beer {
		id,
		version: Some(1),
		beer_name: payload.beer_name.clone(),
		beer_style: payload.beer_style,
		upc: payload.upc.clone(),
		quantity_on_hand: Some(121),
		price: payload.price,
	};
	let mut revised = stored.clone();

	revised.quantity_on_hand = Some(200);

	let create_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/beer").json_body_obj(&payload);
			then.status(201).header("location", server.url(format!("/api/v1/beer/{id}")));
		})
		.await;
	let update_mock = server
		.mock_async(|when, then| {
			when.method(PUT).path(format!("/api/v1/beer/{id}")).json_body_obj(&revised);
			then.status(204);
		})
		.await;
	// Serves the read-back after both the creation and the update.
	let mut fetch_mock = server
		.mock_async(|when, then| {
			when.method(GET).path(format!("/api/v1/beer/{id}"));
			then.status(200).header("content-type", "application/json").json_body_obj(&revised);
		})
		.await;
	let delete_mock = server
		.mock_async(|when, then| {
			when.method(DELETE).path(format!("/api/v1/beer/{id}"));
			then.status(204);
		})
		.await;
	let config = ApiConfig::builder()
		.base_url(Url::parse(&server.base_url())?)
		.credentials(Credentials::OAuth2(ClientCredentials::new(
			"demo-client",
			"super-secret",
			Url::parse(&server.url("/oauth/token"))?,
		)))
		.build()?;
	let client = TaproomClient::new(config)?;
	let created = client.create_beer(&payload).await?;

	println!("Created {} with identifier {}.", created.beer_name, created.id);

	let updated = client.update_beer(&revised).await?;

	println!("On-hand quantity now {:?}.", updated.quantity_on_hand);

	client.delete_beer(id).await?;

	println!("Deleted {id}.");

	token_mock.assert_async().await;
	create_mock.assert_async().await;
	update_mock.assert_async().await;
	fetch_mock.assert_calls_async(2).await;
	delete_mock.assert_async().await;

	// Swap the read mock for a 404 so the stale identifier now resolves to a typed error.
	fetch_mock.delete_async().await;

	let missing_mock = server
		.mock_async(|when, then| {
			when.method(GET).path(format!("/api/v1/beer/{id}"));
			then.status(404);
		})
		.await;
	let err = client.beer_by_id(id).await.expect_err("Deleted records should not resolve.");

	println!("Follow-up fetch: {err}");

	missing_mock.assert_async().await;

	Ok(())
}
