//! Demonstrates listing beers through the typed client with a cached client-credentials
//! session against a mock inventory API.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use url::Url;
use uuid::Uuid;
// self
use taproom_client::{
	api::{ListBeersQuery, TaproomClient},
	auth::{ClientCredentials, Credentials},
	config::ApiConfig,
	model::{Beer, BeerStyle, Page},
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
	let page = Page {
		content: vec![Beer {
			id: Uuid::new_v4(),
			version: Some(1),
			beer_name: "Mango Bobs".into(),
			beer_style: BeerStyle::Ipa,
			upc: "0631234200036".into(),
			quantity_on_hand: Some(121),
			price: "10.99".parse()?,
		}],
		total_elements: 1,
		number: 0,
		size: 25,
	};
	let list_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/v1/beer").query_param("beerStyle", "IPA");
			then.status(200).header("content-type", "application/json").json_body_obj(&page);
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
	let query = ListBeersQuery::new().with_beer_style(BeerStyle::Ipa);
	let fetched = client.list_beers(&query).await?;

	for beer in &fetched {
		println!("{} ({}) at {} each.", beer.beer_name, beer.beer_style, beer.price);
	}

	println!("Fetched {} of {} matching records.", fetched.len(), fetched.total_elements);

	token_mock.assert_async().await;
	list_mock.assert_async().await;

	Ok(())
}
