//! Typed façade over the beer-inventory endpoints.
//!
//! [`TaproomClient`] wires the authenticated transport to the five inventory
//! operations and decodes their JSON payloads into the [`crate::model`] types.
//! The [`BeerApi`] trait mirrors the same surface with boxed futures so
//! applications can hold the client behind `dyn` seams.

// crates.io
use reqwest::header::LOCATION;
use uuid::Uuid;
// self
use crate::{
	_prelude::*,
	config::ApiConfig,
	http::HttpClient,
	model::{Beer, BeerStyle, NewBeer, Page},
	obs::{self, OpKind},
};

const BEER_PATH: &str = "api/v1/beer";

/// Boxed future returned by [`BeerApi`] methods.
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + 'a + Send>>;

/// Object-safe contract covering the inventory operations.
///
/// [`TaproomClient`] implements this trait by delegating to its inherent async
/// methods; the boxed signatures exist so applications can store the client as
/// `Arc<dyn BeerApi>` and swap in doubles under test.
pub trait BeerApi
where
	Self: Send + Sync,
{
	/// Lists beers matching `query`, one page at a time.
	fn list_beers<'a>(&'a self, query: &'a ListBeersQuery) -> ApiFuture<'a, Page<Beer>>;

	/// Fetches a single beer by identifier.
	fn beer_by_id(&self, id: Uuid) -> ApiFuture<'_, Beer>;

	/// Creates a beer and returns the record the server stored.
	fn create_beer<'a>(&'a self, beer: &'a NewBeer) -> ApiFuture<'a, Beer>;

	/// Replaces a beer's mutable fields and returns the stored record.
	fn update_beer<'a>(&'a self, beer: &'a Beer) -> ApiFuture<'a, Beer>;

	/// Deletes a beer by identifier.
	fn delete_beer(&self, id: Uuid) -> ApiFuture<'_, ()>;
}

/// Optional filters and paging controls for the listing endpoint.
///
/// Only populated fields are encoded; an empty query produces a request without
/// a query string so the server applies its own paging defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListBeersQuery {
	/// Substring filter on the beer name.
	pub beer_name: Option<String>,
	/// Exact style filter.
	pub beer_style: Option<BeerStyle>,
	/// Requests on-hand quantities alongside each record.
	pub show_inventory: Option<bool>,
	/// Zero-based page index.
	pub page_number: Option<u32>,
	/// Requested page size.
	pub page_size: Option<u32>,
}
impl ListBeersQuery {
	/// Creates a query that lists every beer with the server-side defaults.
	pub fn new() -> Self {
		Default::default()
	}

	/// Sets the beer-name filter.
	pub fn with_beer_name(mut self, name: impl Into<String>) -> Self {
		self.beer_name = Some(name.into());

		self
	}

	/// Sets the style filter.
	pub fn with_beer_style(mut self, style: BeerStyle) -> Self {
		self.beer_style = Some(style);

		self
	}

	/// Requests or suppresses on-hand quantities in the listing.
	pub fn with_show_inventory(mut self, show: bool) -> Self {
		self.show_inventory = Some(show);

		self
	}

	/// Selects the zero-based page to fetch.
	pub fn with_page_number(mut self, number: u32) -> Self {
		self.page_number = Some(number);

		self
	}

	/// Caps the number of records per page.
	pub fn with_page_size(mut self, size: u32) -> Self {
		self.page_size = Some(size);

		self
	}

	fn to_query_pairs(&self) -> Vec<(String, String)> {
		let mut pairs = Vec::new();

		if let Some(name) = &self.beer_name {
			pairs.push(("beerName".into(), name.clone()));
		}
		if let Some(style) = self.beer_style {
			pairs.push(("beerStyle".into(), style.as_str().into()));
		}
		if let Some(show) = self.show_inventory {
			pairs.push(("showInventory".into(), show.to_string()));
		}
		if let Some(number) = self.page_number {
			pairs.push(("pageNumber".into(), number.to_string()));
		}
		if let Some(size) = self.page_size {
			pairs.push(("pageSize".into(), size.to_string()));
		}

		pairs
	}
}

/// Authenticated client for the beer-inventory API.
///
/// Cloning is cheap; clones share the underlying transport and token cache.
#[derive(Clone, Debug)]
pub struct TaproomClient {
	http: HttpClient,
}
impl TaproomClient {
	/// Creates a client that provisions its own reqwest transport from `config`.
	pub fn new(config: ApiConfig) -> Result<Self> {
		Ok(Self { http: HttpClient::new(config)? })
	}

	/// Creates a client around a caller-provided reqwest handle.
	///
	/// The handle keeps its own timeout and agent settings; `config` still
	/// supplies the base URL and credentials.
	pub fn with_http_client(config: ApiConfig, client: ReqwestClient) -> Result<Self> {
		Ok(Self { http: HttpClient::with_client(config, client)? })
	}

	/// Lists beers matching `query`, one page at a time.
	pub async fn list_beers(&self, query: &ListBeersQuery) -> Result<Page<Beer>> {
		obs::observed(OpKind::List, "list_beers", async move {
			let response = self.http.get(BEER_PATH, &query.to_query_pairs()).await?;

			HttpClient::decode(response).await
		})
		.await
	}

	/// Fetches a single beer by identifier.
	///
	/// Unknown identifiers surface as [`Error::NotFound`].
	pub async fn beer_by_id(&self, id: Uuid) -> Result<Beer> {
		obs::observed(OpKind::Get, "beer_by_id", async move {
			let response = self.http.get(&beer_path(id), &[]).await?;

			HttpClient::decode(response).await
		})
		.await
	}

	/// Creates a beer and returns the record the server stored.
	///
	/// The server answers the POST with a `Location` header instead of a body,
	/// so the client immediately GETs that location and returns the fetched
	/// record, server-assigned identifier included. A success response without
	/// the header surfaces as [`Error::MissingLocation`].
	pub async fn create_beer(&self, beer: &NewBeer) -> Result<Beer> {
		obs::observed(OpKind::Create, "create_beer", async move {
			let response = self.http.post_json(BEER_PATH, beer).await?;
			let status = response.status().as_u16();
			let location = response
				.headers()
				.get(LOCATION)
				.and_then(|value| value.to_str().ok())
				.map(location_path)
				.ok_or(Error::MissingLocation { status })?;
			let response = self.http.get(&location, &[]).await?;

			HttpClient::decode(response).await
		})
		.await
	}

	/// Replaces a beer's mutable fields and returns the stored record.
	///
	/// The PUT answers `204 No Content`, so the client re-fetches the record to
	/// pick up server-side changes such as the bumped `version`.
	pub async fn update_beer(&self, beer: &Beer) -> Result<Beer> {
		obs::observed(OpKind::Update, "update_beer", async move {
			let path = beer_path(beer.id);

			self.http.put_json(&path, beer).await?;

			let response = self.http.get(&path, &[]).await?;

			HttpClient::decode(response).await
		})
		.await
	}

	/// Deletes a beer by identifier.
	///
	/// Unknown identifiers surface as [`Error::NotFound`].
	pub async fn delete_beer(&self, id: Uuid) -> Result<()> {
		obs::observed(OpKind::Delete, "delete_beer", async move {
			self.http.delete(&beer_path(id)).await?;

			Ok(())
		})
		.await
	}
}
impl BeerApi for TaproomClient {
	fn list_beers<'a>(&'a self, query: &'a ListBeersQuery) -> ApiFuture<'a, Page<Beer>> {
		Box::pin(Self::list_beers(self, query))
	}

	fn beer_by_id(&self, id: Uuid) -> ApiFuture<'_, Beer> {
		Box::pin(Self::beer_by_id(self, id))
	}

	fn create_beer<'a>(&'a self, beer: &'a NewBeer) -> ApiFuture<'a, Beer> {
		Box::pin(Self::create_beer(self, beer))
	}

	fn update_beer<'a>(&'a self, beer: &'a Beer) -> ApiFuture<'a, Beer> {
		Box::pin(Self::update_beer(self, beer))
	}

	fn delete_beer(&self, id: Uuid) -> ApiFuture<'_, ()> {
		Box::pin(Self::delete_beer(self, id))
	}
}

fn beer_path(id: Uuid) -> String {
	format!("{BEER_PATH}/{id}")
}

// Servers occasionally return absolute `Location` values; only the path should
// be re-resolved against the configured base URL.
fn location_path(value: &str) -> String {
	match Url::parse(value) {
		Ok(url) if matches!(url.scheme(), "http" | "https") => url.path().to_owned(),
		_ => value.to_owned(),
	}
}
