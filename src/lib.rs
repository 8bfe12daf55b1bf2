//! Typed async client for the Taproom beer-inventory REST API: list, fetch, create, update, and
//! delete beers over a cached OAuth 2.0 client-credentials session with a strict error taxonomy.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

#[cfg(feature = "reqwest")] pub mod api;
pub mod auth;
pub mod config;
pub mod error;
#[cfg(feature = "reqwest")] pub mod http;
pub mod model;
pub mod obs;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		api::TaproomClient,
		auth::{BasicCredentials, ClientCredentials, Credentials},
		config::ApiConfig,
	};

	/// Builds a client for an OAuth2-protected API using the bundled transport stack.
	pub fn build_oauth2_test_client(
		base_url: Url,
		token_endpoint: Url,
		client_id: &str,
		client_secret: &str,
	) -> Result<TaproomClient> {
		let credentials =
			Credentials::OAuth2(ClientCredentials::new(client_id, client_secret, token_endpoint));
		let config = ApiConfig::builder().base_url(base_url).credentials(credentials).build()?;

		TaproomClient::new(config)
	}

	/// Builds a client for a basic-auth API using the bundled transport stack.
	pub fn build_basic_test_client(
		base_url: Url,
		username: &str,
		password: &str,
	) -> Result<TaproomClient> {
		let credentials = Credentials::Basic(BasicCredentials::new(username, password));
		let config = ApiConfig::builder().base_url(base_url).credentials(credentials).build()?;

		TaproomClient::new(config)
	}
}

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")] pub use async_lock::Mutex as AsyncMutex;
	#[cfg(feature = "reqwest")] pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use rust_decimal;
pub use url;
pub use uuid;
#[cfg(all(test, feature = "reqwest"))] use {color_eyre as _, httpmock as _, tokio as _};
