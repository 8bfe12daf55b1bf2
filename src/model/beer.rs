//! Beer records and the style vocabulary used by the API.

// crates.io
use rust_decimal::Decimal;
use uuid::Uuid;
// self
use crate::_prelude::*;

/// Beer styles recognized by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeerStyle {
	/// Pale lager.
	Lager,
	/// Pilsner.
	Pilsner,
	/// Stout.
	Stout,
	/// Gose.
	Gose,
	/// Porter.
	Porter,
	/// Ale.
	Ale,
	/// Wheat beer.
	Wheat,
	/// India pale ale.
	Ipa,
	/// Pale ale.
	PaleAle,
	/// Saison.
	Saison,
}
impl BeerStyle {
	/// Returns the wire label for the style.
	pub const fn as_str(self) -> &'static str {
		match self {
			BeerStyle::Lager => "LAGER",
			BeerStyle::Pilsner => "PILSNER",
			BeerStyle::Stout => "STOUT",
			BeerStyle::Gose => "GOSE",
			BeerStyle::Porter => "PORTER",
			BeerStyle::Ale => "ALE",
			BeerStyle::Wheat => "WHEAT",
			BeerStyle::Ipa => "IPA",
			BeerStyle::PaleAle => "PALE_ALE",
			BeerStyle::Saison => "SAISON",
		}
	}
}
impl Display for BeerStyle {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Server-owned beer record returned by read operations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beer {
	/// Server-assigned identifier.
	pub id: Uuid,
	/// Optimistic-locking version counter maintained by the server.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub version: Option<i32>,
	/// Display name.
	pub beer_name: String,
	/// Style vocabulary entry.
	pub beer_style: BeerStyle,
	/// Universal product code.
	pub upc: String,
	/// On-hand inventory; only present when the caller asked for it.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub quantity_on_hand: Option<i32>,
	/// Unit price.
	///
	/// Serializes as a JSON string (`"9.56"`) and decodes from both string and numeric forms; the
	/// server accepts either on input.
	pub price: Decimal,
}

/// Client-authored payload for creating a beer.
///
/// Identifiers and version counters are owned by the server, so the creation payload carries
/// neither.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBeer {
	/// Display name.
	pub beer_name: String,
	/// Style vocabulary entry.
	pub beer_style: BeerStyle,
	/// Universal product code.
	pub upc: String,
	/// Initial on-hand inventory, when known.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub quantity_on_hand: Option<i32>,
	/// Unit price.
	pub price: Decimal,
}
