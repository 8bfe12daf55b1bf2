//! Server-side pagination envelope for listing responses.

// self
use crate::_prelude::*;

/// One page of records returned by a listing endpoint.
///
/// Unknown envelope fields (sorting metadata and friends) are ignored during decoding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
	/// Records carried by this page.
	pub content: Vec<T>,
	/// Total number of records across all pages.
	pub total_elements: u64,
	/// Zero-based index of this page.
	pub number: u32,
	/// Requested page size.
	pub size: u32,
}
impl<T> Page<T> {
	/// Number of records on this page.
	pub fn len(&self) -> usize {
		self.content.len()
	}

	/// Returns `true` when the page carries no records.
	pub fn is_empty(&self) -> bool {
		self.content.is_empty()
	}

	/// Iterates over the records on this page.
	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		self.content.iter()
	}
}
impl<T> IntoIterator for Page<T> {
	type IntoIter = std::vec::IntoIter<T>;
	type Item = T;

	fn into_iter(self) -> Self::IntoIter {
		self.content.into_iter()
	}
}
impl<'a, T> IntoIterator for &'a Page<T> {
	type IntoIter = std::slice::Iter<'a, T>;
	type Item = &'a T;

	fn into_iter(self) -> Self::IntoIter {
		self.content.iter()
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	#[test]
	fn page_decodes_the_server_envelope() {
		let payload = json!({
			"content": ["a", "b"],
			"pageable": { "offset": 0 },
			"totalElements": 2,
			"totalPages": 1,
			"last": true,
			"number": 0,
			"size": 25,
		});
		let page: Page<String> =
			serde_json::from_value(payload).expect("Page envelope should decode.");

		assert_eq!(page.len(), 2);
		assert!(!page.is_empty());
		assert_eq!(page.total_elements, 2);
		assert_eq!(page.size, 25);
		assert_eq!(page.iter().next().map(String::as_str), Some("a"));
		assert_eq!((&page).into_iter().count(), 2);
	}
}
