//! Immutable access-token state and the token-endpoint wire payload.

// self
use crate::{_prelude::*, auth::Secret};

/// Immutable snapshot of an issued access token.
///
/// Tokens are replaced, never mutated; the provider swaps in a whole new value whenever it
/// refreshes.
#[derive(Clone)]
pub struct AccessToken {
	/// Token material; callers must avoid logging it.
	pub secret: Secret,
	/// Token type reported by the endpoint (normally `bearer`).
	pub token_type: String,
	/// Issued-at instant recorded when the response was received.
	pub issued_at: OffsetDateTime,
	/// Expiry instant derived from the issued-at instant plus `expires_in`.
	pub expires_at: OffsetDateTime,
}
impl AccessToken {
	/// Returns `true` if the token has expired at the provided instant.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		instant >= self.expires_at
	}

	/// Returns `true` if the token is expired relative to the current clock.
	pub fn is_expired(&self) -> bool {
		self.is_expired_at(OffsetDateTime::now_utc())
	}

	/// Returns `true` if the token is still usable at `instant` with `window` to spare.
	///
	/// A zero window degrades to the plain expiry check.
	pub fn is_fresh_at(&self, instant: OffsetDateTime, window: Duration) -> bool {
		if self.is_expired_at(instant) {
			return false;
		}
		if window.is_zero() {
			return true;
		}

		self.expires_at - instant > window
	}
}
impl Debug for AccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AccessToken")
			.field("secret", &"<redacted>")
			.field("token_type", &self.token_type)
			.field("issued_at", &self.issued_at)
			.field("expires_at", &self.expires_at)
			.finish()
	}
}

/// Wire payload returned by the token endpoint for the client-credentials grant.
#[cfg(feature = "reqwest")]
#[derive(Deserialize)]
pub(crate) struct TokenEndpointResponse {
	/// Issued access token value.
	pub access_token: String,
	/// Token type label.
	pub token_type: String,
	/// Relative expiry in seconds.
	pub expires_in: Option<i64>,
}
