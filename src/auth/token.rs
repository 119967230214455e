//! Credential-pair types cached by the token authority.

// self
use crate::{_prelude::*, config::Secret};

/// Safety margin subtracted from the server-declared lifetime so the access token is renewed
/// before it actually expires, avoiding races with in-flight requests.
pub(crate) const EARLY_REFRESH_MARGIN: Duration = Duration::seconds(600);

/// Token endpoint response shape, shared by the password and refresh grants.
#[derive(Clone, Deserialize)]
pub struct TokenExchangeResponse {
	/// Bearer access token value.
	pub access_token: String,
	/// Server-declared access token lifetime in seconds.
	pub expires_in: i64,
	/// Refresh token to be used for the next renewal.
	pub refresh_token: String,
	/// Token type, `bearer` for this API.
	pub token_type: String,
	/// Granted scope; the PIM always answers `null` here.
	#[serde(default)]
	pub scope: Option<String>,
}
impl Debug for TokenExchangeResponse {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenExchangeResponse")
			.field("access_token", &"<redacted>")
			.field("expires_in", &self.expires_in)
			.field("refresh_token", &"<redacted>")
			.field("token_type", &self.token_type)
			.field("scope", &self.scope)
			.finish()
	}
}

/// Access half of the credential pair.
#[derive(Clone, Debug)]
pub(crate) struct AccessToken {
	pub value: Secret,
	/// Expiry instant already shortened by [`EARLY_REFRESH_MARGIN`], never the raw
	/// server-declared value.
	pub expires_at: OffsetDateTime,
}
impl AccessToken {
	/// An access token is expired strictly after its deadline, not at it.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		instant > self.expires_at
	}
}

/// Cached access/refresh pair, exclusively owned by one token authority.
#[derive(Clone, Debug)]
pub(crate) struct TokenPair {
	pub access: AccessToken,
	pub refresh: Secret,
}
impl TokenPair {
	/// Builds the pair from a fresh exchange response, stamping the early-refresh deadline.
	///
	/// Both grant types replace the refresh half; the previous refresh token is discarded.
	pub fn from_exchange(response: &TokenExchangeResponse, exchanged_at: OffsetDateTime) -> Self {
		let expires_at =
			exchanged_at + Duration::seconds(response.expires_in) - EARLY_REFRESH_MARGIN;

		Self {
			access: AccessToken { value: Secret::new(response.access_token.as_str()), expires_at },
			refresh: Secret::new(response.refresh_token.as_str()),
		}
	}
}
