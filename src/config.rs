//! Immutable client configuration and the connector credentials it carries.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
// self
use crate::_prelude::*;

/// Redacted secret wrapper keeping passwords, client secrets, and tokens out of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);
impl Secret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for Secret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("Secret").field(&"<redacted>").finish()
	}
}
impl Display for Secret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Connector credentials issued by the PIM for one API connection.
#[derive(Clone, Debug)]
pub struct Credentials {
	/// Connection username.
	pub username: String,
	/// Connection password.
	pub password: Secret,
	/// OAuth 2.0 client identifier.
	pub client_id: String,
	/// OAuth 2.0 client secret.
	pub client_secret: Secret,
}
impl Credentials {
	/// Bundles the four connector values issued by the PIM.
	pub fn new(
		username: impl Into<String>,
		password: impl Into<String>,
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
	) -> Self {
		Self {
			username: username.into(),
			password: Secret::new(password),
			client_id: client_id.into(),
			client_secret: Secret::new(client_secret),
		}
	}
}

/// Immutable configuration supplied at client construction.
#[derive(Clone, Debug)]
pub struct ClientConfig {
	/// Connector credentials used for every token exchange.
	pub credentials: Credentials,
	/// PIM API base URL, e.g. `https://pim.example.com`.
	pub api_base_url: Url,
	/// Emits a debug log line per dispatched request when set.
	pub debug: bool,
}
impl ClientConfig {
	/// Creates a configuration for the given base URL and credentials.
	pub fn new(api_base_url: Url, credentials: Credentials) -> Self {
		Self { credentials, api_base_url, debug: false }
	}

	/// Enables per-request debug logging.
	pub fn with_debug(mut self) -> Self {
		self.debug = true;

		self
	}

	/// Returns the Basic authorization header value for the token endpoint.
	///
	/// The encoding depends only on construction-time values, so callers may compute it once and
	/// share it for the life of the client.
	pub(crate) fn basic_authorization(&self) -> String {
		let pair = format!(
			"{}:{}",
			self.credentials.client_id,
			self.credentials.client_secret.expose()
		);

		format!("Basic {}", BASE64.encode(pair))
	}

	/// Resolves `{api_base_url}{base_path}{path}` into a [`Url`], trimming any trailing slash on
	/// the base so path concatenation stays predictable.
	pub(crate) fn resolve_url(&self, base_path: &str, path: &str) -> Result<Url, url::ParseError> {
		let base = self.api_base_url.as_str().trim_end_matches('/');

		Url::parse(&format!("{base}{base_path}{path}"))
	}
}
