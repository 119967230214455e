//! Client-wide error types shared across authentication, dispatch, and the endpoint facade.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Token exchange failure raised by the authentication layer.
	#[error(transparent)]
	Auth(#[from] AuthError),
	/// Caller-side contract violation.
	#[error(transparent)]
	Usage(#[from] UsageError),

	/// The PIM API rejected a request with a structured error body.
	#[error("Error {code} on '{url}': {message}")]
	Api {
		/// Vendor error code carried in the response body.
		code: u16,
		/// Fully resolved URL of the failed request.
		url: String,
		/// Vendor-supplied error message.
		message: String,
	},
	/// The PIM API answered with a non-success status and no structured error body.
	#[error("PIM API returned HTTP {status} on '{url}'.")]
	Status {
		/// HTTP status code of the response.
		status: u16,
		/// Fully resolved URL of the failed request.
		url: String,
	},
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the PIM API.")]
	Transport {
		/// Transport-specific network error.
		#[source]
		source: reqwest::Error,
	},
	/// Response body could not be decoded into the expected shape.
	#[error("Response body could not be decoded.")]
	Decode {
		/// Structured parsing failure including the offending field path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Request payload could not be serialized to JSON.
	#[error("Request payload could not be serialized.")]
	Serialize(#[from] serde_json::Error),
	/// Resolved request URL is invalid.
	#[error("Resolved request URL is invalid.")]
	InvalidUrl(#[from] url::ParseError),
	/// Response is missing the `Location` header the endpoint is contracted to return.
	#[error("Response from '{url}' is missing the Location header.")]
	MissingLocation {
		/// Fully resolved URL of the request.
		url: String,
	},
	/// Underlying IO failure surfaced while reading or writing media bytes.
	#[error("I/O error occurred while transferring media bytes.")]
	Io(#[from] std::io::Error),
}
impl From<reqwest::Error> for Error {
	fn from(e: reqwest::Error) -> Self {
		Self::Transport { source: e }
	}
}

/// Token-exchange failures raised against the OAuth token endpoint.
///
/// Refresh-grant failures never reach callers directly; [`crate::auth::TokenAuthority`] absorbs
/// them once by falling back to a password grant. Password-grant failures always propagate.
#[derive(Debug, ThisError)]
pub enum AuthError {
	/// Token endpoint answered with a non-success status.
	#[error("Token endpoint rejected the {grant} grant with HTTP {status}: {message}")]
	Rejected {
		/// Grant type label (`password` or `refresh_token`).
		grant: &'static str,
		/// HTTP status code of the rejection.
		status: u16,
		/// Response body text, when available.
		message: String,
	},
	/// Token endpoint responded with JSON that could not be parsed.
	#[error("Token endpoint returned malformed JSON.")]
	MalformedResponse {
		/// Structured parsing failure including the offending field path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Underlying HTTP client reported a network failure during the exchange.
	#[error("Network error occurred while calling the token endpoint.")]
	Transport {
		/// Transport-specific network error.
		#[source]
		source: reqwest::Error,
	},
}

/// Caller-side contract violations.
#[derive(Debug, ThisError)]
pub enum UsageError {
	/// Media download save was requested without a destination path.
	#[error("Media save path must not be empty.")]
	EmptyMediaPath,
	/// Next-page URL does not carry a `search_after` query parameter.
	#[error("URL '{url}' does not carry a search_after parameter.")]
	MissingSearchAfter {
		/// URL that was inspected.
		url: String,
	},
}
