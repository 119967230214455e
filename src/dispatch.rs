//! Authenticated request dispatch: URL resolution, bearer-credential merge, and vendor error
//! translation.
//!
//! The dispatcher performs exactly one HTTP call per invocation and never retries; the only
//! retry in the crate is the refresh-then-password fallback inside
//! [`TokenAuthority`](crate::auth::TokenAuthority). Raw and decoded response modes are separate
//! operations ([`Dispatcher::request_raw`] and [`Dispatcher::request`]) rather than a flag.

// crates.io
use reqwest::{
	Response,
	header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
	multipart::Form,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
// self
use crate::{
	_prelude::*,
	auth::TokenAuthority,
	collection::COLLECTION_CONTENT_TYPE,
	config::ClientConfig,
	endpoints::Endpoint,
	http::HttpClient,
};

/// Default base path prepended to every resource endpoint.
pub const REST_ROOT: &str = "/rest/v1";

/// Request body accepted by the dispatcher.
pub enum RequestBody {
	/// JSON body.
	Json(Value),
	/// Newline-delimited bulk collection text, sent with the vendor collection content type.
	Collection(String),
	/// Multipart form body.
	Multipart(Form),
}
impl Debug for RequestBody {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Json(value) => f.debug_tuple("Json").field(value).finish(),
			Self::Collection(_) => f.write_str("Collection(..)"),
			Self::Multipart(_) => f.write_str("Multipart(..)"),
		}
	}
}

/// Parameters bag for one dispatched request.
#[derive(Debug, Default)]
pub struct RequestOptions {
	/// Optional request body.
	pub body: Option<RequestBody>,
	/// Query parameters; values must be scalar once
	/// [`format_search`](crate::collection::format_search) has run.
	pub query: Option<Map<String, Value>>,
	/// Fully substituted path overriding the endpoint's placeholder template.
	pub real_url: Option<String>,
	/// Base path override; defaults to [`REST_ROOT`].
	pub base_url: Option<String>,
	/// Extra headers, merged before the bearer credential so they can override every key except
	/// `Authorization`.
	pub headers: HeaderMap,
}
impl RequestOptions {
	/// Creates an empty parameters bag.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the request body.
	pub fn with_body(mut self, body: RequestBody) -> Self {
		self.body = Some(body);

		self
	}

	/// Sets the query parameters.
	pub fn with_query(mut self, query: Map<String, Value>) -> Self {
		self.query = Some(query);

		self
	}

	/// Overrides the endpoint's path template with a fully substituted path.
	pub fn with_real_url(mut self, path: impl Into<String>) -> Self {
		self.real_url = Some(path.into());

		self
	}

	/// Overrides the default [`REST_ROOT`] base path.
	pub fn with_base_url(mut self, base: impl Into<String>) -> Self {
		self.base_url = Some(base.into());

		self
	}

	/// Appends one extra header.
	pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
		self.headers.insert(name, value);

		self
	}
}

/// Structured error body the PIM attaches to failed requests.
#[derive(Debug, Deserialize)]
struct VendorErrorBody {
	code: Option<u16>,
	message: Option<String>,
}

/// Performs fully authenticated, type-shaped HTTP calls against the PIM.
#[derive(Debug)]
pub struct Dispatcher {
	config: Arc<ClientConfig>,
	http: HttpClient,
	auth: TokenAuthority,
}
impl Dispatcher {
	/// Creates a dispatcher with a default HTTP client.
	pub fn new(config: ClientConfig) -> Self {
		Self::with_http_client(config, HttpClient::default())
	}

	/// Creates a dispatcher reusing the caller-provided HTTP client.
	///
	/// The same client is shared with the token authority, so token exchanges and resource
	/// requests use one connection pool.
	pub fn with_http_client(config: ClientConfig, http: HttpClient) -> Self {
		let config = Arc::new(config);
		let auth = TokenAuthority::new(config.clone(), http.clone());

		Self { config, http, auth }
	}

	/// Returns the configuration this dispatcher was built with.
	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Dispatches one request and decodes the response body into `R`.
	pub async fn request<R>(&self, endpoint: &Endpoint, options: RequestOptions) -> Result<R>
	where
		R: DeserializeOwned,
	{
		let response = self.dispatch(endpoint, options).await?;
		let bytes = response.bytes().await?;
		let mut deserializer = serde_json::Deserializer::from_slice(&bytes);

		serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| Error::Decode { source })
	}

	/// Dispatches one request and returns the transport response unmodified.
	///
	/// Needed for header-only results (media upload `Location`) and streaming bodies (media
	/// download, bulk collection responses).
	pub async fn request_raw(
		&self,
		endpoint: &Endpoint,
		options: RequestOptions,
	) -> Result<Response> {
		self.dispatch(endpoint, options).await
	}

	async fn dispatch(&self, endpoint: &Endpoint, options: RequestOptions) -> Result<Response> {
		let RequestOptions { body, query, real_url, base_url, headers } = options;
		let base_path = base_url.as_deref().unwrap_or(REST_ROOT);
		let path = real_url.as_deref().unwrap_or(endpoint.path);
		let url = self.config.resolve_url(base_path, path)?;

		if self.config.debug {
			tracing::debug!(method = %endpoint.method, path, "dispatching PIM request");
		}

		let bearer = self.auth.bearer_token().await?;
		let mut request = self.http.request(endpoint.method.clone(), url.clone());

		if let Some(query) = &query {
			request = request.query(query);
		}

		request = match body {
			Some(RequestBody::Json(value)) => request.json(&value),
			Some(RequestBody::Collection(text)) =>
				request.header(CONTENT_TYPE, COLLECTION_CONTENT_TYPE).body(text),
			Some(RequestBody::Multipart(form)) => request.multipart(form),
			None => request,
		};
		// Caller headers merge first; the bearer credential is applied last so nothing can
		// override the Authorization key.
		request = request.headers(headers).bearer_auth(&bearer);

		let response = request.send().await?;
		let status = response.status();

		if status.is_success() {
			return Ok(response);
		}

		let url = url.to_string();
		let bytes = response.bytes().await?;

		if let Ok(vendor) = serde_json::from_slice::<VendorErrorBody>(&bytes)
			&& let Some(message) = vendor.message
		{
			return Err(Error::Api {
				code: vendor.code.unwrap_or_else(|| status.as_u16()),
				url,
				message,
			});
		}

		Err(Error::Status { status: status.as_u16(), url })
	}
}
