//! Typed endpoint facade built entirely on the dispatcher's generic request operation.
//!
//! [`AkeneoClient`] owns one [`Dispatcher`] (and through it one token authority and credential
//! pair); per-resource accessors borrow the dispatcher, so cloning accessors is free and the
//! client can be shared behind an [`Arc`] if callers need it in several tasks.

// std
use std::path::Path;
// crates.io
use reqwest::{
	Response,
	header::LOCATION,
	multipart::{Form, Part},
};
use serde_json::{Map, Value};
use tokio::io::AsyncWriteExt;
// self
use crate::{
	_prelude::*,
	collection::{self, CollectionPayload},
	config::ClientConfig,
	dispatch::{Dispatcher, RequestBody, RequestOptions},
	endpoints::{self, Endpoint},
	error::UsageError,
	http::HttpClient,
	model::{
		AttributeOptionResponse, AttributeOptionWrite, AttributeResponse, BulkResultLine,
		CategoryResponse, CategoryWrite, ChannelResponse, MediaFileSource, MediaFileTarget,
		PaginatedResponse, ProductGetParams, ProductResponse, ProductSearchFilters, ProductWrite,
		SearchFilters,
	},
};

/// Typed client for the Akeneo PIM REST API.
#[derive(Debug)]
pub struct AkeneoClient {
	core: Dispatcher,
}
impl AkeneoClient {
	/// Creates a client with a default HTTP transport.
	pub fn new(config: ClientConfig) -> Self {
		Self { core: Dispatcher::new(config) }
	}

	/// Creates a client reusing the caller-provided HTTP transport.
	pub fn with_http_client(config: ClientConfig, http: HttpClient) -> Self {
		Self { core: Dispatcher::with_http_client(config, http) }
	}

	/// Escape hatch to the generic dispatcher for endpoints the facade does not wrap.
	pub fn dispatcher(&self) -> &Dispatcher {
		&self.core
	}

	/// Product endpoints.
	pub fn products(&self) -> ProductsApi<'_> {
		ProductsApi { core: &self.core }
	}

	/// Product media file endpoints.
	pub fn media_files(&self) -> MediaFilesApi<'_> {
		MediaFilesApi { core: &self.core }
	}

	/// Attribute endpoints.
	pub fn attributes(&self) -> AttributesApi<'_> {
		AttributesApi { core: &self.core }
	}

	/// Attribute option endpoints.
	pub fn attribute_options(&self) -> AttributeOptionsApi<'_> {
		AttributeOptionsApi { core: &self.core }
	}

	/// Category endpoints.
	pub fn categories(&self) -> CategoriesApi<'_> {
		CategoriesApi { core: &self.core }
	}

	/// Channel endpoints.
	pub fn channels(&self) -> ChannelsApi<'_> {
		ChannelsApi { core: &self.core }
	}
}

/// Product endpoints.
#[derive(Clone, Copy, Debug)]
pub struct ProductsApi<'a> {
	core: &'a Dispatcher,
}
impl ProductsApi<'_> {
	/// Creates one product.
	pub async fn create(&self, product: &ProductWrite) -> Result<()> {
		let options =
			RequestOptions::new().with_body(RequestBody::Json(serde_json::to_value(product)?));

		self.core.request_raw(&endpoints::PRODUCT_CREATE, options).await?;

		Ok(())
	}

	/// Updates/creates several products; inspect the per-line outcomes for failures.
	pub async fn upsert_many(&self, products: &[ProductWrite]) -> Result<Vec<BulkResultLine>> {
		upsert_collection(self.core, &endpoints::PRODUCT_UPSERT_MANY, None, products).await
	}

	/// Fetches one product by identifier.
	pub async fn get(&self, code: &str, params: ProductGetParams) -> Result<ProductResponse> {
		let mut options = RequestOptions::new().with_real_url(format!("/products/{code}"));
		let query = query_map(&params)?;

		if !query.is_empty() {
			options = options.with_query(query);
		}

		self.core.request(&endpoints::PRODUCT_GET, options).await
	}

	/// Fetches a page of products.
	pub async fn list(
		&self,
		filters: ProductSearchFilters,
	) -> Result<PaginatedResponse<ProductResponse>> {
		let mut query = query_map(&filters)?;

		collection::format_search(&mut query);

		self.core
			.request(&endpoints::PRODUCT_LIST, RequestOptions::new().with_query(query))
			.await
	}

	/// Deletes one product by identifier.
	pub async fn delete(&self, code: &str) -> Result<()> {
		let options = RequestOptions::new().with_real_url(format!("/products/{code}"));

		self.core.request_raw(&endpoints::PRODUCT_DELETE, options).await?;

		Ok(())
	}
}

/// Product media file endpoints.
#[derive(Clone, Copy, Debug)]
pub struct MediaFilesApi<'a> {
	core: &'a Dispatcher,
}
impl MediaFilesApi<'_> {
	/// Uploads a media file and returns the created resource's location URI.
	///
	/// The multipart body carries a `file` part plus exactly one `product`/`productModel`
	/// metadata part, matching the upload contract.
	pub async fn create(
		&self,
		source: MediaFileSource,
		target: &MediaFileTarget,
	) -> Result<String> {
		let file_part = match source {
			MediaFileSource::Path(path) => {
				let file_name = path
					.file_name()
					.map(|name| name.to_string_lossy().into_owned())
					.unwrap_or_else(|| "file".to_owned());
				let data = tokio::fs::read(&path).await?;

				Part::bytes(data).file_name(file_name)
			},
			MediaFileSource::Bytes { data, file_name } => Part::bytes(data).file_name(file_name),
		};
		let (target_name, target_json) = target.part()?;
		let form = Form::new().part("file", file_part).text(target_name, target_json);
		let options = RequestOptions::new().with_body(RequestBody::Multipart(form));
		let response = self.core.request_raw(&endpoints::MEDIA_FILE_CREATE, options).await?;
		let url = response.url().to_string();

		response
			.headers()
			.get(LOCATION)
			.and_then(|value| value.to_str().ok())
			.map(str::to_owned)
			.ok_or(Error::MissingLocation { url })
	}

	/// Starts a streaming download of one media file.
	pub async fn download(&self, code: &str) -> Result<MediaDownload> {
		let options =
			RequestOptions::new().with_real_url(format!("/media-files/{code}/download"));
		let response = self.core.request_raw(&endpoints::MEDIA_FILE_DOWNLOAD, options).await?;

		Ok(MediaDownload { response })
	}
}

/// Streaming handle for a downloaded media file.
#[derive(Debug)]
pub struct MediaDownload {
	response: Response,
}
impl MediaDownload {
	/// Unwraps the raw streaming response for custom consumption.
	pub fn into_response(self) -> Response {
		self.response
	}

	/// Persists the stream to `path`, resolving when the write completes.
	pub async fn save(mut self, path: impl AsRef<Path>) -> Result<()> {
		let path = path.as_ref();

		if path.as_os_str().is_empty() {
			return Err(UsageError::EmptyMediaPath.into());
		}

		let mut file = tokio::fs::File::create(path).await?;

		while let Some(chunk) = self.response.chunk().await? {
			file.write_all(&chunk).await?;
		}

		file.flush().await?;

		Ok(())
	}
}

/// Attribute endpoints.
#[derive(Clone, Copy, Debug)]
pub struct AttributesApi<'a> {
	core: &'a Dispatcher,
}
impl AttributesApi<'_> {
	/// Fetches one attribute by code.
	pub async fn get(&self, code: &str) -> Result<AttributeResponse> {
		let options = RequestOptions::new().with_real_url(format!("/attributes/{code}"));

		self.core.request(&endpoints::ATTRIBUTE_GET, options).await
	}
}

/// Attribute option endpoints.
#[derive(Clone, Copy, Debug)]
pub struct AttributeOptionsApi<'a> {
	core: &'a Dispatcher,
}
impl AttributeOptionsApi<'_> {
	/// Fetches one attribute option.
	pub async fn get(
		&self,
		attribute_code: &str,
		code: &str,
	) -> Result<AttributeOptionResponse> {
		let options = RequestOptions::new()
			.with_real_url(format!("/attributes/{attribute_code}/options/{code}"));

		self.core.request(&endpoints::ATTRIBUTE_OPTION_GET, options).await
	}

	/// Fetches a page of an attribute's options.
	pub async fn list(
		&self,
		attribute_code: &str,
		filters: SearchFilters,
	) -> Result<PaginatedResponse<AttributeOptionResponse>> {
		let mut query = query_map(&filters)?;

		collection::format_search(&mut query);

		let options = RequestOptions::new()
			.with_real_url(format!("/attributes/{attribute_code}/options"))
			.with_query(query);

		self.core.request(&endpoints::ATTRIBUTE_OPTION_LIST, options).await
	}

	/// Updates/creates several options of one attribute.
	pub async fn upsert_many(
		&self,
		attribute_code: &str,
		options: &[AttributeOptionWrite],
	) -> Result<Vec<BulkResultLine>> {
		upsert_collection(
			self.core,
			&endpoints::ATTRIBUTE_OPTION_UPSERT_MANY,
			Some(format!("/attributes/{attribute_code}/options")),
			options,
		)
		.await
	}
}

/// Category endpoints.
#[derive(Clone, Copy, Debug)]
pub struct CategoriesApi<'a> {
	core: &'a Dispatcher,
}
impl CategoriesApi<'_> {
	/// Fetches one category by code.
	pub async fn get(&self, code: &str) -> Result<CategoryResponse> {
		let options = RequestOptions::new().with_real_url(format!("/categories/{code}"));

		self.core.request(&endpoints::CATEGORY_GET, options).await
	}

	/// Fetches a page of categories.
	pub async fn list(
		&self,
		filters: SearchFilters,
	) -> Result<PaginatedResponse<CategoryResponse>> {
		let mut query = query_map(&filters)?;

		collection::format_search(&mut query);

		self.core
			.request(&endpoints::CATEGORY_LIST, RequestOptions::new().with_query(query))
			.await
	}

	/// Updates/creates several categories.
	pub async fn upsert_many(&self, categories: &[CategoryWrite]) -> Result<Vec<BulkResultLine>> {
		upsert_collection(self.core, &endpoints::CATEGORY_UPSERT_MANY, None, categories).await
	}
}

/// Channel endpoints.
#[derive(Clone, Copy, Debug)]
pub struct ChannelsApi<'a> {
	core: &'a Dispatcher,
}
impl ChannelsApi<'_> {
	/// Fetches one channel by code.
	pub async fn get(&self, code: &str) -> Result<ChannelResponse> {
		let options = RequestOptions::new().with_real_url(format!("/channels/{code}"));

		self.core.request(&endpoints::CHANNEL_GET, options).await
	}
}

/// Serializes a filter struct into a flat query map.
fn query_map<T>(params: &T) -> Result<Map<String, Value>>
where
	T: Serialize,
{
	match serde_json::to_value(params)? {
		Value::Object(map) => Ok(map),
		// Filter structs always serialize to objects.
		_ => Ok(Map::new()),
	}
}

/// Encodes `items` as a bulk collection, dispatches, and decodes the per-line outcomes.
async fn upsert_collection<T>(
	core: &Dispatcher,
	endpoint: &Endpoint,
	real_url: Option<String>,
	items: &[T],
) -> Result<Vec<BulkResultLine>>
where
	T: Serialize,
{
	let mut options = RequestOptions::new()
		.with_body(RequestBody::Collection(collection::array_to_collection(items)?));

	if let Some(real_url) = real_url {
		options = options.with_real_url(real_url);
	}

	let response = core.request_raw(endpoint, options).await?;
	let text = response.text().await?;

	collection::collection_to_array(CollectionPayload::Collection(text))
}
