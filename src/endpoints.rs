//! Static catalog of REST resource endpoints.
//!
//! Pure data: each entry maps a path template and verb onto the dispatcher. Placeholder segments
//! (`:code`) are resolved by the facade through a real-URL override once the caller has
//! substituted path parameters.

// crates.io
use reqwest::Method;

/// One `(path, verb)` entry of the endpoint catalog.
#[derive(Clone, Debug)]
pub struct Endpoint {
	/// Path template below the REST root, possibly containing placeholder segments.
	pub path: &'static str,
	/// HTTP verb the endpoint accepts.
	pub method: Method,
}

/// `POST /products`: create one product.
pub const PRODUCT_CREATE: Endpoint = Endpoint { path: "/products", method: Method::POST };
/// `PATCH /products`: update/create several products via the bulk collection format.
pub const PRODUCT_UPSERT_MANY: Endpoint = Endpoint { path: "/products", method: Method::PATCH };
/// `GET /products`: paginated product list.
pub const PRODUCT_LIST: Endpoint = Endpoint { path: "/products", method: Method::GET };
/// `GET /products/:code`: fetch one product.
pub const PRODUCT_GET: Endpoint = Endpoint { path: "/products/:code", method: Method::GET };
/// `DELETE /products/:code`: delete one product.
pub const PRODUCT_DELETE: Endpoint = Endpoint { path: "/products/:code", method: Method::DELETE };
/// `POST /media-files`: multipart media file upload.
pub const MEDIA_FILE_CREATE: Endpoint = Endpoint { path: "/media-files", method: Method::POST };
/// `GET /media-files/:code/download`: streaming media file download.
pub const MEDIA_FILE_DOWNLOAD: Endpoint =
	Endpoint { path: "/media-files/:code/download", method: Method::GET };
/// `GET /attributes/:code`: fetch one attribute.
pub const ATTRIBUTE_GET: Endpoint = Endpoint { path: "/attributes/:code", method: Method::GET };
/// `GET /attributes/:attribute_code/options/:code`: fetch one attribute option.
pub const ATTRIBUTE_OPTION_GET: Endpoint =
	Endpoint { path: "/attributes/:attribute_code/options/:code", method: Method::GET };
/// `GET /attributes/:code/options`: paginated attribute option list.
pub const ATTRIBUTE_OPTION_LIST: Endpoint =
	Endpoint { path: "/attributes/:code/options", method: Method::GET };
/// `PATCH /attributes/:code/options`: bulk attribute option upsert.
pub const ATTRIBUTE_OPTION_UPSERT_MANY: Endpoint =
	Endpoint { path: "/attributes/:code/options", method: Method::PATCH };
/// `GET /categories`: paginated category list.
pub const CATEGORY_LIST: Endpoint = Endpoint { path: "/categories", method: Method::GET };
/// `PATCH /categories`: bulk category upsert.
pub const CATEGORY_UPSERT_MANY: Endpoint =
	Endpoint { path: "/categories", method: Method::PATCH };
/// `GET /categories/:code`: fetch one category.
pub const CATEGORY_GET: Endpoint = Endpoint { path: "/categories/:code", method: Method::GET };
/// `GET /channels/:code`: fetch one channel.
pub const CHANNEL_GET: Endpoint = Endpoint { path: "/channels/:code", method: Method::GET };
