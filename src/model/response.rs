//! Typed response shapes for the endpoint catalog.

// self
use crate::{_prelude::*, model::body::ProductValues};

/// Hypermedia link.
#[derive(Clone, Debug, Deserialize)]
pub struct Link {
	/// Link target URL.
	pub href: String,
}

/// `_links` block of a paginated response.
#[derive(Clone, Debug, Deserialize)]
pub struct PageLinks {
	/// Current page.
	#[serde(rename = "self")]
	pub current: Link,
	/// First page.
	pub first: Link,
	/// Next page, absent on the last page.
	#[serde(default)]
	pub next: Option<Link>,
	/// Previous page, absent on the first page.
	#[serde(default)]
	pub previous: Option<Link>,
}

/// `_embedded` block wrapping a page of items.
#[derive(Clone, Debug, Deserialize)]
pub struct Embedded<T> {
	/// Items on this page.
	pub items: Vec<T>,
}

/// Paginated list response shared by every list endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct PaginatedResponse<T> {
	/// Current page number, absent under `search_after` pagination.
	#[serde(default)]
	pub current_page: Option<u32>,
	/// Navigation links.
	#[serde(rename = "_links")]
	pub links: PageLinks,
	/// Page contents.
	#[serde(rename = "_embedded")]
	pub embedded: Embedded<T>,
}

/// Per-line outcome of a bulk collection upsert.
///
/// Bulk endpoints report success and failure per line; the dispatcher never interprets these, so
/// callers must inspect them item by item.
#[derive(Clone, Debug, Deserialize)]
pub struct BulkResultLine {
	/// One-based line number matching the submitted collection order.
	pub line: u32,
	/// Product identifier, present on product upserts.
	#[serde(default)]
	pub identifier: Option<String>,
	/// Resource code, present on non-product upserts.
	#[serde(default)]
	pub code: Option<String>,
	/// HTTP-style status code for this line.
	pub status_code: u16,
	/// Error message, present on failed lines.
	#[serde(default)]
	pub message: Option<String>,
}

/// One product.
#[derive(Clone, Debug, Deserialize)]
pub struct ProductResponse {
	/// Product identifier (SKU).
	pub identifier: String,
	/// Whether the product is enabled.
	#[serde(default)]
	pub enabled: Option<bool>,
	/// Family code.
	#[serde(default)]
	pub family: Option<String>,
	/// Category codes.
	#[serde(default)]
	pub categories: Vec<String>,
	/// Group codes.
	#[serde(default)]
	pub groups: Vec<String>,
	/// Parent product model code.
	#[serde(default)]
	pub parent: Option<String>,
	/// Attribute values keyed by attribute code.
	#[serde(default)]
	pub values: ProductValues,
	/// Creation timestamp.
	#[serde(default)]
	pub created: Option<String>,
	/// Last-update timestamp.
	#[serde(default)]
	pub updated: Option<String>,
}

/// One attribute.
#[derive(Clone, Debug, Deserialize)]
pub struct AttributeResponse {
	/// Attribute code.
	pub code: String,
	/// Vendor attribute type identifier.
	#[serde(rename = "type")]
	pub attribute_type: String,
	/// Attribute group code.
	#[serde(default)]
	pub group: Option<String>,
	/// Localized group labels keyed by locale code.
	#[serde(default)]
	pub group_labels: HashMap<String, String>,
	/// Sort order inside the group.
	#[serde(default)]
	pub sort_order: Option<u32>,
	/// Whether values are per locale.
	#[serde(default)]
	pub localizable: Option<bool>,
	/// Whether values are per channel.
	#[serde(default)]
	pub scopable: Option<bool>,
	/// Locale codes the attribute is available in.
	#[serde(default)]
	pub available_locales: Vec<String>,
	/// Whether values must be unique.
	#[serde(default)]
	pub unique: Option<bool>,
	/// Whether the attribute can filter the product grid.
	#[serde(default)]
	pub useable_as_grid_filter: Option<bool>,
	/// Maximum text length.
	#[serde(default)]
	pub max_characters: Option<u32>,
	/// Validation rule name.
	#[serde(default)]
	pub validation_rule: Option<String>,
	/// Validation regular expression.
	#[serde(default)]
	pub validation_regexp: Option<String>,
	/// Whether the rich-text editor is enabled.
	#[serde(default)]
	pub wysiwyg_enabled: Option<bool>,
	/// Minimum numeric value.
	#[serde(default)]
	pub number_min: Option<String>,
	/// Maximum numeric value.
	#[serde(default)]
	pub number_max: Option<String>,
	/// Whether decimals are allowed.
	#[serde(default)]
	pub decimals_allowed: Option<bool>,
	/// Whether negative values are allowed.
	#[serde(default)]
	pub negative_allowed: Option<bool>,
	/// Metric family for metric attributes.
	#[serde(default)]
	pub metric_family: Option<String>,
	/// Default metric unit for metric attributes.
	#[serde(default)]
	pub default_metric_unit: Option<String>,
	/// Minimum date value.
	#[serde(default)]
	pub date_min: Option<String>,
	/// Maximum date value.
	#[serde(default)]
	pub date_max: Option<String>,
	/// Allowed file extensions for media attributes.
	#[serde(default)]
	pub allowed_extensions: Vec<String>,
	/// Maximum file size for media attributes.
	#[serde(default)]
	pub max_file_size: Option<String>,
	/// Reference data name for reference attributes.
	#[serde(default)]
	pub reference_data_name: Option<String>,
	/// Default value for boolean attributes.
	#[serde(default)]
	pub default_value: Option<bool>,
}

/// One attribute option.
#[derive(Clone, Debug, Deserialize)]
pub struct AttributeOptionResponse {
	/// Option code.
	pub code: String,
	/// Owning attribute code.
	pub attribute: String,
	/// Sort order among the attribute's options.
	#[serde(default)]
	pub sort_order: Option<u32>,
	/// Localized labels keyed by locale code.
	#[serde(default)]
	pub labels: HashMap<String, String>,
}

/// One category.
#[derive(Clone, Debug, Deserialize)]
pub struct CategoryResponse {
	/// Category code.
	pub code: String,
	/// Parent category code, `null` for root categories.
	#[serde(default)]
	pub parent: Option<String>,
	/// Last-update timestamp.
	#[serde(default)]
	pub updated: Option<String>,
	/// Position among siblings.
	#[serde(default)]
	pub position: Option<u32>,
	/// Localized labels keyed by locale code.
	#[serde(default)]
	pub labels: HashMap<String, String>,
}

/// One channel.
#[derive(Clone, Debug, Deserialize)]
pub struct ChannelResponse {
	/// Channel code.
	pub code: String,
	/// Activated currency codes.
	#[serde(default)]
	pub currencies: Vec<String>,
	/// Activated locale codes.
	#[serde(default)]
	pub locales: Vec<String>,
	/// Root of the channel's category tree.
	#[serde(default)]
	pub category_tree: Option<String>,
	/// Conversion units keyed by attribute code.
	#[serde(default)]
	pub conversion_units: HashMap<String, String>,
	/// Localized labels keyed by locale code.
	#[serde(default)]
	pub labels: HashMap<String, String>,
}
