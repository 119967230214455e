//! Typed request bodies for the endpoint catalog.

// std
use std::path::PathBuf;
// crates.io
use serde_json::Value;
// self
use crate::_prelude::*;

/// Product values keyed by attribute code.
pub type ProductValues = HashMap<String, Vec<ProductValue>>;

/// One scoped/localized value entry of a product attribute.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProductValue {
	/// Channel code, `null` for non-scopable attributes.
	pub scope: Option<String>,
	/// Locale code, `null` for non-localizable attributes.
	pub locale: Option<String>,
	/// Attribute data in the vendor shape.
	pub data: Value,
}

/// Product create/upsert body.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProductWrite {
	/// Product identifier (SKU).
	pub identifier: String,
	/// Whether the product is enabled.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub enabled: Option<bool>,
	/// Family code.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub family: Option<String>,
	/// Category codes.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub categories: Option<Vec<String>>,
	/// Group codes.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub groups: Option<Vec<String>>,
	/// Parent product model code.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub parent: Option<String>,
	/// Attribute values keyed by attribute code.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub values: Option<ProductValues>,
}

/// Vendor attribute type identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeType {
	/// `pim_catalog_identifier`.
	#[serde(rename = "pim_catalog_identifier")]
	Identifier,
	/// `pim_catalog_text`.
	#[serde(rename = "pim_catalog_text")]
	Text,
	/// `pim_catalog_textarea`.
	#[serde(rename = "pim_catalog_textarea")]
	Textarea,
	/// `pim_catalog_simpleselect`.
	#[serde(rename = "pim_catalog_simpleselect")]
	SimpleSelect,
	/// `pim_catalog_multiselect`.
	#[serde(rename = "pim_catalog_multiselect")]
	MultiSelect,
	/// `pim_catalog_boolean`.
	#[serde(rename = "pim_catalog_boolean")]
	Boolean,
	/// `pim_catalog_date`.
	#[serde(rename = "pim_catalog_date")]
	Date,
	/// `pim_catalog_number`.
	#[serde(rename = "pim_catalog_number")]
	Number,
	/// `pim_catalog_metric`.
	#[serde(rename = "pim_catalog_metric")]
	Metric,
	/// `pim_catalog_price_collection`.
	#[serde(rename = "pim_catalog_price_collection")]
	PriceCollection,
	/// `pim_catalog_image`.
	#[serde(rename = "pim_catalog_image")]
	Image,
	/// `pim_catalog_file`.
	#[serde(rename = "pim_catalog_file")]
	File,
	/// `pim_catalog_asset_collection`.
	#[serde(rename = "pim_catalog_asset_collection")]
	AssetCollection,
	/// `akeneo_reference_entity`.
	#[serde(rename = "akeneo_reference_entity")]
	ReferenceEntity,
	/// `akeneo_reference_entity_collection`.
	#[serde(rename = "akeneo_reference_entity_collection")]
	ReferenceEntityCollection,
	/// `pim_reference_data_simpleselect`.
	#[serde(rename = "pim_reference_data_simpleselect")]
	ReferenceDataSimpleSelect,
	/// `pim_reference_data_multiselect`.
	#[serde(rename = "pim_reference_data_multiselect")]
	ReferenceDataMultiSelect,
	/// `pim_catalog_table`.
	#[serde(rename = "pim_catalog_table")]
	Table,
}

/// Attribute option create/upsert body.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AttributeOptionWrite {
	/// Option code.
	pub code: String,
	/// Owning attribute code.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub attribute: Option<String>,
	/// Sort order among the attribute's options.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sort_order: Option<u32>,
	/// Localized labels keyed by locale code.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub labels: Option<HashMap<String, String>>,
}

/// Category create/upsert body.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CategoryWrite {
	/// Category code.
	pub code: String,
	/// Parent category code.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub parent: Option<String>,
	/// Last-update timestamp.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub updated: Option<String>,
	/// Localized labels keyed by locale code.
	pub labels: HashMap<String, String>,
}

/// Common pagination and search filters accepted by list endpoints.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SearchFilters {
	/// Page number for offset pagination.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub page: Option<u32>,
	/// Requests an item count in the response.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub with_count: Option<bool>,
	/// Pagination method, e.g. `search_after`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub pagination_type: Option<String>,
	/// Page size.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub limit: Option<u32>,
	/// Nested search filter object; serialized to its JSON string form before dispatch.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub search: Option<Value>,
	/// Cursor for `search_after` pagination.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub search_after: Option<String>,
}
impl SearchFilters {
	/// Sets the page size.
	pub fn with_limit(mut self, limit: u32) -> Self {
		self.limit = Some(limit);

		self
	}

	/// Sets the nested search filter object.
	pub fn with_search(mut self, search: Value) -> Self {
		self.search = Some(search);

		self
	}

	/// Sets the `search_after` cursor.
	pub fn with_search_after(mut self, cursor: impl Into<String>) -> Self {
		self.search_after = Some(cursor.into());

		self
	}
}

/// Product list filters: the common set plus product-only switches.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ProductSearchFilters {
	/// Common pagination and search filters.
	#[serde(flatten)]
	pub filters: SearchFilters,
	/// Channel code restricting returned values.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub scope: Option<String>,
	/// Comma-separated locale codes restricting returned values.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub locales: Option<String>,
	/// Comma-separated attribute codes restricting returned values.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub attributes: Option<String>,
	/// Includes attribute option labels in returned values.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub with_attribute_options: Option<bool>,
	/// Includes quality scores in the response.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub with_quality_scores: Option<bool>,
	/// Includes completeness data in the response.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub with_completeness: Option<bool>,
}

/// Optional switches for fetching one product.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ProductGetParams {
	/// Includes attribute option labels in returned values.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub with_attribute_options: Option<bool>,
	/// Includes quality scores in the response.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub with_quality_scores: Option<bool>,
	/// Includes completeness data in the response.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub with_completeness: Option<bool>,
}

/// Bytes of a media file upload: a filesystem path or an in-memory buffer.
#[derive(Clone, Debug)]
pub enum MediaFileSource {
	/// Read the bytes from this path; the multipart file name is the path's file name.
	Path(PathBuf),
	/// In-memory bytes with an explicit file name.
	Bytes {
		/// File contents.
		data: Vec<u8>,
		/// File name reported in the multipart part.
		file_name: String,
	},
}

/// Resource a media file upload attaches to: exactly one of product or product model.
#[derive(Clone, Debug)]
pub enum MediaFileTarget {
	/// Attach to a product value.
	Product(ProductMediaTarget),
	/// Attach to a product model value.
	ProductModel(ProductModelMediaTarget),
}
impl MediaFileTarget {
	/// Returns the multipart part name and serialized JSON metadata for this target.
	pub(crate) fn part(&self) -> Result<(&'static str, String), serde_json::Error> {
		match self {
			Self::Product(target) => Ok(("product", serde_json::to_string(target)?)),
			Self::ProductModel(target) => Ok(("productModel", serde_json::to_string(target)?)),
		}
	}
}

/// Product value a media file upload attaches to.
#[derive(Clone, Debug, Serialize)]
pub struct ProductMediaTarget {
	/// Product identifier (SKU).
	pub identifier: String,
	/// Media attribute code.
	pub attribute: String,
	/// Channel code, `null` for non-scopable attributes.
	pub scope: Option<String>,
	/// Locale code, `null` for non-localizable attributes.
	pub locale: Option<String>,
}

/// Product model value a media file upload attaches to.
#[derive(Clone, Debug, Serialize)]
pub struct ProductModelMediaTarget {
	/// Product model code.
	pub code: String,
	/// Media attribute code.
	pub attribute: String,
	/// Channel code, `null` for non-scopable attributes.
	pub scope: Option<String>,
	/// Locale code, `null` for non-localizable attributes.
	pub locale: Option<String>,
}
