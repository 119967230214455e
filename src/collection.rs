//! Helpers for the vendor's newline-delimited-JSON bulk "collection" wire format and the search
//! parameter encodings that accompany it.
//!
//! A collection is not a container but a serialization format with two inverse transforms:
//! encoding joins one JSON object per line, decoding splits and parses the lines back in the same
//! order. Bulk upsert endpoints consume and produce this format; line order matches
//! the caller-supplied array order and the per-item result order.

// crates.io
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
// self
use crate::{_prelude::*, error::UsageError};

/// Content type the PIM requires for bulk collection payloads.
pub const COLLECTION_CONTENT_TYPE: &str = "application/vnd.akeneo.collection+json";

/// Body returned by a bulk endpoint: the newline-delimited collection text, or the single JSON
/// object some endpoints echo back on edge cases instead of a collection.
#[derive(Clone, Debug)]
pub enum CollectionPayload {
	/// Newline-delimited JSON text.
	Collection(String),
	/// A lone JSON object, decoded as a one-element result.
	Single(Value),
}

/// Serializes each item to JSON and joins the lines with `\n`.
pub fn array_to_collection<T>(items: &[T]) -> Result<String>
where
	T: Serialize,
{
	let lines =
		items.iter().map(serde_json::to_string).collect::<Result<Vec<_>, serde_json::Error>>()?;

	Ok(lines.join("\n"))
}

/// Decodes a bulk payload into an ordered array, wrapping a lone object as one element.
///
/// Empty collection text decodes to an empty vec.
pub fn collection_to_array<T>(payload: CollectionPayload) -> Result<Vec<T>>
where
	T: DeserializeOwned,
{
	match payload {
		CollectionPayload::Single(value) => {
			let item = serde_path_to_error::deserialize(value)
				.map_err(|source| Error::Decode { source })?;

			Ok(vec![item])
		},
		CollectionPayload::Collection(text) => {
			if text.trim().is_empty() {
				return Ok(Vec::new());
			}

			text.lines()
				.map(|line| {
					let mut deserializer = serde_json::Deserializer::from_str(line);

					serde_path_to_error::deserialize(&mut deserializer)
						.map_err(|source| Error::Decode { source })
				})
				.collect()
		},
	}
}

/// Replaces a nested `search` value with its serialized-JSON string form.
///
/// The PIM expects search filters as a JSON string inside the query, not as a nested object.
pub fn format_search(query: &mut Map<String, Value>) {
	if let Some(search) = query.get_mut("search")
		&& !search.is_string()
	{
		*search = Value::String(search.to_string());
	}
}

/// Extracts the `search_after` cursor from a next-page URL for manual pagination continuation.
pub fn parse_search_after(url: &str) -> Result<String> {
	Url::parse(url)?
		.query_pairs()
		.find(|(key, _)| key == "search_after")
		.map(|(_, value)| value.into_owned())
		.ok_or_else(|| UsageError::MissingSearchAfter { url: url.to_owned() }.into())
}
