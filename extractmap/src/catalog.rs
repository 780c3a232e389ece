use crate::error::{ExtractError, Result};
use regex::Regex;
use scopetime::scope_time;
use serde::Deserialize;
use std::collections::BTreeMap;

/// The client bundles its emoji catalog as a single quoted JSON
/// string whose first key is one of the categories.
const CATALOG_PATTERN: &str = r#"'\{"(people|activity|flags|food|nature|objects|symbols|travel)":.*\}'"#;

/// one emoji of the catalog, optionally with skin tone variants
#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Emoji {
	pub names: Vec<String>,
	/// the emoji itself
	pub surrogates: String,
	#[serde(default)]
	pub unicode_version: f64,
	#[serde(default)]
	pub has_diversity: bool,
	#[serde(default)]
	pub has_multi_diversity: bool,
	#[serde(default)]
	pub diversity_children: Vec<Emoji>,
}

/// category name -> emojis, iterates in category name order
pub type EmojiGroups = BTreeMap<String, Vec<Emoji>>;

/// finds and parses the emoji catalog embedded in a client asset
pub fn extract_catalog(asset: &str) -> Result<EmojiGroups> {
	scope_time!("extract_catalog");

	let pattern = Regex::new(CATALOG_PATTERN)?;
	let json = pattern
		.find(asset)
		.ok_or(ExtractError::CatalogNotFound)?
		.as_str()
		.trim_matches('\'');

	log::debug!("catalog json: {} bytes", json.len());

	let groups: EmojiGroups = serde_json::from_str(json)?;

	if groups.values().all(Vec::is_empty) {
		return Err(ExtractError::EmptyCatalog);
	}

	let newest = groups
		.values()
		.flatten()
		.map(|emoji| emoji.unicode_version)
		.fold(0.0, f64::max);

	log::info!(
		"catalog: {} categories ({}), unicode up to {newest}",
		groups.len(),
		groups.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
	);

	Ok(groups)
}
