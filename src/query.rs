//! read-only queries on top of an [`EmojiMap`]

use crate::{fold::fold, EmojiMap};
use std::collections::HashMap;

impl EmojiMap {
	/// `true` if one or more codes are mapped to `emoji`
	pub fn contains_emoji(&self, emoji: &str) -> bool {
		self.iter().any(|(_, value)| value == emoji)
	}

	/// `true` if `code` (without colons) is mapped to an emoji,
	/// ignoring ASCII case
	pub fn contains_code(&self, code: &str) -> bool {
		self.lookup(code).is_some()
	}

	/// the emoji for `code` (without colons), ignoring ASCII case
	pub fn get_emoji(&self, code: &str) -> Option<&str> {
		self.lookup(code)
	}

	/// every code mapped to `emoji`, in no particular order
	pub fn get_emoji_codes(&self, emoji: &str) -> Vec<&str> {
		self.iter()
			.filter(|(_, value)| *value == emoji)
			.map(|(code, _)| code)
			.collect()
	}

	/// Every entry whose code starts with `prefix`, ignoring ASCII case.
	///
	/// `prefix` is matched as is, so callers have to strip a leading
	/// colon themselves. An empty prefix matches nothing.
	pub fn entries_with_prefix(
		&self,
		prefix: &str,
	) -> HashMap<&str, &str> {
		if prefix.is_empty() {
			return HashMap::new();
		}

		let lowered = fold(prefix);
		let prefix = lowered.as_deref().unwrap_or(prefix);

		self.iter()
			.filter(|(code, _)| code.starts_with(prefix))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use crate::EmojiMap;
	use once_cell::sync::Lazy;
	use pretty_assertions::assert_eq;
	use std::collections::HashMap;

	static MAP: Lazy<EmojiMap> = Lazy::new(EmojiMap::discord);

	const LION: &str = "\u{1f981}";

	#[test]
	fn test_contains_emoji() {
		assert!(MAP.contains_emoji("\u{1f600}"));
		assert!(MAP.contains_emoji(LION));
		assert!(!MAP.contains_emoji(""));
		assert!(!MAP.contains_emoji("OwO"));
		assert!(!MAP.contains_emoji("grinning"));
	}

	#[test]
	fn test_contains_code() {
		assert!(MAP.contains_code("grinning"));
		assert!(MAP.contains_code("GRINNING"));
		assert!(MAP.contains_code("Thumbsup"));
		assert!(!MAP.contains_code(""));
		assert!(!MAP.contains_code(":grinning:"));
		assert!(!MAP.contains_code("incorrect code"));
		assert!(!MAP.contains_code("grinningö"));
	}

	#[test]
	fn test_get_emoji() {
		assert_eq!(MAP.get_emoji("lion"), Some(LION));
		assert_eq!(MAP.get_emoji("LION_FACE"), Some(LION));
		assert_eq!(MAP.get_emoji("lion face"), None);
		assert_eq!(MAP.get_emoji(""), None);
	}

	#[test]
	fn test_get_emoji_codes() {
		let mut codes = MAP.get_emoji_codes(LION);
		codes.sort_unstable();
		assert_eq!(codes, vec!["lion", "lion_face"]);

		assert!(MAP.get_emoji_codes(" ").is_empty());
		assert!(MAP.get_emoji_codes("").is_empty());
		assert!(MAP.get_emoji_codes("Invalid input").is_empty());
	}

	#[test]
	fn test_entries_with_prefix() {
		let lions =
			HashMap::from([("lion", LION), ("lion_face", LION)]);

		assert_eq!(MAP.entries_with_prefix("lio"), lions);
		assert_eq!(MAP.entries_with_prefix("lion"), lions);
		assert_eq!(MAP.entries_with_prefix("LIo"), lions);
		assert_eq!(
			MAP.entries_with_prefix("lion_"),
			HashMap::from([("lion_face", LION)])
		);
	}

	#[test]
	fn test_entries_with_prefix_without_matches() {
		assert!(MAP.entries_with_prefix("").is_empty());
		assert!(MAP.entries_with_prefix(" ").is_empty());
		assert!(MAP.entries_with_prefix(":lio").is_empty());
		assert!(MAP.entries_with_prefix("lioö").is_empty());
	}

	#[test]
	fn test_custom_map() {
		let map =
			EmojiMap::from_entries([("party", "🥳"), ("partying_face", "🥳")])
				.unwrap();

		assert!(map.contains_emoji("🥳"));
		assert_eq!(map.entries_with_prefix("PART").len(), 2);
		assert_eq!(map.get_emoji_codes("🥳").len(), 2);
	}
}
