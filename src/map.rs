use crate::{
	error::{Error, Result},
	fold::fold,
	mapping::EMOJI_ENTRIES,
};
use scopetime::scope_time;
use std::{borrow::Cow, collections::HashMap};

type Text = Cow<'static, str>;

/// Immutable lookup table from lowercase emoji code (without colons)
/// to the emoji it stands for.
///
/// Build it once and share it by reference, e.g. between any number of
/// [`crate::Replacer`]s on any number of threads.
#[derive(Debug, Clone, Default)]
pub struct EmojiMap {
	map: HashMap<Text, Text>,
}

impl EmojiMap {
	/// the codes used by the discord client, see `extractmap`
	pub fn discord() -> Self {
		scope_time!("emoji_map_discord");

		let mut map = HashMap::with_capacity(EMOJI_ENTRIES.len());
		map.extend(EMOJI_ENTRIES.iter().map(|&(code, emoji)| {
			(Cow::Borrowed(code), Cow::Borrowed(emoji))
		}));

		log::debug!("discord emoji map: {} codes", map.len());

		Self { map }
	}

	/// Builds a map from arbitrary `(code, emoji)` pairs.
	///
	/// Codes are folded to lowercase. Codes have to be non-empty and
	/// may not contain `:`, emojis have to be non-empty. If the same
	/// code shows up twice the later entry wins.
	pub fn from_entries<I, C, E>(entries: I) -> Result<Self>
	where
		I: IntoIterator<Item = (C, E)>,
		C: Into<Text>,
		E: Into<Text>,
	{
		scope_time!("emoji_map_from_entries");

		let mut map = HashMap::new();
		for (code, emoji) in entries {
			let code = normalize_code(code.into())?;
			let emoji = emoji.into();
			if emoji.is_empty() {
				return Err(Error::EmptyEmoji(code.into_owned()));
			}

			if let Some(old) = map.insert(code, emoji) {
				log::debug!("replaced emoji {:?}", old);
			}
		}

		log::debug!("emoji map: {} codes", map.len());

		Ok(Self { map })
	}

	/// exact, case sensitive lookup
	#[inline]
	pub fn get(&self, code: &str) -> Option<&str> {
		self.map.get(code).map(|emoji| &**emoji)
	}

	/// Exact lookup first, then a second try with `code` folded to
	/// lowercase. The second lookup is skipped if folding changes
	/// nothing.
	#[inline]
	pub fn lookup(&self, code: &str) -> Option<&str> {
		self.get(code).or_else(|| {
			fold(code).and_then(|lowered| self.get(&lowered))
		})
	}

	///
	pub fn len(&self) -> usize {
		self.map.len()
	}

	///
	pub fn is_empty(&self) -> bool {
		self.map.is_empty()
	}

	/// all `(code, emoji)` pairs in no particular order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
		self.map.iter().map(|(code, emoji)| (&**code, &**emoji))
	}
}

fn normalize_code(code: Text) -> Result<Text> {
	if code.is_empty() {
		return Err(Error::EmptyCode);
	}

	if code.contains(':') {
		return Err(Error::CodeContainsColon(code.into_owned()));
	}

	Ok(fold(&code).map_or(code, Cow::Owned))
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use std::collections::HashSet;

	#[test]
	fn test_discord_map_contains_all_generated_codes() {
		let map = EmojiMap::discord();

		let unique: HashSet<_> =
			EMOJI_ENTRIES.iter().map(|(code, _)| code).collect();
		assert_eq!(unique.len(), EMOJI_ENTRIES.len());
		assert_eq!(map.len(), EMOJI_ENTRIES.len());
		assert!(!map.is_empty());
	}

	#[test]
	fn test_generated_entries_are_valid() {
		for &(code, emoji) in EMOJI_ENTRIES {
			assert!(!code.is_empty());
			assert!(!code.contains(':'), "{code}");
			assert_eq!(fold(code), None, "{code}");
			assert!(!emoji.is_empty(), "{code}");
			assert!(!emoji.contains(':'), "{code}");
		}
	}

	#[test]
	fn test_get_is_case_sensitive() {
		let map = EmojiMap::discord();

		assert_eq!(map.get("cry"), Some("\u{1f622}"));
		assert_eq!(map.get("CRY"), None);
		assert_eq!(map.get(""), None);
		assert_eq!(map.get(":cry:"), None);
	}

	#[test]
	fn test_lookup_folds_case() {
		let map = EmojiMap::discord();

		assert_eq!(map.lookup("cry"), Some("\u{1f622}"));
		assert_eq!(map.lookup("CRY"), Some("\u{1f622}"));
		assert_eq!(map.lookup("Sun_With_Face"), Some("\u{1f31e}"));
		assert_eq!(map.lookup("CRYÖ"), None);
	}

	#[test]
	fn test_from_entries_folds_codes() {
		let map = EmojiMap::from_entries([
			("Rocket", "\u{1f680}"),
			("tada", "\u{1f389}"),
		])
		.unwrap();

		assert_eq!(map.len(), 2);
		assert_eq!(map.get("rocket"), Some("\u{1f680}"));
		assert_eq!(map.get("Rocket"), None);
		assert_eq!(map.lookup("ROCKET"), Some("\u{1f680}"));
	}

	#[test]
	fn test_from_entries_accepts_owned_strings() {
		let entries = vec![(String::from("wave"), String::from("👋"))];
		let map = EmojiMap::from_entries(entries).unwrap();

		assert_eq!(map.iter().collect::<Vec<_>>(), vec![("wave", "👋")]);
	}

	#[test]
	fn test_from_entries_later_code_wins() {
		let map =
			EmojiMap::from_entries([("ok", "🆗"), ("OK", "👌")]).unwrap();

		assert_eq!(map.len(), 1);
		assert_eq!(map.get("ok"), Some("👌"));
	}

	#[test]
	fn test_from_entries_rejects_invalid_entries() {
		assert_eq!(
			EmojiMap::from_entries([("", "👋")]).unwrap_err(),
			Error::EmptyCode
		);
		assert_eq!(
			EmojiMap::from_entries([("wa:ve", "👋")]).unwrap_err(),
			Error::CodeContainsColon(String::from("wa:ve"))
		);
		assert_eq!(
			EmojiMap::from_entries([("Wave", "")]).unwrap_err(),
			Error::EmptyEmoji(String::from("wave"))
		);
	}

	#[test]
	fn test_default_map_is_empty() {
		let map = EmojiMap::default();

		assert!(map.is_empty());
		assert_eq!(map.lookup("cry"), None);
	}
}
