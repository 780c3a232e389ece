use crate::EmojiMap;
use std::borrow::Cow;

const DELIMITER: u8 = b':';

/// Replaces `:code:` sequences with the emoji they map to.
///
/// ```
/// use emojimap::{EmojiMap, Replacer};
///
/// let map = EmojiMap::discord();
/// let replacer = Replacer::new(&map);
///
/// assert_eq!(replacer.replace_all("Hello :sun_with_face:"), "Hello 🌞");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Replacer<'m> {
	map: &'m EmojiMap,
}

impl<'m> Replacer<'m> {
	///
	pub const fn new(map: &'m EmojiMap) -> Self {
		Self { map }
	}

	///
	pub const fn map(&self) -> &'m EmojiMap {
		self.map
	}

	/// Replaces every `:code:` found in the map, ignoring the ASCII
	/// case of `code`.
	///
	/// Borrows `input` unless at least one code got replaced. There is
	/// no escaping and sequences never overlap: a colon that closed a
	/// replaced code can not open the next one, while the closing colon
	/// of an unknown code can.
	pub fn replace_all<'a>(&self, input: &'a str) -> Cow<'a, str> {
		// no room for a `:x:`
		if input.len() <= 2 {
			return Cow::Borrowed(input);
		}

		// a colon is never part of a multi-byte char, so scanning bytes
		// only ever stops on char boundaries
		let bytes = input.as_bytes();

		let mut out: Option<String> = None;
		let mut start: Option<usize> = None;
		let mut last_end = 0;

		for (index, &byte) in bytes.iter().enumerate() {
			if byte != DELIMITER {
				continue;
			}

			let open = match start {
				// `::` is never a code, the second colon might open one
				Some(open) if index - open > 1 => open,
				_ => {
					start = Some(index);
					continue;
				}
			};

			let code = &input[open + 1..index];
			let Some(emoji) = self.map.lookup(code) else {
				// `:unknown:known:` still has to resolve `known`
				start = Some(index);
				continue;
			};

			let out = out.get_or_insert_with(|| {
				String::with_capacity(
					input.len() - (code.len() + 2) + emoji.len(),
				)
			});
			out.push_str(&input[last_end..open]);
			out.push_str(emoji);

			start = None;
			last_end = index + 1;
		}

		match out {
			Some(mut out) => {
				out.push_str(&input[last_end..]);
				Cow::Owned(out)
			}
			None => Cow::Borrowed(input),
		}
	}

	/// Same as [`Self::replace_all`] but hands back `input` itself if
	/// nothing was replaced.
	#[inline]
	pub fn replace(&self, input: String) -> String {
		if let Cow::Owned(altered) = self.replace_all(&input) {
			altered
		} else {
			input
		}
	}
}

#[cfg(test)]
mod tests {
	use super::Replacer;
	use crate::EmojiMap;
	use once_cell::sync::Lazy;
	use pretty_assertions::assert_eq;
	use std::borrow::Cow;

	static MAP: Lazy<EmojiMap> = Lazy::new(EmojiMap::discord);

	fn replace(input: &str) -> Cow<'_, str> {
		Replacer::new(&MAP).replace_all(input)
	}

	#[test]
	fn test_replace() {
		let tests = [
			("just two double colons", "::", "::"),
			(
				"just two double colons in the middle of a sentence",
				"What a :: world.",
				"What a :: world.",
			),
			(
				"escaping currently isn't possible",
				"I am sad \\:cry:",
				"I am sad \\😢",
			),
			("no present emoji", "I am sad", "I am sad"),
			("no valid emoji", "I am sad :cry", "I am sad :cry"),
			("no valid emoji 2", "I am sad cry:", "I am sad cry:"),
			(
				"no valid emoji 3",
				"I am sad :crycry:",
				"I am sad :crycry:",
			),
			(
				"one valid emoji followed by an incomplete sequence",
				"I am sad :cry:cry:",
				"I am sad 😢cry:",
			),
			(
				"simple insentence replacement",
				"I am sad :cry:",
				"I am sad 😢",
			),
			(
				"simple single emoji replacement without text",
				":cry:",
				"😢",
			),
			(
				"two equal emojis next to each other",
				":cry::cry:",
				"😢😢",
			),
			(
				"two equal emojis with spaces around",
				" :cry: :cry: ",
				" 😢 😢 ",
			),
			(
				"two different emojis with spaces around",
				" :cry: :angry: ",
				" 😢 😠 ",
			),
			(
				"unknown code with umlaut before a known code",
				":sunglassesö:sunglasses:",
				":sunglassesö😎",
			),
			(
				"leading double colon before a known code",
				"::+1:",
				":👍",
			),
			(
				"known code followed by a stray colon",
				":cry::",
				"😢:",
			),
			(
				"colons around a replaced code",
				"::cry::",
				":😢:",
			),
			(
				"colons between two known codes",
				":cry:::::cry:",
				"😢:::😢",
			),
			(
				"unknown code before a known code",
				":nope::cry:",
				":nope:😢",
			),
			(
				"text between colons after unknown code",
				"a:qq:cry:",
				"a:qq😢",
			),
		];

		for (name, input, want) in tests {
			assert_eq!(replace(input), want, "{name}");
		}
	}

	#[test]
	fn test_ignores_case() {
		assert_eq!(replace(":CRY:"), "😢");
		assert_eq!(replace("It's :Sunglasses: time"), "It's 😎 time");
		assert_eq!(replace(":SUN_WITH_FACE::sun_with_face:"), "🌞🌞");
	}

	#[test]
	fn test_sequences_and_skin_tones() {
		assert_eq!(
			replace(":thumbsup_tone3: :family_man_woman_girl_boy:"),
			"👍\u{1f3fd} 👨\u{200d}👩\u{200d}👧\u{200d}👦"
		);
		assert_eq!(replace(":flag_de:"), "🇩🇪");
	}

	#[test]
	fn test_keeps_unknown_codes() {
		assert_eq!(
			replace("Hello :invalidcode: world"),
			"Hello :invalidcode: world"
		);
		assert_eq!(replace(":smile ö:"), ":smile ö:");
		assert_eq!(replace("10:30:45"), "10:30:45");
	}

	#[test]
	fn test_double_substitution_keeps_separator() {
		assert_eq!(replace(":sunglasses: :sunglasses:"), "😎 😎");
		assert_eq!(replace(":sunglasses:\t:sunglasses:"), "😎\t😎");
	}

	#[test]
	fn test_short_input_is_borrowed() {
		for input in ["", ":", "::", "a:", ":)", "ö"] {
			assert!(matches!(replace(input), Cow::Borrowed(s) if s == input));
		}
	}

	#[test]
	fn test_miss_is_borrowed() {
		let input = "no emoji :here: at all :: really";
		assert!(matches!(replace(input), Cow::Borrowed(_)));
	}

	#[test]
	fn test_hit_is_owned() {
		assert!(matches!(replace("a :cry: b"), Cow::Owned(_)));
	}

	#[test]
	fn test_replace_is_idempotent() {
		let inputs = [
			"I am sad :cry:cry:",
			"::cry::",
			":sunglassesö:sunglasses:",
			" :cry: :angry: ",
			":foo:cry::bar:",
		];

		for input in inputs {
			let once = replace(input).into_owned();
			assert_eq!(replace(&once), once, "{input}");
		}
	}

	#[test]
	fn test_replace_owned_reuses_allocation() {
		let replacer = Replacer::new(&MAP);

		let input = String::from("nothing to see here");
		let ptr = input.as_ptr();
		let output = replacer.replace(input);
		assert_eq!(output.as_ptr(), ptr);

		assert_eq!(replacer.replace(String::from(":cry:")), "😢");
	}

	#[test]
	fn test_empty_map_never_replaces() {
		let map = EmojiMap::default();
		let replacer = Replacer::new(&map);

		assert_eq!(replacer.replace_all(":cry:"), ":cry:");
	}

	#[test]
	fn test_shared_between_threads() {
		let replacer = Replacer::new(&MAP);

		std::thread::scope(|s| {
			let handles: Vec<_> = (0..4)
				.map(|_| s.spawn(move || replacer.replace_all(":cry:")))
				.collect();

			for handle in handles {
				assert_eq!(handle.join().unwrap(), "😢");
			}
		});
	}
}
