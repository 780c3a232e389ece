use crate::{
	catalog::{Emoji, EmojiGroups},
	error::Result,
};
use scopetime::scope_time;
use std::{
	collections::HashMap,
	fs::File,
	io::{BufWriter, Write},
	path::Path,
};

const HEADER: &str = "\
// @generated by extractmap from the discord client emoji catalog.
// Do not edit by hand, rerun `extractmap --path <asset.js>` instead.

pub(crate) static EMOJI_ENTRIES: &[(&str, &str)] = &[
";

const FOOTER: &str = "];\n";

/// `(code, emoji)` pairs in catalog order
#[derive(Debug, Default)]
pub struct Mapping {
	pub entries: Vec<(String, String)>,
	/// names dropped for being empty, containing `:` or lacking an emoji
	pub skipped: usize,
	/// names already taken by a different emoji
	pub conflicts: usize,
	index: HashMap<String, usize>,
}

impl Mapping {
	/// Flattens all categories (in name order) into one list of codes,
	/// each emoji followed by its skin tone variants.
	pub fn from_groups(groups: &EmojiGroups) -> Self {
		scope_time!("mapping_from_groups");

		let mut mapping = Self::default();
		for (category, emojis) in groups {
			log::debug!("{category}: {} emojis", emojis.len());

			for emoji in emojis {
				if emoji.has_diversity || emoji.has_multi_diversity {
					log::trace!(
						"{:?}: {} skin tones",
						emoji.names,
						emoji.diversity_children.len()
					);
				}

				mapping.add(emoji);
				for child in &emoji.diversity_children {
					mapping.add(child);
				}
			}
		}

		mapping
	}

	fn add(&mut self, emoji: &Emoji) {
		if emoji.surrogates.is_empty() {
			log::warn!("skipping {:?}: no emoji", emoji.names);
			self.skipped += emoji.names.len();
			return;
		}

		for name in &emoji.names {
			if name.is_empty() || name.contains(':') {
				log::warn!("skipping invalid code {name:?}");
				self.skipped += 1;
				continue;
			}

			let code = name.to_ascii_lowercase();
			if let Some(&existing) = self.index.get(&code) {
				let (_, kept) = &self.entries[existing];
				if *kept != emoji.surrogates {
					log::warn!(
						"code {code:?} is taken by {kept:?}, dropping {:?}",
						emoji.surrogates
					);
					self.conflicts += 1;
				}
				continue;
			}

			self.index.insert(code.clone(), self.entries.len());
			self.entries.push((code, emoji.surrogates.clone()));
		}
	}

	/// writes the mapping as rust source defining `EMOJI_ENTRIES`
	pub fn write_source(&self, out: &mut impl Write) -> Result<()> {
		scope_time!("write_source");

		out.write_all(HEADER.as_bytes())?;
		for (code, emoji) in &self.entries {
			writeln!(
				out,
				"\t(\"{}\", \"{}\"),",
				code.escape_default(),
				emoji.escape_default()
			)?;
		}
		out.write_all(FOOTER.as_bytes())?;

		Ok(())
	}

	/// creates or truncates `path`
	pub fn write_file(&self, path: &Path) -> Result<()> {
		let mut out = BufWriter::new(File::create(path)?);
		self.write_source(&mut out)?;
		out.flush()?;

		Ok(())
	}
}
