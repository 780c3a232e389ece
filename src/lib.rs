/*!
Replaces discord style emoji codes like `:sun_with_face:` in arbitrary
text with the emoji they stand for.

- [`EmojiMap`]: immutable code to emoji table, either the bundled
  discord one ([`EmojiMap::discord`]) or one built from your own entries
- [`Replacer`]: single pass, regex free `:code:` replacement on top of
  an [`EmojiMap`]
- queries like [`EmojiMap::entries_with_prefix`] for autocompletion

```
use emojimap::{EmojiMap, Replacer};

let map = EmojiMap::discord();

assert_eq!(
	Replacer::new(&map).replace_all("I am :CRY: but :sunglasses:"),
	"I am 😢 but 😎"
);
assert_eq!(map.get_emoji("lion"), Some("🦁"));
```
*/

#![forbid(unsafe_code)]
#![deny(
	unused_imports,
	unused_must_use,
	dead_code,
	unstable_name_collisions,
	unused_assignments
)]
#![deny(clippy::all, clippy::perf, clippy::nursery, clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod fold;
mod map;
mod mapping;
mod query;
mod replacer;

pub use crate::{
	error::{Error, Result},
	fold::fold,
	map::EmojiMap,
	replacer::Replacer,
};
