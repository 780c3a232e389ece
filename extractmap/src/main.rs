/*!
Regenerates the `emojimap` code table from the emoji catalog bundled
into the discord web client.

Download the client asset holding the catalog (search the loaded
`*.js` files for `"surrogates"`), then run from the workspace root:

```sh
cargo run -p extractmap -- --path ~/Downloads/asset.js
```
*/

#![forbid(unsafe_code)]
#![deny(unused_imports, unused_must_use, dead_code)]
#![deny(clippy::unwrap_used, clippy::expect_used)]

mod args;
mod catalog;
mod codegen;
mod error;

use anyhow::{Context, Result};
use args::process_cmdline;
use catalog::extract_catalog;
use codegen::Mapping;
use scopetime::scope_time;
use std::{fs, path::Path};

fn main() -> Result<()> {
	let cliargs = process_cmdline()?;

	let asset = read_asset(&cliargs.path)?;
	let groups = extract_catalog(&asset)
		.with_context(|| format!("extracting {:?}", cliargs.path))?;

	let mapping = Mapping::from_groups(&groups);
	mapping
		.write_file(&cliargs.out)
		.with_context(|| format!("writing {:?}", cliargs.out))?;

	log::info!(
		"wrote {} codes to {:?} (skipped: {}, conflicts: {})",
		mapping.entries.len(),
		cliargs.out,
		mapping.skipped,
		mapping.conflicts,
	);

	Ok(())
}

fn read_asset(path: &Path) -> Result<String> {
	scope_time!("read_asset");

	let data = fs::read(path)
		.with_context(|| format!("reading asset {path:?}"))?;

	log::debug!("read {} bytes from {:?}", data.len(), path);

	// the catalog itself is ascii/utf8, the rest of the bundle does not matter
	Ok(String::from_utf8_lossy(&data).into_owned())
}
