use anyhow::{anyhow, Result};
use clap::{
	crate_authors, crate_description, crate_name, crate_version,
	value_parser, Arg, ArgAction, ArgMatches, Command as ClapApp,
};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::path::PathBuf;

const DEFAULT_OUT: &str = "src/mapping.rs";

pub struct CliArgs {
	/// absolute path of the client asset
	pub path: PathBuf,
	pub out: PathBuf,
}

pub fn process_cmdline() -> Result<CliArgs> {
	let arg_matches = app().get_matches();

	setup_logging(arg_matches.get_flag("logging"))?;

	cli_args(&arg_matches)
}

fn cli_args(arg_matches: &ArgMatches) -> Result<CliArgs> {
	let path = arg_matches
		.get_one::<PathBuf>("path")
		.ok_or_else(|| anyhow!("no asset path given"))?;
	let path = std::path::absolute(path).map_err(|e| {
		anyhow!("resolving absolute path of {:?}: {}", path, e)
	})?;

	let out = arg_matches
		.get_one::<PathBuf>("out")
		.cloned()
		.unwrap_or_else(|| PathBuf::from(DEFAULT_OUT));

	Ok(CliArgs { path, out })
}

fn app() -> ClapApp {
	ClapApp::new(crate_name!())
		.author(crate_authors!())
		.version(crate_version!())
		.about(crate_description!())
		.help_template(
			"\
{before-help}{name} {version}
{author}
{about}

{usage-heading} {usage}

{all-args}{after-help}
		",
		)
		.arg(
			Arg::new("path")
				.help("Discord client asset holding the emoji catalog")
				.short('p')
				.long("path")
				.value_name("ASSET_FILE")
				.env("EXTRACTMAP_PATH")
				.value_parser(value_parser!(PathBuf))
				.required(true),
		)
		.arg(
			Arg::new("out")
				.help("Rust source file to write the emoji table to")
				.short('o')
				.long("out")
				.value_name("RUST_FILE")
				.default_value(DEFAULT_OUT)
				.value_parser(value_parser!(PathBuf)),
		)
		.arg(
			Arg::new("logging")
				.help("Logs debug and timing output to stderr")
				.short('l')
				.long("logging")
				.action(ArgAction::SetTrue),
		)
}

fn setup_logging(verbose: bool) -> Result<()> {
	let level = if verbose {
		LevelFilter::Trace
	} else {
		LevelFilter::Info
	};

	WriteLogger::init(level, Config::default(), std::io::stderr())?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn test_app() {
		app().debug_assert();
	}

	#[test]
	fn test_defaults() {
		let matches = app()
			.try_get_matches_from(["extractmap", "--path", "asset.js"])
			.unwrap();
		let args = cli_args(&matches).unwrap();

		assert!(args.path.is_absolute());
		assert!(args.path.ends_with("asset.js"));
		assert_eq!(args.out, PathBuf::from(DEFAULT_OUT));
		assert!(!matches.get_flag("logging"));
	}

	#[test]
	#[cfg(unix)]
	fn test_short_flags() {
		let matches = app()
			.try_get_matches_from([
				"extractmap",
				"-p",
				"/tmp/asset.js",
				"-o",
				"table.rs",
				"-l",
			])
			.unwrap();
		let args = cli_args(&matches).unwrap();

		assert_eq!(args.path, PathBuf::from("/tmp/asset.js"));
		assert_eq!(args.out, PathBuf::from("table.rs"));
		assert!(matches.get_flag("logging"));
	}
}
