//! custom emojimap errors

use thiserror::Error;

///
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
	///
	#[error("emoji code must not be empty")]
	EmptyCode,

	///
	#[error("emoji code `{0}` must not contain a colon")]
	CodeContainsColon(String),

	///
	#[error("emoji code `{0}` is mapped to an empty emoji")]
	EmptyEmoji(String),
}

///
pub type Result<T> = std::result::Result<T, Error>;
