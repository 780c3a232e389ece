use thiserror::Error;

///
#[derive(Error, Debug)]
pub enum ExtractError {
	///
	#[error("emoji catalog not found in asset")]
	CatalogNotFound,

	///
	#[error("emoji catalog holds no emojis")]
	EmptyCatalog,

	///
	#[error("catalog pattern error: {0}")]
	Pattern(#[from] regex::Error),

	///
	#[error("malformed emoji catalog: {0}")]
	Json(#[from] serde_json::Error),

	///
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
}

///
pub type Result<T> = std::result::Result<T, ExtractError>;
