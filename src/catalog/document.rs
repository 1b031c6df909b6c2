//! Declarative catalog documents.
//!
//! Catalogs may be supplied as JSON configuration documents instead of code. Loading runs the
//! same [`Catalog::validate`] pass as programmatic construction, so the source format never
//! weakens the invariants.

// self
use crate::{_prelude::*, catalog::Catalog};

/// Errors raised while loading a declarative catalog document.
#[derive(Debug, ThisError)]
pub enum DocumentError {
	/// The document is not a valid catalog; the error names the failing JSON path.
	#[error("Catalog document is malformed at `{}`.", .source.path())]
	Parse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// The document parsed but the catalog it describes is inconsistent.
	#[error(transparent)]
	Invalid(#[from] crate::catalog::CatalogError),
}

impl Catalog {
	/// Loads and validates a catalog from a JSON document.
	pub fn from_json_str(document: &str) -> Result<Self, DocumentError> {
		let mut deserializer = serde_json::Deserializer::from_str(document);
		let catalog: Self = serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| DocumentError::Parse { source })?;

		catalog.validate()?;

		Ok(catalog)
	}

	/// Loads and validates a catalog from raw JSON bytes.
	pub fn from_json_slice(document: &[u8]) -> Result<Self, DocumentError> {
		let mut deserializer = serde_json::Deserializer::from_slice(document);
		let catalog: Self = serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| DocumentError::Parse { source })?;

		catalog.validate()?;

		Ok(catalog)
	}
}
