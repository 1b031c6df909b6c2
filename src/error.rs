//! Bootstrap-level error types shared across the catalog, documents, and stores.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical bootstrap error exposed by public APIs.
///
/// Every variant is fatal to startup: a process must not begin serving requests
/// with an inconsistent catalog or a partially applied configuration.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Catalog entries failed consistency validation.
	#[error(transparent)]
	Catalog(#[from] crate::catalog::CatalogError),
	/// A declarative catalog document could not be loaded.
	#[error(transparent)]
	Document(#[from] crate::catalog::DocumentError),
	/// Storage-layer failure.
	#[error("{0}")]
	Storage(
		#[from]
		#[source]
		crate::store::StoreError,
	),
	/// Storage-layer failure while seeding a specific category.
	#[error("Seeding the {category} category failed: {source}")]
	Seed {
		/// The category whose pass failed.
		category: crate::store::EntityKind,
		/// The underlying store failure.
		#[source]
		source: crate::store::StoreError,
	},
}
