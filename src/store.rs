//! Storage contracts and built-in store backends for seeded configuration.

pub mod file;
pub mod memory;
pub mod record;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use record::*;

// self
use crate::_prelude::*;

/// Persistence contract future for configuration stores.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + 'a + Send>>;

/// The three configuration categories a store partitions entities into.
///
/// The seed reconciler treats each category independently: emptiness is checked per category
/// and category batches commit as a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
	/// Registered client applications.
	Client,
	/// Identity resources (claims bundles).
	IdentityResource,
	/// API resources (protected audiences).
	ApiResource,
}
impl EntityKind {
	/// Returns a stable label suitable for diagnostics, spans, and metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			EntityKind::Client => "client",
			EntityKind::IdentityResource => "identity_resource",
			EntityKind::ApiResource => "api_resource",
		}
	}
}
impl Display for EntityKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Storage backend contract the seed reconciler depends on.
///
/// Implementations must enforce a uniqueness constraint on each category's natural key: when
/// several replicas race the emptiness check during startup, the constraint is the backstop
/// that keeps duplicate catalog rows out (the reconciler performs no distributed locking).
/// `insert_all` is transactional per call: from the perspective of a concurrent reader
/// performing [`is_empty`](Self::is_empty), either every record of the batch is visible or
/// none is.
pub trait ConfigStore
where
	Self: Send + Sync,
{
	/// Returns true when no entity of the category exists.
	fn is_empty(&self, kind: EntityKind) -> StoreFuture<'_, bool>;

	/// Counts the entities persisted in the category.
	fn count(&self, kind: EntityKind) -> StoreFuture<'_, u64>;

	/// Fetches a persisted entity by its natural key, if present.
	fn fetch<'a>(
		&'a self,
		kind: EntityKind,
		natural_key: &'a str,
	) -> StoreFuture<'a, Option<ConfigRecord>>;

	/// Appends a whole category batch as one unit; nothing is inserted on failure.
	fn insert_all(&self, kind: EntityKind, records: Vec<ConfigRecord>) -> StoreFuture<'_, ()>;
}

/// Error type produced by [`ConfigStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum StoreError {
	/// Serialization failures surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
	/// The natural-key uniqueness constraint rejected an insert.
	#[error("Uniqueness conflict for {} `{}`.", .key.kind, .key.natural_key)]
	Conflict {
		/// The key that already exists.
		key: StoreKey,
	},
	/// A record was handed to a category it does not belong to.
	#[error("Record of kind {actual} cannot be inserted into the {expected} category.")]
	KindMismatch {
		/// Category the operation targeted.
		expected: EntityKind,
		/// Category the record belongs to.
		actual: EntityKind,
	},
}

/// Unique key identifying a persisted configuration entity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreKey {
	/// Category component.
	pub kind: EntityKind,
	/// Natural key within the category (client identifier or resource name).
	pub natural_key: String,
}
impl StoreKey {
	/// Builds a key for the provided category and natural key.
	pub fn new(kind: EntityKind, natural_key: impl Into<String>) -> Self {
		Self { kind, natural_key: natural_key.into() }
	}
}
