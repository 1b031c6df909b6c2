//! Thread-safe in-memory [`ConfigStore`] implementation for local development and tests.

// self
use crate::{
	_prelude::*,
	store::{ConfigRecord, ConfigStore, EntityKind, StoreError, StoreFuture, StoreKey},
};

type StoreMap = Arc<RwLock<HashMap<StoreKey, ConfigRecord>>>;

/// Thread-safe storage backend that keeps records in-process for tests and demos.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(StoreMap);
impl MemoryStore {
	fn is_empty_now(map: StoreMap, kind: EntityKind) -> bool {
		!map.read().keys().any(|key| key.kind == kind)
	}

	fn count_now(map: StoreMap, kind: EntityKind) -> u64 {
		map.read().keys().filter(|key| key.kind == kind).count() as u64
	}

	fn fetch_now(map: StoreMap, kind: EntityKind, natural_key: &str) -> Option<ConfigRecord> {
		map.read().get(&StoreKey::new(kind, natural_key)).cloned()
	}

	fn insert_all_now(
		map: StoreMap,
		kind: EntityKind,
		records: Vec<ConfigRecord>,
	) -> Result<(), StoreError> {
		let mut guard = map.write();
		let staged = stage_batch(&guard, kind, records)?;

		guard.extend(staged);

		Ok(())
	}
}
impl ConfigStore for MemoryStore {
	fn is_empty(&self, kind: EntityKind) -> StoreFuture<'_, bool> {
		let map = self.0.clone();

		Box::pin(async move { Ok(Self::is_empty_now(map, kind)) })
	}

	fn count(&self, kind: EntityKind) -> StoreFuture<'_, u64> {
		let map = self.0.clone();

		Box::pin(async move { Ok(Self::count_now(map, kind)) })
	}

	fn fetch<'a>(
		&'a self,
		kind: EntityKind,
		natural_key: &'a str,
	) -> StoreFuture<'a, Option<ConfigRecord>> {
		let map = self.0.clone();

		Box::pin(async move { Ok(Self::fetch_now(map, kind, natural_key)) })
	}

	fn insert_all(&self, kind: EntityKind, records: Vec<ConfigRecord>) -> StoreFuture<'_, ()> {
		let map = self.0.clone();

		Box::pin(async move { Self::insert_all_now(map, kind, records) })
	}
}

/// Validates a category batch against the existing map and returns the keyed records to
/// commit; on any failure nothing must be inserted.
pub(super) fn stage_batch(
	existing: &HashMap<StoreKey, ConfigRecord>,
	kind: EntityKind,
	records: Vec<ConfigRecord>,
) -> Result<Vec<(StoreKey, ConfigRecord)>, StoreError> {
	let mut staged = Vec::with_capacity(records.len());
	let mut batch_keys = BTreeSet::new();

	for record in records {
		if record.kind() != kind {
			return Err(StoreError::KindMismatch { expected: kind, actual: record.kind() });
		}

		let key = StoreKey::new(kind, record.natural_key());

		if existing.contains_key(&key) || !batch_keys.insert(key.natural_key.clone()) {
			return Err(StoreError::Conflict { key });
		}

		staged.push((key, record));
	}

	Ok(staged)
}
