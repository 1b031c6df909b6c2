//! Simple file-backed [`ConfigStore`] for lightweight deployments and demos.

// std
use std::{
	fs::{self, File},
	io::Write,
	path::{Path, PathBuf},
};
// self
use crate::{
	_prelude::*,
	store::{ConfigRecord, ConfigStore, EntityKind, StoreError, StoreFuture, StoreKey, memory},
};

/// Persists configuration records to a JSON file after each mutation.
#[derive(Clone, Debug)]
pub struct FileStore {
	path: PathBuf,
	inner: Arc<RwLock<HashMap<StoreKey, ConfigRecord>>>,
}
impl FileStore {
	/// Opens (or creates) a store at the provided path, eagerly loading existing data.
	pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
		let path = path.into();

		Self::ensure_parent_exists(&path)?;

		let snapshot = if path.exists() { Self::load_snapshot(&path)? } else { HashMap::new() };

		Ok(Self { path, inner: Arc::new(RwLock::new(snapshot)) })
	}

	fn load_snapshot(path: &Path) -> Result<HashMap<StoreKey, ConfigRecord>, StoreError> {
		if !path.exists() {
			return Ok(HashMap::new());
		}

		let metadata = path.metadata().map_err(|e| StoreError::Backend {
			message: format!("Failed to inspect {}: {e}", path.display()),
		})?;

		if metadata.len() == 0 {
			return Ok(HashMap::new());
		}

		let bytes = fs::read(path).map_err(|e| StoreError::Backend {
			message: format!("Failed to read {}: {e}", path.display()),
		})?;

		let entries: Vec<(StoreKey, ConfigRecord)> =
			serde_json::from_slice(&bytes).map_err(|e| StoreError::Serialization {
				message: format!("Failed to parse {}: {e}", path.display()),
			})?;

		Ok(entries.into_iter().collect())
	}

	fn ensure_parent_exists(path: &Path) -> Result<(), StoreError> {
		if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
			fs::create_dir_all(parent).map_err(|e| StoreError::Backend {
				message: format!("Failed to create store directory {}: {e}", parent.display()),
			})?;
		}
		Ok(())
	}

	fn persist(&self, contents: &HashMap<StoreKey, ConfigRecord>) -> Result<(), StoreError> {
		Self::ensure_parent_exists(&self.path)?;

		let snapshot: Vec<_> = contents.iter().collect();
		let serialized =
			serde_json::to_vec_pretty(&snapshot).map_err(|e| StoreError::Serialization {
				message: format!("Failed to serialize store snapshot: {e}"),
			})?;
		let mut tmp_path = self.path.clone();

		tmp_path.set_extension("tmp");

		{
			let mut file = File::create(&tmp_path).map_err(|e| StoreError::Backend {
				message: format!("Failed to create {}: {e}", tmp_path.display()),
			})?;

			file.write_all(&serialized).map_err(|e| StoreError::Backend {
				message: format!("Failed to write {}: {e}", tmp_path.display()),
			})?;
			file.sync_all().map_err(|e| StoreError::Backend {
				message: format!("Failed to sync {}: {e}", tmp_path.display()),
			})?;
		}

		fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::Backend {
			message: format!("Failed to replace {}: {e}", self.path.display()),
		})
	}
}
impl ConfigStore for FileStore {
	fn is_empty(&self, kind: EntityKind) -> StoreFuture<'_, bool> {
		Box::pin(async move { Ok(!self.inner.read().keys().any(|key| key.kind == kind)) })
	}

	fn count(&self, kind: EntityKind) -> StoreFuture<'_, u64> {
		Box::pin(
			async move { Ok(self.inner.read().keys().filter(|key| key.kind == kind).count() as u64) },
		)
	}

	fn fetch<'a>(
		&'a self,
		kind: EntityKind,
		natural_key: &'a str,
	) -> StoreFuture<'a, Option<ConfigRecord>> {
		Box::pin(async move { Ok(self.inner.read().get(&StoreKey::new(kind, natural_key)).cloned()) })
	}

	fn insert_all(&self, kind: EntityKind, records: Vec<ConfigRecord>) -> StoreFuture<'_, ()> {
		Box::pin(async move {
			let mut guard = self.inner.write();
			let staged = memory::stage_batch(&guard, kind, records)?;
			// Persist the prospective snapshot first so a failed write leaves both the file
			// and the in-memory view untouched.
			let mut updated = guard.clone();

			updated.extend(staged);
			self.persist(&updated)?;

			*guard = updated;

			Ok(())
		})
	}
}
