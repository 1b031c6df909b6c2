mod common;

// crates.io
use time::macros;
// self
use common::demo_catalog;
use oidc_bootstrap::store::{
	ApiResourceRecord, ClientRecord, ConfigRecord, ConfigStore, EntityKind,
	IdentityResourceRecord, MemoryStore, StoreError,
};

fn client_records() -> Vec<ConfigRecord> {
	let seeded_at = macros::datetime!(2026-01-01 00:00 UTC);

	demo_catalog()
		.clients
		.iter()
		.map(|client| ClientRecord::from_definition(client, seeded_at).into())
		.collect()
}

fn identity_records() -> Vec<ConfigRecord> {
	let seeded_at = macros::datetime!(2026-01-01 00:00 UTC);

	demo_catalog()
		.identity_resources
		.iter()
		.map(|resource| IdentityResourceRecord::from_definition(resource, seeded_at).into())
		.collect()
}

#[tokio::test]
async fn insert_and_fetch_round_trip() {
	let store = MemoryStore::default();

	assert!(
		store
			.is_empty(EntityKind::Client)
			.await
			.expect("Emptiness check on a fresh store should succeed."),
	);

	store
		.insert_all(EntityKind::Client, client_records())
		.await
		.expect("Inserting the client batch should succeed.");

	assert!(
		!store
			.is_empty(EntityKind::Client)
			.await
			.expect("Emptiness check on a populated store should succeed."),
	);
	assert_eq!(
		store.count(EntityKind::Client).await.expect("Counting clients should succeed."),
		3,
	);

	let fetched = store
		.fetch(EntityKind::Client, "mvc")
		.await
		.expect("Fetching a stored client should succeed.")
		.expect("Stored client should remain present.");

	assert_eq!(fetched.natural_key(), "mvc");
	assert!(
		store
			.fetch(EntityKind::Client, "missing")
			.await
			.expect("Fetching an unknown key should succeed.")
			.is_none(),
	);
}

#[tokio::test]
async fn categories_are_partitioned() {
	let store = MemoryStore::default();

	store
		.insert_all(EntityKind::IdentityResource, identity_records())
		.await
		.expect("Inserting the identity resource batch should succeed.");

	assert!(
		store
			.is_empty(EntityKind::Client)
			.await
			.expect("Client emptiness check should succeed."),
		"Identity resources must not count against the client category.",
	);
	assert!(
		store
			.fetch(EntityKind::Client, "openid")
			.await
			.expect("Cross-category fetch should succeed.")
			.is_none(),
		"A natural key is only unique within its own category.",
	);
}

#[tokio::test]
async fn conflicting_batch_inserts_nothing() {
	let store = MemoryStore::default();

	store
		.insert_all(EntityKind::Client, client_records())
		.await
		.expect("Inserting the initial client batch should succeed.");

	let fresh = Vec::from(&client_records()[..1]);
	let err = store
		.insert_all(EntityKind::Client, fresh)
		.await
		.expect_err("Re-inserting an existing key must raise a conflict.");

	assert!(
		matches!(&err, StoreError::Conflict { key } if key.natural_key == "client"),
		"Unexpected error: {err:?}",
	);
	assert_eq!(
		store.count(EntityKind::Client).await.expect("Counting clients should succeed."),
		3,
		"A conflicting batch must not change the row count.",
	);
}

#[tokio::test]
async fn duplicate_keys_within_one_batch_insert_nothing() {
	let store = MemoryStore::default();
	let mut records = client_records();

	records.push(records[0].clone());

	let err = store
		.insert_all(EntityKind::Client, records)
		.await
		.expect_err("A batch with an internal duplicate must raise a conflict.");

	assert!(matches!(err, StoreError::Conflict { .. }));
	assert!(
		store
			.is_empty(EntityKind::Client)
			.await
			.expect("Emptiness check after a failed batch should succeed."),
		"All-or-nothing: a failed batch must leave the category empty.",
	);
}

#[tokio::test]
async fn mismatched_record_kinds_are_rejected() {
	let store = MemoryStore::default();
	let api_record: ConfigRecord = ApiResourceRecord::from_definition(
		&demo_catalog().api_resources[0],
		macros::datetime!(2026-01-01 00:00 UTC),
	)
	.into();
	let err = store
		.insert_all(EntityKind::Client, vec![api_record])
		.await
		.expect_err("Inserting an API record into the client category must fail.");

	assert!(matches!(
		err,
		StoreError::KindMismatch { expected: EntityKind::Client, actual: EntityKind::ApiResource },
	));
	assert!(
		store
			.is_empty(EntityKind::Client)
			.await
			.expect("Emptiness check after a rejected batch should succeed."),
	);
}
