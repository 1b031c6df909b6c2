//! Demonstrates seeding an in-memory store from a code-built catalog, then proving the run is
//! idempotent by seeding a second time.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
// self
use oidc_bootstrap::{
	catalog::{ApiResource, Catalog, Client, GrantFlow, IdentityResource},
	seed::Seeder,
	store::{ConfigStore, EntityKind, MemoryStore},
	url::Url,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let clients = vec![
		Client::builder("client")?
			.client_name("Client Credentials Client")
			.flow(GrantFlow::ClientCredentials)
			.secret("373f4671-0c18-48d6-9da3-962b1c81299a")
			.allowed_scopes(["api1"])?
			.build()?,
		Client::builder("spa")?
			.client_name("SPA Client")
			.flow(GrantFlow::Implicit)
			.secret("373f4671-0c18-48d6-9da3-962b1c81299a")
			.allow_access_tokens_via_browser(true)
			.redirect_uri(Url::parse("http://localhost:3000/user/login")?)
			.allowed_cors_origin("http://localhost:3000")
			.allowed_scopes(["openid", "profile", "api1"])?
			.build()?,
	];
	let catalog = Catalog::new(
		IdentityResource::standard(),
		vec![ApiResource::new("api1".parse()?).display_name("My API #1")],
		clients,
	);
	let store_backend = Arc::new(MemoryStore::default());
	let store: Arc<dyn ConfigStore> = store_backend.clone();
	let seeder = Seeder::new(store, catalog);
	let report = seeder.run().await?;

	println!(
		"seeded {} entities (clients: {:?}, identity: {:?}, api: {:?})",
		report.total_inserted(),
		report.clients,
		report.identity_resources,
		report.api_resources,
	);

	let rerun = seeder.run().await?;

	println!("re-run inserted {} entities (all categories skipped)", rerun.total_inserted());

	let spa = store_backend
		.fetch(EntityKind::Client, "spa")
		.await?
		.expect("The SPA client was seeded above.");

	println!("spa record: {spa:?}");

	Ok(())
}
