//! Demonstrates loading a declarative JSON catalog document and seeding it into a file-backed
//! store that survives restarts.

// std
use std::{env, process, sync::Arc};
// crates.io
use color_eyre::Result;
// self
use oidc_bootstrap::{
	catalog::Catalog,
	seed::{Environment, SeedPolicy, Seeder},
	store::{ConfigStore, FileStore},
};

const CATALOG_DOCUMENT: &str = r#"{
	"identity_resources": [
		{ "name": "openid", "claim_types": ["sub"] },
		{ "name": "profile", "claim_types": ["name", "website"] }
	],
	"api_resources": [
		{ "name": "api1", "display_name": "My API #1" }
	],
	"clients": [
		{
			"client_id": "worker",
			"client_name": "Background Worker",
			"flow": "client_credentials",
			"secrets": ["373f4671-0c18-48d6-9da3-962b1c81299a"],
			"allowed_scopes": ["api1"]
		}
	]
}"#;

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let catalog = Catalog::from_json_str(CATALOG_DOCUMENT)?;
	let path = env::temp_dir().join(format!("oidc_bootstrap_demo_{}.json", process::id()));
	let store: Arc<dyn ConfigStore> = Arc::new(FileStore::open(&path)?);
	let seeder = Seeder::new(store, catalog);

	// The default policy seeds development deployments only; production configuration is
	// expected to arrive through an administrative path instead.
	match seeder.run_if_allowed(SeedPolicy::default(), Environment::Development).await? {
		Some(report) => println!("seeded {} entities into {}", report.total_inserted(), path.display()),
		None => println!("seeding was gated off by policy"),
	}

	let skipped = seeder.run_if_allowed(SeedPolicy::default(), Environment::Production).await?;

	println!("production run seeded anything: {}", skipped.is_some());

	Ok(())
}
