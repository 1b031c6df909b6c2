//! Shared fixtures for the integration suites.

#![allow(dead_code)]

// std
use std::sync::Arc;
// self
use oidc_bootstrap::{
	catalog::{ApiResource, Catalog, Client, GrantFlow, IdentityResource},
	seed::Seeder,
	store::{ConfigStore, MemoryStore},
	url::Url,
};

/// Shared secret used by every fixture client registration.
pub const DEMO_SECRET: &str = "373f4671-0c18-48d6-9da3-962b1c81299a";

/// Builds the demo catalog: the five standard identity resources, one API audience, and a
/// machine/hybrid/browser client trio.
pub fn demo_catalog() -> Catalog {
	let clients = vec![
		Client::builder("client")
			.expect("Fixture client identifier should be valid.")
			.client_name("Client Credentials Client")
			.flow(GrantFlow::ClientCredentials)
			.secret(DEMO_SECRET)
			.allowed_scopes(["api1"])
			.expect("Fixture client scopes should be valid.")
			.build()
			.expect("Fixture client-credentials client should build successfully."),
		Client::builder("mvc")
			.expect("Fixture MVC client identifier should be valid.")
			.client_name("MVC Client")
			.flow(GrantFlow::Hybrid)
			.secret(DEMO_SECRET)
			.redirect_uri(url("http://localhost:5001/signin-oidc"))
			.logout_uri(url("http://localhost:5001/signout-oidc"))
			.post_logout_redirect_uri(url("http://localhost:5001/signout-callback-oidc"))
			.allow_offline_access(true)
			.allowed_scopes(["openid", "profile", "api1"])
			.expect("Fixture MVC client scopes should be valid.")
			.build()
			.expect("Fixture MVC client should build successfully."),
		Client::builder("spa")
			.expect("Fixture SPA client identifier should be valid.")
			.client_name("SPA Client")
			.client_uri(url("http://localhost:3000/"))
			.flow(GrantFlow::Implicit)
			.secret(DEMO_SECRET)
			.allow_access_tokens_via_browser(true)
			.redirect_uri(url("http://localhost:3000/user/login"))
			.post_logout_redirect_uri(url("http://localhost:3000/index.html"))
			.allowed_cors_origin("http://localhost:3000")
			.allowed_scopes(["openid", "profile", "api1"])
			.expect("Fixture SPA client scopes should be valid.")
			.build()
			.expect("Fixture SPA client should build successfully."),
	];

	Catalog::new(
		IdentityResource::standard(),
		vec![
			ApiResource::new("api1".parse().expect("Fixture API resource name should be valid."))
				.display_name("My API #1"),
		],
		clients,
	)
}

/// Constructs a [`Seeder`] over an in-memory store and the demo catalog, returning the
/// concrete store handle so tests can inspect persisted records directly.
pub fn build_memory_seeder() -> (Seeder, Arc<MemoryStore>) {
	let store_backend = Arc::new(MemoryStore::default());
	let store: Arc<dyn ConfigStore> = store_backend.clone();
	let seeder = Seeder::new(store, demo_catalog());

	(seeder, store_backend)
}

/// Parses a URL fixture.
pub fn url(raw: &str) -> Url {
	Url::parse(raw).expect("URL fixture should parse successfully.")
}
