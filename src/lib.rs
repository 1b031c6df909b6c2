//! Declarative OIDC/OAuth2 configuration bootstrap: define identity resources, API audiences, and
//! client registrations once, then seed any store idempotently at startup.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod catalog;
pub mod error;
pub mod obs;
pub mod seed;
pub mod store;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and fixtures for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		catalog::{ApiResource, Catalog, Client, GrantFlow, IdentityResource},
		seed::Seeder,
		store::{ConfigStore, MemoryStore},
	};

	/// Shared secret used by every demo client registration.
	pub const DEMO_SECRET: &str = "373f4671-0c18-48d6-9da3-962b1c81299a";

	/// Builds the demo catalog used across integration tests: the five standard identity
	/// resources, one API audience, and a machine/hybrid/browser client trio.
	pub fn demo_catalog() -> Catalog {
		let clients = vec![
			Client::builder("client")
				.expect("Demo client identifier should be valid.")
				.client_name("Client Credentials Client")
				.flow(GrantFlow::ClientCredentials)
				.secret(DEMO_SECRET)
				.allowed_scopes(["api1"])
				.expect("Demo client scopes should be valid.")
				.build()
				.expect("Demo client-credentials client should build successfully."),
			Client::builder("mvc")
				.expect("Demo MVC client identifier should be valid.")
				.client_name("MVC Client")
				.flow(GrantFlow::Hybrid)
				.secret(DEMO_SECRET)
				.redirect_uri(demo_url("http://localhost:5001/signin-oidc"))
				.logout_uri(demo_url("http://localhost:5001/signout-oidc"))
				.post_logout_redirect_uri(demo_url("http://localhost:5001/signout-callback-oidc"))
				.allow_offline_access(true)
				.allowed_scopes(["openid", "profile", "api1"])
				.expect("Demo MVC client scopes should be valid.")
				.build()
				.expect("Demo MVC client should build successfully."),
			Client::builder("spa")
				.expect("Demo SPA client identifier should be valid.")
				.client_name("SPA Client")
				.client_uri(demo_url("http://localhost:3000/"))
				.flow(GrantFlow::Implicit)
				.secret(DEMO_SECRET)
				.allow_access_tokens_via_browser(true)
				.redirect_uri(demo_url("http://localhost:3000/user/login"))
				.post_logout_redirect_uri(demo_url("http://localhost:3000/index.html"))
				.allowed_cors_origin("http://localhost:3000")
				.allowed_scopes(["openid", "profile", "api1"])
				.expect("Demo SPA client scopes should be valid.")
				.build()
				.expect("Demo SPA client should build successfully."),
		];

		Catalog::new(
			IdentityResource::standard(),
			vec![
				ApiResource::new("api1".parse().expect("Demo API resource name should be valid."))
					.display_name("My API #1"),
			],
			clients,
		)
	}

	/// Constructs a [`Seeder`] backed by an in-memory store and the demo catalog, returning the
	/// concrete store handle so tests can inspect persisted records directly.
	pub fn build_memory_seeder() -> (Seeder, Arc<MemoryStore>) {
		let store_backend = Arc::new(MemoryStore::default());
		let store: Arc<dyn ConfigStore> = store_backend.clone();
		let seeder = Seeder::new(store, demo_catalog());

		(seeder, store_backend)
	}

	fn demo_url(raw: &str) -> Url {
		Url::parse(raw).expect("Demo URL fixture should parse successfully.")
	}
}

mod _prelude {
	pub use std::{
		collections::{BTreeSet, HashMap},
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use url;
#[cfg(test)] use color_eyre as _;
