//! Catalog domain: identifiers, scopes, secrets, resources, clients, and the aggregate that
//! validates them as a whole.
//!
//! Catalogs are pure data. Ordering is preserved exactly as declared, output is deterministic,
//! and nothing here touches a store; the [`seed`](crate::seed) module owns persistence.

pub mod client;
pub mod document;
pub mod id;
pub mod resource;
pub mod scope;
pub mod secret;

pub use client::*;
pub use document::*;
pub use id::*;
pub use resource::*;
pub use scope::*;
pub use secret::*;

// self
use crate::_prelude::*;

/// Consistency failures detected across a catalog before any store interaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ThisError)]
#[serde(bound(deserialize = "'de: 'static"))]
pub enum CatalogError {
	/// Two clients share an identifier.
	#[error("Duplicate client identifier `{id}`.")]
	DuplicateClient {
		/// The colliding identifier.
		id: ClientId,
	},
	/// Two resources in the same category share a name.
	#[error("Duplicate resource name `{name}`.")]
	DuplicateResource {
		/// The colliding name.
		name: ResourceName,
	},
	/// A scope is exposed by both an identity resource and an API resource.
	#[error("Scope `{scope}` is exposed by both an identity resource and an API resource.")]
	AmbiguousScope {
		/// The ambiguous scope token.
		scope: String,
	},
	/// A client failed its structural rules.
	#[error("Client `{id}` is misconfigured: {source}")]
	Client {
		/// The offending client.
		id: ClientId,
		/// The violated rule.
		#[source]
		source: ClientConfigError,
	},
	/// A client references a scope no resource declares; left unchecked this would silently
	/// yield an unusable grant at token time.
	#[error("Client `{client}` references unknown scope `{scope}`.")]
	UnknownScope {
		/// The referencing client.
		client: ClientId,
		/// The undeclared scope token.
		scope: String,
	},
}

/// The full declarative configuration of an identity provider: resources and clients, in the
/// exact order they should be seeded.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
	/// Identity resources (claims bundles), in seed order.
	#[serde(default)]
	pub identity_resources: Vec<IdentityResource>,
	/// API resources (protected audiences), in seed order.
	#[serde(default)]
	pub api_resources: Vec<ApiResource>,
	/// Registered clients, in seed order.
	#[serde(default)]
	pub clients: Vec<Client>,
}
impl Catalog {
	/// Assembles a catalog from its three ordered entry lists.
	pub fn new(
		identity_resources: Vec<IdentityResource>,
		api_resources: Vec<ApiResource>,
		clients: Vec<Client>,
	) -> Self {
		Self { identity_resources, api_resources, clients }
	}

	/// Validates the catalog as a whole: unique keys, an unambiguous scope namespace, each
	/// client's structural rules, and scope-reference validity.
	///
	/// Runs eagerly during seeding so an inconsistent catalog fails startup before the store
	/// is touched.
	pub fn validate(&self) -> Result<(), CatalogError> {
		let identity_scopes = self.validate_identity_resources()?;
		let api_scopes = self.validate_api_resources(&identity_scopes)?;

		self.validate_clients(&identity_scopes, &api_scopes)
	}

	fn validate_identity_resources(&self) -> Result<BTreeSet<&str>, CatalogError> {
		let mut names = BTreeSet::new();

		for resource in &self.identity_resources {
			if !names.insert(resource.name.as_ref()) {
				return Err(CatalogError::DuplicateResource { name: resource.name.clone() });
			}
		}

		Ok(names)
	}

	fn validate_api_resources(
		&self,
		identity_scopes: &BTreeSet<&str>,
	) -> Result<BTreeSet<String>, CatalogError> {
		let mut names = BTreeSet::new();
		let mut scopes = BTreeSet::new();

		for resource in &self.api_resources {
			if !names.insert(resource.name.as_ref()) {
				return Err(CatalogError::DuplicateResource { name: resource.name.clone() });
			}

			for scope in &resource.effective_scopes() {
				if identity_scopes.contains(scope) {
					return Err(CatalogError::AmbiguousScope { scope: scope.to_owned() });
				}

				scopes.insert(scope.to_owned());
			}
		}

		Ok(scopes)
	}

	fn validate_clients(
		&self,
		identity_scopes: &BTreeSet<&str>,
		api_scopes: &BTreeSet<String>,
	) -> Result<(), CatalogError> {
		let mut ids = BTreeSet::new();

		for client in &self.clients {
			if !ids.insert(client.client_id.as_ref()) {
				return Err(CatalogError::DuplicateClient { id: client.client_id.clone() });
			}

			client.validate().map_err(|source| CatalogError::Client {
				id: client.client_id.clone(),
				source,
			})?;

			for scope in &client.allowed_scopes {
				if !identity_scopes.contains(scope) && !api_scopes.contains(scope) {
					return Err(CatalogError::UnknownScope {
						client: client.client_id.clone(),
						scope: scope.to_owned(),
					});
				}
			}
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::_preludet::demo_catalog;

	fn machine_client(id: &str, scope: &str) -> Client {
		Client::builder(id)
			.expect("Client identifier fixture should be valid.")
			.flow(GrantFlow::ClientCredentials)
			.secret("secret")
			.allowed_scopes([scope])
			.expect("Scope fixture should be valid.")
			.build()
			.expect("Machine client fixture should build successfully.")
	}

	#[test]
	fn demo_catalog_validates() {
		demo_catalog().validate().expect("The demo catalog should be internally consistent.");
	}

	#[test]
	fn duplicate_clients_are_rejected() {
		let catalog = Catalog::new(
			vec![],
			vec![ApiResource::new("api1".parse().expect("Resource fixture should be valid."))],
			vec![machine_client("worker", "api1"), machine_client("worker", "api1")],
		);
		let err = catalog.validate().expect_err("Duplicate client identifiers must be rejected.");

		assert!(matches!(err, CatalogError::DuplicateClient { .. }));
	}

	#[test]
	fn duplicate_resources_are_rejected() {
		let catalog = Catalog::new(
			vec![IdentityResource::openid(), IdentityResource::openid()],
			vec![],
			vec![],
		);

		assert!(matches!(
			catalog.validate().expect_err("Duplicate identity resources must be rejected."),
			CatalogError::DuplicateResource { .. },
		));

		let catalog = Catalog::new(
			vec![],
			vec![
				ApiResource::new("api1".parse().expect("Resource fixture should be valid.")),
				ApiResource::new("api1".parse().expect("Resource fixture should be valid.")),
			],
			vec![],
		);

		assert!(matches!(
			catalog.validate().expect_err("Duplicate API resources must be rejected."),
			CatalogError::DuplicateResource { .. },
		));
	}

	#[test]
	fn overlapping_scope_namespaces_are_rejected() {
		let catalog = Catalog::new(
			vec![IdentityResource::profile()],
			vec![ApiResource::new("profile".parse().expect("Resource fixture should be valid."))],
			vec![],
		);
		let err = catalog.validate().expect_err("An ambiguous scope namespace must be rejected.");

		assert!(matches!(err, CatalogError::AmbiguousScope { scope } if scope == "profile"));
	}

	#[test]
	fn unknown_scope_references_are_rejected() {
		let catalog = Catalog::new(
			vec![IdentityResource::openid()],
			vec![ApiResource::new("api1".parse().expect("Resource fixture should be valid."))],
			vec![machine_client("worker", "api2")],
		);
		let err = catalog
			.validate()
			.expect_err("A client referencing an undeclared scope must be rejected.");

		assert!(
			matches!(err, CatalogError::UnknownScope { client, scope }
				if client.as_ref() == "worker" && scope == "api2"),
		);
	}

	#[test]
	fn client_rule_violations_carry_the_client_id() {
		let broken = Client {
			client_id: "mvc".parse().expect("Client identifier fixture should be valid."),
			client_name: String::new(),
			client_uri: None,
			flow: GrantFlow::Hybrid,
			secrets: vec![ClientSecret::new("secret")],
			require_client_secret: true,
			redirect_uris: vec![],
			post_logout_redirect_uris: vec![],
			logout_uri: None,
			allowed_cors_origins: vec![],
			allow_offline_access: false,
			allow_access_tokens_via_browser: false,
			access_token_type: AccessTokenType::SelfContained,
			allowed_scopes: ScopeSet::default(),
		};
		let catalog = Catalog::new(vec![], vec![], vec![broken]);
		let err = catalog.validate().expect_err("A structurally broken client must be rejected.");

		assert!(matches!(
			err,
			CatalogError::Client { id, source: ClientConfigError::MissingRedirectUri { .. } }
				if id.as_ref() == "mvc",
		));
	}
}
