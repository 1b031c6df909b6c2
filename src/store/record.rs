//! Persistence representations of catalog entries.
//!
//! Records are what stores actually hold. Conversion from catalog definitions is the single
//! boundary where client secrets are replaced by one-way hashes; plaintext never crosses it.

// self
use crate::{
	_prelude::*,
	catalog::{
		AccessTokenType, ApiResource, Client, ClientId, GrantFlow, IdentityResource, ResourceName,
		ScopeSet, SecretHash,
	},
	store::EntityKind,
};

/// Persisted representation of a registered client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
	/// Unique client identifier.
	pub client_id: ClientId,
	/// Human-readable display name.
	pub client_name: String,
	/// Optional homepage of the client application.
	pub client_uri: Option<Url>,
	/// The single flow the client may use.
	pub flow: GrantFlow,
	/// One-way hashes of the client's shared secrets.
	pub secret_hashes: Vec<SecretHash>,
	/// Whether token requests must present a secret.
	pub require_client_secret: bool,
	/// Permitted redirect targets.
	pub redirect_uris: Vec<Url>,
	/// Permitted post-logout redirect targets.
	pub post_logout_redirect_uris: Vec<Url>,
	/// Front-channel logout endpoint, if any.
	pub logout_uri: Option<Url>,
	/// Origins allowed to call CORS-protected endpoints.
	pub allowed_cors_origins: Vec<String>,
	/// Controls refresh-token issuance.
	pub allow_offline_access: bool,
	/// Permits access-token delivery into a script context.
	pub allow_access_tokens_via_browser: bool,
	/// Shape of the issued access tokens.
	pub access_token_type: AccessTokenType,
	/// Scopes the client may request.
	pub allowed_scopes: ScopeSet,
	/// Instant the record was seeded.
	pub created_at: OffsetDateTime,
}
impl ClientRecord {
	/// Converts a catalog definition into its persisted form, hashing every secret.
	pub fn from_definition(client: &Client, created_at: OffsetDateTime) -> Self {
		Self {
			client_id: client.client_id.clone(),
			client_name: client.client_name.clone(),
			client_uri: client.client_uri.clone(),
			flow: client.flow,
			secret_hashes: client.secrets.iter().map(SecretHash::of).collect(),
			require_client_secret: client.require_client_secret,
			redirect_uris: client.redirect_uris.clone(),
			post_logout_redirect_uris: client.post_logout_redirect_uris.clone(),
			logout_uri: client.logout_uri.clone(),
			allowed_cors_origins: client.allowed_cors_origins.clone(),
			allow_offline_access: client.allow_offline_access,
			allow_access_tokens_via_browser: client.allow_access_tokens_via_browser,
			access_token_type: client.access_token_type,
			allowed_scopes: client.allowed_scopes.clone(),
			created_at,
		}
	}
}

/// Persisted representation of an identity resource.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IdentityResourceRecord {
	/// Unique resource name.
	pub name: ResourceName,
	/// Optional human-readable display name.
	pub display_name: Option<String>,
	/// Whether the resource is currently enabled.
	pub enabled: bool,
	/// JWT claim types released when the scope is granted.
	pub claim_types: Vec<String>,
	/// Instant the record was seeded.
	pub created_at: OffsetDateTime,
}
impl IdentityResourceRecord {
	/// Converts a catalog definition into its persisted form.
	pub fn from_definition(resource: &IdentityResource, created_at: OffsetDateTime) -> Self {
		Self {
			name: resource.name.clone(),
			display_name: resource.display_name.clone(),
			enabled: resource.enabled,
			claim_types: resource.claim_types.clone(),
			created_at,
		}
	}
}

/// Persisted representation of an API resource.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResourceRecord {
	/// Unique resource name.
	pub name: ResourceName,
	/// Optional human-readable display name.
	pub display_name: Option<String>,
	/// Scopes the resource exposes (already resolved to the effective set).
	pub scopes: ScopeSet,
	/// Instant the record was seeded.
	pub created_at: OffsetDateTime,
}
impl ApiResourceRecord {
	/// Converts a catalog definition into its persisted form, resolving the effective scopes.
	pub fn from_definition(resource: &ApiResource, created_at: OffsetDateTime) -> Self {
		Self {
			name: resource.name.clone(),
			display_name: resource.display_name.clone(),
			scopes: resource.effective_scopes(),
			created_at,
		}
	}
}

/// A persisted configuration entity of any category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConfigRecord {
	/// A registered client; boxed to keep the enum footprint close to the resource variants.
	Client(Box<ClientRecord>),
	/// An identity resource.
	IdentityResource(IdentityResourceRecord),
	/// An API resource.
	ApiResource(ApiResourceRecord),
}
impl ConfigRecord {
	/// Category the record belongs to.
	pub fn kind(&self) -> EntityKind {
		match self {
			ConfigRecord::Client(_) => EntityKind::Client,
			ConfigRecord::IdentityResource(_) => EntityKind::IdentityResource,
			ConfigRecord::ApiResource(_) => EntityKind::ApiResource,
		}
	}

	/// Natural key within the category (client identifier or resource name).
	pub fn natural_key(&self) -> &str {
		match self {
			ConfigRecord::Client(record) => record.client_id.as_ref(),
			ConfigRecord::IdentityResource(record) => record.name.as_ref(),
			ConfigRecord::ApiResource(record) => record.name.as_ref(),
		}
	}

	/// Returns the client payload, if this is a client record.
	pub fn as_client(&self) -> Option<&ClientRecord> {
		match self {
			ConfigRecord::Client(record) => Some(record),
			_ => None,
		}
	}

	/// Returns the identity resource payload, if applicable.
	pub fn as_identity_resource(&self) -> Option<&IdentityResourceRecord> {
		match self {
			ConfigRecord::IdentityResource(record) => Some(record),
			_ => None,
		}
	}

	/// Returns the API resource payload, if applicable.
	pub fn as_api_resource(&self) -> Option<&ApiResourceRecord> {
		match self {
			ConfigRecord::ApiResource(record) => Some(record),
			_ => None,
		}
	}
}
impl From<ClientRecord> for ConfigRecord {
	fn from(record: ClientRecord) -> Self {
		Self::Client(Box::new(record))
	}
}
impl From<IdentityResourceRecord> for ConfigRecord {
	fn from(record: IdentityResourceRecord) -> Self {
		Self::IdentityResource(record)
	}
}
impl From<ApiResourceRecord> for ConfigRecord {
	fn from(record: ApiResourceRecord) -> Self {
		Self::ApiResource(record)
	}
}
