//! Registered client applications and their per-flow structural rules.

// self
use crate::{
	_prelude::*,
	catalog::{ClientId, ClientSecret, IdentifierError, ScopeSet, ScopeValidationError},
};

/// OAuth 2.0/OIDC authentication flow a client is restricted to.
///
/// Exactly one flow per client; flows are never combinable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantFlow {
	/// Machine-to-machine Client Credentials grant.
	ClientCredentials,
	/// Authorization Code grant for confidential browser clients.
	AuthorizationCode,
	/// Hybrid grant mixing front- and back-channel delivery.
	Hybrid,
	/// Implicit grant delivering tokens on the front channel.
	Implicit,
}
impl GrantFlow {
	/// Returns the conventional identifier for the flow.
	pub fn as_str(self) -> &'static str {
		match self {
			GrantFlow::ClientCredentials => "client_credentials",
			GrantFlow::AuthorizationCode => "authorization_code",
			GrantFlow::Hybrid => "hybrid",
			GrantFlow::Implicit => "implicit",
		}
	}

	/// Returns true for flows that route the user agent through a redirect.
	pub fn requires_redirect(self) -> bool {
		!matches!(self, GrantFlow::ClientCredentials)
	}
}
impl Display for GrantFlow {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Shape of the access tokens issued to a client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessTokenType {
	#[default]
	/// Self-contained (signed JWT) access tokens.
	SelfContained,
	/// Opaque reference tokens resolved by introspection.
	Reference,
}
impl AccessTokenType {
	/// Returns a stable label for the token type.
	pub fn as_str(self) -> &'static str {
		match self {
			AccessTokenType::SelfContained => "self_contained",
			AccessTokenType::Reference => "reference",
		}
	}
}
impl Display for AccessTokenType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Structural rules a single client registration must satisfy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum ClientConfigError {
	/// A client must pick exactly one flow.
	#[error("A client must declare exactly one authentication flow.")]
	MissingFlow,
	/// Machine flows have no user agent to redirect.
	#[error("The {flow} flow is machine-to-machine and cannot declare redirect URIs.")]
	RedirectUrisForbidden {
		/// Flow label.
		#[serde(borrow)]
		flow: &'static str,
	},
	/// Machine flows never deliver tokens to a browser.
	#[error("The {flow} flow cannot deliver access tokens via the browser.")]
	BrowserTokensForbidden {
		/// Flow label.
		#[serde(borrow)]
		flow: &'static str,
	},
	/// Browser flows need somewhere to send the user agent back to.
	#[error("The {flow} flow requires at least one redirect URI.")]
	MissingRedirectUri {
		/// Flow label.
		#[serde(borrow)]
		flow: &'static str,
	},
	/// Implicit delivery lands in a script context.
	#[error("The implicit flow requires allow_access_tokens_via_browser.")]
	BrowserTokensRequired,
	/// Waiving the secret leaves only redirect-URI and origin validation as the client's
	/// identification; that trust boundary is reserved for browser-token clients.
	#[error("Only clients delivering access tokens via the browser may waive the client secret.")]
	PublicClientWithoutBrowserTokens,
	/// Confidential clients authenticate with a shared secret.
	#[error("Confidential clients must register at least one secret.")]
	MissingSecret,
}

/// A registered client application.
///
/// Instances are built either through [`Client::builder`] or deserialized from a catalog
/// document; both paths are checked against the same [`Client::validate`] rule set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Client {
	/// Unique client identifier, stable across restarts.
	pub client_id: ClientId,
	/// Human-readable display name.
	#[serde(default)]
	pub client_name: String,
	/// Optional homepage of the client application.
	#[serde(default)]
	pub client_uri: Option<Url>,
	/// The single authentication flow this client may use.
	pub flow: GrantFlow,
	/// Shared secrets; persisted only as one-way hashes.
	#[serde(default)]
	pub secrets: Vec<ClientSecret>,
	/// When false, the client is public and identified solely by redirect-URI and origin
	/// validation.
	#[serde(default = "require_client_secret_default")]
	pub require_client_secret: bool,
	/// Permitted redirect targets for browser flows.
	#[serde(default)]
	pub redirect_uris: Vec<Url>,
	/// Permitted post-logout redirect targets.
	#[serde(default)]
	pub post_logout_redirect_uris: Vec<Url>,
	/// Front-channel logout endpoint of the client, if any.
	#[serde(default)]
	pub logout_uri: Option<Url>,
	/// Origins allowed to call CORS-protected endpoints.
	#[serde(default)]
	pub allowed_cors_origins: Vec<String>,
	/// Controls refresh-token issuance.
	#[serde(default)]
	pub allow_offline_access: bool,
	/// Permits access-token delivery into a script context.
	#[serde(default)]
	pub allow_access_tokens_via_browser: bool,
	/// Shape of the issued access tokens.
	#[serde(default)]
	pub access_token_type: AccessTokenType,
	/// Scopes the client may request; must reference declared resources.
	#[serde(default)]
	pub allowed_scopes: ScopeSet,
}
impl Client {
	/// Creates a new builder for the provided client identifier.
	pub fn builder(client_id: impl AsRef<str>) -> Result<ClientBuilder, IdentifierError> {
		Ok(ClientBuilder::new(ClientId::new(client_id)?))
	}

	/// Validates the per-client structural rules.
	///
	/// Cross-catalog rules (scope references, duplicate identifiers) live on
	/// [`Catalog::validate`](crate::catalog::Catalog::validate).
	pub fn validate(&self) -> Result<(), ClientConfigError> {
		let flow = self.flow.as_str();

		if self.flow.requires_redirect() && self.redirect_uris.is_empty() {
			return Err(ClientConfigError::MissingRedirectUri { flow });
		}
		if !self.flow.requires_redirect() && !self.redirect_uris.is_empty() {
			return Err(ClientConfigError::RedirectUrisForbidden { flow });
		}
		if !self.flow.requires_redirect() && self.allow_access_tokens_via_browser {
			return Err(ClientConfigError::BrowserTokensForbidden { flow });
		}
		if self.flow == GrantFlow::Implicit && !self.allow_access_tokens_via_browser {
			return Err(ClientConfigError::BrowserTokensRequired);
		}
		if !self.require_client_secret && !self.allow_access_tokens_via_browser {
			return Err(ClientConfigError::PublicClientWithoutBrowserTokens);
		}
		if self.require_client_secret && self.secrets.is_empty() {
			return Err(ClientConfigError::MissingSecret);
		}

		Ok(())
	}
}

/// Builder for [`Client`] values.
#[derive(Clone, Debug)]
pub struct ClientBuilder {
	client_id: ClientId,
	client_name: String,
	client_uri: Option<Url>,
	flow: Option<GrantFlow>,
	secrets: Vec<ClientSecret>,
	require_client_secret: bool,
	redirect_uris: Vec<Url>,
	post_logout_redirect_uris: Vec<Url>,
	logout_uri: Option<Url>,
	allowed_cors_origins: Vec<String>,
	allow_offline_access: bool,
	allow_access_tokens_via_browser: bool,
	access_token_type: AccessTokenType,
	allowed_scopes: ScopeSet,
}
impl ClientBuilder {
	fn new(client_id: ClientId) -> Self {
		Self {
			client_id,
			client_name: String::new(),
			client_uri: None,
			flow: None,
			secrets: Vec::new(),
			require_client_secret: true,
			redirect_uris: Vec::new(),
			post_logout_redirect_uris: Vec::new(),
			logout_uri: None,
			allowed_cors_origins: Vec::new(),
			allow_offline_access: false,
			allow_access_tokens_via_browser: false,
			access_token_type: AccessTokenType::default(),
			allowed_scopes: ScopeSet::default(),
		}
	}

	/// Sets the display name.
	pub fn client_name(mut self, client_name: impl Into<String>) -> Self {
		self.client_name = client_name.into();

		self
	}

	/// Sets the client homepage.
	pub fn client_uri(mut self, client_uri: Url) -> Self {
		self.client_uri = Some(client_uri);

		self
	}

	/// Selects the client's single authentication flow.
	pub fn flow(mut self, flow: GrantFlow) -> Self {
		self.flow = Some(flow);

		self
	}

	/// Registers a shared secret (plaintext; hashed at the persistence boundary).
	pub fn secret(mut self, secret: impl Into<String>) -> Self {
		self.secrets.push(ClientSecret::new(secret));

		self
	}

	/// Marks the client as public (no secret required).
	pub fn require_client_secret(mut self, require: bool) -> Self {
		self.require_client_secret = require;

		self
	}

	/// Adds a permitted redirect URI.
	pub fn redirect_uri(mut self, uri: Url) -> Self {
		self.redirect_uris.push(uri);

		self
	}

	/// Adds a permitted post-logout redirect URI.
	pub fn post_logout_redirect_uri(mut self, uri: Url) -> Self {
		self.post_logout_redirect_uris.push(uri);

		self
	}

	/// Sets the front-channel logout endpoint.
	pub fn logout_uri(mut self, uri: Url) -> Self {
		self.logout_uri = Some(uri);

		self
	}

	/// Adds an origin allowed for CORS calls.
	pub fn allowed_cors_origin(mut self, origin: impl Into<String>) -> Self {
		self.allowed_cors_origins.push(origin.into());

		self
	}

	/// Toggles refresh-token issuance.
	pub fn allow_offline_access(mut self, allow: bool) -> Self {
		self.allow_offline_access = allow;

		self
	}

	/// Permits access-token delivery into a script context.
	pub fn allow_access_tokens_via_browser(mut self, allow: bool) -> Self {
		self.allow_access_tokens_via_browser = allow;

		self
	}

	/// Overrides the access token shape.
	pub fn access_token_type(mut self, token_type: AccessTokenType) -> Self {
		self.access_token_type = token_type;

		self
	}

	/// Declares the scopes the client may request.
	pub fn allowed_scopes<I, S>(mut self, scopes: I) -> Result<Self, ScopeValidationError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.allowed_scopes = ScopeSet::new(scopes)?;

		Ok(self)
	}

	/// Consumes the builder and validates the resulting client.
	pub fn build(self) -> Result<Client, ClientConfigError> {
		let client = Client {
			client_id: self.client_id,
			client_name: self.client_name,
			client_uri: self.client_uri,
			flow: self.flow.ok_or(ClientConfigError::MissingFlow)?,
			secrets: self.secrets,
			require_client_secret: self.require_client_secret,
			redirect_uris: self.redirect_uris,
			post_logout_redirect_uris: self.post_logout_redirect_uris,
			logout_uri: self.logout_uri,
			allowed_cors_origins: self.allowed_cors_origins,
			allow_offline_access: self.allow_offline_access,
			allow_access_tokens_via_browser: self.allow_access_tokens_via_browser,
			access_token_type: self.access_token_type,
			allowed_scopes: self.allowed_scopes,
		};

		client.validate()?;

		Ok(client)
	}
}

fn require_client_secret_default() -> bool {
	true
}
