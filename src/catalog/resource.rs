//! Identity and API resource definitions exposed by the catalog.

// self
use crate::{
	_prelude::*,
	catalog::{ResourceName, ScopeSet, ScopeValidationError},
};

/// A named bundle of user claims exposed under a single scope.
///
/// Defined statically in the catalog and never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityResource {
	/// Unique resource name; doubles as the scope clients request.
	pub name: ResourceName,
	/// Optional human-readable display name.
	#[serde(default)]
	pub display_name: Option<String>,
	/// Disabled resources stay in the catalog but are seeded as disabled.
	#[serde(default = "enabled_default")]
	pub enabled: bool,
	/// JWT claim types released when the scope is granted.
	#[serde(default)]
	pub claim_types: Vec<String>,
}
impl IdentityResource {
	/// Creates an enabled resource with no claim types.
	pub fn new(name: ResourceName) -> Self {
		Self { name, display_name: None, enabled: true, claim_types: Vec::new() }
	}

	/// Sets the display name.
	pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
		self.display_name = Some(display_name.into());

		self
	}

	/// Appends claim types to the bundle.
	pub fn claim_types<I, S>(mut self, claim_types: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.claim_types.extend(claim_types.into_iter().map(Into::into));

		self
	}

	/// Toggles the enabled flag.
	pub fn enabled(mut self, enabled: bool) -> Self {
		self.enabled = enabled;

		self
	}

	/// The mandatory `openid` resource carrying the subject identifier.
	pub fn openid() -> Self {
		Self::standard_resource("openid", "Your user identifier", &["sub"])
	}

	/// The standard `profile` claims bundle.
	pub fn profile() -> Self {
		Self::standard_resource("profile", "User profile", &[
			"name",
			"family_name",
			"given_name",
			"middle_name",
			"nickname",
			"preferred_username",
			"profile",
			"picture",
			"website",
			"gender",
			"birthdate",
			"zoneinfo",
			"locale",
			"updated_at",
		])
	}

	/// The standard `email` claims bundle.
	pub fn email() -> Self {
		Self::standard_resource("email", "Your email address", &["email", "email_verified"])
	}

	/// The standard `address` claims bundle.
	pub fn address() -> Self {
		Self::standard_resource("address", "Your postal address", &["address"])
	}

	/// The standard `phone` claims bundle.
	pub fn phone() -> Self {
		Self::standard_resource("phone", "Your phone number", &[
			"phone_number",
			"phone_number_verified",
		])
	}

	/// All five standard identity resources in conventional order.
	pub fn standard() -> Vec<Self> {
		vec![Self::openid(), Self::profile(), Self::email(), Self::address(), Self::phone()]
	}

	fn standard_resource(
		name: &'static str,
		display_name: &'static str,
		claim_types: &[&'static str],
	) -> Self {
		Self {
			name: ResourceName::from_validated(name),
			display_name: Some(display_name.into()),
			enabled: true,
			claim_types: claim_types.iter().map(|claim| (*claim).into()).collect(),
		}
	}
}

/// A protected audience (backend service) exposed as one or more scopes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResource {
	/// Unique resource name.
	pub name: ResourceName,
	/// Optional human-readable display name.
	#[serde(default)]
	pub display_name: Option<String>,
	/// Explicitly declared scopes; when empty, the resource exposes its own name as the sole
	/// scope.
	#[serde(default)]
	pub scopes: ScopeSet,
}
impl ApiResource {
	/// Creates an API resource exposing its name as its only scope.
	pub fn new(name: ResourceName) -> Self {
		Self { name, display_name: None, scopes: ScopeSet::default() }
	}

	/// Sets the display name.
	pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
		self.display_name = Some(display_name.into());

		self
	}

	/// Declares an explicit scope set, replacing the name-derived default.
	pub fn scopes<I, S>(mut self, scopes: I) -> Result<Self, ScopeValidationError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.scopes = ScopeSet::new(scopes)?;

		Ok(self)
	}

	/// Scopes this resource actually exposes: the declared set, or the resource name when
	/// nothing was declared.
	pub fn effective_scopes(&self) -> ScopeSet {
		if self.scopes.is_empty() {
			ScopeSet::singleton(self.name.as_ref().to_owned())
		} else {
			self.scopes.clone()
		}
	}
}

fn enabled_default() -> bool {
	true
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn standard_bundles_carry_expected_claims() {
		let standard = IdentityResource::standard();

		assert_eq!(
			standard.iter().map(|resource| resource.name.as_ref()).collect::<Vec<_>>(),
			vec!["openid", "profile", "email", "address", "phone"],
		);

		let openid = &standard[0];

		assert!(openid.enabled);
		assert_eq!(openid.claim_types, vec!["sub"]);

		let email = &standard[2];

		assert_eq!(email.claim_types, vec!["email", "email_verified"]);
	}

	#[test]
	fn api_resource_defaults_to_its_own_name_as_scope() {
		let api = ApiResource::new("api1".parse().expect("Resource fixture should be valid."))
			.display_name("My API #1");

		assert!(api.scopes.is_empty());
		assert!(api.effective_scopes().contains("api1"));
		assert_eq!(api.effective_scopes().len(), 1);
	}

	#[test]
	fn api_resource_explicit_scopes_replace_the_default() {
		let api = ApiResource::new("api2".parse().expect("Resource fixture should be valid."))
			.scopes(["api2.read_only", "api2.full"])
			.expect("Explicit scope set should be valid.");
		let effective = api.effective_scopes();

		assert!(effective.contains("api2.read_only"));
		assert!(effective.contains("api2.full"));
		assert!(!effective.contains("api2"));
	}

	#[test]
	fn identity_resource_serde_defaults_enabled() {
		let parsed: IdentityResource =
			serde_json::from_str("{\"name\":\"openid\",\"claim_types\":[\"sub\"]}")
				.expect("Minimal identity resource document should deserialize.");

		assert!(parsed.enabled);
		assert_eq!(parsed.display_name, None);
	}
}
