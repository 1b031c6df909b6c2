//! Deployment-owned gating for the seed reconciler.
//!
//! Whether seeding runs at all is a policy decision of the deployment, not of this crate:
//! a production fleet may prefer an explicit administrative path over startup seeding. The
//! environment designator is consumed here, never owned; callers read it from their own
//! configuration source.

// self
use crate::_prelude::*;

/// Deployment environment designator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
	/// Local or staging development deployments.
	Development,
	/// Production deployments.
	Production,
}
impl Environment {
	/// Returns a stable label for the environment.
	pub const fn as_str(self) -> &'static str {
		match self {
			Environment::Development => "development",
			Environment::Production => "production",
		}
	}
}
impl Display for Environment {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for Environment {
	type Err = EnvironmentParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"development" | "dev" => Ok(Environment::Development),
			"production" | "prod" => Ok(Environment::Production),
			_ => Err(EnvironmentParseError { value: s.to_owned() }),
		}
	}
}

/// Error returned when an environment designator cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
#[error("Unknown environment designator `{value}`.")]
pub struct EnvironmentParseError {
	/// The unrecognized input.
	pub value: String,
}

/// Controls in which environments the reconciler may touch the store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedPolicy {
	/// Seed on every startup regardless of environment.
	Always,
	#[default]
	/// Seed only in development; production configuration is managed administratively.
	DevelopmentOnly,
	/// Never seed.
	Never,
}
impl SeedPolicy {
	/// Returns true when seeding may run in the provided environment.
	pub fn allows(self, environment: Environment) -> bool {
		match self {
			SeedPolicy::Always => true,
			SeedPolicy::DevelopmentOnly => environment == Environment::Development,
			SeedPolicy::Never => false,
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn policies_gate_on_environment() {
		assert!(SeedPolicy::Always.allows(Environment::Production));
		assert!(SeedPolicy::DevelopmentOnly.allows(Environment::Development));
		assert!(!SeedPolicy::DevelopmentOnly.allows(Environment::Production));
		assert!(!SeedPolicy::Never.allows(Environment::Development));
	}

	#[test]
	fn environment_parses_common_designators() {
		assert_eq!("Development".parse::<Environment>(), Ok(Environment::Development));
		assert_eq!("prod".parse::<Environment>(), Ok(Environment::Production));
		assert!("stage".parse::<Environment>().is_err());
	}

	#[test]
	fn default_policy_is_development_only() {
		assert_eq!(SeedPolicy::default(), SeedPolicy::DevelopmentOnly);
	}
}
