//! Client secret wrappers: redacted plaintext in catalogs, one-way hashes in stores.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use sha2::{Digest, Sha256};
// self
use crate::_prelude::*;

/// Redacted client secret wrapper keeping plaintext material out of logs.
///
/// Catalog definitions carry plaintext so operators can hand the value to the
/// client application; the persistence layer only ever sees a [`SecretHash`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSecret(String);
impl ClientSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner plaintext value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for ClientSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for ClientSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("ClientSecret").field(&"<redacted>").finish()
	}
}
impl Display for ClientSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// One-way digest of a client secret: base64 of the SHA-256 of the UTF-8 plaintext.
///
/// This is the only representation a store is allowed to hold.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SecretHash(String);
impl SecretHash {
	/// Digests a plaintext value.
	pub fn digest(value: &str) -> Self {
		let mut hasher = Sha256::new();

		hasher.update(value.as_bytes());

		Self(STANDARD.encode(hasher.finalize()))
	}

	/// Digests the plaintext carried by a catalog secret.
	pub fn of(secret: &ClientSecret) -> Self {
		Self::digest(secret.expose())
	}

	/// Returns the encoded digest.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Checks a candidate plaintext against this digest.
	pub fn matches(&self, secret: &ClientSecret) -> bool {
		Self::of(secret) == *self
	}
}
impl Display for SecretHash {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn secret_formatters_redact() {
		let secret = ClientSecret::new("super-secret");

		assert_eq!(format!("{secret:?}"), "ClientSecret(\"<redacted>\")");
		assert_eq!(format!("{secret}"), "<redacted>");
	}

	#[test]
	fn digest_never_contains_plaintext() {
		let plaintext = "373f4671-0c18-48d6-9da3-962b1c81299a";
		let hash = SecretHash::digest(plaintext);

		assert_ne!(hash.as_str(), plaintext);
		assert!(!hash.as_str().contains(plaintext));
		// base64 of a 32-byte digest, padded.
		assert_eq!(hash.as_str().len(), 44);
	}

	#[test]
	fn digest_is_deterministic_and_collision_free_per_input() {
		let secret = ClientSecret::new("alpha");

		assert_eq!(SecretHash::of(&secret), SecretHash::of(&secret));
		assert_ne!(SecretHash::digest("alpha").as_str(), SecretHash::digest("beta").as_str());
	}

	#[test]
	fn matches_verifies_candidates() {
		let hash = SecretHash::digest("expected");

		assert!(hash.matches(&ClientSecret::new("expected")));
		assert!(!hash.matches(&ClientSecret::new("other")));
	}
}
