//! Optional observability helpers for the seed reconciler.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `oidc_bootstrap.seed` with the `category`
//!   and `stage` fields.
//! - Enable `metrics` to increment the `oidc_bootstrap_seed_total` counter for every
//!   attempt/seeded/skipped/failure, labeled by `category` + `outcome`.
//!
//! Successful seeding stays silent at the API level; these hooks are strictly opt-in.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each category pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeedOutcome {
	/// Entry to a category pass.
	Attempt,
	/// The category was empty and has been populated.
	Seeded,
	/// The category already held entities and was left untouched.
	Skipped,
	/// Failure propagated back to the caller.
	Failure,
}
impl SeedOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			SeedOutcome::Attempt => "attempt",
			SeedOutcome::Seeded => "seeded",
			SeedOutcome::Skipped => "skipped",
			SeedOutcome::Failure => "failure",
		}
	}
}
impl Display for SeedOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
