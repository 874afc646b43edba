//! Short user profile returned by the provider's user endpoint.

// self
use crate::{_prelude::*, auth};

/// Minimal identity of the signed-in user.
///
/// Comes straight from the provider and must be treated as untrusted input. Fields the provider
/// omits or sends as `null` fall back to `None` and `0`; any other profile fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
	/// Display name; providers return `null` or omit it when the user never set one.
	#[serde(default)]
	pub name: Option<String>,
	/// Provider-assigned numeric identifier, stable per account.
	#[serde(default, deserialize_with = "auth::null_as_default")]
	pub id: i64,
}
impl UserIdentity {
	/// Display name, or the empty string when absent.
	pub fn display_name(&self) -> &str {
		self.name.as_deref().unwrap_or_default()
	}
}
