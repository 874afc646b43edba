//! Provider descriptor data structures shared by the login and exchange flows.

/// Builder API for assembling provider descriptors.
pub mod builder;

pub use builder::*;

// self
use crate::_prelude::*;

/// GitHub's authorize endpoint.
pub const GITHUB_AUTHORIZE_ENDPOINT: &str = "https://github.com/login/oauth/authorize";
/// GitHub's token endpoint.
pub const GITHUB_TOKEN_ENDPOINT: &str = "https://github.com/login/oauth/access_token";
/// GitHub's authenticated-user endpoint.
pub const GITHUB_USER_ENDPOINT: &str = "https://api.github.com/user";

/// Endpoint set a broker talks to.
///
/// Endpoints are kept as the exact strings configured so the login URL is reproduced byte for
/// byte; [`ProviderDescriptorBuilder::build`] is where they get checked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderDescriptor {
	/// Authorize endpoint the end user is redirected to.
	pub authorize_endpoint: String,
	/// Token endpoint that trades the authorization code for an access token.
	pub token_endpoint: String,
	/// User endpoint returning the signed-in user's profile.
	pub user_endpoint: String,
}
impl ProviderDescriptor {
	/// Creates a new builder with no endpoints set.
	pub fn builder() -> ProviderDescriptorBuilder {
		ProviderDescriptorBuilder::default()
	}

	/// GitHub OAuth app endpoints.
	pub fn github() -> Self {
		Self {
			authorize_endpoint: GITHUB_AUTHORIZE_ENDPOINT.into(),
			token_endpoint: GITHUB_TOKEN_ENDPOINT.into(),
			user_endpoint: GITHUB_USER_ENDPOINT.into(),
		}
	}
}
impl Default for ProviderDescriptor {
	fn default() -> Self {
		Self::github()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn github_preset_endpoints() {
		let descriptor = ProviderDescriptor::default();

		assert_eq!(descriptor.authorize_endpoint, "https://github.com/login/oauth/authorize");
		assert_eq!(descriptor.token_endpoint, "https://github.com/login/oauth/access_token");
		assert_eq!(descriptor.user_endpoint, "https://api.github.com/user");
	}
}
