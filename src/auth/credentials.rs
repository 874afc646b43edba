//! OAuth application credentials registered with the provider.

// self
use crate::{_prelude::*, auth::SecretString};

/// Client identifier, client secret, and callback URL of the OAuth application.
///
/// Values are stored verbatim; nothing is trimmed, parsed, or validated.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderCredentials {
	/// OAuth client identifier.
	pub client_id: String,
	/// OAuth client secret; never logged.
	pub client_secret: SecretString,
	/// URL the provider redirects back to with the authorization code.
	pub callback_url: String,
}
impl ProviderCredentials {
	/// Bundles the three application values.
	pub fn new(
		client_id: impl Into<String>,
		client_secret: impl Into<SecretString>,
		callback_url: impl Into<String>,
	) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: client_secret.into(),
			callback_url: callback_url.into(),
		}
	}
}
impl Debug for ProviderCredentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ProviderCredentials")
			.field("client_id", &self.client_id)
			.field("client_secret_set", &!self.client_secret.is_empty())
			.field("callback_url", &self.callback_url)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn debug_output_hides_client_secret() {
		let credentials = ProviderCredentials::new("id-1", "hunter2", "https://app/cb");
		let rendered = format!("{credentials:?}");

		assert!(rendered.contains("id-1"));
		assert!(rendered.contains("https://app/cb"));
		assert!(!rendered.contains("hunter2"));
	}

	#[test]
	fn values_are_kept_verbatim() {
		let credentials = ProviderCredentials::new(" id ", "", "not a url");

		assert_eq!(credentials.client_id, " id ");
		assert!(credentials.client_secret.is_empty());
		assert_eq!(credentials.callback_url, "not a url");
	}
}
