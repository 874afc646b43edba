//! Login-with-provider flows: the authorize redirect and the code-for-identity exchange.

mod exchange;
mod login;

// self
use crate::{
	_prelude::*,
	auth::{ProviderCredentials, SecretString},
	http::IdentityHttpClient,
	provider::ProviderDescriptor,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Broker specialized for the crate's default reqwest transport.
pub type ReqwestIdentityBroker = IdentityBroker<ReqwestHttpClient>;

/// Resolves provider users for one OAuth application.
///
/// The broker shares the caller's HTTP client and holds only immutable data, so a single
/// instance can serve concurrent callbacks. Each [`IdentityBroker::exchange_code`] call performs
/// the full token + profile round trip; nothing is cached between calls.
pub struct IdentityBroker<C>
where
	C: ?Sized + IdentityHttpClient,
{
	/// HTTP client shared with the embedding application.
	pub http_client: Arc<C>,
	/// Endpoints the broker talks to.
	pub descriptor: ProviderDescriptor,
	/// OAuth application credentials.
	pub credentials: ProviderCredentials,
}
impl<C> IdentityBroker<C>
where
	C: ?Sized + IdentityHttpClient,
{
	/// Creates a broker for GitHub's endpoints.
	///
	/// Inputs are stored verbatim; nothing is validated. The client is shared, so its timeouts,
	/// TLS settings, and pool stay under the caller's control.
	pub fn new(
		http_client: impl Into<Arc<C>>,
		client_id: impl Into<String>,
		client_secret: impl Into<SecretString>,
		callback_url: impl Into<String>,
	) -> Self {
		Self::with_credentials(
			http_client,
			ProviderCredentials::new(client_id, client_secret, callback_url),
		)
	}

	/// Creates a broker from pre-assembled credentials.
	pub fn with_credentials(
		http_client: impl Into<Arc<C>>,
		credentials: ProviderCredentials,
	) -> Self {
		Self {
			http_client: http_client.into(),
			descriptor: ProviderDescriptor::github(),
			credentials,
		}
	}

	/// Replaces the endpoint set.
	pub fn with_descriptor(mut self, descriptor: ProviderDescriptor) -> Self {
		self.descriptor = descriptor;

		self
	}
}
#[cfg(feature = "reqwest")]
impl IdentityBroker<ReqwestHttpClient> {
	/// Creates a GitHub broker with its own reqwest client built by
	/// [`ReqwestHttpClient::build_default`].
	pub fn with_default_client(
		client_id: impl Into<String>,
		client_secret: impl Into<SecretString>,
		callback_url: impl Into<String>,
	) -> Result<Self> {
		Ok(Self::new(ReqwestHttpClient::build_default()?, client_id, client_secret, callback_url))
	}
}
impl<C> Clone for IdentityBroker<C>
where
	C: ?Sized + IdentityHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			http_client: Arc::clone(&self.http_client),
			descriptor: self.descriptor.clone(),
			credentials: self.credentials.clone(),
		}
	}
}
impl<C> Debug for IdentityBroker<C>
where
	C: ?Sized + IdentityHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("IdentityBroker")
			.field("descriptor", &self.descriptor)
			.field("credentials", &self.credentials)
			.finish()
	}
}
