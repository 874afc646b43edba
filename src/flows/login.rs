// self
use crate::{
	_prelude::*,
	error::ConfigError,
	flows::IdentityBroker,
	http::IdentityHttpClient,
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
};

impl<C> IdentityBroker<C>
where
	C: ?Sized + IdentityHttpClient,
{
	/// Returns the URL to redirect the end user to for provider login.
	///
	/// The client id and callback URL are interpolated as-is, without percent-encoding; use
	/// [`IdentityBroker::encoded_login_url`] when either may contain reserved characters.
	pub fn login_url(&self) -> String {
		format!(
			"{}?client_id={}&redirect_uri={}",
			self.descriptor.authorize_endpoint,
			self.credentials.client_id,
			self.credentials.callback_url,
		)
	}

	/// Same redirect as [`IdentityBroker::login_url`] with both query values percent-encoded.
	pub fn encoded_login_url(&self) -> Result<Url> {
		const KIND: FlowKind = FlowKind::Login;

		let _span = FlowSpan::new(KIND, "encoded_login_url").entered();
		let result: Result<Url> = Url::parse(&self.descriptor.authorize_endpoint)
			.map_err(|source| ConfigError::InvalidAuthorizeEndpoint { source }.into())
			.map(|mut url| {
				url.query_pairs_mut()
					.append_pair("client_id", &self.credentials.client_id)
					.append_pair("redirect_uri", &self.credentials.callback_url);

				url
			});

		match &result {
			Ok(_) => obs::record_flow_outcome(KIND, FlowOutcome::Success),
			Err(_) => obs::record_flow_outcome(KIND, FlowOutcome::Failure),
		}

		result
	}
}
